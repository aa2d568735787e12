use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::constants::RECORD_DELIMITER;

use super::error::CorpusError;
use super::types::{CorpusStats, ReviewCorpusEntry, ReviewLookup};

/// Read-only mapping from restaurant name to its ordered reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewIndex {
    entries: Vec<ReviewCorpusEntry>,
    positions: HashMap<String, usize>,
    stats: CorpusStats,
}

/// Builds an index from an in-memory corpus.
pub fn build_index(source: &str) -> ReviewIndex {
    ReviewIndex::parse(source)
}

impl ReviewIndex {
    /// Parses a corpus held in memory. Never fails: malformed lines are skipped.
    pub fn parse(source: &str) -> Self {
        let mut index = Self::default();
        for line in source.lines() {
            index.ingest_line(line);
        }
        index.log_built();
        index
    }

    /// Parses a corpus from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CorpusError> {
        let mut index = Self::default();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| CorpusError::Read {
                line: line_no + 1,
                source,
            })?;
            index.ingest_line(&line);
        }
        index.log_built();
        Ok(index)
    }

    /// Opens and parses a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Reading review corpus");
        Self::from_reader(BufReader::new(file))
    }

    fn ingest_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            self.stats.blank_lines += 1;
            return;
        }

        let Some((name, review)) = line.split_once(RECORD_DELIMITER) else {
            trace!(line = line, "Skipping corpus line without record delimiter");
            self.stats.skipped_lines += 1;
            return;
        };

        let name = name.trim();
        let review = review.trim().to_string();

        let slot = match self.positions.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(ReviewCorpusEntry::new(name.to_string()));
                self.positions.insert(name.to_string(), slot);
                slot
            }
        };

        self.entries[slot].reviews.push(review);
        self.stats.records += 1;
    }

    fn log_built(&self) {
        info!(
            restaurants = self.entries.len(),
            records = self.stats.records,
            skipped = self.stats.skipped_lines,
            "Review index built"
        );
    }

    /// Case-insensitive substring lookup across every key.
    pub fn lookup(&self, name_fragment: &str) -> ReviewLookup {
        let folded = name_fragment.to_lowercase();

        let mut matched_keys = 0usize;
        let reviews: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.matches_folded(&folded))
            .inspect(|_| matched_keys += 1)
            .flat_map(|entry| entry.reviews.iter().cloned())
            .collect();

        if reviews.is_empty() {
            debug!(fragment = name_fragment, "No corpus key matched");
            return ReviewLookup::NotFound;
        }

        if matched_keys > 1 {
            debug!(
                fragment = name_fragment,
                matched_keys, "Fragment matched several restaurants, merging reviews"
            );
        }

        ReviewLookup::Found(reviews)
    }

    /// Same as [`lookup`](Self::lookup), flattened: a miss yields the single-element sentinel.
    pub fn find(&self, name_fragment: &str) -> Vec<String> {
        self.lookup(name_fragment).into_reviews()
    }

    /// Exact-key access (no folding, no substring matching).
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.positions
            .get(name)
            .map(|&slot| self.entries[slot].reviews.as_slice())
    }

    /// Restaurant names in first-seen order.
    pub fn restaurant_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[ReviewCorpusEntry] {
        &self.entries
    }

    /// Number of distinct restaurants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total reviews across all restaurants.
    pub fn review_count(&self) -> usize {
        self.stats.records
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }
}
