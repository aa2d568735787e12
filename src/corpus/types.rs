use crate::constants::NO_REVIEWS_SENTINEL;

/// One restaurant and its reviews, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCorpusEntry {
    /// Name exactly as written in the corpus (trimmed).
    pub name: String,
    /// Reviews in the order their lines were read.
    pub reviews: Vec<String>,
    folded_name: String,
}

impl ReviewCorpusEntry {
    pub(crate) fn new(name: String) -> Self {
        let folded_name = name.to_lowercase();
        Self {
            name,
            reviews: Vec::new(),
            folded_name,
        }
    }

    /// Returns `true` if `folded_fragment` (already lowercased) occurs in the name.
    pub(crate) fn matches_folded(&self, folded_fragment: &str) -> bool {
        self.folded_name.contains(folded_fragment)
    }
}

/// Line accounting collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Lines accepted as `<name>. <review>` records.
    pub records: usize,
    /// Empty or whitespace-only lines.
    pub blank_lines: usize,
    /// Non-blank lines without the record delimiter.
    pub skipped_lines: usize,
}

impl CorpusStats {
    /// Total lines seen.
    pub fn total_lines(&self) -> usize {
        self.records + self.blank_lines + self.skipped_lines
    }
}

/// Outcome of a name-fragment lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewLookup {
    /// Reviews of every matching key, concatenated in key-then-review order.
    Found(Vec<String>),
    /// No key contained the fragment.
    NotFound,
}

impl ReviewLookup {
    /// Returns `true` if at least one key matched.
    pub fn is_found(&self) -> bool {
        matches!(self, ReviewLookup::Found(_))
    }

    /// Number of reviews carried (the sentinel counts as one).
    pub fn len(&self) -> usize {
        match self {
            ReviewLookup::Found(reviews) => reviews.len(),
            ReviewLookup::NotFound => 1,
        }
    }

    /// Always `false`: a miss still carries the sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flattens into the review list handed to the classifier.
    ///
    /// A miss becomes the single-element [`NO_REVIEWS_SENTINEL`] list.
    pub fn into_reviews(self) -> Vec<String> {
        match self {
            ReviewLookup::Found(reviews) => reviews,
            ReviewLookup::NotFound => vec![NO_REVIEWS_SENTINEL.to_string()],
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            ReviewLookup::Found(_) => "FOUND",
            ReviewLookup::NotFound => "NOT_FOUND",
        }
    }
}
