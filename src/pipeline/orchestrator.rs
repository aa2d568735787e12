use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::classifier::{ReviewClassifier, ensure_one_pair_per_review};
use crate::corpus::ReviewIndex;
use crate::resolver::NameResolver;
use crate::scoring::{OverallScore, aggregate_pairs};

use super::error::PipelineError;
use super::types::{PipelineReport, PipelineStage};

/// Runs one query through resolution, lookup, classification and aggregation.
///
/// The index is shared read-only; one pipeline can serve any number of sequential queries.
pub struct ReviewPipeline<R, C> {
    index: Arc<ReviewIndex>,
    resolver: R,
    classifier: C,
}

impl<R, C> std::fmt::Debug for ReviewPipeline<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewPipeline")
            .field("restaurants", &self.index.len())
            .field("reviews", &self.index.review_count())
            .finish_non_exhaustive()
    }
}

impl<R, C> ReviewPipeline<R, C>
where
    R: NameResolver,
    C: ReviewClassifier,
{
    pub fn new(index: Arc<ReviewIndex>, resolver: R, classifier: C) -> Self {
        Self {
            index,
            resolver,
            classifier,
        }
    }

    pub fn index(&self) -> &ReviewIndex {
        &self.index
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    #[instrument(skip(self))]
    pub async fn run(&self, query: &str) -> Result<PipelineReport, PipelineError> {
        debug!(stage = %PipelineStage::Start, "Resolving restaurant name");
        let restaurant_name = self.resolver.resolve(query).await?;

        debug!(
            stage = %PipelineStage::NameResolved,
            restaurant = %restaurant_name,
            "Fetching reviews"
        );
        let lookup = self.index.lookup(&restaurant_name);
        let reviews_found = lookup.is_found();
        if !reviews_found {
            warn!(
                restaurant = %restaurant_name,
                "No reviews matched, classifying the no-reviews placeholder"
            );
        }
        let reviews = lookup.into_reviews();

        debug!(
            stage = %PipelineStage::ReviewsFetched,
            reviews = reviews.len(),
            "Classifying reviews"
        );
        let scores = self.classifier.classify(&reviews).await?;
        ensure_one_pair_per_review(&reviews, &scores)?;

        debug!(stage = %PipelineStage::ScoresExtracted, "Aggregating scores");
        let overall = aggregate_pairs(&restaurant_name, &scores);

        info!(
            stage = %PipelineStage::Aggregated,
            restaurant = %restaurant_name,
            score = %overall.formatted_value(),
            "Pipeline complete"
        );

        Ok(PipelineReport {
            restaurant_name,
            reviews_found,
            reviews,
            scores,
            overall,
        })
    }

    /// [`run`](Self::run), keeping only the final score.
    pub async fn score(&self, query: &str) -> Result<OverallScore, PipelineError> {
        Ok(self.run(query).await?.overall)
    }
}
