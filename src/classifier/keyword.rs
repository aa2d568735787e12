use crate::constants::MISSING_SCORE_DEFAULT;
use crate::scoring::ScorePair;

use super::ReviewClassifier;
use super::error::ClassifierError;
use super::prompt::rubric_score;

/// Offline classifier applying the rubric literally.
///
/// The first rubric adjective in a review scores the food, the second scores the service.
/// A review with fewer than two rubric adjectives gets `0` for what is missing, the same
/// default a model response with a missing field gets.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn score_review(&self, review: &str) -> ScorePair {
        let lowered = review.to_lowercase();
        let mut scores = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter_map(rubric_score);

        let food = scores.next().unwrap_or(MISSING_SCORE_DEFAULT);
        let service = scores.next().unwrap_or(MISSING_SCORE_DEFAULT);
        ScorePair::new(food, service)
    }
}

impl ReviewClassifier for KeywordClassifier {
    async fn classify(&self, reviews: &[String]) -> Result<Vec<ScorePair>, ClassifierError> {
        Ok(reviews.iter().map(|r| self.score_review(r)).collect())
    }
}
