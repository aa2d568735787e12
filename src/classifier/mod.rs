//! Per-review score extraction.
//!
//! All reviews for the resolved restaurant go to the classifier in **one** request built from a
//! fixed rubric ([`RUBRIC`]) with the reviews appended as a literal list. The expected answer is:
//!
//! ```json
//! {"reviews": [{"food_score": 4, "customer_service_score": 2}, ...]}
//! ```
//!
//! one entry per review, same order. A missing or `null` score field becomes
//! [`MISSING_SCORE_DEFAULT`](crate::constants::MISSING_SCORE_DEFAULT) (`0`) and is aggregated at
//! full weight. A body that is not that JSON shape is a hard [`ClassifierError`].

pub mod error;
pub mod keyword;
pub mod llm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod parse;
pub mod prompt;

#[cfg(test)]
mod tests;

use std::future::Future;

use crate::scoring::ScorePair;

pub use error::ClassifierError;
pub use keyword::KeywordClassifier;
pub use llm::LlmReviewClassifier;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockReviewClassifier;
pub use parse::{ensure_one_pair_per_review, parse_classification};
pub use prompt::{CLASSIFIER_SYSTEM_MESSAGE, RUBRIC, RubricLevel, classification_prompt};

/// Turns an ordered batch of reviews into one [`ScorePair`] per review.
pub trait ReviewClassifier: Send + Sync {
    fn classify(
        &self,
        reviews: &[String],
    ) -> impl Future<Output = Result<Vec<ScorePair>, ClassifierError>> + Send;
}
