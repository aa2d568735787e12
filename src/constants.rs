//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants (e.g. the aggregation normalizer) from primary ones to
//! avoid drift.
//!
//! # Score Invariants
//!
//! Review scores are ordinal levels in `MIN_REVIEW_SCORE..=MAX_REVIEW_SCORE`. The aggregation
//! normalizer is the largest possible per-review term, so in-range inputs always aggregate into
//! `0.0..=MAX_OVERALL_SCORE`. Out-of-range inputs (the `0` default from a failed
//! classification) are not clamped; see [`validate_review_score`] for an opt-in check.

/// Separator between restaurant name and review text on a corpus line.
pub const RECORD_DELIMITER: &str = ". ";

/// Placeholder review returned when no corpus key matches a name fragment.
pub const NO_REVIEWS_SENTINEL: &str = "No reviews found for this restaurant.";

pub const MIN_REVIEW_SCORE: u32 = 1;
pub const MAX_REVIEW_SCORE: u32 = 5;

/// Score recorded for a review whose classification omitted a field.
pub const MISSING_SCORE_DEFAULT: u32 = 0;

/// Largest per-review term: `sqrt(5² × 5)`.
pub const MAX_REVIEW_TERM_SQUARED: f64 =
    (MAX_REVIEW_SCORE * MAX_REVIEW_SCORE * MAX_REVIEW_SCORE) as f64;

pub const MAX_OVERALL_SCORE: f64 = 10.0;

/// Fractional digits kept (and printed) for an overall score.
pub const SCORE_DECIMALS: usize = 3;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_CORPUS_PATH: &str = "restaurant-data.txt";

pub const DEFAULT_QUERY: &str = "What is the overall score for In N Out?";

/// Returns the aggregation normalizer `sqrt(125)`.
pub fn review_term_normalizer() -> f64 {
    MAX_REVIEW_TERM_SQUARED.sqrt()
}

/// Error returned when a review score falls outside the rubric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRangeError {
    /// Score is below [`MIN_REVIEW_SCORE`].
    BelowMinimum { score: u32 },
    /// Score is above [`MAX_REVIEW_SCORE`].
    AboveMaximum { score: u32 },
}

impl std::fmt::Display for ScoreRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelowMinimum { score } => {
                write!(f, "score {} is below minimum {}", score, MIN_REVIEW_SCORE)
            }
            Self::AboveMaximum { score } => {
                write!(f, "score {} is above maximum {}", score, MAX_REVIEW_SCORE)
            }
        }
    }
}

impl std::error::Error for ScoreRangeError {}

/// Checks that a review score lies on the 1-5 rubric.
///
/// Aggregation never calls this; it exists for callers that want to flag failed
/// classifications before they lower an average.
///
/// # Example
///
/// ```
/// use dinerscore::constants::validate_review_score;
///
/// assert!(validate_review_score(3).is_ok());
/// assert!(validate_review_score(0).is_err());
/// ```
pub fn validate_review_score(score: u32) -> Result<(), ScoreRangeError> {
    if score < MIN_REVIEW_SCORE {
        return Err(ScoreRangeError::BelowMinimum { score });
    }
    if score > MAX_REVIEW_SCORE {
        return Err(ScoreRangeError::AboveMaximum { score });
    }
    Ok(())
}
