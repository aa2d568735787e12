use serde::Deserialize;
use tracing::warn;

use crate::constants::MISSING_SCORE_DEFAULT;
use crate::scoring::ScorePair;

use super::error::ClassifierError;

const EXCERPT_LEN: usize = 120;

#[derive(Debug, Deserialize)]
struct ClassificationPayload {
    reviews: Vec<ReviewScores>,
}

#[derive(Debug, Deserialize)]
struct ReviewScores {
    food_score: Option<u32>,
    customer_service_score: Option<u32>,
}

/// Decodes a classifier response body into score pairs, in response order.
///
/// The body must be a JSON object with a `reviews` array. Absent or `null` score fields
/// default to `0`; scores that are present must be non-negative integers.
pub fn parse_classification(body: &str) -> Result<Vec<ScorePair>, ClassifierError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ClassifierError::EmptyResponse);
    }

    let payload: ClassificationPayload =
        serde_json::from_str(body).map_err(|source| ClassifierError::MalformedResponse {
            excerpt: body.chars().take(EXCERPT_LEN).collect(),
            source,
        })?;

    let pairs = payload
        .reviews
        .into_iter()
        .enumerate()
        .map(|(position, scores)| {
            if scores.food_score.is_none() || scores.customer_service_score.is_none() {
                warn!(position, "Classification missing a score field, defaulting to 0");
            }
            ScorePair::new(
                scores.food_score.unwrap_or(MISSING_SCORE_DEFAULT),
                scores
                    .customer_service_score
                    .unwrap_or(MISSING_SCORE_DEFAULT),
            )
        })
        .collect();

    Ok(pairs)
}

/// Enforces one score pair per submitted review.
pub fn ensure_one_pair_per_review(
    reviews: &[String],
    pairs: &[ScorePair],
) -> Result<(), ClassifierError> {
    if reviews.len() != pairs.len() {
        return Err(ClassifierError::CountMismatch {
            expected: reviews.len(),
            actual: pairs.len(),
        });
    }
    Ok(())
}
