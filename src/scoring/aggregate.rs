use tracing::debug;

use crate::constants::{MAX_OVERALL_SCORE, SCORE_DECIMALS, review_term_normalizer};

use super::types::{OverallScore, ScorePair};

/// Per-review term `sqrt(food² × service)`.
pub fn review_term(food_score: u32, service_score: u32) -> f64 {
    let food = f64::from(food_score);
    let service = f64::from(service_score);
    (food * food * service).sqrt()
}

/// Rounds to [`SCORE_DECIMALS`] fractional digits (half away from zero).
pub fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS as i32);
    (value * scale).round() / scale
}

/// Aggregates parallel food/service lists into one rating for `restaurant_name`.
///
/// Empty or unequal-length lists produce a `0.0` score rather than an error.
pub fn aggregate(
    restaurant_name: &str,
    food_scores: &[u32],
    service_scores: &[u32],
) -> OverallScore {
    if food_scores.is_empty()
        || service_scores.is_empty()
        || food_scores.len() != service_scores.len()
    {
        debug!(
            restaurant = restaurant_name,
            food = food_scores.len(),
            service = service_scores.len(),
            "Degenerate aggregation input, scoring 0.0"
        );
        return OverallScore::zero(restaurant_name);
    }

    let n = food_scores.len() as f64;
    let total: f64 = food_scores
        .iter()
        .zip(service_scores)
        .map(|(&food, &service)| review_term(food, service))
        .sum();

    let overall = (total / (n * review_term_normalizer())) * MAX_OVERALL_SCORE;

    debug!(
        restaurant = restaurant_name,
        reviews = food_scores.len(),
        raw = overall,
        "Aggregated review scores"
    );

    OverallScore::new(restaurant_name, overall)
}

/// Convenience wrapper over [`aggregate`] for paired scores.
pub fn aggregate_pairs(restaurant_name: &str, pairs: &[ScorePair]) -> OverallScore {
    let (food, service) = ScorePair::unzip(pairs);
    aggregate(restaurant_name, &food, &service)
}
