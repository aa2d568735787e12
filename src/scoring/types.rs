use crate::constants::SCORE_DECIMALS;

use super::aggregate::round_score;

/// One review's ordinal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScorePair {
    pub food_score: u32,
    pub customer_service_score: u32,
}

impl ScorePair {
    pub fn new(food_score: u32, customer_service_score: u32) -> Self {
        Self {
            food_score,
            customer_service_score,
        }
    }

    /// Splits pairs into parallel `(food, service)` lists.
    pub fn unzip(pairs: &[ScorePair]) -> (Vec<u32>, Vec<u32>) {
        pairs
            .iter()
            .map(|pair| (pair.food_score, pair.customer_service_score))
            .unzip()
    }
}

/// Final rating for one restaurant. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallScore {
    restaurant_name: String,
    value: f64,
}

impl OverallScore {
    /// Creates a score, rounding `value` to the fixed precision.
    pub fn new(restaurant_name: impl Into<String>, value: f64) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            value: round_score(value),
        }
    }

    /// The zero score used for degenerate input.
    pub fn zero(restaurant_name: impl Into<String>) -> Self {
        Self::new(restaurant_name, 0.0)
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value printed with exactly [`SCORE_DECIMALS`] fractional digits.
    pub fn formatted_value(&self) -> String {
        format!("{:.*}", SCORE_DECIMALS, self.value)
    }

    /// Renders `{"<name>": <value>}` with the name JSON-escaped and the value at fixed precision.
    pub fn to_json(&self) -> String {
        let key = serde_json::Value::String(self.restaurant_name.clone());
        format!("{{{}: {}}}", key, self.formatted_value())
    }
}

impl std::fmt::Display for OverallScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}
