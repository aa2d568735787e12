//! Aggregation of per-review score pairs into one overall rating.
//!
//! # Formula
//!
//! For `N` paired scores:
//!
//! ```text
//! term_i  = sqrt(food_i² × service_i)
//! overall = (Σ term_i / (N × sqrt(125))) × 10
//! ```
//!
//! Food is squared inside the radical and service is not, so food quality weighs more.
//! `sqrt(125)` is the largest possible term, which bounds in-range inputs to `[0, 10]`.
//!
//! The result is rounded to [`SCORE_DECIMALS`](crate::constants::SCORE_DECIMALS) places and
//! always printed with that many digits (`5.000`, never `5.0`).
//!
//! Inputs are **not** clamped. A `0` recorded for a failed classification is averaged in at full
//! weight and lowers the result. Empty or mismatched score lists are not an error: they yield
//! `0.0` for the restaurant.

pub mod aggregate;
pub mod types;


pub use aggregate::{aggregate, aggregate_pairs, review_term, round_score};
pub use types::{OverallScore, ScorePair};
