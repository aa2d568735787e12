//! Review corpus index.
//!
//! Parses a flat, line-oriented corpus (`<RestaurantName>. <ReviewText>`) into an in-memory
//! mapping from restaurant name to its reviews, then answers name-fragment lookups against it.
//!
//! # Lookup Policy
//!
//! [`ReviewIndex::lookup`] matches the fragment case-insensitively as a **substring** of every
//! key and concatenates the reviews of all matching keys (key order, then review order). There
//! is no ranking or best-match selection:
//!
//! - a short fragment (`"in"`) can merge reviews of several distinct restaurants
//! - the empty fragment matches every key
//!
//! Downstream scoring relies on both.
//!
//! The index is built once per run and never mutated afterwards, so it can be shared behind an
//! `Arc` across sequential (or parallel) pipeline invocations without locking.

pub mod error;
pub mod index;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::CorpusError;
pub use index::{ReviewIndex, build_index};
pub use types::{CorpusStats, ReviewCorpusEntry, ReviewLookup};
