//! DinerScore library crate (used by the CLI binary and integration tests).
//!
//! # Public API Surface
//!
//! A question such as "How good is Applebee's?" flows through four stages:
//!
//! ## Resolution
//! - [`NameResolver`] - Extracts the intended restaurant name from a query
//! - [`LlmNameResolver`] - Tool-calling chat model implementation
//! - [`KeywordNameResolver`] - Offline matcher over known corpus names
//!
//! ## Corpus
//! - [`ReviewIndex`], [`build_index`] - Line-oriented review store with substring lookup
//! - [`ReviewLookup`], [`CorpusStats`] - Lookup outcome and ingestion counters
//!
//! ## Classification
//! - [`ReviewClassifier`] - Turns review texts into [`ScorePair`]s
//! - [`LlmReviewClassifier`], [`KeywordClassifier`] - Chat model and offline implementations
//!
//! ## Scoring
//! - [`aggregate`], [`aggregate_pairs`], [`OverallScore`] - Normalised 0..=10 overall score
//!
//! ## Orchestration
//! - [`ReviewPipeline`], [`PipelineReport`], [`PipelineStage`], [`PipelineError`]
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod pipeline;
pub mod provider;
pub mod resolver;
pub mod scoring;

pub use classifier::{
    ClassifierError, KeywordClassifier, LlmReviewClassifier, ReviewClassifier, classification_prompt,
    parse_classification,
};
#[cfg(any(test, feature = "mock"))]
pub use classifier::MockReviewClassifier;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_QUERY, NO_REVIEWS_SENTINEL, ScoreRangeError, validate_review_score,
};
pub use corpus::{CorpusError, CorpusStats, ReviewCorpusEntry, ReviewIndex, ReviewLookup, build_index};
pub use pipeline::{PipelineError, PipelineReport, PipelineStage, ReviewPipeline};
pub use provider::{ChatProvider, ProviderError};

pub use resolver::{
    KeywordNameResolver, LlmNameResolver, NameResolver, ResolverError, extract_restaurant_name,
    resolution_prompt,
};
#[cfg(any(test, feature = "mock"))]
pub use resolver::MockNameResolver;

pub use scoring::{OverallScore, ScorePair, aggregate, aggregate_pairs};
