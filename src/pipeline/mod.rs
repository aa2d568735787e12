//! Query-to-score orchestration.
//!
//! ```text
//! START → NAME_RESOLVED → REVIEWS_FETCHED → SCORES_EXTRACTED → AGGREGATED
//! ```
//!
//! Strictly linear: each stage feeds the next, nothing is retried, and no timeout is applied
//! here (wrap [`ReviewPipeline::run`] if you need one). Only two transitions can fail:
//!
//! - resolution, when the resolver gives no usable name
//! - classification, when the classifier's answer cannot be decoded or does not score every
//!   review
//!
//! A lookup miss is **not** a failure: the "no reviews found" sentinel is classified like any
//! other review and the pipeline still produces a score.

pub mod error;
pub mod orchestrator;
pub mod types;


pub use error::PipelineError;
pub use orchestrator::ReviewPipeline;
pub use types::{PipelineReport, PipelineStage};
