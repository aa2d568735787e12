use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::resolver::ResolverError;

use super::types::PipelineStage;

/// Fatal pipeline failures. Each variant names the stage that could not be reached.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("name resolution failed: {0}")]
    Resolution(#[from] ResolverError),

    #[error("review classification failed: {0}")]
    Classification(#[from] ClassifierError),
}

impl PipelineError {
    /// The state the pipeline was trying to enter.
    pub fn failed_stage(&self) -> PipelineStage {
        match self {
            PipelineError::Resolution(_) => PipelineStage::NameResolved,
            PipelineError::Classification(_) => PipelineStage::ScoresExtracted,
        }
    }

    /// The last state the pipeline completed.
    pub fn reached_stage(&self) -> PipelineStage {
        match self {
            PipelineError::Resolution(_) => PipelineStage::Start,
            PipelineError::Classification(_) => PipelineStage::ReviewsFetched,
        }
    }

    /// Short label of the failing collaborator.
    pub fn component(&self) -> &'static str {
        match self {
            PipelineError::Resolution(_) => "resolver",
            PipelineError::Classification(_) => "classifier",
        }
    }
}
