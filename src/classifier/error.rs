use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("classifier returned an empty response")]
    EmptyResponse,

    #[error("malformed classification response: {source}")]
    MalformedResponse {
        excerpt: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("classifier scored {actual} reviews but {expected} were submitted")]
    CountMismatch { expected: usize, actual: usize },
}

impl ClassifierError {
    /// `true` when the collaborator answered but its answer could not be decoded.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            ClassifierError::EmptyResponse | ClassifierError::MalformedResponse { .. }
        )
    }
}
