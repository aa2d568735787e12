use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("chat request to model '{model}' failed: {reason}")]
    RequestFailed { model: String, reason: String },

    #[error("invalid tool definition: {reason}")]
    InvalidTool { reason: String },

    #[error("could not adapt provider response: {reason}")]
    AdaptFailed { reason: String },
}
