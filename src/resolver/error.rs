use thiserror::Error;

use crate::provider::ProviderError;

/// Errors raised while resolving a restaurant name.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("resolver provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("response contained no '{tool}' tool call")]
    MissingToolCall { tool: &'static str },

    #[error("malformed '{tool}' arguments {arguments:?}: {source}")]
    MalformedArguments {
        tool: &'static str,
        arguments: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("resolver returned a blank restaurant name")]
    EmptyName,

    #[error("no known restaurant mentioned in query {query:?}")]
    NoCandidate { query: String },
}

impl ResolverError {
    /// `true` when the collaborator answered but its answer could not be decoded.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            ResolverError::MissingToolCall { .. } | ResolverError::MalformedArguments { .. }
        )
    }
}
