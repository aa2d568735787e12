//! Restaurant-name resolution from a free-form user query.
//!
//! The deterministic part lives here: prompt construction ([`resolution_prompt`]), the single
//! tool the model is offered ([`fetch_tool`]) and strict decoding of the model's tool call
//! ([`extract_restaurant_name`]). The understanding itself is delegated to a [`NameResolver`]
//! implementation:
//!
//! - [`LlmNameResolver`]: asks a chat model to call `fetch_restaurant_data(restaurant_name)`
//! - [`KeywordNameResolver`]: offline matcher against the corpus's restaurant names
//! - `MockNameResolver`: scripted resolver for tests (`mock` feature)
//!
//! Tool-call arguments are decoded as JSON into a fixed schema. Anything else (missing call,
//! wrong tool, non-JSON arguments, blank name) is a [`ResolverError`], never a guessed name.

pub mod error;
pub mod keyword;
pub mod llm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod parse;
pub mod prompt;


use std::future::Future;

pub use error::ResolverError;
pub use keyword::KeywordNameResolver;
pub use llm::LlmNameResolver;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockNameResolver;
pub use parse::{FetchArguments, extract_restaurant_name};
pub use prompt::{
    FETCH_TOOL_DESCRIPTION, FETCH_TOOL_NAME, RESOLVER_SYSTEM_MESSAGE, fetch_tool,
    resolution_prompt,
};

/// Maps a user query to a restaurant-name fragment.
pub trait NameResolver: Send + Sync {
    /// Resolves the name mentioned in `query`.
    fn resolve(&self, query: &str) -> impl Future<Output = Result<String, ResolverError>> + Send;
}
