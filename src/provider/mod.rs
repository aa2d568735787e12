//! Chat-completion transport shared by the name resolver and the review classifier.
//!
//! Requests go out through a [`genai::Client`], so any provider genai supports can back the
//! pipeline; the model name picks the adapter and genai's default auth reads the matching API
//! key from the environment (e.g. `OPENAI_API_KEY`).
//!
//! Tool definitions are written in OpenAI wire form and responses are adapted back into OpenAI
//! assistant messages, so parsers downstream only ever see one message shape.

pub mod adapter;
pub mod client;
pub mod error;


pub use adapter::{function_object, function_to_genai_tool, tool_calls_to_openai_message};
pub use client::ChatProvider;
pub use error::ProviderError;
