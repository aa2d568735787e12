use async_openai::types::chat::{ChatCompletionMessageToolCalls, ChatCompletionResponseMessage};
use serde::Deserialize;
use tracing::debug;

use super::error::ResolverError;
use super::prompt::FETCH_TOOL_NAME;

/// Argument schema of the `fetch_restaurant_data` tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchArguments {
    pub restaurant_name: String,
}

/// Finds the first `fetch_restaurant_data` call in `messages` and decodes its name argument.
///
/// The arguments string must be a JSON object with a string `restaurant_name`.
pub fn extract_restaurant_name(
    messages: &[ChatCompletionResponseMessage],
) -> Result<String, ResolverError> {
    let arguments = messages
        .iter()
        .filter_map(|message| message.tool_calls.as_ref())
        .flatten()
        .find_map(|call| match call {
            ChatCompletionMessageToolCalls::Function(tc) if tc.function.name == FETCH_TOOL_NAME => {
                Some(tc.function.arguments.as_str())
            }
            _ => None,
        })
        .ok_or(ResolverError::MissingToolCall {
            tool: FETCH_TOOL_NAME,
        })?;

    let parsed: FetchArguments =
        serde_json::from_str(arguments).map_err(|source| ResolverError::MalformedArguments {
            tool: FETCH_TOOL_NAME,
            arguments: arguments.to_string(),
            source,
        })?;

    if parsed.restaurant_name.trim().is_empty() {
        return Err(ResolverError::EmptyName);
    }

    debug!(restaurant = %parsed.restaurant_name, "Decoded restaurant name from tool call");
    Ok(parsed.restaurant_name)
}
