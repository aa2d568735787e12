use async_openai::types::chat::FunctionObject;
use serde_json::json;

use crate::provider::{ProviderError, function_object};

pub const RESOLVER_SYSTEM_MESSAGE: &str =
    "You are a food addict knowing the full name of every restaurant.";

pub const FETCH_TOOL_NAME: &str = "fetch_restaurant_data";

pub const FETCH_TOOL_DESCRIPTION: &str = "Fetches the reviews for a specific restaurant.";

const CORRECTION_INSTRUCTIONS: &str = "Do not add any markdown. Do not add any word to the name \
mentioned in the query but correct the mentioned name if any character is missed.";

/// Builds the user prompt for name resolution.
///
/// With `known_names`, a numbered list of corpus restaurants is appended so the model can
/// snap misspellings onto a real key.
pub fn resolution_prompt<'a, I>(query: &str, known_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut prompt = format!("{} {}", query, CORRECTION_INSTRUCTIONS);

    let mut names = known_names.into_iter().peekable();
    if names.peek().is_some() {
        prompt.push_str("\nKnown restaurants:");
        for (i, name) in names.enumerate() {
            prompt.push_str(&format!("\n{}. {:?}", i + 1, name));
        }
    }

    prompt
}

/// The `fetch_restaurant_data(restaurant_name: string)` tool offered to the model.
pub fn fetch_tool() -> Result<FunctionObject, ProviderError> {
    function_object(
        FETCH_TOOL_NAME,
        FETCH_TOOL_DESCRIPTION,
        json!({
            "type": "object",
            "properties": {
                "restaurant_name": {
                    "type": "string",
                    "description": "Name of the restaurant as mentioned in the query."
                }
            },
            "required": ["restaurant_name"]
        }),
    )
}
