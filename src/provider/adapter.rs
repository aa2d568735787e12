use async_openai::types::chat::{
    ChatCompletionMessageToolCall, ChatCompletionMessageToolCalls, ChatCompletionResponseMessage,
    FunctionCall, FunctionObject,
};
use genai::chat::{Tool, ToolCall};
use serde_json::Value;

use super::error::ProviderError;

/// Builds an OpenAI function definition from its parts.
pub fn function_object(
    name: &str,
    description: &str,
    parameters: Value,
) -> Result<FunctionObject, ProviderError> {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "description": description,
        "parameters": parameters,
    }))
    .map_err(|e| ProviderError::InvalidTool {
        reason: e.to_string(),
    })
}

pub fn function_to_genai_tool(func: &FunctionObject) -> Tool {
    let mut tool = Tool::new(&func.name);

    if let Some(desc) = &func.description {
        tool = tool.with_description(desc);
    }

    if let Some(params) = &func.parameters {
        tool = tool.with_schema(params.clone());
    }

    tool
}

/// Re-expresses genai tool calls as one OpenAI assistant message.
///
/// Arguments that genai already decoded are re-serialized; arguments it kept as a raw string
/// (because the provider sent invalid JSON) are passed through untouched so the caller's strict
/// parser sees exactly what the model produced.
pub fn tool_calls_to_openai_message(
    tool_calls: &[ToolCall],
    text: Option<&str>,
) -> Result<ChatCompletionResponseMessage, ProviderError> {
    let openai_tool_calls: Vec<ChatCompletionMessageToolCalls> = tool_calls
        .iter()
        .map(|tc| {
            let arguments = match &tc.fn_arguments {
                Value::String(raw) => raw.clone(),
                other => other.to_string(),
            };
            ChatCompletionMessageToolCalls::Function(ChatCompletionMessageToolCall {
                id: tc.call_id.clone(),
                function: FunctionCall {
                    name: tc.fn_name.clone(),
                    arguments,
                },
            })
        })
        .collect();

    let content = match text {
        Some(t) if !t.trim().is_empty() => Value::String(t.to_string()),
        _ => Value::Null,
    };

    let tool_calls_value = if openai_tool_calls.is_empty() {
        Value::Null
    } else {
        serde_json::to_value(openai_tool_calls).map_err(|e| ProviderError::AdaptFailed {
            reason: e.to_string(),
        })?
    };

    let message_value = serde_json::json!({
        "role": "assistant",
        "content": content,
        "tool_calls": tool_calls_value,
    });

    serde_json::from_value(message_value).map_err(|e| ProviderError::AdaptFailed {
        reason: e.to_string(),
    })
}
