use async_openai::types::chat::{ChatCompletionResponseMessage, FunctionObject};
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest, ChatResponse};
use tracing::{debug, error, instrument};

use super::adapter::{function_to_genai_tool, tool_calls_to_openai_message};
use super::error::ProviderError;

/// A genai client bound to one model.
#[derive(Clone)]
pub struct ChatProvider {
    client: Client,
    model: String,
}

impl std::fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatProvider")
            .field("model", &self.model)
            .finish()
    }
}

impl ChatProvider {
    /// Uses genai's default client (env-based auth, model-name adapter selection).
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-turn completion: one system message, one user message, optional tools.
    #[instrument(skip(self, system, user, tools), fields(model = %self.model))]
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        tools: &[FunctionObject],
    ) -> Result<ChatResponse, ProviderError> {
        let mut request = ChatRequest::new(vec![
            ChatMessage::system(system.to_string()),
            ChatMessage::user(user.to_string()),
        ]);

        if !tools.is_empty() {
            let genai_tools: Vec<_> = tools.iter().map(function_to_genai_tool).collect();
            request = request.with_tools(genai_tools);
        }

        debug!(prompt_len = user.len(), tools = tools.len(), "Sending chat request");

        self.client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!("Provider request error: {}", e);
                ProviderError::RequestFailed {
                    model: self.model.clone(),
                    reason: e.to_string(),
                }
            })
    }

    /// Completion that must come back as text.
    pub async fn complete_text(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let response = self.complete(system, user, &[]).await?;
        Ok(response.first_text().unwrap_or_default().to_string())
    }

    /// Completion with tools, returned as an OpenAI-style assistant message.
    pub async fn complete_with_tools(
        &self,
        system: &str,
        user: &str,
        tools: &[FunctionObject],
    ) -> Result<ChatCompletionResponseMessage, ProviderError> {
        let response = self.complete(system, user, tools).await?;
        let calls: Vec<_> = response.tool_calls().into_iter().cloned().collect();
        tool_calls_to_openai_message(&calls, response.first_text())
    }
}
