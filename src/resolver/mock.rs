use std::sync::Mutex;

use async_openai::types::chat::ChatCompletionResponseMessage;

use super::NameResolver;
use super::error::ResolverError;
use super::parse::extract_restaurant_name;
use crate::provider::ProviderError;

#[derive(Debug, Clone)]
enum Script {
    Name(String),
    Transcript(Vec<ChatCompletionResponseMessage>),
    ProviderDown(String),
}

/// Scripted resolver for tests.
#[derive(Debug)]
pub struct MockNameResolver {
    script: Script,
    queries: Mutex<Vec<String>>,
}

impl MockNameResolver {
    /// Always resolves to `name`.
    pub fn returning(name: impl Into<String>) -> Self {
        Self::with_script(Script::Name(name.into()))
    }

    /// Replays a recorded chat history through the real tool-call parser.
    pub fn from_transcript(messages: Vec<ChatCompletionResponseMessage>) -> Self {
        Self::with_script(Script::Transcript(messages))
    }

    /// Replays a chat history given as JSON (array of OpenAI assistant messages).
    pub fn from_transcript_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_transcript(serde_json::from_str(json)?))
    }

    /// Fails every call with a provider error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::ProviderDown(reason.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl NameResolver for MockNameResolver {
    async fn resolve(&self, query: &str) -> Result<String, ResolverError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        match &self.script {
            Script::Name(name) => Ok(name.clone()),
            Script::Transcript(messages) => extract_restaurant_name(messages),
            Script::ProviderDown(reason) => Err(ResolverError::Provider(
                ProviderError::RequestFailed {
                    model: "mock".to_string(),
                    reason: reason.clone(),
                },
            )),
        }
    }
}
