use tracing::{info, instrument};

use crate::provider::ChatProvider;

use super::NameResolver;
use super::error::ResolverError;
use super::parse::extract_restaurant_name;
use super::prompt::{RESOLVER_SYSTEM_MESSAGE, fetch_tool, resolution_prompt};

/// Chat-model resolver: the model answers by calling `fetch_restaurant_data`.
#[derive(Debug, Clone)]
pub struct LlmNameResolver {
    provider: ChatProvider,
    known_names: Vec<String>,
}

impl LlmNameResolver {
    pub fn new(provider: ChatProvider) -> Self {
        Self {
            provider,
            known_names: Vec::new(),
        }
    }

    /// Lists these names in the prompt as resolution hints.
    pub fn with_known_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn prompt_for(&self, query: &str) -> String {
        resolution_prompt(query, self.known_names.iter().map(String::as_str))
    }
}

impl NameResolver for LlmNameResolver {
    #[instrument(skip(self), fields(model = %self.provider.model()))]
    async fn resolve(&self, query: &str) -> Result<String, ResolverError> {
        let prompt = self.prompt_for(query);
        let tool = fetch_tool()?;

        let message = self
            .provider
            .complete_with_tools(RESOLVER_SYSTEM_MESSAGE, &prompt, &[tool])
            .await?;

        let name = extract_restaurant_name(std::slice::from_ref(&message))?;
        info!(restaurant = %name, "Resolved restaurant name");
        Ok(name)
    }
}
