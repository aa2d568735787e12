use tracing::{debug, instrument};

use crate::provider::ChatProvider;
use crate::scoring::ScorePair;

use super::ReviewClassifier;
use super::error::ClassifierError;
use super::parse::parse_classification;
use super::prompt::{CLASSIFIER_SYSTEM_MESSAGE, classification_prompt};

/// Chat-model classifier using the fixed rubric prompt.
#[derive(Debug, Clone)]
pub struct LlmReviewClassifier {
    provider: ChatProvider,
}

impl LlmReviewClassifier {
    pub fn new(provider: ChatProvider) -> Self {
        Self { provider }
    }
}

impl ReviewClassifier for LlmReviewClassifier {
    #[instrument(skip(self, reviews), fields(model = %self.provider.model(), reviews = reviews.len()))]
    async fn classify(&self, reviews: &[String]) -> Result<Vec<ScorePair>, ClassifierError> {
        let prompt = classification_prompt(reviews);
        let body = self
            .provider
            .complete_text(CLASSIFIER_SYSTEM_MESSAGE, &prompt)
            .await?;

        debug!(response_len = body.len(), "Classifier responded");
        parse_classification(&body)
    }
}
