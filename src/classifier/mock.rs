use std::sync::Mutex;

use crate::provider::ProviderError;
use crate::scoring::ScorePair;

use super::ReviewClassifier;
use super::error::ClassifierError;
use super::parse::parse_classification;

#[derive(Debug, Clone)]
enum Script {
    Pairs(Vec<ScorePair>),
    Body(String),
    ProviderDown(String),
}

/// Scripted classifier for tests.
#[derive(Debug)]
pub struct MockReviewClassifier {
    script: Script,
    batches: Mutex<Vec<Vec<String>>>,
}

impl MockReviewClassifier {
    /// Returns `pairs` regardless of input.
    pub fn returning(pairs: Vec<ScorePair>) -> Self {
        Self::with_script(Script::Pairs(pairs))
    }

    /// Feeds `body` through the real response parser.
    pub fn responding(body: impl Into<String>) -> Self {
        Self::with_script(Script::Body(body.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::ProviderDown(reason.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Review batches received so far, one entry per call.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl ReviewClassifier for MockReviewClassifier {
    async fn classify(&self, reviews: &[String]) -> Result<Vec<ScorePair>, ClassifierError> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(reviews.to_vec());
        }

        match &self.script {
            Script::Pairs(pairs) => Ok(pairs.clone()),
            Script::Body(body) => parse_classification(body),
            Script::ProviderDown(reason) => Err(ClassifierError::Provider(
                ProviderError::RequestFailed {
                    model: "mock".to_string(),
                    reason: reason.clone(),
                },
            )),
        }
    }
}
