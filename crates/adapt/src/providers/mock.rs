use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use super::base::{Provider, Usage};

/// A mock provider that returns pre-configured replies, for tests
pub struct MockProvider {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of replies
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Into::into).collect())),
            failure: None,
        }
    }

    /// Create a provider whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, _prompt: &str) -> Result<(String, Usage)> {
        if let Some(message) = &self.failure {
            return Err(anyhow!(message.clone()));
        }

        let mut responses = self
            .responses
            .lock()
            .map_err(|_| anyhow!("mock provider lock poisoned"))?;
        if responses.is_empty() {
            // Return empty reply if no more pre-configured replies
            Ok((String::new(), Usage::default()))
        } else {
            Ok((responses.remove(0), Usage::default()))
        }
    }
}
