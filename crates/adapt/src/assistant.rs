use tracing::{debug, warn};

use crate::errors::{AdaptError, AdaptResult};
use crate::interpret::{interpret_chat_reply, interpret_transform_reply};
use crate::models::block::ChatBlock;
use crate::models::transform::TransformResult;
use crate::prompt_template::{chat_prompt, transform_prompt};
use crate::providers::base::Provider;

/// Sends prompts to a provider and interprets what comes back
///
/// Both call sites of the application (assistant chat and code transform) go
/// through here so they share one interpretation of the reply.
pub struct Assistant {
    provider: Box<dyn Provider>,
}

impl Assistant {
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    async fn ask(&self, prompt: &str) -> AdaptResult<String> {
        let (reply, usage) = self.provider.complete(prompt).await.map_err(|e| {
            warn!("provider call failed: {:#}", e);
            AdaptError::Provider(e.to_string())
        })?;
        debug!(?usage, chars = reply.len(), "reply received");

        if reply.trim().is_empty() {
            return Err(AdaptError::EmptyResponse);
        }
        Ok(reply)
    }

    /// Answer a programming question as a sequence of display blocks
    pub async fn chat(&self, input: &str) -> AdaptResult<Vec<ChatBlock>> {
        let question = input.trim();
        if question.is_empty() {
            return Err(AdaptError::EmptyInput);
        }

        let prompt = chat_prompt(question).map_err(|e| AdaptError::Prompt(e.to_string()))?;
        let reply = self.ask(&prompt).await?;
        Ok(interpret_chat_reply(&reply))
    }

    /// Modernize markup and stylesheet, returning the two rewritten artifacts
    pub async fn transform(&self, html: &str, css: &str) -> AdaptResult<TransformResult> {
        if html.is_empty() && css.is_empty() {
            return Err(AdaptError::EmptyInput);
        }

        let prompt = transform_prompt(html, css).map_err(|e| AdaptError::Prompt(e.to_string()))?;
        let reply = self.ask(&prompt).await?;
        Ok(interpret_transform_reply(&reply))
    }
}
