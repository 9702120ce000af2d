use crate::errors::AdaptError;
use crate::key_manager::{get_api_key_default, KeyRetrievalStrategy, GEMINI_API_KEY};

pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}

impl GeminiProviderConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            host: GEMINI_HOST.to_string(),
            api_key,
            model: GEMINI_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Resolve the API key from the keyring or `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, AdaptError> {
        let api_key = get_api_key_default(GEMINI_API_KEY, KeyRetrievalStrategy::default())
            .map_err(|e| {
                tracing::debug!("API key lookup failed: {}", e);
                AdaptError::MissingApiKey
            })?;

        if api_key.trim().is_empty() {
            return Err(AdaptError::MissingApiKey);
        }

        Ok(Self::new(api_key))
    }
}
