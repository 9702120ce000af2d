use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use super::base::{Provider, Usage};
use super::configs::GeminiProviderConfig;
use super::utils::{gemini_response_to_text, gemini_usage, prompt_to_gemini_spec};

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> Result<Value> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(anyhow!("Server error: {}", status))
            }
            status => Err(anyhow!("Request failed: {}", status)),
        }
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<(String, Usage)> {
        let payload = prompt_to_gemini_spec(prompt, &self.config);
        let response = self.post(payload).await?;

        let text = gemini_response_to_text(&response)?;
        let usage = gemini_usage(&response);
        tracing::debug!(model = %self.config.model, ?usage, "gemini reply received");

        Ok((text, usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn _setup_mock_server(status: u16, response_body: Value) -> (MockServer, GeminiProvider) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(header("x-goog-api-key", "test_api_key"))
            .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
            .mount(&mock_server)
            .await;

        let config = GeminiProviderConfig::new("test_api_key".to_string()).with_host(mock_server.uri());
        let provider = GeminiProvider::new(config).unwrap();
        (mock_server, provider)
    }

    #[tokio::test]
    async fn test_complete_basic() -> Result<()> {
        let response_body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello! How can I help with your code?"}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 15,
                "totalTokenCount": 27
            }
        });

        let (_, provider) = _setup_mock_server(200, response_body).await;
        let (text, usage) = provider.complete("Hello?").await?;

        assert_eq!(text, "Hello! How can I help with your code?");
        assert_eq!(usage.input_tokens, Some(12));
        assert_eq!(usage.output_tokens, Some(15));
        assert_eq!(usage.total_tokens, Some(27));
        Ok(())
    }

    #[tokio::test]
    async fn test_complete_server_error() {
        let (_, provider) = _setup_mock_server(503, json!({})).await;
        let err = provider.complete("Hello?").await.unwrap_err();
        assert!(err.to_string().starts_with("Server error"));
    }

    #[tokio::test]
    async fn test_complete_bad_request() {
        let (_, provider) =
            _setup_mock_server(400, json!({"error": {"message": "API key not valid"}})).await;
        let err = provider.complete("Hello?").await.unwrap_err();
        assert!(err.to_string().starts_with("Request failed"));
    }
}
