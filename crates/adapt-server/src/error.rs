use adapt::errors::AdaptError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

const ENV_PREFIX: &str = "ADAPT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Environment variable that sets a dotted config path, e.g. `provider.api_key`
pub fn to_env_var(path: &str) -> String {
    format!("{}_{}", ENV_PREFIX, path.to_uppercase().replace('.', "__"))
}

/// Library error surfaced to HTTP clients as `{"error": ...}`
#[derive(Debug)]
pub struct ApiError(pub AdaptError);

impl From<AdaptError> for ApiError {
    fn from(err: AdaptError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AdaptError::EmptyInput => StatusCode::BAD_REQUEST,
            AdaptError::EmptyResponse | AdaptError::Provider(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_env_var() {
        assert_eq!(to_env_var("provider.api_key"), "ADAPT_PROVIDER__API_KEY");
        assert_eq!(to_env_var("server.port"), "ADAPT_SERVER__PORT");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError(AdaptError::EmptyInput).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError(AdaptError::Provider("timeout".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(AdaptError::MissingApiKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
