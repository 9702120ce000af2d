use crate::error::ApiError;
use adapt::errors::AdaptError;
use adapt::interpret::{interpret_chat_reply, interpret_transform_reply};
use adapt::models::block::ChatBlock;
use adapt::models::transform::TransformResult;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum InterpretMode {
    #[default]
    Chat,
    Transform,
}

#[derive(Debug, Deserialize, Serialize)]
struct InterpretRequest {
    text: String,
    #[serde(default)]
    mode: InterpretMode,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Interpreted {
    Chat(Vec<ChatBlock>),
    Transform(TransformResult),
}

// Interpret a reply the client already holds, without calling the model
async fn interpret_handler(
    Json(request): Json<InterpretRequest>,
) -> Result<Json<Interpreted>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(AdaptError::EmptyInput.into());
    }

    let interpreted = match request.mode {
        InterpretMode::Chat => Interpreted::Chat(interpret_chat_reply(&request.text)),
        InterpretMode::Transform => {
            Interpreted::Transform(interpret_transform_reply(&request.text))
        }
    };
    Ok(Json(interpreted))
}

pub fn routes() -> Router {
    Router::new().route("/interpret", post(interpret_handler))
}
