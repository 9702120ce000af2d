use crate::error::ApiError;
use crate::state::AppState;
use adapt::models::block::ChatBlock;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct ChatResponse {
    blocks: Vec<ChatBlock>,
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let blocks = state.assistant.chat(&request.message).await?;
    Ok(Json(ChatResponse { blocks }))
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .with_state(state)
}
