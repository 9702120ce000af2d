use crate::error::ApiError;
use crate::state::AppState;
use adapt::models::transform::TransformRecord;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct TransformRequest {
    #[serde(default)]
    html: String,
    #[serde(default)]
    css: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct HistoryResponse {
    records: Vec<TransformRecord>,
}

async fn transform_handler(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformRecord>, ApiError> {
    let result = state.assistant.transform(&request.html, &request.css).await?;

    let mut history = state.history.lock().await;
    let record = history.record(result).clone();
    tracing::info!(entries = history.len(), "transformation recorded");
    Ok(Json(record))
}

async fn history_handler(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.history.lock().await;
    Json(HistoryResponse {
        records: history.entries().to_vec(),
    })
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/transform", post(transform_handler))
        .route("/history", get(history_handler))
        .with_state(state)
}
