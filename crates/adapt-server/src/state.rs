use adapt::assistant::Assistant;
use adapt::history::TransformHistory;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub history: Arc<Mutex<TransformHistory>>,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
            history: Arc::new(Mutex::new(TransformHistory::new())),
        }
    }
}
