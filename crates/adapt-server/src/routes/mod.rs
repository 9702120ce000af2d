// Export route modules
pub mod chat;
pub mod interpret;
pub mod transform;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(chat::routes(state.clone()))
        .merge(transform::routes(state))
        .merge(interpret::routes())
}
