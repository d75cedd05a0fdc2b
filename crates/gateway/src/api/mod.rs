pub mod chat;
pub mod sessions;

use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/chat", post(chat::chat))
        .route("/api/chat/reset", post(sessions::reset_session))
        .route("/api/chat/history", get(sessions::get_history))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
