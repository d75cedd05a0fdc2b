//! Chat API endpoint — the browser front end's single entry point.
//!
//! `POST /api/chat` — run one turn and return the bot's answer.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use crate::runtime::run_turn;
use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request shape
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message text.
    #[serde(default)]
    pub message: Option<String>,
    /// Session name — one per connected client surface (browser tab).
    /// Absent means the configured default session.
    #[serde(default)]
    pub session: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /api/chat
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<serde_json::Value> {
    let message = body.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        // Soft validation failure: a fixed guidance string with success
        // status, not an error response.
        return Json(serde_json::json!({ "response": "Please send a message." }));
    }

    let session = body
        .session
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.config.sessions.default_session.clone());

    let outcome = run_turn(&state, &session, message).await;

    Json(serde_json::json!({
        "response": outcome.answer,
        "session": session,
        "token_count": outcome.token_count,
        "total_cost": outcome.total_cost,
    }))
}
