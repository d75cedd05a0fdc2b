//! Session API endpoints backing the browser UI's sidebar.
//!
//! - `POST /api/chat/reset`   — clear a session's history and cost
//! - `GET  /api/chat/history` — ordered turns plus the running cost

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SessionSelector {
    #[serde(default)]
    pub session: Option<String>,
}

impl SessionSelector {
    fn resolve(self, state: &AppState) -> String {
        self.session
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| state.config.sessions.default_session.clone())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /api/chat/reset
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reset is the browser UI's only mutation entry point besides chat
/// itself. Resetting a session that was never created is a no-op.
pub async fn reset_session(
    State(state): State<AppState>,
    body: Option<Json<SessionSelector>>,
) -> Json<serde_json::Value> {
    let selector = body.map(|Json(b)| b).unwrap_or_default();
    let name = selector.resolve(&state);

    let reset = match state.sessions.get(&name) {
        Some(handle) => {
            handle.lock().await.reset();
            tracing::info!(session = %name, "session reset");
            true
        }
        None => false,
    };

    Json(serde_json::json!({ "session": name, "reset": reset }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /api/chat/history
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A session that does not exist yet reads as empty — lazy creation means
/// "never spoken to" and "just reset" look the same to the UI.
pub async fn get_history(
    State(state): State<AppState>,
    Query(selector): Query<SessionSelector>,
) -> Json<serde_json::Value> {
    let name = selector.resolve(&state);

    match state.sessions.get(&name) {
        Some(handle) => {
            let session = handle.lock().await;
            Json(serde_json::json!({
                "session": name,
                "created_at": session.created_at().to_rfc3339(),
                "turns": session.history(),
                "total_cost": session.total_cost(),
            }))
        }
        None => Json(serde_json::json!({
            "session": name,
            "turns": [],
            "total_cost": 0.0,
        })),
    }
}
