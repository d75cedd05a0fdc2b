//! The chat turn — the serving-path composition shared by every front end.
//!
//! The HTTP API, the REPL, and the one-shot `run` command all funnel
//! through [`run_turn`], so the encode → generate → decode → account
//! sequence exists exactly once.

use tb_domain::Role;

use crate::state::AppState;

/// What one turn produced.
#[derive(Debug)]
pub struct TurnOutcome {
    pub answer: String,
    pub token_count: Option<u32>,
    pub total_cost: f64,
}

/// Run one conversational turn against a named session.
///
/// The session lock is held for the whole turn: a session never has more
/// than one generation in flight, and history readers never observe a
/// half-written exchange. A generator failure degrades to the configured
/// fallback answer — a live chat never surfaces a raw error.
pub async fn run_turn(state: &AppState, session_name: &str, user_text: &str) -> TurnOutcome {
    let (handle, _is_new) = state.sessions.resolve_or_create(session_name);
    let mut session = handle.lock().await;

    session.append_turn(Role::User, user_text);

    let prompt = state.codec.encode(user_text);
    let params = &state.config.model.generation;

    let (answer, token_count) = match state.generator.generate(&prompt, params).await {
        Ok(generation) => (
            state.codec.decode(&generation.text),
            generation.token_count,
        ),
        Err(e) => {
            tracing::warn!(
                session = session_name,
                error = %e,
                "generation failed, answering with fallback"
            );
            (state.codec.fallback_answer().to_owned(), None)
        }
    };

    session.append_turn(Role::Assistant, answer.clone());
    if let Some(tokens) = token_count {
        session.record_usage(tokens, state.config.sessions.cost_per_token);
    }

    TurnOutcome {
        answer,
        token_count,
        total_cost: session.total_cost(),
    }
}
