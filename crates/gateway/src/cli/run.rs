//! `tutorbot run` — send one message, print the answer, exit.

use std::sync::Arc;

use tb_domain::config::Config;

use crate::bootstrap;
use crate::runtime::run_turn;

pub async fn run(
    config: Arc<Config>,
    message: String,
    session: String,
    json: bool,
) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config)?;

    let outcome = run_turn(&state, &session, &message).await;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "response": outcome.answer,
                "session": session,
                "token_count": outcome.token_count,
                "total_cost": outcome.total_cost,
            })
        );
    } else {
        println!("{}", outcome.answer);
    }

    Ok(())
}
