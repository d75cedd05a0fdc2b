//! `tutorbot chat` — interactive REPL command.
//!
//! Opens a readline-based loop that sends each line through a single
//! in-memory conversation session and prints the answer. A bare `exit` or
//! `quit` (case-insensitive) leaves the loop, as does Ctrl+D.

use std::sync::Arc;

use tb_domain::config::Config;

use crate::bootstrap;
use crate::runtime::run_turn;
use crate::state::AppState;

const SESSION_NAME: &str = "cli:chat";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the interactive chat REPL.
pub async fn chat(config: Arc<Config>) -> anyhow::Result<()> {
    let state = bootstrap::build_app_state(config)?;

    // Rustyline editor with persistent input history (the conversation
    // itself is not persisted — only what was typed).
    let history_path = dirs::home_dir()
        .unwrap_or_default()
        .join(".tutorbot")
        .join("chat_history.txt");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    // Welcome goes to stderr so stdout stays clean for answers.
    eprintln!("TutorBot interactive chat");
    eprintln!("Type \"exit\" or \"quit\" to leave, /help for commands");
    eprintln!();

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                if trimmed.eq_ignore_ascii_case("exit")
                    || trimmed.eq_ignore_ascii_case("quit")
                {
                    break;
                }

                // ── Slash commands ────────────────────────────────
                if trimmed.starts_with('/') {
                    if handle_slash_command(trimmed, &state).await {
                        break;
                    }
                    continue;
                }

                // ── User message → chat turn ─────────────────────
                let outcome = run_turn(&state, SESSION_NAME, trimmed).await;
                println!("bot> {}", outcome.answer);
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Type exit or quit to leave)");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }

    rl.save_history(&history_path).ok();

    if let Some(handle) = state.sessions.get(SESSION_NAME) {
        let session = handle.lock().await;
        eprintln!(
            "Total cost of this conversation: ${:.5}",
            session.total_cost()
        );
    }
    eprintln!("Goodbye!");
    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Slash command handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Process a slash command. Returns `true` if the REPL should exit.
async fn handle_slash_command(input: &str, state: &AppState) -> bool {
    match input {
        "/exit" | "/quit" => return true,

        "/reset" => {
            if let Some(handle) = state.sessions.get(SESSION_NAME) {
                handle.lock().await.reset();
            }
            eprintln!("Conversation cleared.");
        }

        "/cost" => {
            let cost = match state.sessions.get(SESSION_NAME) {
                Some(handle) => handle.lock().await.total_cost(),
                None => 0.0,
            };
            eprintln!("Total cost of this conversation: ${cost:.5}");
        }

        "/help" => {
            eprintln!("Commands:");
            eprintln!("  /reset           Clear the conversation history and cost");
            eprintln!("  /cost            Show the running conversation cost");
            eprintln!("  /exit, /quit     Exit the chat (so do exit and quit)");
            eprintln!("  /help            Show this help");
        }

        other => {
            eprintln!("Unknown command: {other}  (type /help for a list)");
        }
    }

    false
}
