use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Sessions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Cost attributed per generated token. The default matches the usual
    /// $0.002-per-1k-tokens rate.
    #[serde(default = "d_cost_per_token")]
    pub cost_per_token: f64,

    /// Session name used when an HTTP request does not name one.
    #[serde(default = "d_default_session")]
    pub default_session: String,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            cost_per_token: d_cost_per_token(),
            default_session: d_default_session(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_cost_per_token() -> f64 {
    0.002 / 1000.0
}
fn d_default_session() -> String {
    "default".into()
}
