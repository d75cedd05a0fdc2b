mod corpus;
mod model;
mod protocol;
mod server;
mod sessions;

pub use corpus::*;
pub use model::*;
pub use protocol::*;
pub use server::*;
pub use sessions::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub protocol: ProtocolConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut error = |field: &str, message: String| {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                field: field.to_owned(),
                message,
            });
        };

        if self.server.port == 0 {
            error("server.port", "port must be non-zero".into());
        }
        if self.model.base_url.trim().is_empty() {
            error("model.base_url", "inference endpoint URL is empty".into());
        }
        if self.model.timeout_secs == 0 {
            error("model.timeout_secs", "timeout must be non-zero".into());
        }
        if self.model.generation.max_new_tokens == 0 {
            error(
                "model.generation.max_new_tokens",
                "must allow at least one new token".into(),
            );
        }
        if self.protocol.fallback_answer.trim().is_empty() {
            error(
                "protocol.fallback_answer",
                "fallback answer must be non-empty (callers never receive empty text)".into(),
            );
        }
        if self.sessions.cost_per_token < 0.0 {
            error("sessions.cost_per_token", "cost rate cannot be negative".into());
        }
        if self.corpus.max_block_words == 0 {
            error(
                "corpus.max_block_words",
                "a zero threshold would drop every training block".into(),
            );
        }

        if self.corpus.sources.is_empty() {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "corpus.sources".into(),
                message: "no intent sources configured — `corpus build` will produce an empty dataset"
                    .into(),
            });
        }

        issues
    }
}
