pub mod chat;
pub mod config;
pub mod corpus_cmd;
pub mod run;

use clap::{Parser, Subcommand};

/// TutorBot — a fine-tuned-model chatbot and its corpus pipeline.
#[derive(Debug, Parser)]
#[command(name = "tutorbot", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP chat server (default when no subcommand is given).
    Serve,
    /// Open an interactive chat REPL against the configured model.
    Chat,
    /// Send a single message and print the response.
    Run {
        /// The message to send.
        message: String,
        /// Session name (defaults to "cli:run").
        #[arg(long, default_value = "cli:run")]
        session: String,
        /// Output the full response as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Offline corpus pipeline stages.
    #[command(subcommand)]
    Corpus(CorpusCommand),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum CorpusCommand {
    /// Merge the configured intent sources into the combined CSV.
    Build,
    /// Clean the combined CSV into the canonical dataset.
    Clean,
    /// Project the canonical dataset into the training corpus file.
    Export {
        /// Run build and clean first, then export.
        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `TUTORBOT_CONFIG`
/// (or `config.toml` by default). A missing file falls back to the
/// built-in defaults.
///
/// Shared by every subcommand so the logic lives in one place.
pub fn load_config() -> anyhow::Result<(tb_domain::config::Config, String)> {
    let config_path =
        std::env::var("TUTORBOT_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        tb_domain::config::Config::default()
    };

    Ok((config, config_path))
}
