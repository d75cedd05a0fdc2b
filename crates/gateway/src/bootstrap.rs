//! Application state construction.

use std::sync::Arc;

use tb_domain::config::Config;
use tb_domain::error::Result;
use tb_generator::{HttpGenerator, TextGenerator};
use tb_protocol::PromptCodec;
use tb_sessions::SessionMap;

use crate::state::AppState;

/// Build the full application state with the configured HTTP generator.
pub fn build_app_state(config: Arc<Config>) -> Result<AppState> {
    let generator = Arc::new(HttpGenerator::from_config(&config.model)?);
    build_app_state_with(config, generator)
}

/// Build application state around an explicit generator handle.
///
/// Tests use this to substitute a scripted fake for the model endpoint.
pub fn build_app_state_with(
    config: Arc<Config>,
    generator: Arc<dyn TextGenerator>,
) -> Result<AppState> {
    let codec = Arc::new(PromptCodec::new(&config.protocol)?);

    tracing::info!(model = generator.id(), "application state ready");

    Ok(AppState {
        config,
        generator,
        codec,
        sessions: Arc::new(SessionMap::new()),
    })
}
