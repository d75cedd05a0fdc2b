use std::sync::Arc;

use tb_domain::config::Config;
use tb_generator::TextGenerator;
use tb_protocol::PromptCodec;
use tb_sessions::SessionMap;

/// Shared application state passed to all API handlers and CLI surfaces.
///
/// The generator is the process-scoped handle to the fine-tuned model:
/// constructed once at bootstrap and passed by reference into every
/// consumer, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
    pub codec: Arc<PromptCodec>,
    pub sessions: Arc<SessionMap>,
}
