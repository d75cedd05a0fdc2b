use tb_domain::config::GenerationConfig;
use tb_domain::error::Result;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Generator trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One completed generation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The raw generation, including the echoed prompt. The prompt codec's
    /// span extraction depends on the turn markers being present.
    pub text: String,
    /// Total tokens processed (prompt plus new tokens) when the backend
    /// reports them; feeds session cost accounting.
    pub token_count: Option<u32>,
}

/// A handle to the generative model.
///
/// The underlying call is a black box that may fail (oversized prompt,
/// unavailable weights, deadline expiry); callers on the serving path must
/// treat every error as recoverable and degrade to a fallback answer.
/// Implementations must not share decoding state across concurrent calls.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation. `params` are tunable policy knobs, threaded
    /// through to the backend unchanged.
    async fn generate(&self, prompt: &str, params: &GenerationConfig) -> Result<Generation>;

    /// A short identifier for diagnostics.
    fn id(&self) -> &str;
}
