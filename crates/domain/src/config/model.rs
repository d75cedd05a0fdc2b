use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Model endpoint
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where and how the fine-tuned model is reached.
///
/// The model artifact itself is an opaque external collaborator: an
/// inference server loads it (by path or registry identifier) and exposes a
/// completion endpoint. TutorBot never inspects the artifact's format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the inference server hosting the fine-tuned artifact.
    #[serde(default = "d_base_url")]
    pub base_url: String,

    /// Artifact identifier forwarded to the inference server untouched
    /// (a model directory path or a registry id). `None` uses whatever the
    /// server has loaded.
    #[serde(default)]
    pub artifact: Option<String>,

    /// Request deadline in seconds. Generation has no built-in cancellation,
    /// so expiry is the external deadline the serving path treats as a
    /// recoverable failure (the caller gets the fallback answer).
    #[serde(default = "d_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling knobs threaded through to the generator unchanged.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: d_base_url(),
            artifact: None,
            timeout_secs: d_timeout_secs(),
            generation: GenerationConfig::default(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Generation parameters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decoding parameters. These are policy, not protocol: none of them are
/// invariants of the turn format, and every one is passed to the underlying
/// model call as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Bounds the answer length in tokens.
    #[serde(default = "d_max_new_tokens")]
    pub max_new_tokens: u32,
    /// `true` samples from the distribution; `false` decodes greedily.
    #[serde(default = "d_true")]
    pub do_sample: bool,
    /// Top-k truncation of the sampling distribution.
    #[serde(default = "d_top_k")]
    pub top_k: u32,
    /// Nucleus (top-p) truncation of the sampling distribution.
    #[serde(default = "d_top_p")]
    pub top_p: f32,
    /// Sampling sharpness.
    #[serde(default = "d_temperature")]
    pub temperature: f32,
    /// Downweights already-emitted tokens; 1.0 disables.
    #[serde(default = "d_repetition_penalty")]
    pub repetition_penalty: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: d_max_new_tokens(),
            do_sample: true,
            top_k: d_top_k(),
            top_p: d_top_p(),
            temperature: d_temperature(),
            repetition_penalty: d_repetition_penalty(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_base_url() -> String {
    "http://127.0.0.1:8080".into()
}
fn d_timeout_secs() -> u64 {
    30
}
fn d_max_new_tokens() -> u32 {
    60
}
fn d_top_k() -> u32 {
    30
}
fn d_top_p() -> f32 {
    0.9
}
fn d_temperature() -> f32 {
    0.8
}
fn d_repetition_penalty() -> f32 {
    1.0
}
fn d_true() -> bool {
    true
}
