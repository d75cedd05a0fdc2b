use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Prompt protocol
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Turn-format policy for the prompt/response contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// How user text is normalized before it is framed into a prompt.
    #[serde(default)]
    pub normalization: NormalizationPolicy,

    /// Substituted whenever an extracted answer trims down to nothing.
    /// Callers never receive empty text.
    #[serde(default = "d_fallback_answer")]
    pub fallback_answer: String,

    /// Uppercase the first letter of extracted answers.
    #[serde(default)]
    pub capitalize_answer: bool,

    /// Drop exact-duplicate sentences from extracted answers. Useful when
    /// the underlying model is prone to repeating itself.
    #[serde(default)]
    pub dedupe_sentences: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationPolicy::default(),
            fallback_answer: d_fallback_answer(),
            capitalize_answer: false,
            dedupe_sentences: false,
        }
    }
}

/// How user text is normalized inside `encode`.
///
/// The historical front ends disagreed on this, so it is an explicit,
/// pluggable policy rather than a hardcoded behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Pass user text through unchanged.
    #[default]
    Passthrough,
    /// Lowercase and strip characters outside `[\w\s?.,!]`.
    LowercaseStrip,
}

// ── serde default helpers ───────────────────────────────────────────

fn d_fallback_answer() -> String {
    "I'm sorry, I didn't understand that. Could you rephrase?".into()
}
