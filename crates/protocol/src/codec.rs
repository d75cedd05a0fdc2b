use tb_domain::config::ProtocolConfig;
use tb_domain::error::Result;

use crate::normalize::Normalizer;
use crate::postprocess;

/// Marker opening a user turn.
pub const USER_MARKER: &str = "User:";
/// Marker opening a model turn.
pub const BOT_MARKER: &str = "Bot:";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Codec
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Encodes user turns into prompts and decodes raw generations into
/// bounded answers.
///
/// Built once at bootstrap from [`ProtocolConfig`] and shared by every
/// front end, so normalization and post-processing policy are decided in
/// exactly one place.
pub struct PromptCodec {
    normalizer: Normalizer,
    fallback_answer: String,
    capitalize_answer: bool,
    dedupe_sentences: bool,
}

impl PromptCodec {
    pub fn new(cfg: &ProtocolConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(cfg.normalization)?,
            fallback_answer: cfg.fallback_answer.clone(),
            capitalize_answer: cfg.capitalize_answer,
            dedupe_sentences: cfg.dedupe_sentences,
        })
    }

    /// Frame a user message into a prompt: `"User: <text>\nBot:"`.
    pub fn encode(&self, user_text: &str) -> String {
        format!(
            "{USER_MARKER} {}\n{BOT_MARKER}",
            self.normalizer.apply(user_text)
        )
    }

    /// Extract the answer from a raw generation. Total — never fails, and
    /// never returns an empty string.
    ///
    /// The raw generation is the model's full output including the echoed
    /// prompt. When a `Bot:` marker is present, the answer is the span
    /// after the first `Bot:` and before the first subsequent `User:` (or
    /// end of text), trimmed, then post-processed per config. When no
    /// marker is present the model failed to follow the turn format and
    /// the whole generation is returned unmodified. An answer that trims
    /// to nothing becomes the configured fallback.
    pub fn decode(&self, raw: &str) -> String {
        let Some(answer) = extract_answer_span(raw) else {
            // Degenerate path: the model failed to follow the turn format.
            tracing::debug!("generation carries no Bot: marker, returning raw text");
            if raw.trim().is_empty() {
                return self.fallback_answer.clone();
            }
            return raw.to_owned();
        };

        if answer.is_empty() {
            return self.fallback_answer.clone();
        }

        let mut answer = answer.to_owned();
        if self.dedupe_sentences {
            answer = postprocess::dedupe_sentences(&answer);
        }
        if self.capitalize_answer {
            answer = postprocess::capitalize_first(&answer);
        }
        answer
    }

    pub fn fallback_answer(&self) -> &str {
        &self.fallback_answer
    }
}

/// The trimmed span after the first `Bot:` marker and before the first
/// `User:` marker that follows it. `None` when no `Bot:` marker exists.
fn extract_answer_span(raw: &str) -> Option<&str> {
    let start = raw.find(BOT_MARKER)? + BOT_MARKER.len();
    let rest = &raw[start..];
    let end = rest.find(USER_MARKER).unwrap_or(rest.len());
    Some(rest[..end].trim())
}
