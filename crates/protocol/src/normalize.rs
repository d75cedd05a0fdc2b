use regex::Regex;

use tb_domain::config::NormalizationPolicy;
use tb_domain::error::{Error, Result};

/// Applies the configured normalization policy to user text before it is
/// framed into a prompt.
///
/// The strip pattern is compiled once at construction; `Passthrough`
/// carries no regex at all.
pub(crate) struct Normalizer {
    policy: NormalizationPolicy,
    strip_pattern: Option<Regex>,
}

impl Normalizer {
    pub(crate) fn new(policy: NormalizationPolicy) -> Result<Self> {
        let strip_pattern = match policy {
            NormalizationPolicy::Passthrough => None,
            NormalizationPolicy::LowercaseStrip => Some(
                Regex::new(r"[^\w\s?.,!]")
                    .map_err(|e| Error::Config(format!("strip pattern: {e}")))?,
            ),
        };
        Ok(Self {
            policy,
            strip_pattern,
        })
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        match (&self.policy, &self.strip_pattern) {
            (NormalizationPolicy::LowercaseStrip, Some(pattern)) => {
                pattern.replace_all(&text.to_lowercase(), "").into_owned()
            }
            _ => text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_leaves_text_alone() {
        let n = Normalizer::new(NormalizationPolicy::Passthrough).unwrap();
        assert_eq!(n.apply("What's UP?! #rust"), "What's UP?! #rust");
    }

    #[test]
    fn lowercase_strip_keeps_word_chars_and_basic_punctuation() {
        let n = Normalizer::new(NormalizationPolicy::LowercaseStrip).unwrap();
        assert_eq!(n.apply("Hello, World?! (really)"), "hello, world?! really");
    }
}
