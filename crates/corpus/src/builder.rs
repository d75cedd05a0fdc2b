//! Corpus builder — merges heterogeneous intent documents into flat
//! question/answer pairs.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use tb_domain::error::{Error, Result};
use tb_domain::QaPair;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Intent records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One intent from a source document.
///
/// User inputs come from `patterns` or (Dialogflow-style exports)
/// `training_phrases`; only the first entry of `responses` is ever used.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentRecord {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub training_phrases: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

impl IntentRecord {
    /// Phrases for this intent: `patterns`, falling back to
    /// `training_phrases` when `patterns` is absent or empty.
    fn phrases(&self) -> &[String] {
        if self.patterns.is_empty() {
            &self.training_phrases
        } else {
            &self.patterns
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Loading
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Load intent records from one JSON document.
///
/// Two shapes are recognized: an object with an `intents` key holding a
/// list, or a bare list of intents. Anything else fails with a format error
/// naming the offending source.
pub fn load_intents(path: &Path) -> Result<Vec<IntentRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;

    let records = match value {
        Value::Object(mut obj) => match obj.remove("intents") {
            Some(intents @ Value::Array(_)) => intents,
            _ => {
                return Err(Error::Format {
                    path: path.display().to_string(),
                })
            }
        },
        list @ Value::Array(_) => list,
        _ => {
            return Err(Error::Format {
                path: path.display().to_string(),
            })
        }
    };

    Ok(serde_json::from_value(records)?)
}

/// Flatten intents into QA pairs: one pair per phrase, all sharing the
/// intent's first response. An intent with no responses contributes nothing,
/// however many phrases it has.
pub fn intents_to_pairs(intents: &[IntentRecord]) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    for intent in intents {
        let Some(response) = intent.responses.first() else {
            continue;
        };
        for phrase in intent.phrases() {
            pairs.push(QaPair::new(phrase.clone(), response.clone()));
        }
    }
    pairs
}

/// Build the combined dataset from a list of source documents.
///
/// Output ordering is stable: source-list order, then intent order within a
/// source, then phrase order within an intent. A missing source is skipped
/// with a warning and a malformed one is logged loudly and skipped —
/// partial corpora are acceptable.
pub fn build(sources: &[PathBuf]) -> Vec<QaPair> {
    let mut pairs = Vec::new();

    for source in sources {
        if !source.exists() {
            tracing::warn!(source = %source.display(), "intent source not found, skipping");
            continue;
        }
        match load_intents(source) {
            Ok(intents) => {
                tracing::info!(
                    source = %source.display(),
                    intents = intents.len(),
                    "loaded intent source"
                );
                pairs.extend(intents_to_pairs(&intents));
            }
            Err(e) => {
                tracing::error!(
                    source = %source.display(),
                    error = %e,
                    "skipping malformed intent source"
                );
            }
        }
    }

    tracing::info!(pairs = pairs.len(), "combined dataset built");
    for pair in pairs.iter().take(5) {
        tracing::debug!(user = %pair.user, bot = %pair.bot, "sample pair");
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phrases: &[&str], responses: &[&str]) -> IntentRecord {
        IntentRecord {
            patterns: phrases.iter().map(|s| s.to_string()).collect(),
            training_phrases: Vec::new(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn one_pair_per_phrase_sharing_first_response() {
        let intents = vec![record(&["hi", "hello", "hey"], &["Hello!", "Hi there"])];
        let pairs = intents_to_pairs(&intents);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.bot == "Hello!"));
        assert_eq!(pairs[0].user, "hi");
        assert_eq!(pairs[2].user, "hey");
    }

    #[test]
    fn empty_responses_contributes_no_pairs() {
        let intents = vec![record(&["a", "b", "c"], &[])];
        assert!(intents_to_pairs(&intents).is_empty());
    }

    #[test]
    fn training_phrases_used_when_patterns_empty() {
        let intents = vec![IntentRecord {
            patterns: Vec::new(),
            training_phrases: vec!["what is rust".into()],
            responses: vec!["A systems language.".into()],
        }];
        let pairs = intents_to_pairs(&intents);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].user, "what is rust");
    }

    #[test]
    fn keyed_document_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");
        std::fs::write(
            &path,
            r#"{"intents": [{"patterns": ["hi"], "responses": ["Hello!"]}]}"#,
        )
        .unwrap();
        let intents = load_intents(&path).unwrap();
        assert_eq!(intents.len(), 1);
    }

    #[test]
    fn bare_list_document_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");
        std::fs::write(&path, r#"[{"patterns": ["hi"], "responses": ["Hello!"]}]"#).unwrap();
        let intents = load_intents(&path).unwrap();
        assert_eq!(intents.len(), 1);
    }

    #[test]
    fn unknown_shape_is_a_format_error_naming_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weird.json");
        std::fs::write(&path, r#"{"conversations": []}"#).unwrap();
        let err = load_intents(&path).unwrap_err();
        assert!(err.to_string().contains("weird.json"));
    }

    #[test]
    fn build_skips_missing_and_malformed_sources() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(
            &good,
            r#"[{"patterns": ["hi"], "responses": ["Hello!"]}]"#,
        )
        .unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#""just a string""#).unwrap();
        let missing = dir.path().join("missing.json");

        let pairs = build(&[missing, bad, good]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].user, "hi");
    }

    #[test]
    fn ordering_follows_source_then_intent_then_phrase() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        std::fs::write(
            &a,
            r#"[{"patterns": ["a1", "a2"], "responses": ["A"]},
                {"patterns": ["b1"], "responses": ["B"]}]"#,
        )
        .unwrap();
        let b = dir.path().join("b.json");
        std::fs::write(&b, r#"[{"patterns": ["c1"], "responses": ["C"]}]"#).unwrap();

        let users: Vec<String> = build(&[a, b]).into_iter().map(|p| p.user).collect();
        assert_eq!(users, vec!["a1", "a2", "b1", "c1"]);
    }
}
