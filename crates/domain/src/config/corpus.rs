use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Corpus pipeline
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Inputs, outputs, and thresholds of the offline corpus pipeline.
///
/// The two thresholds are deliberately configurable policy, not fixed law:
/// the defaults reproduce the constants the dataset was originally built
/// with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Intent JSON documents, processed in list order. A missing file is
    /// skipped with a diagnostic; partial corpora are acceptable.
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Combined dataset written by `corpus build`.
    #[serde(default = "d_combined_csv")]
    pub combined_csv: PathBuf,

    /// Canonical dataset written by `corpus clean`.
    #[serde(default = "d_clean_csv")]
    pub clean_csv: PathBuf,

    /// Plain-text training corpus written by `corpus export`.
    #[serde(default = "d_corpus_txt")]
    pub corpus_txt: PathBuf,

    /// Rows whose trimmed question or answer is at most this many
    /// characters are dropped by the cleaner.
    #[serde(default = "d_min_text_chars")]
    pub min_text_chars: usize,

    /// A training block must stay strictly below this many whitespace-
    /// delimited words to be exported. Bounds the longest example fed to
    /// fine-tuning.
    #[serde(default = "d_max_block_words")]
    pub max_block_words: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            combined_csv: d_combined_csv(),
            clean_csv: d_clean_csv(),
            corpus_txt: d_corpus_txt(),
            min_text_chars: d_min_text_chars(),
            max_block_words: d_max_block_words(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_combined_csv() -> PathBuf {
    "data/conversations_combined.csv".into()
}
fn d_clean_csv() -> PathBuf {
    "data/conversations_clean.csv".into()
}
fn d_corpus_txt() -> PathBuf {
    "data/pretrain_corpus.txt".into()
}
fn d_min_text_chars() -> usize {
    2
}
fn d_max_block_words() -> usize {
    512
}
