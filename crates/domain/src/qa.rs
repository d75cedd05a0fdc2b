use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// QA pairs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One question/answer pair in the training corpus.
///
/// Produced by the corpus builder (one per phrase of an intent, all sharing
/// that intent's first response) and immutable once written to the combined
/// dataset. Field names double as the CSV header (`user,bot`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaPair {
    pub user: String,
    pub bot: String,
}

impl QaPair {
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}

/// A QA row as read back from a combined CSV, before cleaning.
///
/// Either side may be missing — the cleaner drops such rows rather than
/// failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQaPair {
    pub user: Option<String>,
    pub bot: Option<String>,
}

impl From<QaPair> for RawQaPair {
    fn from(pair: QaPair) -> Self {
        Self {
            user: Some(pair.user),
            bot: Some(pair.bot),
        }
    }
}
