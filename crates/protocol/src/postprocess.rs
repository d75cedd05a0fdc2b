//! Optional answer post-processing, applied after span extraction.

use std::collections::HashSet;

/// Uppercase the first letter of the answer.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Drop exact-duplicate sentences, preserving first-occurrence order.
/// Sentences are delimited by `". "`, matching how repetition-prone small
/// models duplicate themselves mid-answer.
pub(crate) fn dedupe_sentences(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split(". ")
        .filter(|sentence| seen.insert(*sentence))
        .collect::<Vec<_>>()
        .join(". ")
}
