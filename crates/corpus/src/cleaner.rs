//! Corpus cleaner — canonicalizes raw QA rows into the clean dataset.

use std::collections::HashSet;

use tb_domain::{QaPair, RawQaPair};

/// Clean raw rows into canonical QA pairs.
///
/// Stages run in order, and no stage reorders the rows that survive it:
///
/// 1. drop exact-duplicate `(user, bot)` rows, first occurrence wins;
/// 2. drop rows where either side is missing;
/// 3. drop rows where either side trims to `min_text_chars` characters or
///    fewer;
/// 4. normalize — `user` lowercased and trimmed, `bot` trimmed;
/// 5. collapse whitespace runs (spaces, tabs, newlines) to a single space.
///
/// Pure function of the input sequence: the same rows in the same order
/// always produce the same output.
pub fn clean(rows: Vec<RawQaPair>, min_text_chars: usize) -> Vec<QaPair> {
    let mut seen: HashSet<(Option<String>, Option<String>)> = HashSet::new();

    rows.into_iter()
        .filter(|row| seen.insert((row.user.clone(), row.bot.clone())))
        .filter_map(|row| {
            let user = row.user?;
            let bot = row.bot?;
            let user = user.trim();
            let bot = bot.trim();
            if user.chars().count() <= min_text_chars || bot.chars().count() <= min_text_chars {
                return None;
            }
            Some(QaPair {
                user: collapse_whitespace(&user.to_lowercase()),
                bot: collapse_whitespace(bot),
            })
        })
        .collect()
}

/// Collapse every run of whitespace to a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(user: &str, bot: &str) -> RawQaPair {
        RawQaPair {
            user: Some(user.into()),
            bot: Some(bot.into()),
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let rows = vec![raw(
            "What Is Recursion?  ",
            "  Recursion is a function calling itself.\n\n",
        )];
        let cleaned = clean(rows, 2);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].user, "what is recursion?");
        assert_eq!(cleaned[0].bot, "Recursion is a function calling itself.");
    }

    #[test]
    fn exact_duplicates_keep_first_occurrence() {
        let rows = vec![
            raw("hi", "Hello!"),
            raw("hey", "Hello!"),
            raw("hi", "Hello!"),
        ];
        let cleaned = clean(rows, 2);
        let users: Vec<&str> = cleaned.iter().map(|p| p.user.as_str()).collect();
        assert_eq!(users, vec!["hi", "hey"]);
    }

    #[test]
    fn missing_sides_are_dropped() {
        let rows = vec![
            RawQaPair {
                user: None,
                bot: Some("answer text".into()),
            },
            RawQaPair {
                user: Some("question".into()),
                bot: None,
            },
            raw("question", "answer text"),
        ];
        assert_eq!(clean(rows, 2).len(), 1);
    }

    #[test]
    fn short_rows_are_dropped_after_trimming() {
        let rows = vec![
            raw("  hi ", "A perfectly good answer."),
            raw("ok?", "no"),
            raw("what is rust", "ok "),
        ];
        let cleaned = clean(rows, 2);
        assert!(cleaned.is_empty());
    }

    #[test]
    fn survivors_keep_relative_order() {
        let rows = vec![
            raw("first question", "First answer."),
            raw("x", "dropped"),
            raw("second question", "Second answer."),
        ];
        let users: Vec<String> = clean(rows, 2).into_iter().map(|p| p.user).collect();
        assert_eq!(users, vec!["first question", "second question"]);
    }

    #[test]
    fn clean_is_idempotent() {
        let rows = vec![
            raw("What Is Recursion?  ", "Recursion is a\tfunction calling itself."),
            raw("hi there", "Hello,   welcome!"),
            raw("hi there", "Hello,   welcome!"),
        ];
        let once = clean(rows, 2);
        let twice = clean(once.iter().cloned().map(RawQaPair::from).collect(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn threshold_is_configurable() {
        let rows = vec![raw("short", "tiny")];
        assert_eq!(clean(rows.clone(), 2).len(), 1);
        assert!(clean(rows, 5).is_empty());
    }
}
