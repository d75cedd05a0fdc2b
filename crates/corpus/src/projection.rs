//! Text projection — renders canonical pairs into the training corpus.

use tb_domain::QaPair;

/// Render one pair as a training block.
pub fn block(pair: &QaPair) -> String {
    format!("User: {}\nBot: {}\n", pair.user, pair.bot)
}

/// Lazily project pairs into training blocks.
///
/// A block is emitted only when its whitespace-delimited word count is
/// strictly below `max_block_words`, so no single pathological record can
/// dominate a training batch. Rows failing the filter are silently dropped —
/// corpus hygiene, not an error.
pub fn project(
    pairs: &[QaPair],
    max_block_words: usize,
) -> impl Iterator<Item = String> + '_ {
    pairs.iter().filter_map(move |pair| {
        let text = block(pair);
        (text.split_whitespace().count() < max_block_words).then_some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_shape_is_user_newline_bot() {
        let pair = QaPair::new("what is recursion?", "A function calling itself.");
        assert_eq!(
            block(&pair),
            "User: what is recursion?\nBot: A function calling itself.\n"
        );
    }

    #[test]
    fn ten_word_block_survives_default_threshold() {
        // 2 marker words + 8 content words = 10 total.
        let pair = QaPair::new("one two three four", "five six seven eight");
        let blocks: Vec<String> = project(std::slice::from_ref(&pair), 512).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].split_whitespace().count(), 10);
    }

    #[test]
    fn oversized_block_is_dropped() {
        let long_answer = vec!["word"; 600].join(" ");
        let pairs = vec![
            QaPair::new("short question", long_answer),
            QaPair::new("kept question", "kept answer"),
        ];
        let blocks: Vec<String> = project(&pairs, 512).collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("kept question"));
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly 6 words: "User:", one, two, "Bot:", three, four.
        let pair = QaPair::new("one two", "three four");
        assert_eq!(project(std::slice::from_ref(&pair), 6).count(), 0);
        assert_eq!(project(std::slice::from_ref(&pair), 7).count(), 1);
    }
}
