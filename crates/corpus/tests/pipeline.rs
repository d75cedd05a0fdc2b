//! End-to-end pipeline test: intent JSON → combined CSV → clean CSV →
//! training corpus, exactly as the `corpus` CLI subcommands chain them.

use tb_corpus::{build, clean, io, project};

#[test]
fn full_pipeline_produces_training_corpus() {
    let dir = tempfile::tempdir().unwrap();

    let cs = dir.path().join("computer_science.json");
    std::fs::write(
        &cs,
        r#"{"intents": [
            {"patterns": ["What Is Recursion?  ", "explain recursion"],
             "responses": ["  Recursion is a function calling itself.\n\n"]},
            {"patterns": ["no answer here"], "responses": []}
        ]}"#,
    )
    .unwrap();

    let faq = dir.path().join("faq.json");
    std::fs::write(
        &faq,
        r#"[{"training_phrases": ["hi"], "responses": ["Hello! Ask me about computer science."]}]"#,
    )
    .unwrap();

    // Build: 2 pairs from the first intent, 0 from the responseless one,
    // 1 from the bare-list source.
    let pairs = build(&[cs, faq, dir.path().join("absent.json")]);
    assert_eq!(pairs.len(), 3);

    let combined = dir.path().join("combined.csv");
    io::write_pairs_csv(&combined, &pairs).unwrap();

    // Clean: normalization matches the documented end-to-end example, and
    // "hi" falls under the 2-character floor.
    let cleaned = clean(io::read_raw_csv(&combined).unwrap(), 2);
    assert_eq!(cleaned.len(), 2);
    assert_eq!(cleaned[0].user, "what is recursion?");
    assert_eq!(cleaned[0].bot, "Recursion is a function calling itself.");

    let clean_csv = dir.path().join("clean.csv");
    io::write_pairs_csv(&clean_csv, &cleaned).unwrap();

    // Export: every surviving block is well under the word ceiling.
    let canonical = io::read_pairs_csv(&clean_csv).unwrap();
    let corpus = dir.path().join("corpus.txt");
    io::write_corpus(&corpus, project(&canonical, 512)).unwrap();

    let text = std::fs::read_to_string(&corpus).unwrap();
    assert!(text.starts_with(
        "User: what is recursion?\nBot: Recursion is a function calling itself.\n"
    ));
    assert_eq!(text.matches("User: ").count(), 2);
}
