//! `tutorbot corpus` — the offline pipeline stages.
//!
//! These commands run loudly: unlike the serving path, a pipeline error
//! aborts the batch with a nonzero exit instead of degrading.

use tb_corpus::{build, clean, io, project};
use tb_domain::config::Config;

use crate::cli::CorpusCommand;

pub fn run(config: &Config, cmd: CorpusCommand) -> anyhow::Result<()> {
    match cmd {
        CorpusCommand::Build => build_combined(config),
        CorpusCommand::Clean => clean_combined(config),
        CorpusCommand::Export { all } => {
            if all {
                build_combined(config)?;
                clean_combined(config)?;
            }
            export_corpus(config)
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Stages
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Merge intent sources into the combined dataset.
fn build_combined(config: &Config) -> anyhow::Result<()> {
    let corpus = &config.corpus;
    let pairs = build(&corpus.sources);
    io::write_pairs_csv(&corpus.combined_csv, &pairs)?;
    println!(
        "Combined {} pairs into {}",
        pairs.len(),
        corpus.combined_csv.display()
    );
    Ok(())
}

/// Canonicalize the combined dataset.
fn clean_combined(config: &Config) -> anyhow::Result<()> {
    let corpus = &config.corpus;
    let rows = io::read_raw_csv(&corpus.combined_csv)?;
    let before = rows.len();
    let cleaned = clean(rows, corpus.min_text_chars);
    io::write_pairs_csv(&corpus.clean_csv, &cleaned)?;
    println!(
        "Cleaned {before} rows down to {} in {}",
        cleaned.len(),
        corpus.clean_csv.display()
    );
    Ok(())
}

/// Project the canonical dataset into the training corpus file.
fn export_corpus(config: &Config) -> anyhow::Result<()> {
    let corpus = &config.corpus;
    let pairs = io::read_pairs_csv(&corpus.clean_csv)?;
    io::write_corpus(&corpus.corpus_txt, project(&pairs, corpus.max_block_words))?;
    println!("Training corpus written to {}", corpus.corpus_txt.display());
    Ok(())
}
