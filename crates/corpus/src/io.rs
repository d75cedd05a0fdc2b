//! File I/O for the corpus pipeline: CSV datasets and the plain-text
//! training corpus. All files are UTF-8; CSV files carry a `user,bot`
//! header and no index column.

use std::path::Path;

use tb_domain::error::Result;
use tb_domain::{QaPair, RawQaPair};

/// Read a combined dataset, tolerating rows with missing sides — the
/// cleaner decides what to do with them.
pub fn read_raw_csv(path: &Path) -> Result<Vec<RawQaPair>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Read a cleaned dataset where both sides are guaranteed present.
pub fn read_pairs_csv(path: &Path) -> Result<Vec<QaPair>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Write QA pairs as CSV, creating parent directories as needed.
pub fn write_pairs_csv(path: &Path, pairs: &[QaPair]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for pair in pairs {
        writer.serialize(pair)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write training blocks to the corpus file. Blocks are concatenated with
/// no separator beyond each block's own trailing newline.
pub fn write_corpus(path: &Path, blocks: impl Iterator<Item = String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = String::new();
    for text in blocks {
        out.push_str(&text);
    }
    std::fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        let pairs = vec![
            QaPair::new("what is rust?", "A systems language."),
            QaPair::new("quoting, commas", "Fields with \"quotes\" survive."),
        ];
        write_pairs_csv(&path, &pairs).unwrap();
        assert_eq!(read_pairs_csv(&path).unwrap(), pairs);
    }

    #[test]
    fn header_row_is_user_bot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        write_pairs_csv(&path, &[QaPair::new("q", "a")]).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("user,bot\n"));
    }

    #[test]
    fn empty_csv_field_reads_back_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        std::fs::write(&path, "user,bot\nquestion,\n,answer\n").unwrap();
        let rows = read_raw_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].bot.is_none());
        assert!(rows[1].user.is_none());
    }

    #[test]
    fn corpus_file_concatenates_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("corpus.txt");
        let blocks = vec![
            "User: a b c\nBot: d e\n".to_string(),
            "User: f\nBot: g\n".to_string(),
        ];
        write_corpus(&path, blocks.into_iter()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "User: a b c\nBot: d e\nUser: f\nBot: g\n");
    }
}
