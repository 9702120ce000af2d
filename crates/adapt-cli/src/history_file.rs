use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use adapt::history::TransformHistory;
use adapt::models::transform::TransformRecord;

pub fn ensure_history_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    let config_dir = home_dir.join(".config").join("adapt");

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn history_path() -> Result<PathBuf> {
    Ok(ensure_history_dir()?.join("history.jsonl"))
}

/// Read one record per line; blank lines are skipped.
pub fn load_history(path: &Path) -> Result<TransformHistory> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open history file {}", path.display()))?;

    let mut records = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: TransformRecord = serde_json::from_str(&line)
            .with_context(|| format!("Corrupt history entry on line {}", number + 1))?;
        records.push(record);
    }

    Ok(TransformHistory::from_records(records))
}

pub fn append_record(path: &Path, record: &TransformRecord) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = std::io::BufWriter::new(file);

    serde_json::to_writer(&mut writer, record)?;
    writeln!(writer)?;

    writer.flush()?;
    Ok(())
}
