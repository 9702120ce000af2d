use anyhow::{anyhow, Result};
use chrono::Local;
use console::style;

use crate::history_file::{history_path, load_history};
use crate::render::print_transform;

pub fn handle_history(show: Option<usize>) -> Result<()> {
    let path = history_path()?;
    if !path.exists() {
        println!("No transformations yet");
        return Ok(());
    }
    let history = load_history(&path)?;

    if let Some(number) = show {
        let record = history
            .by_ordinal(number)
            .ok_or_else(|| anyhow!("No transformation {}", number))?;
        return print_transform(&record.primary, &record.secondary);
    }

    if history.is_empty() {
        println!("No transformations yet");
    }
    for (index, record) in history.entries().iter().enumerate() {
        println!(
            "{}  {}",
            style(format!("Transformation {}", history.ordinal(index))).bold(),
            style(
                record
                    .timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
            )
            .dim()
        );
    }
    Ok(())
}
