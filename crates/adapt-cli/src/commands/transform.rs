use anyhow::{Context, Result};
use cliclack::spinner;
use std::fs;
use std::path::Path;

use adapt::assistant::Assistant;
use adapt::history::TransformHistory;

use crate::history_file::{append_record, history_path, load_history};
use crate::render::print_transform;

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}

pub async fn handle_transform(
    assistant: Assistant,
    html: Option<&Path>,
    css: Option<&Path>,
) -> Result<()> {
    let html = read_source(html)?;
    let css = read_source(css)?;

    let spin = spinner();
    spin.start("Processing...");
    let result = match assistant.transform(&html, &css).await {
        Ok(result) => {
            spin.stop("Transformed");
            result
        }
        Err(e) => {
            spin.error(e.to_string());
            return Err(e.into());
        }
    };

    print_transform(&result.primary, &result.secondary)?;

    let path = history_path()?;
    let mut history = if path.exists() {
        load_history(&path)?
    } else {
        TransformHistory::new()
    };
    let record = history.record(result);
    append_record(&path, record)?;
    println!("Saved as transformation {}", history.ordinal(0));

    Ok(())
}
