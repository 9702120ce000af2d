use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::Path;

use adapt::interpret::{interpret_chat_reply, interpret_transform_reply};

fn read_reply(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read reply from stdin"),
    }
}

pub fn interpret_to_json(text: &str, transform: bool) -> Result<String> {
    if text.trim().is_empty() {
        bail!("No reply text was supplied");
    }

    let rendered = if transform {
        serde_json::to_string_pretty(&interpret_transform_reply(text))?
    } else {
        serde_json::to_string_pretty(&interpret_chat_reply(text))?
    };
    Ok(rendered)
}

pub fn handle_interpret(transform: bool, file: Option<&Path>) -> Result<()> {
    let text = read_reply(file)?;
    println!("{}", interpret_to_json(&text, transform)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_chat_reply_json() {
        let rendered = interpret_to_json("# Hi\n\nThere", false).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!([
                {"type": "heading", "level": 1, "text": "Hi"},
                {"type": "paragraph", "text": "There"}
            ])
        );
    }

    #[test]
    fn test_transform_reply_json() {
        let rendered = interpret_to_json("HTML: <p></p> CSS: p{}", true).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({"primary": "<p></p>", "secondary": "p{}"}));
    }

    #[test]
    fn test_blank_reply_is_rejected() {
        assert!(interpret_to_json(" \n", false).is_err());
    }
}
