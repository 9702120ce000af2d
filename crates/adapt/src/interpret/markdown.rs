use lazy_static::lazy_static;
use regex::Regex;

use crate::models::block::ChatBlock;

/// Blank line between two blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

lazy_static! {
    static ref HEADING_MARKER: Regex = Regex::new(r"^#+\s").unwrap();
}

fn heading(section: &str) -> ChatBlock {
    let level = section.chars().take_while(|c| *c == '#').count();
    // Only one whitespace character after the run is consumed. A run with no
    // whitespace after it leaves the text untouched.
    let text = HEADING_MARKER.replace(section, "");
    ChatBlock::heading(level, text)
}

/// Split prose into ordered heading and paragraph blocks.
pub fn segment(text: &str) -> Vec<ChatBlock> {
    text.split(BLOCK_SEPARATOR)
        .filter(|section| !section.trim().is_empty())
        .map(|section| {
            if section.starts_with('#') {
                heading(section)
            } else {
                ChatBlock::paragraph(section)
            }
        })
        .collect()
}
