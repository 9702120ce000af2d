use super::language::LanguageTag;
use serde::{Deserialize, Serialize};

/// Deepest heading level a renderer distinguishes.
pub const MAX_DISPLAY_LEVEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// One classified unit of an interpreted chat reply
pub enum ChatBlock {
    Code {
        language: LanguageTag,
        content: String,
    },
    Heading {
        /// Raw length of the leading `#` run
        level: usize,
        text: String,
    },
    Paragraph {
        text: String,
    },
}

impl ChatBlock {
    pub fn code<S: Into<String>>(language: LanguageTag, content: S) -> Self {
        ChatBlock::Code {
            language,
            content: content.into(),
        }
    }

    pub fn heading<S: Into<String>>(level: usize, text: S) -> Self {
        ChatBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph<S: Into<String>>(text: S) -> Self {
        ChatBlock::Paragraph { text: text.into() }
    }

    /// Heading level clamped to the range a renderer styles, `None` for other blocks
    pub fn display_level(&self) -> Option<usize> {
        match self {
            ChatBlock::Heading { level, .. } => Some((*level).clamp(1, MAX_DISPLAY_LEVEL)),
            _ => None,
        }
    }

    /// The block's text without markup: code body, heading text or paragraph
    pub fn text(&self) -> &str {
        match self {
            ChatBlock::Code { content, .. } => content,
            ChatBlock::Heading { text, .. } => text,
            ChatBlock::Paragraph { text } => text,
        }
    }
}
