//! Response interpretation: turn one complete model reply into typed output.
//!
//! The components are pure functions over the input string. Nothing is cached or
//! shared between calls, so they can be used from any number of tasks at once.
pub mod classify;
pub mod fence;
pub mod language;
pub mod markdown;
pub mod sections;

use tracing::debug;

use crate::models::block::ChatBlock;
use crate::models::transform::TransformResult;

pub use classify::is_code;
pub use fence::extract_fence;
pub use language::detect_language;
pub use markdown::segment;
pub use sections::{split_html_css, split_tagged, TaggedSections, CSS_LABEL, HTML_LABEL};

/// Interpret an assistant chat reply.
///
/// A reply that looks like code becomes exactly one code block. Anything else is
/// segmented into headings and paragraphs.
pub fn interpret_chat_reply(text: &str) -> Vec<ChatBlock> {
    if is_code(text) {
        let language = detect_language(text);
        debug!(language = %language, "interpreted reply as code");
        return vec![ChatBlock::code(language, extract_fence(text))];
    }

    let blocks = segment(text);
    debug!(blocks = blocks.len(), "interpreted reply as prose");
    blocks
}

/// Interpret a transform reply carrying `HTML:` and `CSS:` sections.
pub fn interpret_transform_reply(text: &str) -> TransformResult {
    let TaggedSections { a, b } = split_html_css(text);
    if a.is_empty() && b.is_empty() {
        debug!("transform reply had no labeled sections");
    }
    TransformResult::new(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::language::LanguageTag;

    #[test]
    fn test_code_reply_is_single_block() {
        let blocks = interpret_chat_reply("Sure!\n\n```c\n#include <stdio.h>\n```\n\nDone.");
        assert_eq!(
            blocks,
            vec![ChatBlock::code(LanguageTag::C, "#include <stdio.h>")]
        );
    }

    #[test]
    fn test_unfenced_code_keeps_whole_text() {
        let text = "const a = 1;\nconst b = 2;";
        assert_eq!(
            interpret_chat_reply(text),
            vec![ChatBlock::code(LanguageTag::JavaScript, text)]
        );
    }

    #[test]
    fn test_prose_reply_is_segmented() {
        let blocks = interpret_chat_reply("# Answer\n\nUse a loop.");
        assert_eq!(
            blocks,
            vec![ChatBlock::heading(1, "Answer"), ChatBlock::paragraph("Use a loop.")]
        );
    }

    #[test]
    fn test_transform_reply() {
        let result = interpret_transform_reply("HTML:\n<main></main>\nCSS:\nmain { margin: 0 }\n");
        assert_eq!(result, TransformResult::new("<main></main>", "main { margin: 0 }"));
    }

    #[test]
    fn test_transform_reply_without_labels() {
        assert!(interpret_transform_reply("I cannot help with that.").is_empty());
    }
}
