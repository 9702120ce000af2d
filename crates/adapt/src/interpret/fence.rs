//! Code-fence extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker that opens and closes a fenced block.
pub const FENCE: &str = "```";

lazy_static! {
    // Opening fence with an optional language word, then everything up to the
    // first closing fence.
    static ref FENCED_BLOCK: Regex = Regex::new(r"(?s)```(?:[A-Za-z0-9_]+)?\n(.*?)```").unwrap();
}

/// Return the trimmed body of the first fenced block in `text`.
///
/// Text without a complete fence is returned exactly as given. Anything after the
/// first closing fence is dropped.
pub fn extract_fence(text: &str) -> String {
    if !text.contains(FENCE) {
        return text.to_string();
    }

    match FENCED_BLOCK.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tagged_block() {
        let text = "Here you go:\n```js\nconst x = 1;\n```\nEnjoy!";
        assert_eq!(extract_fence(text), "const x = 1;");
    }

    #[test]
    fn test_extracts_untagged_block() {
        assert_eq!(extract_fence("```\n  echo hi  \n```"), "echo hi");
    }

    #[test]
    fn test_only_first_block_is_kept() {
        let text = "```c\nint a;\n```\nand\n```c\nint b;\n```";
        assert_eq!(extract_fence(text), "int a;");
    }

    #[test]
    fn test_unclosed_fence_passes_through() {
        let text = "  ```python\nprint(1)\n";
        assert_eq!(extract_fence(text), text);
    }

    #[test]
    fn test_no_fence_passes_through_untrimmed() {
        let text = "\n  plain words  \n";
        assert_eq!(extract_fence(text), text);
    }

    #[test]
    fn test_fence_without_newline_passes_through() {
        let text = "```js const x = 1;```";
        assert_eq!(extract_fence(text), text);
    }
}
