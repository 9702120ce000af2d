//! Lexical language guess for a code reply.
//!
//! This is a cheap rendering hint, not a parser. Rules are plain substring checks,
//! so `classical` triggers the `class` rule; that imprecision is part of the
//! observable behavior and is kept.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::language::LanguageTag;

lazy_static! {
    static ref FENCE_LANGUAGE: Regex = Regex::new(r"```([A-Za-z0-9_]+)").unwrap();
}

/// A substring that, when present, selects a language.
#[derive(Debug)]
pub struct LexicalRule {
    pub needle: &'static str,
    pub language: LanguageTag,
}

/// Evaluated top to bottom, first match wins.
pub static LEXICAL_RULES: [LexicalRule; 12] = [
    LexicalRule { needle: "#include", language: LanguageTag::C },
    LexicalRule { needle: "printf", language: LanguageTag::C },
    LexicalRule { needle: "scanf", language: LanguageTag::C },
    LexicalRule { needle: "int main", language: LanguageTag::C },
    LexicalRule { needle: "function", language: LanguageTag::JavaScript },
    LexicalRule { needle: "const", language: LanguageTag::JavaScript },
    LexicalRule { needle: "let", language: LanguageTag::JavaScript },
    LexicalRule { needle: "var", language: LanguageTag::JavaScript },
    LexicalRule { needle: "import", language: LanguageTag::JavaScript },
    LexicalRule { needle: "class", language: LanguageTag::JavaScript },
    LexicalRule { needle: "<", language: LanguageTag::Html },
    LexicalRule { needle: "/>", language: LanguageTag::Jsx },
];

/// The word right after the first opening fence, if any.
pub fn fence_language(text: &str) -> Option<&str> {
    FENCE_LANGUAGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|word| word.as_str())
}

/// Infer a single language tag for `text`. Never fails; falls back to plaintext.
pub fn detect_language(text: &str) -> LanguageTag {
    if let Some(word) = fence_language(text) {
        return LanguageTag::from(word);
    }

    LEXICAL_RULES
        .iter()
        .find(|rule| text.contains(rule.needle))
        .map(|rule| rule.language.clone())
        .unwrap_or(LanguageTag::PlainText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_word_wins_verbatim() {
        assert_eq!(
            detect_language("```TypeScript\nlet a = 1\n```"),
            LanguageTag::Other("TypeScript".to_string())
        );
        assert_eq!(detect_language("```c\nx\n```"), LanguageTag::C);
    }

    #[test]
    fn test_bare_fence_falls_through_to_rules() {
        assert_eq!(detect_language("```\nconst a = 1;\n```"), LanguageTag::JavaScript);
    }

    #[test]
    fn test_earlier_rule_wins() {
        assert_eq!(
            detect_language("#include <stdio.h>\nconst int x = 1;"),
            LanguageTag::C
        );
        // `<` is checked before `/>`
        assert_eq!(detect_language("<Button />"), LanguageTag::Html);
    }

    #[test]
    fn test_jsx_rule_is_reachable() {
        assert_eq!(detect_language("Button />"), LanguageTag::Jsx);
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        assert_eq!(
            detect_language("A classical approach"),
            LanguageTag::JavaScript
        );
    }

    #[test]
    fn test_no_hint_is_plaintext() {
        assert_eq!(detect_language("Hello, how are you?"), LanguageTag::PlainText);
        assert_eq!(detect_language(""), LanguageTag::PlainText);
    }

    #[test]
    fn test_rule_table_order() {
        let needles: Vec<&str> = LEXICAL_RULES.iter().map(|rule| rule.needle).collect();
        assert_eq!(
            needles,
            vec![
                "#include", "printf", "scanf", "int main", "function", "const", "let", "var",
                "import", "class", "<", "/>"
            ]
        );
    }
}
