use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-guess source language of a code reply.
///
/// The known variants come from the lexical cascade; `Other` carries whatever word
/// followed an opening fence, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageTag {
    C,
    JavaScript,
    Html,
    Jsx,
    PlainText,
    Other(String),
}

impl LanguageTag {
    pub fn as_str(&self) -> &str {
        match self {
            LanguageTag::C => "c",
            LanguageTag::JavaScript => "javascript",
            LanguageTag::Html => "html",
            LanguageTag::Jsx => "jsx",
            LanguageTag::PlainText => "plaintext",
            LanguageTag::Other(tag) => tag,
        }
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        match tag {
            "c" => LanguageTag::C,
            "javascript" => LanguageTag::JavaScript,
            "html" => LanguageTag::Html,
            "jsx" => LanguageTag::Jsx,
            "plaintext" => LanguageTag::PlainText,
            other => LanguageTag::Other(other.to_string()),
        }
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        LanguageTag::from(tag.as_str())
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
