//! Labeled-section splitting for replies that carry two artifacts.
//!
//! Section `a` runs from the first `labelA:` to the first `labelB:` that follows
//! it. When `labelB:` physically precedes `labelA:` the two captures overlap in
//! ways that do not follow reading order; that is kept as-is.
//!
//! Labels match ignoring ASCII case only, so `Css:` is a label but `CSſ:` is not.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const HTML_LABEL: &str = "HTML";
pub const CSS_LABEL: &str = "CSS";

lazy_static! {
    static ref HTML_CSS: TaggedPatterns = TaggedPatterns::new(HTML_LABEL, CSS_LABEL).unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSections {
    pub a: String,
    pub b: String,
}

/// Pattern for `label` that folds ASCII letters and matches everything else literally
fn ascii_caseless(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase())
            } else {
                regex::escape(c.encode_utf8(&mut [0; 4]))
            }
        })
        .collect()
}

struct TaggedPatterns {
    first: Regex,
    second: Regex,
}

impl TaggedPatterns {
    fn new(label_a: &str, label_b: &str) -> Result<Self, regex::Error> {
        let a = ascii_caseless(label_a);
        let b = ascii_caseless(label_b);

        Ok(Self {
            first: Regex::new(&format!(r"(?s){a}:(.*?)(?:{b}:|\z)"))?,
            second: Regex::new(&format!(r"(?s){b}:(.*)\z"))?,
        })
    }

    fn split(&self, text: &str) -> TaggedSections {
        TaggedSections {
            a: capture(&self.first, text),
            b: capture(&self.second, text),
        }
    }
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extract the bodies following `label_a:` and `label_b:`.
///
/// Missing labels yield empty sections.
pub fn split_tagged(text: &str, label_a: &str, label_b: &str) -> TaggedSections {
    if label_a == HTML_LABEL && label_b == CSS_LABEL {
        return HTML_CSS.split(text);
    }

    match TaggedPatterns::new(label_a, label_b) {
        Ok(patterns) => patterns.split(text),
        Err(e) => {
            // Only reachable when a label blows the regex size limit
            warn!("Could not build section pattern: {}", e);
            TaggedSections::default()
        }
    }
}

/// Split a transform reply into its `HTML:` and `CSS:` sections.
pub fn split_html_css(text: &str) -> TaggedSections {
    HTML_CSS.split(text)
}
