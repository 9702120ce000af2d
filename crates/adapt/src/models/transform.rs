use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two artifacts multiplexed into one transform reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Markup body, taken from the `HTML:` section
    pub primary: String,
    /// Stylesheet body, taken from the `CSS:` section
    pub secondary: String,
}

impl TransformResult {
    pub fn new<P: Into<String>, S: Into<String>>(primary: P, secondary: S) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// A transform result retained in history, keyed by when it was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub primary: String,
    pub secondary: String,
    pub timestamp: DateTime<Utc>,
}

impl TransformRecord {
    pub fn new(result: TransformResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            primary: result.primary,
            secondary: result.secondary,
            timestamp,
        }
    }

    pub fn result(&self) -> TransformResult {
        TransformResult::new(self.primary.clone(), self.secondary.clone())
    }
}
