//! Label encoders exported from training.
//!
//! A `LabelEncoder` is the serialized form of a fitted categorical encoder:
//! an ordered `classes` array where a label's integer code is its position.
//! Two instances ship with the model — gender-string ⇄ code and
//! disease-code ⇄ name. Both are read-only for the process lifetime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Integer code for a label, `None` when the label was not seen at
    /// training time. Lookup is exact — normalization is the caller's job.
    pub fn encode(&self, label: &str) -> Option<i64> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|p| p as i64)
    }

    /// Label for an integer code, `None` when out of range.
    pub fn decode(&self, code: i64) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
