use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest title the catalog will store; longer input is truncated.
pub const MAX_TITLE_LEN: usize = 99;

/// The string identity of a book — the only attribute the library tracks.
///
/// Titles are compared exactly: no case folding, no whitespace
/// normalization. Construction caps the length at [`MAX_TITLE_LEN`]
/// characters, never splitting a character in the middle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a title from raw text, truncating past [`MAX_TITLE_LEN`].
    #[must_use]
    pub fn new<S: Into<String>>(raw: S) -> Self {
        let mut text = raw.into();
        if let Some((idx, _)) = text.char_indices().nth(MAX_TITLE_LEN) {
            text.truncate(idx);
        }
        Self(text)
    }

    /// View the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Title {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Title {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
