//! Tree construction and query options.

use serde::{Deserialize, Serialize};

/// Options shared by building and querying one namespace.
///
/// Deserializes from a TOML table with every field optional:
///
/// ```toml
/// separator = "/"
/// collapse_drive_letters = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Path component separator. Archive entry names use `\`.
    pub separator: char,
    /// Rename synthesized `X:` directories to `X`.
    pub collapse_drive_letters: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            separator: '\\',
            collapse_drive_letters: true,
        }
    }
}

impl TreeOptions {
    /// Use a different path separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Enable or disable drive-letter collapsing.
    pub fn with_drive_letters_collapsed(mut self, collapse: bool) -> Self {
        self.collapse_drive_letters = collapse;
        self
    }

    /// The name a synthesized directory gets for its trailing path segment.
    ///
    /// A two-character segment ending in `:` is a volume designator and
    /// keeps only its letter.
    pub(crate) fn directory_name<'a>(&self, segment: &'a str) -> &'a str {
        if !self.collapse_drive_letters {
            return segment;
        }
        let mut chars = segment.char_indices();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(_), Some((colon, ':')), None) => &segment[..colon],
            _ => segment,
        }
    }
}
