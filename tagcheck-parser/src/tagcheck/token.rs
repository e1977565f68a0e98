//! Tag tokens produced by the extractor.

use std::fmt;

/// One opening or closing occurrence of a recognized tag name.
///
/// Tokens carry no position; their order in the stream is the only location information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagToken {
    pub name: String,
    pub is_closing: bool,
}

impl TagToken {
    /// An opening token, as produced by `<name`.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_closing: false,
        }
    }

    /// A closing token, as produced by `</name`.
    pub fn close(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_closing: true,
        }
    }
}

impl fmt::Display for TagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_closing {
            write!(f, "</{}", self.name)
        } else {
            write!(f, "<{}", self.name)
        }
    }
}
