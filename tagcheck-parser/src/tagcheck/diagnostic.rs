//! Balance diagnostics and their one-line rendering.

use std::fmt;

/// A nesting problem found by the [BalanceChecker](super::balance::BalanceChecker).
///
/// `Display` renders the exact line printed by the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A closer arrived while nothing was open: `Excess closing tag: </N>`
    ExcessClosing { name: String },
    /// A closer did not match the innermost open tag: `Mismatch: <M> closed by </N>`
    Mismatch { open: String, close: String },
    /// Tags still open at end of input, outermost first: `Unclosed tags: ['a', 'b']`
    Unclosed { names: Vec<String> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ExcessClosing { name } => write!(f, "Excess closing tag: </{}>", name),
            Diagnostic::Mismatch { open, close } => {
                write!(f, "Mismatch: <{}> closed by </{}>", open, close)
            }
            Diagnostic::Unclosed { names } => {
                let list = names
                    .iter()
                    .map(|name| format!("'{}'", name))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Unclosed tags: [{}]", list)
            }
        }
    }
}
