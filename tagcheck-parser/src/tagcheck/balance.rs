//! Balance Checking
//!
//!     A single left-to-right pass over [TagToken]s with a stack of open names.
//!
//!     - An opening token is pushed. Nothing is reported.
//!     - A closing token with an empty stack is an excess closer. The stack is untouched.
//!     - Any other closing token pops the innermost open name. If the names differ a
//!       mismatch is reported, and the popped name stays discarded.
//!     - Whatever is left on the stack at the end is reported once, outermost first.
//!
//! Cascading Mismatches
//!
//!     Because the pop happens even when the names differ, one crossed pair produces a
//!     report for every closer that follows it until the stack realigns:
//!
//! ```text
//! Source:    <div><span></div></span>
//! Reports:   Mismatch: <span> closed by </div>
//!            Mismatch: <div> closed by </span>
//! ```
//!
//!     No attempt is made to resynchronize by searching deeper in the stack.

use super::diagnostic::Diagnostic;
use super::token::TagToken;

/// Stack of currently open tag names.
#[derive(Debug, Clone, Default)]
pub struct BalanceChecker {
    stack: Vec<String>,
}

impl BalanceChecker {
    /// A checker with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token, returning the diagnostic it triggers, if any.
    pub fn push(&mut self, token: TagToken) -> Option<Diagnostic> {
        if !token.is_closing {
            self.stack.push(token.name);
            return None;
        }

        match self.stack.pop() {
            None => Some(Diagnostic::ExcessClosing { name: token.name }),
            Some(open) if open != token.name => Some(Diagnostic::Mismatch {
                open,
                close: token.name,
            }),
            Some(_) => None,
        }
    }

    /// Names still open, outermost first.
    pub fn open_tags(&self) -> &[String] {
        &self.stack
    }

    /// Number of names currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// End of input: report anything left open as one combined diagnostic.
    pub fn finish(self) -> Option<Diagnostic> {
        if self.stack.is_empty() {
            None
        } else {
            Some(Diagnostic::Unclosed { names: self.stack })
        }
    }
}

/// Run a full pass, handing each diagnostic to `sink` as soon as it is detected.
///
/// Returns the number of diagnostics emitted.
pub fn check_balance<I, F>(tokens: I, mut sink: F) -> usize
where
    I: IntoIterator<Item = TagToken>,
    F: FnMut(Diagnostic),
{
    let mut checker = BalanceChecker::new();
    let mut emitted = 0;

    for token in tokens {
        if let Some(diagnostic) = checker.push(token) {
            emitted += 1;
            sink(diagnostic);
        }
    }
    if let Some(diagnostic) = checker.finish() {
        emitted += 1;
        sink(diagnostic);
    }

    tracing::debug!(emitted, "balance check complete");
    emitted
}

/// Run a full pass and collect the diagnostics in detection order.
pub fn collect_diagnostics<I>(tokens: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = TagToken>,
{
    let mut diagnostics = Vec::new();
    check_balance(tokens, |diagnostic| diagnostics.push(diagnostic));
    diagnostics
}
