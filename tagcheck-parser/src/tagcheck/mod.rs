//! Main module for tagcheck library functionality

pub mod balance;
pub mod diagnostic;
pub mod extraction;
pub mod loader;
pub mod token;

pub use balance::{check_balance, collect_diagnostics, BalanceChecker};
pub use diagnostic::Diagnostic;
pub use extraction::{extract_tags, ExtractionError, TagExtractor, DEFAULT_TAG_NAMES};
pub use loader::{LoaderError, SourceLoader};
pub use token::TagToken;
