//! Tag Extraction
//!
//!     Scans raw text for `<name` and `</name` where `name` belongs to an allow-list, and
//!     yields [TagToken]s in the order they appear.
//!
//! Matching Rules
//!
//!     The allow-list is joined into a single alternation, `<(/?)(div|button|...)`, in its
//!     declared order. The regex engine picks the leftmost alternative that matches, and
//!     there is no word boundary after the name. So the order of the list matters:
//!
//! ```text
//! Source:   <thead>   <th>   <pre>   <track>   <section>
//! Tokens:   thead     th     p       tr        (nothing)
//! ```
//!
//!     Nothing around the match is validated. Comments, attribute values and string
//!     literals are scanned like any other text, a closing `>` is not required, and
//!     `<SignaturePad />` is just an opening `SignaturePad`.

use super::token::TagToken;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Tag names recognized when no other allow-list is given. Matching is case-sensitive.
pub const DEFAULT_TAG_NAMES: &[&str] = &[
    "div",
    "button",
    "table",
    "thead",
    "tbody",
    "tr",
    "th",
    "td",
    "span",
    "h1",
    "h2",
    "h3",
    "p",
    "label",
    "select",
    "SignaturePad",
    "ReactQuill",
];

static STANDARD_EXTRACTOR: Lazy<TagExtractor> = Lazy::new(|| {
    TagExtractor::new(DEFAULT_TAG_NAMES).expect("default tag names form a valid pattern")
});

/// Error type for building an extractor
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// No tag names were given
    EmptyAllowList,
    /// A tag name was the empty string, which would match every `<`
    EmptyTagName,
    /// The compiled pattern was rejected by the regex engine
    InvalidPattern(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::EmptyAllowList => write!(f, "Tag allow-list is empty"),
            ExtractionError::EmptyTagName => write!(f, "Tag allow-list contains an empty name"),
            ExtractionError::InvalidPattern(msg) => write!(f, "Invalid tag pattern: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// Regex-backed scanner for a fixed allow-list of tag names.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    names: Vec<String>,
    regex: Regex,
}

impl TagExtractor {
    /// Compile an extractor for the given names, keeping their order.
    pub fn new<I, S>(names: I) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        if names.is_empty() {
            return Err(ExtractionError::EmptyAllowList);
        }
        if names.iter().any(|name| name.is_empty()) {
            return Err(ExtractionError::EmptyTagName);
        }

        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("<(/?)({})", alternation);
        let regex =
            Regex::new(&pattern).map_err(|e| ExtractionError::InvalidPattern(e.to_string()))?;

        tracing::debug!(names = names.len(), %pattern, "compiled tag pattern");
        Ok(Self { names, regex })
    }

    /// The shared extractor for [DEFAULT_TAG_NAMES].
    pub fn standard() -> &'static TagExtractor {
        &STANDARD_EXTRACTOR
    }

    /// The allow-list, in matching order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The compiled pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Lazily yield tokens in source order.
    pub fn tokens<'a>(&'a self, source: &'a str) -> impl Iterator<Item = TagToken> + 'a {
        self.regex.captures_iter(source).filter_map(|caps| {
            let name = caps.get(2)?;
            let is_closing = caps.get(1).is_some_and(|slash| !slash.is_empty());
            Some(TagToken {
                name: name.as_str().to_string(),
                is_closing,
            })
        })
    }

    /// Collect every token in source order.
    pub fn extract(&self, source: &str) -> Vec<TagToken> {
        let tokens: Vec<TagToken> = self.tokens(source).collect();
        tracing::debug!(count = tokens.len(), "extracted tag tokens");
        tokens
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        STANDARD_EXTRACTOR.clone()
    }
}

/// Shortcut for `TagExtractor::standard().extract(source)`.
pub fn extract_tags(source: &str) -> Vec<TagToken> {
    TagExtractor::standard().extract(source)
}
