//! Source loading utilities
//!
//! This module provides `SourceLoader` - a utility for loading source text from files
//! or strings and running the tag check on it. This is used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use tagcheck_parser::tagcheck::loader::SourceLoader;
//!
//! // From file
//! let loader = SourceLoader::from_path("Form.tsx").unwrap();
//! for diagnostic in loader.diagnostics() {
//!     println!("{}", diagnostic);
//! }
//!
//! // From string
//! let tokens = SourceLoader::from_string("<div></div>").tokens();
//! ```

use super::balance::{check_balance, collect_diagnostics};
use super::diagnostic::Diagnostic;
use super::extraction::TagExtractor;
use super::token::TagToken;
use std::fs;
use std::path::{Path, PathBuf};

/// Error that can occur when loading sources
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    IoError { path: PathBuf, message: String },
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoaderError {}

/// Source text held in memory for a single pass.
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Read the whole file at once. The handle is closed before this returns.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than rejected;
    /// only open and read failures are errors.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| LoaderError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let source = match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    "source is not valid UTF-8, decoding lossily"
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(SourceLoader { source })
    }

    /// Wrap source text that is already in memory.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// The loaded text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokens found by the standard extractor.
    pub fn tokens(&self) -> Vec<TagToken> {
        TagExtractor::standard().extract(&self.source)
    }

    /// Diagnostics found with the standard extractor.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        collect_diagnostics(TagExtractor::standard().tokens(&self.source))
    }

    /// Stream tokens from `extractor` straight into the balance check, reporting each
    /// diagnostic to `sink` as it is found. Returns the number reported.
    pub fn check_with<F>(&self, extractor: &TagExtractor, sink: F) -> usize
    where
        F: FnMut(Diagnostic),
    {
        check_balance(extractor.tokens(&self.source), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SourceLoader::from_path("/definitely/not/here.tsx")
            .err()
            .expect("missing file should fail");
        match &err {
            LoaderError::IoError { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.tsx"))
            }
        }
        assert!(err.to_string().starts_with("/definitely/not/here.tsx: "));
    }

    #[test]
    fn test_invalid_utf8_is_still_checked() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"// caf\xe9\n</div>\n<p>").unwrap();

        let loader = SourceLoader::from_path(file.path()).expect("readable file loads");
        assert!(loader.source().contains('\u{FFFD}'));
        assert_eq!(
            loader.diagnostics(),
            vec![
                Diagnostic::ExcessClosing { name: "div".into() },
                Diagnostic::Unclosed {
                    names: vec!["p".into()],
                },
            ]
        );
    }

    #[test]
    fn test_from_string_shortcuts() {
        let loader = SourceLoader::from_string("<div><p></div>");
        assert_eq!(loader.source(), "<div><p></div>");
        assert_eq!(loader.tokens().len(), 3);
        assert_eq!(
            loader.diagnostics(),
            vec![
                Diagnostic::Mismatch {
                    open: "p".into(),
                    close: "div".into(),
                },
                Diagnostic::Unclosed {
                    names: vec!["div".into()],
                },
            ]
        );
    }

    #[test]
    fn test_check_with_custom_extractor() {
        let extractor = TagExtractor::new(["section"]).unwrap();
        let loader = SourceLoader::from_string("<section><div></section></section>");
        let mut lines = Vec::new();
        let count = loader.check_with(&extractor, |d| lines.push(d.to_string()));
        assert_eq!(count, 1);
        assert_eq!(lines, vec!["Excess closing tag: </section>"]);
    }
}
