//! Shared configuration loader for tagcheck.
//!
//! `defaults/tagcheck.default.toml` is embedded into every binary so that the shipped
//! allow-list and runtime behavior stay in sync. Library users can layer their own files
//! on top of those defaults via [`Loader`] before deserializing into [`TagcheckConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tagcheck_parser::tagcheck::{ExtractionError, TagExtractor};

const DEFAULT_TOML: &str = include_str!("../defaults/tagcheck.default.toml");

/// Top-level configuration consumed by tagcheck applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TagcheckConfig {
    pub extraction: ExtractionConfig,
}

/// Controls which tags the extractor recognizes.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Case-sensitive tag names, in matching order.
    pub tag_names: Vec<String>,
}

impl ExtractionConfig {
    /// Compile an extractor for the configured names.
    pub fn extractor(&self) -> Result<TagExtractor, ExtractionError> {
        TagExtractor::new(&self.tag_names)
    }
}

/// Helper for layering user overrides over the built-in defaults.
///
/// The `tagcheck` binary only calls [`load_defaults`]. The layering methods are for
/// embedding the checker in other tooling, such as an editor integration or a build
/// script that keeps a project-specific allow-list in its own TOML file and compiles
/// it with [`ExtractionConfig::extractor`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a project allow-list file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a per-user file that may not exist (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. replacing `extraction.tag_names`
    /// from a caller's own settings.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TagcheckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TagcheckConfig, ConfigError> {
    Loader::new().build()
}
