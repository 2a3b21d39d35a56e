//! Layered configuration for reparser.
//!
//! `defaults/reparser.default.toml` is embedded into the library so that the
//! documented defaults and the runtime defaults cannot drift apart.
//! Applications layer their own files and overrides on top of those defaults
//! via [`Loader`] before deserializing into [`ReparserConfig`].

use crate::textom::formats::json::Indent;
use crate::textom::tokenizing::WordCharacters;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/reparser.default.toml");

/// Top-level configuration consumed by [`Reparser`](crate::textom::reparser::Reparser).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReparserConfig {
    pub tokenizer: TokenizerConfig,
    pub ast: AstConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenizerConfig {
    pub word_characters: WordCharacters,
}

/// Controls AST text output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AstConfig {
    pub indent: IndentSetting,
}

/// Indentation as written in a config file: a space count or a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Spaces(usize),
    Text(String),
}

impl Default for IndentSetting {
    fn default() -> Self {
        IndentSetting::Spaces(0)
    }
}

impl From<&IndentSetting> for Indent {
    fn from(setting: &IndentSetting) -> Self {
        match setting {
            IndentSetting::Spaces(count) => Indent::Spaces(*count),
            IndentSetting::Text(text) => Indent::Text(text.clone()),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
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

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ReparserConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ReparserConfig, ConfigError> {
    Loader::new().build()
}
