//! Shared configuration loader for the treebank tools.
//!
//! `defaults/treebank.default.toml` is embedded into every binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user files and command-line overrides on top of those defaults via
//! [`Loader`] before deserializing into [`TreebankConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use treebank_core::treebank::binarization::HeadRules;
use treebank_core::treebank::formats::OutputFormat;
use treebank_core::treebank::pipeline::PipelineSettings;
use treebank_core::treebank::tokenization::Tokenizer;

const DEFAULT_TOML: &str = include_str!("../defaults/treebank.default.toml");

/// Top-level configuration consumed by the dataset builder.
#[derive(Debug, Clone, Deserialize)]
pub struct TreebankConfig {
    pub parser: ParserConfig,
    pub tokenizer: TokenizerConfig,
    pub binarizer: BinarizerConfig,
    pub labels: LabelsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Model identifier handed to `load_parser`.
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerConfig {
    pub escape_brackets: bool,
    pub normalize_quotes: bool,
    pub split_clitics: bool,
}

impl TokenizerConfig {
    pub fn tokenizer(&self) -> Tokenizer {
        let mut tokenizer = Tokenizer::new();
        if !self.escape_brackets {
            tokenizer = tokenizer.without_bracket_escapes();
        }
        if !self.normalize_quotes {
            tokenizer = tokenizer.without_quote_normalization();
        }
        if !self.split_clitics {
            tokenizer = tokenizer.without_clitic_splitting();
        }
        tokenizer
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinarizerConfig {
    pub head_rules: HeadRules,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    pub unknown: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl TreebankConfig {
    /// The part of the configuration the pipeline itself consumes.
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            tokenizer: self.tokenizer.tokenizer(),
            unknown_label: self.labels.unknown.clone(),
            format: self.output.format,
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

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TreebankConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TreebankConfig, ConfigError> {
    Loader::new().build()
}
