//! Shared configuration loader for bnf2html.
//!
//! `defaults/bnf2html.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer a user file and command-line
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`BnfConfig`].

use bnf_babel::RenderOptions;
use bnf_parser::bnf::CompileOptions;
use config::builder::DefaultState;
pub use config::ConfigError;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/bnf2html.default.toml");

/// Top-level configuration consumed by bnf2html.
#[derive(Debug, Clone, Deserialize)]
pub struct BnfConfig {
    pub render: RenderConfig,
    pub parse: ParseConfig,
    pub output: OutputConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Mirrors [`RenderOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Empty string means no prefix.
    pub namespace: String,
    pub standalone: bool,
    pub title: String,
    pub terminals_heading: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format.
    pub format: String,
}

/// Controls how the CLI reports diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub quiet: bool,
    pub deny_errors: bool,
}

impl BnfConfig {
    pub fn render_options(&self) -> RenderOptions {
        let namespace = Some(self.render.namespace.clone()).filter(|ns| !ns.is_empty());
        RenderOptions {
            namespace,
            standalone: self.render.standalone,
            title: self.render.title.clone(),
            terminals_heading: self.render.terminals_heading.clone(),
        }
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            strict: self.parse.strict,
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

    /// Apply a single key/value override, e.g. `("render.namespace", "sparql")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BnfConfig, ConfigError> {
    Loader::new().build()
}
