//! Configuration for the LaTeX comment tooling.
//!
//! Sources are layered, later ones winning:
//!
//! 1. `defaults/latex.default.toml`, compiled into the binary, which holds a value for
//!    every key;
//! 2. TOML files added with [`Loader::with_file`] / [`Loader::with_optional_file`];
//! 3. `LATEX_AST_*` environment variables when [`Loader::with_env`] is used, with `__`
//!    between section and key (`LATEX_AST_OUTPUT__FORMAT=outline`) and comma-separated
//!    lists (`LATEX_AST_PROCESSOR__EXTENSIONS=.sty,.ltx`);
//! 4. single-key overrides from command-line flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use latex_ast::latex::processor::ProcessorOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/latex.default.toml");

const ENV_PREFIX: &str = "LATEX_AST";

#[derive(Debug, Clone, Deserialize)]
pub struct LatexConfig {
    pub processor: ProcessorConfig,
    pub output: OutputConfig,
}

/// Settings handed to the processor
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    /// Extensions claimed on top of the built-in ones
    pub extensions: Vec<String>,
    /// Path reported for diagnostics when the caller names none
    pub default_file_path: String,
}

impl From<ProcessorConfig> for ProcessorOptions {
    fn from(config: ProcessorConfig) -> Self {
        ProcessorOptions {
            extensions: config.extensions,
            default_file_path: config.default_file_path,
        }
    }
}

/// How merged trees are printed
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The textlint AST as JSON
    Json,
    /// One line per node, see `latex_ast::latex::formats::to_outline`
    Outline,
}

/// Builds a [`LatexConfig`] from the embedded defaults and whatever is layered on top.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Layer `LATEX_AST_*` environment variables.
    pub fn with_env(mut self) -> Self {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("processor.extensions")
            .try_parsing(true);
        self.builder = self.builder.add_source(environment);
        self
    }

    /// Set one dotted key, e.g. `output.format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LatexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone
pub fn load_defaults() -> Result<LatexConfig, ConfigError> {
    Loader::new().build()
}
