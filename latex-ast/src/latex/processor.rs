//! Plugin surface for the host linting engine
//!
//! The host asks a processor three things: which file extensions it claims, how to turn
//! a file's text into a tree (pre-process), and how to label the diagnostics its rules
//! produced for that file (post-process).

use crate::latex::assembling::CompleteComments;
use crate::latex::ast::Node;
use crate::latex::grammar::{Grammar, SourceDocument};
use crate::latex::transforms::{Transform, TransformError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions claimed regardless of configuration
pub const BUILTIN_EXTENSIONS: [&str; 2] = [".tex", ".cls"];

/// Label used for diagnostics of text that did not come from a file
pub const DEFAULT_FILE_PATH: &str = "<latex>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorOptions {
    /// Extra extensions claimed on top of [`BUILTIN_EXTENSIONS`]
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Path reported for diagnostics when the caller names none
    #[serde(default = "default_file_path")]
    pub default_file_path: String,
}

fn default_file_path() -> String {
    DEFAULT_FILE_PATH.to_string()
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            default_file_path: default_file_path(),
        }
    }
}

impl ProcessorOptions {
    /// The built-in extensions followed by the configured ones
    pub fn available_extensions(&self) -> Vec<String> {
        BUILTIN_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .chain(self.extensions.iter().cloned())
            .collect()
    }

    /// Pair `messages` with `file_path`, or with the configured default when none is known
    pub fn post_process<M>(&self, messages: Vec<M>, file_path: Option<&str>) -> PostProcessed<M> {
        PostProcessed::new(messages, file_path, &self.default_file_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to pre-process LaTeX source: {0}")]
pub struct ProcessError(#[from] pub TransformError);

/// Diagnostics for one file, paired with the path they belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessed<M> {
    pub messages: Vec<M>,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl<M> PostProcessed<M> {
    /// Pair `messages` with `file_path`, or with `default` when none is known
    pub fn new(messages: Vec<M>, file_path: Option<&str>, default: &str) -> Self {
        let file_path = file_path
            .filter(|path| !path.is_empty())
            .unwrap_or(default)
            .to_string();
        Self {
            messages,
            file_path,
        }
    }
}

pub struct LatexProcessor {
    options: ProcessorOptions,
    pipeline: Transform<String, Node>,
}

impl LatexProcessor {
    pub const GRAMMAR_STAGE: &'static str = "grammar";

    pub fn new<G>(grammar: G, options: ProcessorOptions) -> Self
    where
        G: Grammar + Send + Sync + 'static,
    {
        let pipeline = Transform::named(Self::GRAMMAR_STAGE, move |text: String| {
            let parsed = grammar
                .parse(&text)
                .map_err(|e| TransformError::Error(e.to_string()))?;
            Ok(SourceDocument { text, parsed })
        })
        .then(CompleteComments::new());

        Self { options, pipeline }
    }

    /// Stage names of the pre-process pipeline, in order
    pub fn stages(&self) -> &[&'static str] {
        self.pipeline.stages()
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    pub fn available_extensions(&self) -> Vec<String> {
        self.options.available_extensions()
    }

    /// Parse `text` and return its tree with every comment merged in
    pub fn pre_process(&self, text: &str) -> Result<Node, ProcessError> {
        Ok(self.pipeline.run(text.to_string())?)
    }

    pub fn post_process<M>(&self, messages: Vec<M>, file_path: Option<&str>) -> PostProcessed<M> {
        self.options.post_process(messages, file_path)
    }
}
