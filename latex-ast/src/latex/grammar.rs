//! The seam to the external LaTeX grammar
//!
//! Parsing LaTeX is not this crate's job. A [`Grammar`] turns source text into the primary
//! tree plus the out-of-band comment list; everything downstream only depends on that
//! contract.
//!
//! [`PreParsed`] is the bundled implementation: it carries a grammar result produced
//! elsewhere, typically serialized as
//!
//! ```json
//! { "ast": { "type": "Document", ... }, "comments": [ { "kind": "comment", ... } ] }
//! ```

use crate::latex::ast::{CommentToken, Node};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("malformed grammar output: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the grammar reports for one source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSource {
    #[serde(rename = "ast")]
    pub root: Node,
    #[serde(default)]
    pub comments: Option<Vec<CommentToken>>,
}

/// A grammar result together with the text it was produced from
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub text: String,
    pub parsed: ParsedSource,
}

pub trait Grammar {
    fn parse(&self, text: &str) -> Result<ParsedSource, GrammarError>;
}

/// A grammar that replays one result it was given up front, whatever the text
#[derive(Debug, Clone, PartialEq)]
pub struct PreParsed {
    parsed: ParsedSource,
}

impl PreParsed {
    pub fn new(parsed: ParsedSource) -> Self {
        Self { parsed }
    }

    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl Grammar for PreParsed {
    fn parse(&self, _text: &str) -> Result<ParsedSource, GrammarError> {
        Ok(self.parsed.clone())
    }
}
