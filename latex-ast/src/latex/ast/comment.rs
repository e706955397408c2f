//! Comment tokens as reported by the LaTeX grammar
//!
//! The grammar strips comments from the primary tree and reports each one separately.
//! Token positions follow the grammar's scanner conventions, which differ from the tree's:
//! lines and columns are both 1-based, and the end position is one past the trailing
//! newline (or one past the last character when the comment ends the file).

use super::range::Range;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    #[default]
    Comment,
}

/// A position as reported by the grammar's scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl TokenPosition {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenLocation {
    pub start: TokenPosition,
    pub end: TokenPosition,
}

/// One comment stripped from the source by the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentToken {
    #[serde(default)]
    pub kind: CommentKind,
    /// Comment text with the leading `%` removed
    pub content: String,
    pub location: TokenLocation,
}

impl CommentToken {
    pub fn new(content: impl Into<String>, start: TokenPosition, end: TokenPosition) -> Self {
        Self {
            kind: CommentKind::Comment,
            content: content.into(),
            location: TokenLocation { start, end },
        }
    }

    /// The offsets the token covers
    pub fn range(&self) -> Range {
        Range::new(self.location.start.offset, self.location.end.offset)
    }
}
