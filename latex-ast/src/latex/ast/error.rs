//! Error types for tree operations

use super::range::Range;
use thiserror::Error;

/// One side of a structural conflict, named by type tag and range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub node_type: String,
    pub range: Range,
}

impl NodeRef {
    pub fn new(node_type: impl Into<String>, range: Range) -> Self {
        Self {
            node_type: node_type.into(),
            range,
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.node_type, self.range)
    }
}

/// Errors that can occur while completing a tree with its comments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The node handed in as the document root has no children sequence
    #[error("root node {node_type} has no children to merge comments into")]
    RootNotParent { node_type: String },

    /// A range whose end lies before its start
    #[error("{node_type} has inverted range {range}")]
    InvertedRange { node_type: String, range: Range },

    /// A comment token pointing past the end of the document text or inside a character
    #[error("comment range {range} lies outside the document text ({len} UTF-16 code units)")]
    OutOfBounds { range: Range, len: usize },

    /// Two siblings claim the same stretch of text
    #[error("in {parent}: {previous} overlaps the following {next}")]
    Overlap {
        parent: NodeRef,
        previous: NodeRef,
        next: NodeRef,
    },
}

/// Type alias for merge results
pub type MergeResult<T> = Result<T, MergeError>;
