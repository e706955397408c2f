//! Tree nodes
//!
//! The grammar can emit any number of node variants (`Document`, `Paragraph`, `Str`,
//! `Emphasis`, `Code`, ...) and new ones appear as more LaTeX constructs are supported.
//! Rather than mirroring that open set as Rust types, a [`Node`] carries its type tag as a
//! string and has exactly one of two shapes:
//!
//! - [`NodeKind::Parent`]: an ordered sequence of children
//! - [`NodeKind::Leaf`]: a semantic value and no children
//!
//! Everything that walks the tree dispatches on the shape, never on the tag.
//!
//! Children are held behind [`Arc`] so a rewritten tree can share every subtree it did
//! not touch with the tree it was derived from.

use super::range::{Location, Range};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Well-known type tags of the host AST
pub mod types {
    pub const DOCUMENT: &str = "Document";
    pub const PARAGRAPH: &str = "Paragraph";
    pub const STR: &str = "Str";
    pub const EMPHASIS: &str = "Emphasis";
    pub const STRONG: &str = "Strong";
    pub const HEADER: &str = "Header";
    pub const LIST: &str = "List";
    pub const LIST_ITEM: &str = "ListItem";
    pub const CODE: &str = "Code";
    pub const CODE_BLOCK: &str = "CodeBlock";
    pub const COMMENT: &str = "Comment";
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireNode")]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    pub raw: String,
    pub range: Range,
    pub loc: Location,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// The structural shape of a node.
///
/// On the wire a node is a leaf when its `children` field is missing or `null`. Any
/// other `children` value must be an array of well-formed nodes, otherwise decoding
/// the whole tree fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeKind {
    Parent { children: Vec<Arc<Node>> },
    Leaf { value: String },
}

/// A node as the grammar writes it, before its shape is decided
#[derive(Deserialize)]
struct WireNode {
    #[serde(rename = "type")]
    node_type: String,
    raw: String,
    range: Range,
    loc: Location,
    #[serde(default)]
    children: Option<Vec<Arc<Node>>>,
    #[serde(default)]
    value: Option<String>,
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        let kind = match wire.children {
            Some(children) => NodeKind::Parent { children },
            None => NodeKind::Leaf {
                value: wire.value.unwrap_or_default(),
            },
        };
        Node {
            node_type: wire.node_type,
            raw: wire.raw,
            range: wire.range,
            loc: wire.loc,
            kind,
        }
    }
}

impl Node {
    pub fn parent(
        node_type: impl Into<String>,
        raw: impl Into<String>,
        range: Range,
        loc: Location,
        children: Vec<Arc<Node>>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            raw: raw.into(),
            range,
            loc,
            kind: NodeKind::Parent { children },
        }
    }

    pub fn leaf(
        node_type: impl Into<String>,
        raw: impl Into<String>,
        range: Range,
        loc: Location,
        value: impl Into<String>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            raw: raw.into(),
            range,
            loc,
            kind: NodeKind::Leaf {
                value: value.into(),
            },
        }
    }

    /// True if this node owns a children sequence
    pub fn is_parent(&self) -> bool {
        is_parent(self)
    }

    pub fn is_comment(&self) -> bool {
        self.node_type == types::COMMENT
    }

    /// The children of a parent, `None` for a leaf
    pub fn children(&self) -> Option<&[Arc<Node>]> {
        match &self.kind {
            NodeKind::Parent { children } => Some(children),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// The semantic value of a leaf, `None` for a parent
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Parent { .. } => None,
            NodeKind::Leaf { value } => Some(value),
        }
    }

    /// A copy of this node with its children replaced.
    ///
    /// Type, raw text, range and location are kept. Applied to a leaf, the copy becomes a
    /// parent; callers only use it on nodes that [`is_parent`] accepted.
    pub fn with_children(&self, children: Vec<Arc<Node>>) -> Self {
        Self {
            node_type: self.node_type.clone(),
            raw: self.raw.clone(),
            range: self.range,
            loc: self.loc,
            kind: NodeKind::Parent { children },
        }
    }
}

/// Classify a node as a parent purely by its shape.
///
/// The set of container type tags is open-ended, so the tag is never consulted.
pub fn is_parent(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Parent { .. })
}
