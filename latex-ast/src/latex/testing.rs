//! Testing utilities
//!
//!     Tree tests get unreadable fast when every node is spelled out with its raw text,
//!     range and line/column location by hand, and hand-written locations drift from the
//!     offsets they are supposed to mirror. This module gives tests two tools:
//!
//!         - [`Fixture`]: owns a LaTeX source text and builds nodes and comment tokens from
//!           offsets into it, deriving raw text, values and locations the same way the
//!           grammar would.
//!         - [`assert_node`]: a fluent assertion API over a tree, so tests state the parts
//!           of the structure they care about and fail with a path to the offending node.
//!
//!     Plus a couple of whole-tree helpers used by the property tests.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     let fx = Fixture::new("A%B\nC");
//!     let root = fx.document(vec![fx.str(0, 1), fx.str(4, 5)]);
//!     let tokens = vec![fx.comment(1, 4)];
//!
//!     let merged = MergeRequest::new(Some(&tokens), fx.text(), &root).merge()?;
//!
//!     assert_node(&merged)
//!         .child_count(3)
//!         .child(1, |c| {
//!             c.is_comment().range(1, 4).raw("%B\n").value("B");
//!         });
//!     ```

mod assertions;
mod fixture;

pub use assertions::{assert_node, NodeAssertion};
pub use fixture::Fixture;

use crate::latex::ast::{Node, NodeKind, Visitor};
use std::sync::Arc;

struct CommentCounter(usize);

impl Visitor for CommentCounter {
    fn visit_leaf(&mut self, leaf: &Node, _depth: usize) {
        if leaf.is_comment() {
            self.0 += 1;
        }
    }
}

/// Number of `Comment` leaves anywhere in the tree
pub fn comment_count(root: &Node) -> usize {
    let mut counter = CommentCounter(0);
    root.accept(&mut counter);
    counter.0
}

/// The tree with every `Comment` leaf removed
pub fn strip_comments(root: &Node) -> Node {
    match &root.kind {
        NodeKind::Parent { children } => root.with_children(
            children
                .iter()
                .filter(|child| !child.is_comment())
                .map(|child| Arc::new(strip_comments(child)))
                .collect(),
        ),
        NodeKind::Leaf { .. } => root.clone(),
    }
}

/// The chain of type tags from `root` down to the parent holding the comment at `start`
pub fn comment_parent_path(root: &Node, start: usize) -> Option<Vec<String>> {
    let children = root.children()?;
    for child in children {
        if child.is_comment() && child.range.start == start {
            return Some(vec![root.node_type.clone()]);
        }
        if let Some(mut path) = comment_parent_path(child, start) {
            path.insert(0, root.node_type.clone());
            return Some(path);
        }
    }
    None
}
