//! Tree traversal
//!
//! Visitor trait for walking a [`Node`] tree in document order.

use super::node::{Node, NodeKind};

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
/// `depth` is 0 for the node `accept` was called on.
///
/// # Example
///
/// ```ignore
/// struct CommentCounter(usize);
///
/// impl Visitor for CommentCounter {
///     fn visit_leaf(&mut self, leaf: &Node, _depth: usize) {
///         if leaf.is_comment() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait Visitor {
    fn visit_parent(&mut self, _parent: &Node, _depth: usize) {}
    fn leave_parent(&mut self, _parent: &Node, _depth: usize) {}
    fn visit_leaf(&mut self, _leaf: &Node, _depth: usize) {}
}

impl Node {
    /// Accept a visitor for traversing this node and its children
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        self.accept_at(visitor, 0);
    }

    fn accept_at(&self, visitor: &mut dyn Visitor, depth: usize) {
        match &self.kind {
            NodeKind::Parent { children } => {
                visitor.visit_parent(self, depth);
                for child in children {
                    child.accept_at(visitor, depth + 1);
                }
                visitor.leave_parent(self, depth);
            }
            NodeKind::Leaf { .. } => visitor.visit_leaf(self, depth),
        }
    }
}
