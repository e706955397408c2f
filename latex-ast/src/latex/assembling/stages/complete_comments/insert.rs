//! Placement of a single comment leaf among a sequence of siblings
//!
//! The walk goes left to right over one level of the tree:
//!
//! 1. The first sibling the comment lies entirely before receives the comment just in
//!    front of it.
//! 2. A parent sibling that includes the comment is descended into, and the comment is
//!    placed among its children by the same rules.
//! 3. Any other sibling is skipped.
//!
//! A comment no sibling claimed goes to the end of the level. This is what puts a
//! comment that follows the last node of a container at the end of that container
//! rather than at the root, and what puts a comment touching two adjacent leaves with
//! no gap (`A%B\nC`) between them.
//!
//! Insertion never fails. A comment that lands inside a leaf or straddles a sibling is
//! appended after it and the structural validator rejects the resulting tree.

use super::interval::{appears_before, is_included_by};
use crate::latex::ast::Node;
use std::sync::Arc;
use tracing::debug;

/// Return a copy of `siblings` with `comment` placed at the right depth and index.
///
/// Only the nodes on the path down to the insertion point are rebuilt; every other
/// sibling and subtree is shared with the input.
pub fn insert_comment(comment: &Arc<Node>, siblings: &[Arc<Node>]) -> Vec<Arc<Node>> {
    insert_at_depth(comment, siblings, 0)
}

fn insert_at_depth(comment: &Arc<Node>, siblings: &[Arc<Node>], depth: usize) -> Vec<Arc<Node>> {
    for (index, sibling) in siblings.iter().enumerate() {
        if appears_before(sibling.range, comment.range) {
            debug!(range = %comment.range, depth, index, "placing comment before sibling");
            return splice(siblings, index, Arc::clone(comment));
        }
        if is_included_by(sibling.range, comment.range) {
            if let Some(children) = sibling.children() {
                let children = insert_at_depth(comment, children, depth + 1);
                let mut updated = siblings.to_vec();
                updated[index] = Arc::new(sibling.with_children(children));
                return updated;
            }
        }
    }

    debug!(
        range = %comment.range,
        depth,
        index = siblings.len(),
        "appending comment after last sibling"
    );
    splice(siblings, siblings.len(), Arc::clone(comment))
}

fn splice(siblings: &[Arc<Node>], index: usize, comment: Arc<Node>) -> Vec<Arc<Node>> {
    let mut updated = Vec::with_capacity(siblings.len() + 1);
    updated.extend_from_slice(&siblings[..index]);
    updated.push(comment);
    updated.extend_from_slice(&siblings[index..]);
    updated
}
