//! Interval predicates over half-open offset ranges
//!
//! Both predicates take the existing node's range first and the comment's range second.

use crate::latex::ast::Range;

/// True if `candidate` lies entirely before `node`.
///
/// A candidate ending exactly where the node begins still counts as before.
pub fn appears_before(node: Range, candidate: Range) -> bool {
    candidate.end <= node.start
}

/// True if `candidate` lies within `container`.
///
/// Touching the container's boundary from the inside counts as included. A zero-width
/// candidate sitting on either boundary only touches the container from outside, so it
/// must lie strictly inside to be included.
pub fn is_included_by(container: Range, candidate: Range) -> bool {
    if candidate.is_empty() {
        return container.start < candidate.start && candidate.start < container.end;
    }
    container.start <= candidate.start && candidate.end <= container.end
}
