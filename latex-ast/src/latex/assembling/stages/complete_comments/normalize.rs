//! Conversion of grammar comment tokens into `Comment` leaves

use crate::latex::ast::{
    types, CommentToken, Location, MergeError, MergeResult, Node, Position, SourceText,
    TokenPosition,
};
use tracing::trace;

/// The scanner counts columns from 1, the tree counts them from 0
fn tree_position(position: &TokenPosition) -> Position {
    Position::new(position.line, position.column.saturating_sub(1))
}

/// Build the `Comment` leaf for one token.
///
/// The raw text is sliced out of the document with the token's offsets; the value is the
/// token's content as the grammar trimmed it.
pub fn comment_to_node(text: &SourceText<'_>, token: &CommentToken) -> MergeResult<Node> {
    let range = token.range();
    if range.is_inverted() {
        return Err(MergeError::InvertedRange {
            node_type: types::COMMENT.to_string(),
            range,
        });
    }
    let raw = text.slice(range).ok_or(MergeError::OutOfBounds {
        range,
        len: text.len(),
    })?;
    let loc = Location::new(
        tree_position(&token.location.start),
        tree_position(&token.location.end),
    );
    trace!(%range, %loc, "normalized comment token");

    Ok(Node::leaf(
        types::COMMENT,
        raw,
        range,
        loc,
        token.content.as_str(),
    ))
}

/// Build `Comment` leaves for every token, in order.
///
/// An absent token list means there is nothing to merge.
pub fn comments_to_nodes(
    text: &SourceText<'_>,
    tokens: Option<&[CommentToken]>,
) -> MergeResult<Vec<Node>> {
    tokens
        .unwrap_or_default()
        .iter()
        .map(|token| comment_to_node(text, token))
        .collect()
}
