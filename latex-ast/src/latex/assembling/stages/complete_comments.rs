//! Comment completion stage
//!
//! Folds the comments the grammar reported out of band back into the primary tree.
//!
//! # Placement Rules
//!
//! 1. **Before**: a comment goes in front of the first sibling it lies entirely before,
//!    including a sibling that starts exactly where the comment ends.
//! 2. **Inside**: a comment included by a parent sibling is placed among that parent's
//!    children by the same rules, at any depth.
//! 3. **After**: a comment that no sibling claims goes to the end of the level.
//!
//! # Transactional Contract
//!
//! The caller's tree is only ever borrowed. Each comment produces a new children
//! sequence for the levels it touched and shares everything else; the new root is
//! built only after every comment has been placed and the whole tree has passed
//! structural validation. On failure the partially folded children are dropped and
//! the caller still holds its original tree, unchanged.

mod insert;
mod interval;
mod normalize;
mod validate;

pub use insert::insert_comment;
pub use interval::{appears_before, is_included_by};
pub use normalize::{comment_to_node, comments_to_nodes};
pub use validate::validate;

use crate::latex::ast::{CommentToken, MergeError, MergeResult, Node, SourceText};
use crate::latex::grammar::SourceDocument;
use crate::latex::transforms::{Runnable, TransformError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything one merge needs
#[derive(Debug, Clone, Copy)]
pub struct MergeRequest<'a> {
    /// Comment tokens in source order; `None` when the grammar reported none
    pub comments: Option<&'a [CommentToken]>,
    /// The full document text the offsets point into
    pub text: &'a str,
    /// The primary tree's root
    pub root: &'a Node,
}

impl<'a> MergeRequest<'a> {
    pub fn new(comments: Option<&'a [CommentToken]>, text: &'a str, root: &'a Node) -> Self {
        Self {
            comments,
            text,
            root,
        }
    }

    pub fn merge(&self) -> MergeResult<Node> {
        complete_comments(self)
    }
}

/// Merge every comment of the request into a copy of its root.
pub fn complete_comments(request: &MergeRequest<'_>) -> MergeResult<Node> {
    let root = request.root;
    let Some(top_level) = root.children() else {
        return Err(MergeError::RootNotParent {
            node_type: root.node_type.clone(),
        });
    };

    let text = SourceText::new(request.text);
    let comments = comments_to_nodes(&text, request.comments)?;
    debug!(count = comments.len(), "completing comments");

    let children = comments
        .into_iter()
        .map(Arc::new)
        .fold(top_level.to_vec(), |siblings, comment| {
            insert_comment(&comment, &siblings)
        });

    let merged = root.with_children(children);
    if let Err(error) = validate(&merged) {
        warn!(%error, "completed tree failed structural validation");
        return Err(error);
    }
    Ok(merged)
}

/// Pipeline stage merging a grammar result's comments into its tree
#[derive(Debug, Default, Clone, Copy)]
pub struct CompleteComments;

impl CompleteComments {
    pub const STAGE: &'static str = "complete-comments";

    pub fn new() -> Self {
        CompleteComments
    }
}

impl Runnable<SourceDocument, Node> for CompleteComments {
    fn run(&self, input: SourceDocument) -> Result<Node, TransformError> {
        let request = MergeRequest::new(
            input.parsed.comments.as_deref(),
            &input.text,
            &input.parsed.root,
        );
        complete_comments(&request).map_err(|e| TransformError::stage(Self::STAGE, e))
    }

    fn name(&self) -> &'static str {
        Self::STAGE
    }
}
