//! Tree model
//!
//! The types the rest of the crate speaks: offset ranges and line/column locations,
//! the two-shape [`Node`], the grammar's [`CommentToken`], and the errors raised while
//! rewriting a tree.

pub mod comment;
pub mod error;
pub mod node;
pub mod range;
pub mod traits;

pub use comment::{CommentKind, CommentToken, TokenLocation, TokenPosition};
pub use error::{MergeError, MergeResult, NodeRef};
pub use node::{is_parent, types, Node, NodeKind};
pub use range::{Location, Position, Range, SourceText};
pub use traits::Visitor;
