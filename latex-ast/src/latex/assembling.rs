//! Assembling module
//!
//!     The assembling stage operates on the tree the grammar produced, after parsing is
//!     done. The grammar keeps comments out of every node range and hands them over as a
//!     separate list, so the tree it returns is not yet what lint rules expect to walk.
//!
//!     Putting the comments back is harder than it seems: a comment can sit before,
//!     between or after nodes at any depth, can touch its neighbours with no whitespace
//!     in between, and can start or end the file. See
//!     [complete_comments](stages::complete_comments) for the placement rules.
//!
//! Current stages:
//!
//!     - `complete_comments`: Places every comment token as a `Comment` leaf in the tree.

pub mod stages;

pub use stages::{complete_comments, CompleteComments, MergeRequest};
