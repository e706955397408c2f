//! Assembling stages

pub mod complete_comments;

pub use complete_comments::{complete_comments, CompleteComments, MergeRequest};
