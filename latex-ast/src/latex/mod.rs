//! Main module for latex-ast library functionality

pub mod assembling;
pub mod ast;
pub mod formats;
pub mod grammar;
pub mod processor;
pub mod testing;
pub mod transforms;
