//! # latex-ast
//!
//! Completes a parsed LaTeX document tree with the comments its grammar strips out.
//!
//! The LaTeX grammar reports two things for a source file: the primary tree, where
//! comments take no room in any node range, and a separate list of comment tokens
//! with their own offsets and line/column spans. Linting rules expect comments to be
//! ordinary siblings in the tree, so this crate folds every token back in at the
//! depth and index its offsets call for.
//!
//! File Layout
//!
//! src/latex
//!   ├── ast          Tree model: ranges, positions, nodes, comment tokens, errors
//!   ├── assembling   Post-parse stages operating on the tree (comment completion)
//!   ├── transforms   Runnable / Transform pipeline plumbing
//!   ├── grammar      The seam to the external LaTeX grammar
//!   ├── processor    Plugin surface: extensions, pre-process and post-process hooks
//!   ├── formats      Text renderings of a tree
//!   └── testing      Fixture factory and fluent assertions shared by the tests
//!
//! For the testing helpers, see the [testing module](latex::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod latex;
