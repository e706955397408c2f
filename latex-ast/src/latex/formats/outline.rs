//! Outline formatter for trees
//!
//! One line per node, two spaces of indentation per level of nesting:
//!
//! <indentation><type> [start, end) "value"   (leaves)
//! <indentation><type> [start, end)           (parents)
//!
//! Values are printed with Rust string escaping, so a comment's trailing newline shows up
//! as `\n` and the outline stays one line per node.
//!
//! Example:
//!
//!   Document [0, 52)
//!     Str [17, 21) "abcd"
//!     Comment [22, 32) " comment"
//!     Str [33, 37) "efgh"

use crate::latex::ast::{Node, Visitor};
use std::fmt::Write;

struct OutlineWriter {
    out: String,
}

impl OutlineWriter {
    fn line(&mut self, node: &Node, depth: usize) {
        let indent = "  ".repeat(depth);
        // Writing to a String cannot fail
        let _ = write!(self.out, "{indent}{} {}", node.node_type, node.range);
        if let Some(value) = node.value() {
            let _ = write!(self.out, " {value:?}");
        }
        self.out.push('\n');
    }
}

impl Visitor for OutlineWriter {
    fn visit_parent(&mut self, parent: &Node, depth: usize) {
        self.line(parent, depth);
    }

    fn visit_leaf(&mut self, leaf: &Node, depth: usize) {
        self.line(leaf, depth);
    }
}

/// Render `root` and all its descendants as an outline
pub fn to_outline(root: &Node) -> String {
    let mut writer = OutlineWriter { out: String::new() };
    root.accept(&mut writer);
    writer.out
}
