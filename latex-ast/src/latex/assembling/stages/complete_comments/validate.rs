//! Structural validation of a completed tree
//!
//! Checks the generic contract every consumer of the tree relies on: ranges and
//! locations run forward, and the children of every parent are in document order
//! without overlapping each other.

use crate::latex::ast::{MergeError, MergeResult, Node, NodeRef, Visitor};

/// Walk the whole tree and report the first violation found
pub fn validate(root: &Node) -> MergeResult<()> {
    let mut validator = StructureValidator { error: None };
    root.accept(&mut validator);
    match validator.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

struct StructureValidator {
    error: Option<MergeError>,
}

impl StructureValidator {
    fn check_node(&mut self, node: &Node) {
        if self.error.is_some() {
            return;
        }
        if node.range.is_inverted() || node.loc.is_inverted() {
            self.error = Some(MergeError::InvertedRange {
                node_type: node.node_type.clone(),
                range: node.range,
            });
        }
    }

    fn check_siblings(&mut self, parent: &Node) {
        if self.error.is_some() {
            return;
        }
        let Some(children) = parent.children() else {
            return;
        };
        if let Some(pair) = children
            .windows(2)
            .find(|pair| pair[0].range.end > pair[1].range.start)
        {
            self.error = Some(MergeError::Overlap {
                parent: NodeRef::new(parent.node_type.as_str(), parent.range),
                previous: NodeRef::new(pair[0].node_type.as_str(), pair[0].range),
                next: NodeRef::new(pair[1].node_type.as_str(), pair[1].range),
            });
        }
    }
}

impl Visitor for StructureValidator {
    fn visit_parent(&mut self, parent: &Node, _depth: usize) {
        self.check_node(parent);
        self.check_siblings(parent);
    }

    fn visit_leaf(&mut self, leaf: &Node, _depth: usize) {
        self.check_node(leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::ast::{types, Location, Position, Range};
    use std::sync::Arc;

    fn leaf(node_type: &str, start: usize, end: usize) -> Arc<Node> {
        Arc::new(Node::leaf(
            node_type,
            "",
            Range::new(start, end),
            Location::default(),
            "",
        ))
    }

    fn document(children: Vec<Arc<Node>>) -> Node {
        Node::parent(types::DOCUMENT, "", Range::new(0, 40), Location::default(), children)
    }

    #[test]
    fn test_accepts_touching_siblings() {
        let doc = document(vec![
            leaf(types::STR, 0, 1),
            leaf(types::COMMENT, 1, 4),
            leaf(types::STR, 4, 5),
            leaf(types::COMMENT, 5, 5),
        ]);
        assert_eq!(validate(&doc), Ok(()));
    }

    #[test]
    fn test_rejects_overlapping_siblings() {
        let doc = document(vec![
            leaf(types::COMMENT, 0, 4),
            leaf(types::STR, 21, 25),
            leaf(types::COMMENT, 21, 25),
        ]);
        assert_eq!(
            validate(&doc),
            Err(MergeError::Overlap {
                parent: NodeRef::new(types::DOCUMENT, Range::new(0, 40)),
                previous: NodeRef::new(types::STR, Range::new(21, 25)),
                next: NodeRef::new(types::COMMENT, Range::new(21, 25)),
            })
        );
    }

    #[test]
    fn test_rejects_nested_overlap() {
        let para = Arc::new(Node::parent(
            types::PARAGRAPH,
            "",
            Range::new(2, 20),
            Location::default(),
            vec![leaf(types::STR, 2, 10), leaf(types::COMMENT, 8, 12)],
        ));
        let err = validate(&document(vec![para])).unwrap_err();
        assert!(matches!(
            err,
            MergeError::Overlap { ref parent, .. } if parent.node_type == types::PARAGRAPH
        ));
    }

    #[test]
    fn test_rejects_inverted_location() {
        let backwards = Arc::new(Node::leaf(
            types::STR,
            "",
            Range::new(3, 4),
            Location::new(Position::new(2, 0), Position::new(1, 0)),
            "",
        ));
        assert!(matches!(
            validate(&document(vec![backwards])),
            Err(MergeError::InvertedRange { .. })
        ));
    }
}
