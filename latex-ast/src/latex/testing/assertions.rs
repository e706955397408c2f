//! Fluent assertions over merged trees
//!
//!     Every assertion returns the assertion itself so checks chain, and every failure
//!     message starts with the path from the asserted root, e.g. `Document[0][2]`.

use crate::latex::ast::{types, Node, Range};

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

/// Start a chain of assertions at `node`
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.node_type.clone(),
    }
}

fn summarize(children: &[std::sync::Arc<Node>]) -> String {
    children
        .iter()
        .map(|child| format!("{} {}", child.node_type, child.range))
        .collect::<Vec<_>>()
        .join(", ")
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type, expected,
            "{}: Expected node type {}, found {}",
            self.context, expected, self.node.node_type
        );
        self
    }

    pub fn is_comment(self) -> Self {
        self.node_type(types::COMMENT).is_leaf()
    }

    pub fn is_leaf(self) -> Self {
        assert!(
            !self.node.is_parent(),
            "{}: Expected a leaf, found a parent with {} children",
            self.context,
            self.node.children().map_or(0, <[_]>::len)
        );
        self
    }

    pub fn range(self, start: usize, end: usize) -> Self {
        assert_eq!(
            self.node.range,
            Range::new(start, end),
            "{}: Expected range [{}, {}), found {}",
            self.context,
            start,
            end,
            self.node.range
        );
        self
    }

    pub fn raw(self, expected: &str) -> Self {
        assert_eq!(
            self.node.raw, expected,
            "{}: Expected raw text {:?}, found {:?}",
            self.context, expected, self.node.raw
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        let actual = self.node.value();
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected value {:?}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children: [{}])",
            self.context,
            index,
            children.len(),
            summarize(children)
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// The child types in order, e.g. `["Str", "Comment", "Str"]`
    pub fn child_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .children()
            .iter()
            .map(|child| child.node_type.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected child types",
            self.context
        );
        self
    }

    fn children(&self) -> &'a [std::sync::Arc<Node>] {
        match self.node.children() {
            Some(children) => children,
            None => panic!(
                "{}: Expected a parent, found leaf {} {}",
                self.context, self.node.node_type, self.node.range
            ),
        }
    }
}
