//! Fixture factory deriving node metadata from offsets into a source text

use crate::latex::ast::{
    types, CommentToken, Node, Range, SourceText, TokenPosition,
};
use std::sync::Arc;

/// A LaTeX source text and a factory for nodes and tokens pointing into it
#[derive(Debug, Clone)]
pub struct Fixture {
    text: String,
}

impl Fixture {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn source(&self) -> SourceText<'_> {
        SourceText::new(&self.text)
    }

    fn slice(&self, range: Range) -> String {
        self.source()
            .slice(range)
            .unwrap_or_else(|| panic!("fixture range {range} is outside {:?}", self.text))
            .to_string()
    }

    /// A leaf of any type whose raw text and value are the covered text
    pub fn leaf(&self, node_type: &str, start: usize, end: usize) -> Arc<Node> {
        let range = Range::new(start, end);
        let raw = self.slice(range);
        Arc::new(Node::leaf(
            node_type,
            raw.clone(),
            range,
            self.source().location(range),
            raw,
        ))
    }

    /// A `Str` leaf covering `[start, end)`
    pub fn str(&self, start: usize, end: usize) -> Arc<Node> {
        self.leaf(types::STR, start, end)
    }

    pub fn parent(
        &self,
        node_type: &str,
        start: usize,
        end: usize,
        children: Vec<Arc<Node>>,
    ) -> Arc<Node> {
        let range = Range::new(start, end);
        Arc::new(Node::parent(
            node_type,
            self.slice(range),
            range,
            self.source().location(range),
            children,
        ))
    }

    /// The `Document` root spanning the whole text
    pub fn document(&self, children: Vec<Arc<Node>>) -> Node {
        let range = Range::new(0, self.source().len());
        Node::parent(
            types::DOCUMENT,
            self.text.as_str(),
            range,
            self.source().location(range),
            children,
        )
    }

    /// The token the grammar would report for the comment covering `[start, end)`
    pub fn comment(&self, start: usize, end: usize) -> CommentToken {
        let source = self.source();
        let raw = self.slice(Range::new(start, end));
        let content = raw
            .strip_prefix('%')
            .unwrap_or(&raw)
            .trim_end_matches('\n');
        let token_position = |offset: usize| {
            let position = source.position(offset);
            TokenPosition::new(offset, position.line, position.column + 1)
        };
        CommentToken::new(content, token_position(start), token_position(end))
    }

    /// The `Comment` leaf a merge should produce for `[start, end)`
    pub fn comment_leaf(&self, start: usize, end: usize) -> Arc<Node> {
        let range = Range::new(start, end);
        let token = self.comment(start, end);
        Arc::new(Node::leaf(
            types::COMMENT,
            self.slice(range),
            range,
            self.source().location(range),
            token.content,
        ))
    }
}
