//! Property-based tests for comment placement at node boundaries
//!
//! Fixtures are generated as a sequence of words and comments with zero to two spaces
//! between them, so comments regularly touch the word before them, the word after them,
//! or another comment with no gap at all. Layout of a generated document:
//!
//!     <leading comments> <paragraph: words and comments interleaved> <trailing comments>
//!
//! The paragraph spans its first item to its last. Every comment in it must end up among
//! the paragraph's children at its source position; every other comment must end up on
//! the document level on the matching side of the paragraph.

use latex_ast::latex::assembling::MergeRequest;
use latex_ast::latex::ast::{types, CommentToken, Node};
use latex_ast::latex::testing::{comment_count, comment_parent_path, strip_comments, Fixture};
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Item {
    Word(usize),
    Comment(usize),
}

fn item_strategy() -> impl Strategy<Value = Item> {
    prop_oneof![
        (1usize..5).prop_map(Item::Word),
        (0usize..4).prop_map(Item::Comment),
    ]
}

fn gap_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(0usize), Just(0usize), 1usize..3]
}

fn comment_strategy() -> impl Strategy<Value = (usize, Item)> {
    (gap_strategy(), (0usize..4).prop_map(Item::Comment))
}

#[derive(Debug)]
struct Layout {
    text: String,
    /// `(item, start, end)` for each item in source order
    spans: Vec<(Item, usize, usize)>,
    leading: usize,
    trailing: usize,
}

impl Layout {
    fn build(
        leading: &[(usize, Item)],
        paragraph: &[(usize, Item)],
        trailing: &[(usize, Item)],
    ) -> Self {
        let mut text = String::new();
        let mut spans = Vec::new();
        for (gap, item) in leading.iter().chain(paragraph).chain(trailing) {
            text.push_str(&" ".repeat(*gap));
            let start = text.encode_utf16().count();
            match item {
                Item::Word(len) => text.push_str(&"w".repeat(*len)),
                Item::Comment(len) => {
                    text.push('%');
                    text.push_str(&"c".repeat(*len));
                    text.push('\n');
                }
            }
            spans.push((item.clone(), start, text.encode_utf16().count()));
        }
        Self {
            text,
            spans,
            leading: leading.len(),
            trailing: trailing.len(),
        }
    }

    fn paragraph_spans(&self) -> &[(Item, usize, usize)] {
        &self.spans[self.leading..self.spans.len() - self.trailing]
    }

    fn primary_tree(&self, fx: &Fixture) -> Node {
        let inner = self.paragraph_spans();
        let words: Vec<Arc<Node>> = inner
            .iter()
            .filter(|(item, _, _)| matches!(item, Item::Word(_)))
            .map(|&(_, start, end)| fx.str(start, end))
            .collect();
        let start = inner.first().map_or(0, |span| span.1);
        let end = inner.last().map_or(0, |span| span.2);
        fx.document(vec![fx.parent(types::PARAGRAPH, start, end, words)])
    }

    fn tokens(&self, fx: &Fixture) -> Vec<CommentToken> {
        self.spans
            .iter()
            .filter(|(item, _, _)| matches!(item, Item::Comment(_)))
            .map(|&(_, start, end)| fx.comment(start, end))
            .collect()
    }
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    (
        prop::collection::vec(comment_strategy(), 0..3),
        prop::collection::vec((gap_strategy(), item_strategy()), 1..12),
        prop::collection::vec(comment_strategy(), 0..3),
    )
        .prop_map(|(leading, paragraph, trailing)| Layout::build(&leading, &paragraph, &trailing))
}

fn summarize(children: &[Arc<Node>]) -> Vec<(String, usize, usize)> {
    children
        .iter()
        .map(|child| (child.node_type.clone(), child.range.start, child.range.end))
        .collect()
}

fn expected(spans: &[(Item, usize, usize)]) -> Vec<(String, usize, usize)> {
    spans
        .iter()
        .map(|(item, start, end)| {
            let node_type = match item {
                Item::Word(_) => types::STR,
                Item::Comment(_) => types::COMMENT,
            };
            (node_type.to_string(), *start, *end)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_merge_keeps_primary_tree(layout in layout_strategy()) {
        let fx = Fixture::new(layout.text.clone());
        let root = layout.primary_tree(&fx);
        let tokens = layout.tokens(&fx);

        let merged = MergeRequest::new(Some(&tokens), fx.text(), &root).merge();
        prop_assert!(merged.is_ok(), "merge failed for {:?}: {:?}", layout.text, merged);
        let merged = merged.unwrap();

        prop_assert_eq!(comment_count(&merged), tokens.len());
        prop_assert_eq!(strip_comments(&merged), root);
    }

    #[test]
    fn test_comments_land_at_source_position(layout in layout_strategy()) {
        let fx = Fixture::new(layout.text.clone());
        let root = layout.primary_tree(&fx);
        let tokens = layout.tokens(&fx);
        let merged = MergeRequest::new(Some(&tokens), fx.text(), &root)
            .merge()
            .unwrap();

        let top_level = merged.children().unwrap();
        let paragraph_index = layout.leading;
        prop_assert_eq!(top_level.len(), layout.leading + 1 + layout.trailing);
        prop_assert_eq!(&top_level[paragraph_index].node_type, types::PARAGRAPH);

        let paragraph = top_level[paragraph_index].children().unwrap();
        prop_assert_eq!(summarize(paragraph), expected(layout.paragraph_spans()));

        let mut outside = summarize(&top_level[..paragraph_index]);
        outside.extend(summarize(&top_level[paragraph_index + 1..]));
        let leading = &layout.spans[..layout.leading];
        let trailing = &layout.spans[layout.spans.len() - layout.trailing..];
        let mut expected_outside = expected(leading);
        expected_outside.extend(expected(trailing));
        prop_assert_eq!(outside, expected_outside);
    }

    #[test]
    fn test_paragraph_comments_have_paragraph_parent(layout in layout_strategy()) {
        let fx = Fixture::new(layout.text.clone());
        let root = layout.primary_tree(&fx);
        let tokens = layout.tokens(&fx);
        let merged = MergeRequest::new(Some(&tokens), fx.text(), &root)
            .merge()
            .unwrap();

        for (item, start, _) in layout.paragraph_spans() {
            if matches!(item, Item::Comment(_)) {
                prop_assert_eq!(
                    comment_parent_path(&merged, *start),
                    Some(vec![types::DOCUMENT.to_string(), types::PARAGRAPH.to_string()])
                );
            }
        }
    }
}
