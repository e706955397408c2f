//! Integration tests for merging comment tokens into the primary tree

use latex_ast::latex::assembling::MergeRequest;
use latex_ast::latex::ast::{MergeError, Node, NodeRef, Range};
use latex_ast::latex::formats::to_outline;
use latex_ast::latex::testing::{assert_node, comment_count, strip_comments, Fixture};

fn merge(fx: &Fixture, root: &Node, comments: &[latex_ast::latex::ast::CommentToken]) -> Node {
    MergeRequest::new(Some(comments), fx.text(), root)
        .merge()
        .unwrap_or_else(|e| panic!("merge failed: {e}"))
}

#[test]
fn test_single_comment_in_empty_document() {
    let fx = Fixture::new("\\begin{document}\n% comment\n\\end{document}");
    let root = fx.document(vec![]);

    let merged = merge(&fx, &root, &[fx.comment(17, 27)]);

    assert_node(&merged).child_count(1).child(0, |c| {
        c.is_comment()
            .range(17, 27)
            .raw("% comment\n")
            .value(" comment");
    });
}

#[test]
fn test_comments_around_environment_keep_source_order() {
    let fx = Fixture::new(
        "% a\n% b\n\\begin{document}\n% c\n% d\n\\end{document}\n% e\n% f\n",
    );
    let root = fx.document(vec![]);
    let spans = [(0, 4), (4, 8), (25, 29), (29, 33), (48, 52), (52, 56)];
    let tokens: Vec<_> = spans.iter().map(|&(s, e)| fx.comment(s, e)).collect();

    let merged = merge(&fx, &root, &tokens);

    assert_eq!(merged.range, Range::new(0, 56));
    let mut assertion = assert_node(&merged).child_count(6);
    for (i, (&(start, end), letter)) in spans.iter().zip(["a", "b", "c", "d", "e", "f"]).enumerate() {
        assertion = assertion.child(i, |c| {
            c.is_comment()
                .range(start, end)
                .raw(&format!("% {letter}\n"))
                .value(&format!(" {letter}"));
        });
    }
}

#[test]
fn test_comment_between_text_nodes() {
    let fx = Fixture::new("\\begin{document}\nabcd %\n\\medskip efgh\n\\end{document}");
    let root = fx.document(vec![fx.str(17, 21), fx.str(33, 37)]);

    let merged = merge(&fx, &root, &[fx.comment(22, 24)]);

    assert_node(&merged)
        .child_types(&["Str", "Comment", "Str"])
        .child(0, |c| {
            c.range(17, 21).value("abcd");
        })
        .child(1, |c| {
            c.is_comment().range(22, 24).raw("%\n").value("");
        })
        .child(2, |c| {
            c.range(33, 37).value("efgh");
        });
}

#[test]
fn test_offsets_count_utf16_units_after_astral_character() {
    let fx = Fixture::new("😀%a\n𝔸");
    let root = fx.document(vec![fx.str(0, 2), fx.str(5, 7)]);

    let merged = merge(&fx, &root, &[fx.comment(2, 5)]);

    assert_eq!(merged.range, Range::new(0, 7));
    assert_node(&merged)
        .child_types(&["Str", "Comment", "Str"])
        .child(0, |c| {
            c.raw("😀");
        })
        .child(1, |c| {
            c.is_comment().range(2, 5).raw("%a\n").value("a");
        })
        .child(2, |c| {
            c.range(5, 7).raw("𝔸");
        });
}

#[test]
fn test_comment_one_character_wide() {
    let fx = Fixture::new("\\begin{document}\nabcd %\n\\medskip efgh\n\\end{document}");
    let root = fx.document(vec![fx.str(17, 21), fx.str(33, 37)]);

    let merged = merge(&fx, &root, &[fx.comment(22, 23)]);

    assert_node(&merged)
        .child_types(&["Str", "Comment", "Str"])
        .child(1, |c| {
            c.range(22, 23).raw("%");
        });
}

//   \begin{document}
//   Some \textbf{bold \emph{deep % note
//   }}
//   \end{document}
fn nested_fixture() -> (Fixture, Node) {
    let fx = Fixture::new("\\begin{document}\nSome \\textbf{bold \\emph{deep % note\n}}\n\\end{document}");
    let emphasis = fx.parent("Emphasis", 35, 54, vec![fx.str(41, 45)]);
    let strong = fx.parent("Strong", 22, 55, vec![fx.str(30, 35), emphasis]);
    let paragraph = fx.parent("Paragraph", 17, 55, vec![fx.str(17, 22), strong]);
    let root = fx.document(vec![paragraph]);
    (fx, root)
}

#[test]
fn test_comment_inside_deeply_nested_node() {
    let (fx, root) = nested_fixture();

    let merged = merge(&fx, &root, &[fx.comment(46, 53)]);

    assert_node(&merged).child_count(1).child(0, |paragraph| {
        paragraph
            .node_type("Paragraph")
            .child_types(&["Str", "Strong"])
            .child(1, |strong| {
                strong
                    .child_types(&["Str", "Emphasis"])
                    .child(1, |emphasis| {
                        emphasis
                            .child_types(&["Str", "Comment"])
                            .child(1, |c| {
                                c.is_comment().range(46, 53).value(" note");
                            });
                    });
            });
    });
}

#[test]
fn test_nested_merge_shares_untouched_subtrees() {
    let (fx, root) = nested_fixture();

    let merged = merge(&fx, &root, &[fx.comment(46, 53)]);

    let original_paragraph = &root.children().unwrap()[0];
    let merged_paragraph = &merged.children().unwrap()[0];
    assert!(std::sync::Arc::ptr_eq(
        &original_paragraph.children().unwrap()[0],
        &merged_paragraph.children().unwrap()[0],
    ));
    assert_eq!(comment_count(&root), 0);
    assert_eq!(strip_comments(&merged), root);
}

#[test]
fn test_comment_after_nested_node_goes_to_end_of_container() {
    // \emph{x} % note
    let fx = Fixture::new("\\begin{document}\nSome \\emph{deep} % note\n\\end{document}");
    let emphasis = fx.parent("Emphasis", 22, 33, vec![fx.str(28, 32)]);
    let paragraph = fx.parent("Paragraph", 17, 41, vec![fx.str(17, 22), emphasis]);
    let root = fx.document(vec![paragraph]);

    let merged = merge(&fx, &root, &[fx.comment(34, 41)]);

    assert_node(&merged).child(0, |paragraph| {
        paragraph
            .child_types(&["Str", "Emphasis", "Comment"])
            .child(1, |emphasis| {
                emphasis.child_types(&["Str"]);
            });
    });
}

#[test]
fn test_comment_without_whitespace_between_leaves() {
    let fx = Fixture::new("A%B\nC");
    let root = fx.document(vec![fx.str(0, 1), fx.str(4, 5)]);

    let merged = merge(&fx, &root, &[fx.comment(1, 4)]);

    assert_node(&merged)
        .child_types(&["Str", "Comment", "Str"])
        .child(0, |c| {
            c.value("A");
        })
        .child(1, |c| {
            c.range(1, 4).raw("%B\n").value("B");
        })
        .child(2, |c| {
            c.value("C");
        });
}

#[test]
fn test_rejected_merge_leaves_root_untouched() {
    let fx = Fixture::new("% a\n\\begin{document}\n% b\n\\end{document}");
    let root = fx.document(vec![fx.str(21, 25)]);
    let before = root.clone();
    let tokens = vec![fx.comment(0, 4), fx.comment(21, 25)];

    let err = MergeRequest::new(Some(&tokens), fx.text(), &root)
        .merge()
        .unwrap_err();

    assert_eq!(
        err,
        MergeError::Overlap {
            parent: NodeRef::new("Document", Range::new(0, 39)),
            previous: NodeRef::new("Str", Range::new(21, 25)),
            next: NodeRef::new("Comment", Range::new(21, 25)),
        }
    );
    assert_node(&root).child_count(1).child(0, |c| {
        c.node_type("Str").range(21, 25);
    });
    assert_eq!(root, before);
}

#[test]
fn test_outline_of_merged_tree() {
    let (fx, root) = nested_fixture();
    let merged = merge(&fx, &root, &[fx.comment(46, 53)]);

    insta::assert_snapshot!(to_outline(&merged), @r###"
    Document [0, 70)
      Paragraph [17, 55)
        Str [17, 22) "Some "
        Strong [22, 55)
          Str [30, 35) "bold "
          Emphasis [35, 54)
            Str [41, 45) "deep"
            Comment [46, 53) " note"
    "###);
}
