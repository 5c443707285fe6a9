//! Property-based tests for the tree transformations
//!
//! Random trees are generated in the shape parsers produce: every word sits
//! under its own part-of-speech node, phrases have one or more children.

use proptest::prelude::*;
use treebank_core::treebank::annotation::SpanLabelMap;
use treebank_core::treebank::binarization::{Binarizer, HeadRules, TreeBinarizer};
use treebank_core::treebank::projection::{project_label, project_labels};
use treebank_core::treebank::transforms::stages::{collapse_unaries, mark_unknown};
use treebank_core::treebank::tree::{IndexedTree, Span, Tree, UNKNOWN_LABEL};

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("S".to_string()),
        Just("NP".to_string()),
        Just("VP".to_string()),
        Just("ADJP".to_string()),
        Just("PP".to_string()),
        Just("X".to_string()),
    ]
}

fn preterminal_strategy() -> impl Strategy<Value = Tree> {
    (
        prop_oneof![Just("DT"), Just("NN"), Just("VBD"), Just("JJ"), Just("IN")],
        "[a-z]{1,6}",
    )
        .prop_map(|(tag, word)| Tree::preterminal(tag, word))
}

/// Trees where every leaf is under a pre-terminal.
fn tree_strategy() -> impl Strategy<Value = Tree> {
    preterminal_strategy().prop_recursive(5, 48, 4, |inner| {
        (label_strategy(), prop::collection::vec(inner, 1..5))
            .prop_map(|(label, children)| Tree::node(label, children))
    })
}

fn assert_preterminals_intact(tree: &Tree) {
    for child in tree.children() {
        if child.is_leaf() {
            assert_eq!(tree.children().len(), 1, "leaf with siblings in {}", tree);
        } else {
            assert_preterminals_intact(child);
        }
    }
}

fn assert_no_internal_unaries(tree: &Tree) {
    if let [only] = tree.children() {
        assert!(only.is_leaf(), "unary chain left in {}", tree);
    }
    for child in tree.children() {
        assert_no_internal_unaries(child);
    }
}

fn assert_spans_tile(tree: &IndexedTree) {
    let span = tree.span();
    assert!(span.start < span.end);
    if tree.is_leaf() {
        assert_eq!(span.len(), 1);
        return;
    }
    let children = tree.children();
    assert_eq!(children.first().unwrap().span().start, span.start);
    assert_eq!(children.last().unwrap().span().end, span.end);
    for pair in children.windows(2) {
        assert_eq!(pair[0].span().end, pair[1].span().start);
    }
    for child in children {
        assert_spans_tile(child);
    }
}

fn assert_at_most_binary(tree: &Tree) {
    assert!(tree.children().len() <= 2, "n-ary node in {}", tree);
    for child in tree.children() {
        assert_at_most_binary(child);
    }
}

proptest! {
    #[test]
    fn collapse_is_idempotent(tree in tree_strategy()) {
        let once = collapse_unaries(tree).unwrap();
        let twice = collapse_unaries(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collapse_keeps_preterminals_and_removes_chains(tree in tree_strategy()) {
        let words: Vec<String> = tree.yield_words().into_iter().map(str::to_string).collect();
        let collapsed = collapse_unaries(tree).unwrap();
        assert_preterminals_intact(&collapsed);
        assert_no_internal_unaries(&collapsed);
        prop_assert_eq!(collapsed.yield_words(), words);
    }

    #[test]
    fn unknown_marking_is_total(tree in tree_strategy()) {
        let words: Vec<String> = tree.yield_words().into_iter().map(str::to_string).collect();
        let mut marked = tree;
        mark_unknown(&mut marked, UNKNOWN_LABEL);
        let indexed = IndexedTree::index(marked.clone()).unwrap();
        for node in indexed.nodes() {
            if !node.is_leaf() {
                prop_assert_eq!(node.label(), Some(UNKNOWN_LABEL));
            }
        }
        prop_assert_eq!(marked.yield_words(), words);
    }

    #[test]
    fn indexing_tiles_the_sentence(tree in tree_strategy()) {
        let leaves = tree.leaf_count();
        let indexed = IndexedTree::index(tree).unwrap();
        prop_assert_eq!(indexed.span(), Span::new(0, leaves));
        assert_spans_tile(&indexed);
    }

    #[test]
    fn binarization_is_binary_and_keeps_yield(tree in tree_strategy()) {
        let words: Vec<String> = tree.yield_words().into_iter().map(str::to_string).collect();
        let binary = TreeBinarizer::new(HeadRules::English).binarize(tree);
        assert_at_most_binary(&binary);
        prop_assert_eq!(binary.yield_words(), words);
    }

    #[test]
    fn projection_touches_exactly_one_node_or_none(
        tree in tree_strategy(),
        start in 0usize..8,
        width in 1usize..4,
    ) {
        let binary = TreeBinarizer::new(HeadRules::Leftmost).binarize(tree);
        let mut marked = binary;
        mark_unknown(&mut marked, UNKNOWN_LABEL);
        let collapsed = collapse_unaries(marked).unwrap();
        let mut indexed = IndexedTree::index(collapsed).unwrap();
        let span = Span::new(start, start + width);
        let has_internal_node = indexed
            .nodes()
            .iter()
            .any(|node| !node.is_leaf() && node.span() == span);

        let applied = project_label(&mut indexed, span, "LABEL");
        prop_assert_eq!(applied, has_internal_node);

        let labeled = indexed
            .nodes()
            .iter()
            .filter(|node| node.label() == Some("LABEL"))
            .count();
        prop_assert_eq!(labeled, usize::from(applied));
        if applied {
            prop_assert_eq!(indexed.find(span).and_then(|n| n.label()), Some("LABEL"));
        }
    }

    #[test]
    fn dropped_spans_leave_tree_unchanged(tree in tree_strategy()) {
        let mut indexed = IndexedTree::index(collapse_unaries(tree).unwrap()).unwrap();
        let before = indexed.clone();
        let mut labels = SpanLabelMap::new();
        let n = indexed.span().end;
        // spans no node can have: beyond the sentence
        labels.insert(Span::new(n, n + 1), "4");
        labels.insert(Span::new(0, n + 2), "0");
        let report = project_labels(&mut indexed, &labels);
        prop_assert!(report.applied.is_empty());
        prop_assert_eq!(report.dropped.len(), 2);
        prop_assert_eq!(indexed, before);
    }
}
