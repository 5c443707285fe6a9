//! Test helpers
//!
//! Trees in tests are written in bracketed notation and read with [`tree`],
//! which panics on malformed input so test bodies stay short.

use crate::treebank::formats::bracketed::parse_tree;
use crate::treebank::tree::{IndexedTree, Tree};

/// Reads a bracketed tree, panicking on malformed input.
pub fn tree(source: &str) -> Tree {
    parse_tree(source).unwrap_or_else(|e| panic!("invalid test tree {:?}: {}", source, e))
}

/// Reads and span-indexes a bracketed tree, panicking on malformed input.
pub fn indexed(source: &str) -> IndexedTree {
    IndexedTree::index(tree(source)).unwrap_or_else(|e| panic!("cannot index {:?}: {}", source, e))
}

/// Labels of all internal nodes, pre-order.
pub fn internal_labels(tree: &IndexedTree) -> Vec<String> {
    tree.nodes()
        .into_iter()
        .filter_map(|node| node.label().map(str::to_string))
        .collect()
}
