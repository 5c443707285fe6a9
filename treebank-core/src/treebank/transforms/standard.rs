//! Standard transform definitions
//!
//! The stage chain every sentence goes through once it is tokenized:
//!
//! 1. parse (external collaborator)
//! 2. binarize (external collaborator)
//! 3. reset internal labels to the unknown sentinel
//! 4. collapse unary chains
//! 5. index spans
//!
//! The parser and binarizer are chosen at startup, so unlike fixed pipelines
//! this one is built by a function rather than held in a static.

use crate::treebank::binarization::Binarizer;
use crate::treebank::parsing::Parser;
use crate::treebank::token::Token;
use crate::treebank::transforms::stages::{
    Binarize, CollapseUnaries, IndexSpans, MarkUnknownLabels, Parse,
};
use crate::treebank::transforms::Transform;
use crate::treebank::tree::IndexedTree;
use std::sync::Arc;

/// Type alias for the tokens → indexed tree transform
pub type TreeTransform = Transform<Vec<Token>, IndexedTree>;

/// Tokens → indexed binary tree with every internal node labeled `unknown_label`.
pub fn build_tree_transform(
    parser: Arc<dyn Parser>,
    binarizer: Arc<dyn Binarizer>,
    unknown_label: &str,
) -> TreeTransform {
    Transform::from_fn(Ok)
        .then(Parse::new(parser))
        .then(Binarize::new(binarizer))
        .then(MarkUnknownLabels::with_sentinel(unknown_label))
        .then(CollapseUnaries::new())
        .then(IndexSpans::new())
}
