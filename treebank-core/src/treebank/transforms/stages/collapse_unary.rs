//! Unary chain collapsing
//!
//! A node with a single internal child is replaced by that child, bottom up,
//! until every internal node has either two or more children or exactly one
//! leaf child. Part-of-speech nodes directly above words are never removed.

use crate::treebank::transforms::{Runnable, TransformError};
use crate::treebank::tree::{Tree, TreeError};

/// Collapse all unary chains in `tree`.
///
/// Fails on an internal node without children.
pub fn collapse_unaries(tree: Tree) -> Result<Tree, TreeError> {
    match tree {
        Tree::Leaf(_) => Ok(tree),
        Tree::Node { label, children } => {
            if children.is_empty() {
                return Err(TreeError::EmptyNode { label });
            }
            let mut children = children
                .into_iter()
                .map(collapse_unaries)
                .collect::<Result<Vec<_>, _>>()?;

            if children.len() == 1 && children[0].is_internal() {
                return Ok(children.remove(0));
            }
            Ok(Tree::Node { label, children })
        }
    }
}

/// Unary collapsing stage: Tree → Tree
pub struct CollapseUnaries;

impl CollapseUnaries {
    pub fn new() -> Self {
        CollapseUnaries
    }
}

impl Default for CollapseUnaries {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Tree, Tree> for CollapseUnaries {
    fn run(&self, input: Tree) -> Result<Tree, TransformError> {
        collapse_unaries(input).map_err(|e| TransformError::stage("collapse-unary", e))
    }
}
