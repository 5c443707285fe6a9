//! Unknown label initialization
//!
//! Before annotations are projected, every internal node is reset to the
//! unknown sentinel so that only annotated spans end up carrying a class.

use crate::treebank::transforms::{Runnable, TransformError};
use crate::treebank::tree::{Tree, UNKNOWN_LABEL};

/// Sets the label of every internal node to `sentinel`. Leaves keep their word.
pub fn mark_unknown(tree: &mut Tree, sentinel: &str) {
    if let Tree::Node { label, children } = tree {
        for child in children.iter_mut() {
            mark_unknown(child, sentinel);
        }
        *label = sentinel.to_string();
    }
}

/// Unknown label stage: Tree → Tree
pub struct MarkUnknownLabels {
    sentinel: String,
}

impl MarkUnknownLabels {
    pub fn new() -> Self {
        Self::with_sentinel(UNKNOWN_LABEL)
    }

    pub fn with_sentinel(sentinel: impl Into<String>) -> Self {
        MarkUnknownLabels {
            sentinel: sentinel.into(),
        }
    }
}

impl Default for MarkUnknownLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Tree, Tree> for MarkUnknownLabels {
    fn run(&self, mut input: Tree) -> Result<Tree, TransformError> {
        mark_unknown(&mut input, &self.sentinel);
        Ok(input)
    }
}
