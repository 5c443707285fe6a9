//! Span indexing stage: Tree → IndexedTree

use crate::treebank::transforms::{Runnable, TransformError};
use crate::treebank::tree::{IndexedTree, Tree};

pub struct IndexSpans;

impl IndexSpans {
    pub fn new() -> Self {
        IndexSpans
    }
}

impl Default for IndexSpans {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Tree, IndexedTree> for IndexSpans {
    fn run(&self, input: Tree) -> Result<IndexedTree, TransformError> {
        IndexedTree::index(input).map_err(|e| TransformError::stage("index-spans", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::testing::tree;
    use crate::treebank::tree::Span;

    #[test]
    fn test_root_covers_sentence() {
        let indexed = IndexSpans::new()
            .run(tree("(S (NP (DT the) (NN dog)) (VBZ barks))"))
            .unwrap();
        assert_eq!(indexed.span(), Span::new(0, 3));
        assert_eq!(indexed.children()[0].span(), Span::new(0, 2));
    }
}
