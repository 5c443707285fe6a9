//! Binarization stage: Tree → Tree

use crate::treebank::binarization::Binarizer;
use crate::treebank::transforms::{Runnable, TransformError};
use crate::treebank::tree::Tree;
use std::sync::Arc;

pub struct Binarize {
    binarizer: Arc<dyn Binarizer>,
}

impl Binarize {
    pub fn new(binarizer: Arc<dyn Binarizer>) -> Self {
        Binarize { binarizer }
    }
}

impl Runnable<Tree, Tree> for Binarize {
    fn run(&self, input: Tree) -> Result<Tree, TransformError> {
        Ok(self.binarizer.binarize(input))
    }
}
