//! Parsing stage: Vec<Token> → Tree

use crate::treebank::parsing::Parser;
use crate::treebank::token::Token;
use crate::treebank::transforms::{Runnable, TransformError};
use crate::treebank::tree::Tree;
use std::sync::Arc;

/// Hands the token sequence to the configured [`Parser`].
pub struct Parse {
    parser: Arc<dyn Parser>,
}

impl Parse {
    pub fn new(parser: Arc<dyn Parser>) -> Self {
        Parse { parser }
    }
}

impl Runnable<Vec<Token>, Tree> for Parse {
    fn run(&self, input: Vec<Token>) -> Result<Tree, TransformError> {
        let tree = self
            .parser
            .parse(&input)
            .map_err(|e| TransformError::stage("parse", e))?;
        tree.validate()
            .map_err(|e| TransformError::stage("parse", e))?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::parsing::lexicon::FlatParser;
    use crate::treebank::token::tokens_from_words;

    #[test]
    fn test_parse_stage_uses_parser() {
        let stage = Parse::new(Arc::new(FlatParser::english()));
        let tree = stage.run(tokens_from_words(&["the", "dog"])).unwrap();
        assert_eq!(tree.to_string(), "(ROOT (S (DT the) (NN dog)))");
    }

    #[test]
    fn test_parse_stage_rejects_empty_sentence() {
        let stage = Parse::new(Arc::new(FlatParser::english()));
        let err = stage.run(Vec::new()).unwrap_err();
        assert!(matches!(err, TransformError::StageFailed { ref stage, .. } if stage == "parse"));
    }
}
