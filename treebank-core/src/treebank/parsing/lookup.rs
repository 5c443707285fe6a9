//! Pre-parsed tree lookup

use super::lexicon::FlatParser;
use super::{ParseError, Parser};
use crate::treebank::formats::bracketed::{parse_trees, BracketError};
use crate::treebank::token::Token;
use crate::treebank::tree::Tree;
use std::collections::HashMap;
use tracing::debug;

/// Serves trees that were parsed ahead of time.
///
/// Trees are keyed by their yield. A sentence whose tokens match a stored
/// tree's leaves gets that tree; any other sentence is handed to the fallback
/// parser. When two stored trees share a yield, the first one is kept.
#[derive(Debug, Clone)]
pub struct TreebankLookupParser {
    trees: HashMap<Vec<String>, Tree>,
    fallback: FlatParser,
}

impl TreebankLookupParser {
    pub fn from_trees(trees: Vec<Tree>, fallback: FlatParser) -> Self {
        let mut by_yield = HashMap::new();
        for tree in trees {
            let key: Vec<String> = tree.yield_words().into_iter().map(str::to_string).collect();
            by_yield.entry(key).or_insert(tree);
        }
        TreebankLookupParser {
            trees: by_yield,
            fallback,
        }
    }

    /// Reads a sequence of bracketed trees.
    pub fn from_bracketed(source: &str, fallback: FlatParser) -> Result<Self, BracketError> {
        Ok(Self::from_trees(parse_trees(source)?, fallback))
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl Parser for TreebankLookupParser {
    fn parse(&self, tokens: &[Token]) -> Result<Tree, ParseError> {
        let key: Vec<String> = tokens.iter().map(|t| t.word().to_string()).collect();
        match self.trees.get(&key) {
            Some(tree) => Ok(tree.clone()),
            None => {
                debug!(sentence = %key.join(" "), "no stored tree, using fallback parse");
                self.fallback.parse(tokens)
            }
        }
    }
}
