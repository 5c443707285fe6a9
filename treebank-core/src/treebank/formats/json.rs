//! JSON output
//!
//! One object per sentence, on a single line:
//!
//!     {"tokens":["Great","fun"],"tree":{"label":"-1","span":{"start":0,"end":2},"children":[...]}}
//!
//! Leaves are written as `{"word": ..., "span": ...}`.

use crate::treebank::token::Token;
use crate::treebank::tree::{IndexedTree, Span};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SentenceRecord<'a> {
    pub tokens: &'a [Token],
    pub tree: NodeRecord<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NodeRecord<'a> {
    Leaf {
        word: &'a str,
        span: Span,
    },
    Internal {
        label: &'a str,
        span: Span,
        children: Vec<NodeRecord<'a>>,
    },
}

impl<'a> NodeRecord<'a> {
    pub fn from_tree(tree: &'a IndexedTree) -> Self {
        match (tree.word(), tree.label()) {
            (Some(word), _) => NodeRecord::Leaf {
                word,
                span: tree.span(),
            },
            (None, label) => NodeRecord::Internal {
                label: label.unwrap_or_default(),
                span: tree.span(),
                children: tree.children().iter().map(NodeRecord::from_tree).collect(),
            },
        }
    }
}

pub fn to_json_line(tokens: &[Token], tree: &IndexedTree) -> Result<String, serde_json::Error> {
    let record = SentenceRecord {
        tokens,
        tree: NodeRecord::from_tree(tree),
    };
    serde_json::to_string(&record)
}
