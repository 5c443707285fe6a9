//! Lexicon-driven flat parser

use super::{ParseError, Parser};
use crate::treebank::token::Token;
use crate::treebank::tree::Tree;
use serde::Deserialize;
use std::collections::HashMap;

/// Closed-class English words and punctuation. Everything else is tagged with
/// the model's default tag.
const ENGLISH_LEXICON: &[(&str, &str)] = &[
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("no", "DT"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP$"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("are", "VBP"),
    ("were", "VBD"),
    ("am", "VBP"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("has", "VBZ"),
    ("have", "VBP"),
    ("had", "VBD"),
    ("does", "VBZ"),
    ("do", "VBP"),
    ("did", "VBD"),
    ("will", "MD"),
    ("would", "MD"),
    ("can", "MD"),
    ("ca", "MD"),
    ("could", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("not", "RB"),
    ("n't", "RB"),
    ("very", "RB"),
    ("really", "RB"),
    ("too", "RB"),
    ("so", "RB"),
    ("never", "RB"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("to", "TO"),
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("for", "IN"),
    ("about", "IN"),
    ("as", "IN"),
    ("than", "IN"),
    ("because", "IN"),
    ("if", "IN"),
    ("who", "WP"),
    ("what", "WP"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("'s", "POS"),
    ("'re", "VBP"),
    ("'ve", "VBP"),
    ("'m", "VBP"),
    ("'ll", "MD"),
    ("'d", "MD"),
    (".", "."),
    ("!", "."),
    ("?", "."),
    ("...", ":"),
    (",", ","),
    (";", ":"),
    (":", ":"),
    ("``", "``"),
    ("''", "''"),
    ("-LRB-", "-LRB-"),
    ("-RRB-", "-RRB-"),
    ("-LSB-", "-LRB-"),
    ("-RSB-", "-RRB-"),
    ("-LCB-", "-LRB-"),
    ("-RCB-", "-RRB-"),
];

/// Tagging model for [`FlatParser`], loadable from JSON.
///
/// ```json
/// { "root_label": "ROOT", "phrase_label": "S", "default_tag": "NN",
///   "lexicon": { "the": "DT", "great": "JJ" } }
/// ```
///
/// Lexicon keys are matched exactly first, then lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LexiconModel {
    pub root_label: String,
    pub phrase_label: String,
    pub default_tag: String,
    pub number_tag: String,
    pub lexicon: HashMap<String, String>,
}

impl Default for LexiconModel {
    fn default() -> Self {
        LexiconModel {
            root_label: "ROOT".to_string(),
            phrase_label: "S".to_string(),
            default_tag: "NN".to_string(),
            number_tag: "CD".to_string(),
            lexicon: HashMap::new(),
        }
    }
}

impl LexiconModel {
    /// The built-in English closed-class lexicon.
    pub fn english() -> Self {
        let lexicon = ENGLISH_LEXICON
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect();
        LexiconModel {
            lexicon,
            ..LexiconModel::default()
        }
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn tag(&self, word: &str) -> &str {
        if let Some(tag) = self.lexicon.get(word) {
            return tag;
        }
        if let Some(tag) = self.lexicon.get(&word.to_lowercase()) {
            return tag;
        }
        if is_number(word) {
            return &self.number_tag;
        }
        &self.default_tag
    }
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '/'))
}

/// Tags each token and hangs all of them under a single clause node.
#[derive(Debug, Clone)]
pub struct FlatParser {
    model: LexiconModel,
}

impl FlatParser {
    pub fn new(model: LexiconModel) -> Self {
        FlatParser { model }
    }

    pub fn english() -> Self {
        Self::new(LexiconModel::english())
    }
}

impl Parser for FlatParser {
    fn parse(&self, tokens: &[Token]) -> Result<Tree, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::EmptySentence);
        }
        let preterminals = tokens
            .iter()
            .map(|token| Tree::preterminal(self.model.tag(token.word()), token.word()))
            .collect();
        Ok(Tree::node(
            self.model.root_label.clone(),
            vec![Tree::node(self.model.phrase_label.clone(), preterminals)],
        ))
    }
}
