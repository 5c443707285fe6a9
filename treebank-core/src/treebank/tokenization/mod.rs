//! Sentence tokenization
//!
//! Turns the sentence line of a chunk into [`Token`]s, following Penn Treebank
//! conventions closely enough for annotation lines to be written by hand:
//!
//! - brackets are escaped (`(` becomes `-LRB-`, `]` becomes `-RSB-`, ...) so they
//!   can't be confused with the bracketed tree notation,
//! - straight double quotes become `` `` `` or `''` depending on whether they
//!   open or close a quotation,
//! - clitics are split off their host: `don't` → `do n't`, `film's` → `film 's`.
//!
//! The raw classification is done by the logos lexer in [`raw`].

pub mod raw;

use crate::treebank::token::Token;
use crate::treebank::transforms::{Runnable, TransformError};
use raw::{tokenize_with_locations, RawToken};

const CLITICS: [&str; 6] = ["s", "re", "ve", "ll", "d", "m"];

/// Configurable sentence tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    escape_brackets: bool,
    normalize_quotes: bool,
    split_clitics: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            escape_brackets: true,
            normalize_quotes: true,
            split_clitics: true,
        }
    }

    /// Keep brackets as they appear in the sentence.
    pub fn without_bracket_escapes(mut self) -> Self {
        self.escape_brackets = false;
        self
    }

    /// Keep straight double quotes as `"`.
    pub fn without_quote_normalization(mut self) -> Self {
        self.normalize_quotes = false;
        self
    }

    pub fn without_clitic_splitting(mut self) -> Self {
        self.split_clitics = false;
        self
    }

    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut quote_open = false;

        for (kind, range) in tokenize_with_locations(sentence) {
            let text = &sentence[range];
            match kind {
                Some(RawToken::Word) if self.split_clitics => {
                    tokens.extend(split_clitic(text).into_iter().map(Token::new));
                }
                Some(RawToken::DoubleQuote) if self.normalize_quotes => {
                    let quote = if quote_open { "''" } else { "``" };
                    quote_open = !quote_open;
                    tokens.push(Token::new(quote));
                }
                Some(other) if self.escape_brackets => match other.escaped() {
                    Some(escaped) => tokens.push(Token::new(escaped)),
                    None => tokens.push(Token::new(text)),
                },
                _ => tokens.push(Token::new(text)),
            }
        }

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Token>> for Tokenizer {
    fn run(&self, input: String) -> Result<Vec<Token>, TransformError> {
        Ok(self.tokenize(&input))
    }
}

impl Runnable<&str, Vec<Token>> for Tokenizer {
    fn run(&self, input: &str) -> Result<Vec<Token>, TransformError> {
        Ok(self.tokenize(input))
    }
}

/// Splits a trailing clitic off a word, if it has one.
fn split_clitic(word: &str) -> Vec<&str> {
    let lower = word.to_lowercase();
    if lower.len() == word.len() && lower.ends_with("n't") && word.len() > 3 {
        let (host, clitic) = word.split_at(word.len() - 3);
        return vec![host, clitic];
    }

    if let Some(pos) = word.rfind('\'') {
        let suffix = &word[pos + 1..];
        if pos > 0 && CLITICS.contains(&suffix.to_lowercase().as_str()) {
            let (host, clitic) = word.split_at(pos);
            return vec![host, clitic];
        }
    }

    vec![word]
}

/// Tokenize with the default settings.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(sentence)
}
