//! Sentence tokens

use serde::Serialize;
use std::fmt;

/// A single token of a sentence, in the surface form the tokenizer produced.
///
/// Annotation lines are matched against these surface forms verbatim, so a
/// `(` in the sentence has to be written `-LRB-` in an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token {
    word: String,
}

impl Token {
    pub fn new(word: impl Into<String>) -> Self {
        Token { word: word.into() }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Token::new(word)
    }
}

/// Renders tokens as `[The, movie, was, great]`.
pub fn format_token_list(tokens: &[Token]) -> String {
    let words: Vec<&str> = tokens.iter().map(Token::word).collect();
    format!("[{}]", words.join(", "))
}

/// Convenience for tests and callers that already hold split words.
pub fn tokens_from_words<S: AsRef<str>>(words: &[S]) -> Vec<Token> {
    words.iter().map(|w| Token::new(w.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_list() {
        let tokens = tokens_from_words(&["The", "movie", "was", "great"]);
        assert_eq!(format_token_list(&tokens), "[The, movie, was, great]");
        assert_eq!(format_token_list(&[]), "[]");
    }
}
