//! Annotation lines
//!
//! Every line after the sentence in a chunk reads `<label> <token> <token> ...`.
//! The tokens are looked up in the tokenized sentence and each place where they
//! occur as a contiguous run becomes a span carrying the label.
//!
//! Matching is exact: no case folding, no normalization. A line that names
//! tokens absent from the sentence simply records nothing.

use crate::treebank::token::Token;
use crate::treebank::tree::Span;
use std::collections::btree_map;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("found line with label {line} but no tokens to associate with that line")]
    MissingTokens { line: String },
}

/// Labels keyed by token span, for one sentence.
///
/// Inserting a span that is already present replaces its label. Iteration is
/// in span order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanLabelMap {
    labels: BTreeMap<Span, String>,
}

impl SpanLabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, span: Span, label: impl Into<String>) -> Option<String> {
        self.labels.insert(span, label.into())
    }

    pub fn get(&self, span: &Span) -> Option<&str> {
        self.labels.get(span).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Span, String> {
        self.labels.iter()
    }
}

impl<'a> IntoIterator for &'a SpanLabelMap {
    type Item = (&'a Span, &'a String);
    type IntoIter = btree_map::Iter<'a, Span, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Records every occurrence of the line's token run in `tokens`.
///
/// Blank lines are ignored. A line holding only a label is an error.
pub fn extract_spans(
    map: &mut SpanLabelMap,
    tokens: &[Token],
    line: &str,
) -> Result<(), AnnotationError> {
    let mut fields = line.split_whitespace();
    let Some(label) = fields.next() else {
        return Ok(());
    };
    let phrase: Vec<&str> = fields.collect();
    if phrase.is_empty() {
        return Err(AnnotationError::MissingTokens {
            line: line.to_string(),
        });
    }

    for (start, window) in tokens.windows(phrase.len()).enumerate() {
        let matches = window
            .iter()
            .zip(&phrase)
            .all(|(token, expected)| token.word() == *expected);
        if matches {
            map.insert(Span::new(start, start + phrase.len()), label);
        }
    }
    Ok(())
}

/// Builds the span map for a sentence from all of its annotation lines.
/// Stops at the first malformed line.
pub fn extract_all<'a, I>(tokens: &[Token], lines: I) -> Result<SpanLabelMap, AnnotationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = SpanLabelMap::new();
    for line in lines {
        extract_spans(&mut map, tokens, line)?;
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::token::tokens_from_words;

    fn sentence() -> Vec<Token> {
        tokens_from_words(&["The", "movie", "was", "great"])
    }

    #[test]
    fn test_phrase_is_located() {
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &sentence(), "POS movie was").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Span::new(1, 3)), Some("POS"));
    }

    #[test]
    fn test_label_without_tokens_is_fatal() {
        let mut map = SpanLabelMap::new();
        let err = extract_spans(&mut map, &sentence(), "NEG").unwrap_err();
        assert_eq!(
            err,
            AnnotationError::MissingTokens {
                line: "NEG".to_string()
            }
        );
        assert!(err.to_string().contains("NEG"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &sentence(), "   ").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_every_occurrence_is_recorded() {
        let tokens = tokens_from_words(&["so", "good", ",", "so", "good"]);
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &tokens, "4 so good").unwrap();
        let spans: Vec<Span> = map.iter().map(|(span, _)| *span).collect();
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(3, 5)]);
    }

    #[test]
    fn test_matching_is_exact() {
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &sentence(), "POS the movie").unwrap();
        extract_spans(&mut map, &sentence(), "POS Movie").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_phrase_longer_than_sentence() {
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &sentence(), "POS The movie was great indeed").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_whole_sentence_and_edges() {
        let mut map = SpanLabelMap::new();
        extract_spans(&mut map, &sentence(), "3 The movie was great").unwrap();
        extract_spans(&mut map, &sentence(), "2 great").unwrap();
        assert_eq!(map.get(&Span::new(0, 4)), Some("3"));
        assert_eq!(map.get(&Span::new(3, 4)), Some("2"));
    }

    #[test]
    fn test_later_line_overwrites_identical_span() {
        let map = extract_all(&sentence(), ["POS movie", "NEG movie"]).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Span::new(1, 2)), Some("NEG"));
    }

    #[test]
    fn test_extract_all_stops_at_malformed_line() {
        let err = extract_all(&sentence(), ["POS movie", "NEG", "NEU great"]).unwrap_err();
        assert_eq!(
            err,
            AnnotationError::MissingTokens {
                line: "NEG".to_string()
            }
        );
    }
}
