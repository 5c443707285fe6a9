//! Raw token definitions for sentence tokenization
//!
//! The lexer only classifies surface strings. Escaping of brackets, quote
//! normalization and clitic splitting are applied afterwards in
//! [`super::tokenize`].
use logos::{Lexer, Logos};

/// Word separators that never belong to a word token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum RawToken {
    // Numbers, including decimals, times and simple fractions
    #[regex(r"[0-9]+", number_tail, priority = 4)]
    Number,

    // Words, with internal hyphens and apostrophes
    #[regex(r"[^\s()\[\]{}.,;:!?`'\x22…]+('[^\s()\[\]{}.,;:!?`'\x22…]+)*")]
    Word,

    #[regex(r"\.\.\.|…")]
    Ellipsis,

    #[regex(r"[.!?]")]
    Terminal,

    #[regex(r"[,;:]")]
    Separator,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    #[token("\"")]
    DoubleQuote,
    #[token("``")]
    OpenQuotes,
    #[token("''")]
    CloseQuotes,
    #[token("`")]
    Backtick,
    #[token("'")]
    Apostrophe,
}

impl RawToken {
    /// The escaped form used in trees, for bracket-like tokens.
    pub fn escaped(&self) -> Option<&'static str> {
        match self {
            RawToken::OpenParen => Some("-LRB-"),
            RawToken::CloseParen => Some("-RRB-"),
            RawToken::OpenBracket => Some("-LSB-"),
            RawToken::CloseBracket => Some("-RSB-"),
            RawToken::OpenBrace => Some("-LCB-"),
            RawToken::CloseBrace => Some("-RCB-"),
            _ => None,
        }
    }

}

/// Extends a number over `.`, `,`, `:` or `/` groups, but only when a digit
/// follows the separator: `3.50` is one token, `10.` is two.
fn number_tail(lex: &mut Lexer<RawToken>) -> bool {
    loop {
        let rest = lex.remainder().as_bytes();
        let extra = match rest {
            [b'.' | b',' | b':' | b'/', next, ..] if next.is_ascii_digit() => {
                1 + rest[1..].iter().take_while(|b| b.is_ascii_digit()).count()
            }
            _ => return true,
        };
        lex.bump(extra);
    }
}

/// Tokenize with byte ranges. Input the lexer cannot classify is kept as a
/// single-character token so no text is lost.
pub fn tokenize_with_locations(source: &str) -> Vec<(Option<RawToken>, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.ok(), lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Option<RawToken>> {
        tokenize_with_locations(source)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect()
    }

    #[test]
    fn test_words_and_terminal() {
        assert_eq!(
            kinds("The movie."),
            vec![
                Some(RawToken::Word),
                Some(RawToken::Word),
                Some(RawToken::Terminal)
            ]
        );
    }

    #[test]
    fn test_numbers_beat_words() {
        assert_eq!(kinds("3.5"), vec![Some(RawToken::Number)]);
        assert_eq!(kinds("42"), vec![Some(RawToken::Number)]);
        assert_eq!(kinds("4x4"), vec![Some(RawToken::Word)]);
    }

    #[test]
    fn test_trailing_punctuation_is_not_part_of_number() {
        for source in ["10.", "3,", "5:"] {
            let tokens = tokenize_with_locations(source);
            assert_eq!(tokens.len(), 2, "{source}");
            assert_eq!(tokens[0], (Some(RawToken::Number), 0..source.len() - 1));
        }
        assert_eq!(kinds("1/2"), vec![Some(RawToken::Number)]);
        assert_eq!(kinds("12:30"), vec![Some(RawToken::Number)]);
        assert_eq!(kinds("3,000."), vec![Some(RawToken::Number), Some(RawToken::Terminal)]);
    }

    #[test]
    fn test_unicode_ellipsis() {
        assert_eq!(
            kinds("well…"),
            vec![Some(RawToken::Word), Some(RawToken::Ellipsis)]
        );
        assert_eq!(kinds("..."), vec![Some(RawToken::Ellipsis)]);
    }

    #[test]
    fn test_apostrophes_inside_words() {
        let tokens = tokenize_with_locations("don't");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Some(RawToken::Word));
        assert_eq!(tokens[0].1, 0..5);
    }

    #[test]
    fn test_brackets_and_quotes() {
        assert_eq!(
            kinds("(\"a\")"),
            vec![
                Some(RawToken::OpenParen),
                Some(RawToken::DoubleQuote),
                Some(RawToken::Word),
                Some(RawToken::DoubleQuote),
                Some(RawToken::CloseParen)
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize_with_locations(""), vec![]);
        assert_eq!(tokenize_with_locations("   \t"), vec![]);
    }
}
