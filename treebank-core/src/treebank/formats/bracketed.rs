//! Bracketed tree notation
//!
//! Trees are written `(label child1 child2 ...)` with bare words at the
//! leaves, Penn Treebank style:
//!
//!     (ROOT (S (NP (DT The) (NN movie)) (VP (VBD was) (ADJP (JJ great)))))
//!
//! Writing is the `Display` impl of [`Tree`] and [`IndexedTree`]. This module
//! holds the reader. A node without a label, as in `( (S ...))`, is read as
//! `ROOT`. Any amount of whitespace, including newlines, may separate tokens,
//! so treebank files can hold one tree per line or pretty-printed trees.
//!
//! [`IndexedTree`]: crate::treebank::tree::IndexedTree

use crate::treebank::tree::Tree;
use logos::Logos;
use thiserror::Error;

/// Label given to nodes written without one.
pub const IMPLICIT_ROOT_LABEL: &str = "ROOT";

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
enum BracketToken {
    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[regex(r"[^\s()]+")]
    Atom,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("unexpected end of input, {0} bracket(s) left open")]
    UnexpectedEnd(usize),
    #[error("unexpected ')' at byte {0}")]
    UnexpectedClose(usize),
    #[error("node '{label}' at byte {offset} has no children")]
    EmptyNode { label: String, offset: usize },
    #[error("expected a single tree, found trailing input at byte {0}")]
    TrailingInput(usize),
    #[error("no tree found")]
    NoTree,
}

struct Reader<'a> {
    tokens: Vec<(BracketToken, &'a str, usize)>,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(source: &'a str) -> Self {
        let mut lexer = BracketToken::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            if let Ok(token) = result {
                tokens.push((token, lexer.slice(), lexer.span().start));
            }
        }
        Reader { tokens, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map(|(_, _, offset)| *offset).unwrap_or(0)
    }

    fn read_tree(&mut self) -> Result<Tree, BracketError> {
        let Some(&(token, text, offset)) = self.tokens.get(self.pos) else {
            return Err(BracketError::UnexpectedEnd(0));
        };
        self.pos += 1;
        match token {
            BracketToken::Atom => Ok(Tree::leaf(text)),
            BracketToken::Close => Err(BracketError::UnexpectedClose(offset)),
            BracketToken::Open => self.read_node(offset, 1),
        }
    }

    /// Reads the rest of a node whose `(` was just consumed.
    fn read_node(&mut self, offset: usize, depth: usize) -> Result<Tree, BracketError> {
        let label = match self.tokens.get(self.pos) {
            Some(&(BracketToken::Atom, text, _)) => {
                self.pos += 1;
                text.to_string()
            }
            Some(_) => IMPLICIT_ROOT_LABEL.to_string(),
            None => return Err(BracketError::UnexpectedEnd(depth)),
        };

        let mut children = Vec::new();
        loop {
            let Some(&(token, text, child_offset)) = self.tokens.get(self.pos) else {
                return Err(BracketError::UnexpectedEnd(depth));
            };
            self.pos += 1;
            match token {
                BracketToken::Close => break,
                BracketToken::Atom => children.push(Tree::leaf(text)),
                BracketToken::Open => children.push(self.read_node(child_offset, depth + 1)?),
            }
        }

        if children.is_empty() {
            return Err(BracketError::EmptyNode { label, offset });
        }
        Ok(Tree::Node { label, children })
    }
}

/// Reads exactly one tree.
pub fn parse_tree(source: &str) -> Result<Tree, BracketError> {
    let mut reader = Reader::new(source);
    if reader.at_end() {
        return Err(BracketError::NoTree);
    }
    let tree = reader.read_tree()?;
    if !reader.at_end() {
        return Err(BracketError::TrailingInput(reader.offset()));
    }
    Ok(tree)
}

/// Reads every tree in `source`, in order. Empty input yields no trees.
pub fn parse_trees(source: &str) -> Result<Vec<Tree>, BracketError> {
    let mut reader = Reader::new(source);
    let mut trees = Vec::new();
    while !reader.at_end() {
        trees.push(reader.read_tree()?);
    }
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_nested_tree() {
        let source = "(S (NP (DT the) (NN dog)) (VP (VBZ barks)))";
        let tree = parse_tree(source).unwrap();
        assert_eq!(tree.label(), Some("S"));
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.to_string(), source);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let tree = parse_tree("(S\n  (NP (NN dogs))\n\t(VP (VBP bark)))\n").unwrap();
        assert_eq!(tree.to_string(), "(S (NP (NN dogs)) (VP (VBP bark)))");
    }

    #[test]
    fn test_missing_root_label() {
        let tree = parse_tree("( (S (NN hi)))").unwrap();
        assert_eq!(tree.to_string(), "(ROOT (S (NN hi)))");
    }

    #[test]
    fn test_bare_word() {
        assert_eq!(parse_tree("dog").unwrap(), Tree::leaf("dog"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_tree(""), Err(BracketError::NoTree));
        assert_eq!(parse_tree("(S (NN a)"), Err(BracketError::UnexpectedEnd(1)));
        assert_eq!(parse_tree(")"), Err(BracketError::UnexpectedClose(0)));
        assert_eq!(
            parse_tree("(S (NP) (NN a))"),
            Err(BracketError::EmptyNode {
                label: "NP".to_string(),
                offset: 3
            })
        );
        assert_eq!(
            parse_tree("(NN a) (NN b)"),
            Err(BracketError::TrailingInput(7))
        );
    }

    #[test]
    fn test_reads_many_trees() {
        let trees = parse_trees("(A a)\n(B b)\n\n(C (D d) (E e))").unwrap();
        assert_eq!(trees.len(), 3);
        assert_eq!(trees[2].to_string(), "(C (D d) (E e))");
        assert_eq!(parse_trees("  \n").unwrap(), vec![]);
    }
}
