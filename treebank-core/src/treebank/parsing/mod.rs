//! Parsing
//!
//! Syntactic parsing is a collaborator of the treebank builder, not part of it.
//! The pipeline only relies on the [`Parser`] trait; this module ships the
//! implementations that make the tool usable on its own:
//!
//! - [`lexicon::FlatParser`]: tags every token from a lexicon and returns a flat
//!   clause, `(ROOT (S (DT the) (NN movie) ...))`.
//! - [`lookup::TreebankLookupParser`]: serves trees parsed ahead of time, keyed
//!   by their token sequence, and falls back to a flat parse for the rest.
//!
//! [`model::load_parser`] maps a model identifier to one of these.

pub mod lexicon;
pub mod lookup;
pub mod model;

pub use model::{load_parser, ModelError, DEFAULT_PARSER_MODEL};

use crate::treebank::token::Token;
use crate::treebank::tree::Tree;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse an empty sentence")]
    EmptySentence,
}

/// Produces a constituency tree whose yield is exactly `tokens`.
///
/// Implementations are loaded once and shared for the whole run, so they must
/// not keep per-sentence state.
pub trait Parser: Send + Sync {
    fn parse(&self, tokens: &[Token]) -> Result<Tree, ParseError>;
}
