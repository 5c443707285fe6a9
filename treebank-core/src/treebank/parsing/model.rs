//! Parser model loading
//!
//! A model identifier is either the name of a built-in model, prefixed with
//! `builtin:`, or a path:
//!
//! - `builtin:english-flat`: [`FlatParser`] with the English lexicon (default)
//! - `*.json`: a [`LexiconModel`] for [`FlatParser`]
//! - anything else: a file of bracketed trees for [`TreebankLookupParser`],
//!   falling back to the English flat parser

use super::lexicon::{FlatParser, LexiconModel};
use super::lookup::TreebankLookupParser;
use super::Parser;
use crate::treebank::formats::bracketed::BracketError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PARSER_MODEL: &str = "builtin:english-flat";

const BUILTIN_PREFIX: &str = "builtin:";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown built-in parser model '{0}'")]
    UnknownBuiltin(String),
    #[error("could not read parser model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lexicon model {path}: {source}")]
    InvalidLexicon {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid treebank model {path}: {source}")]
    InvalidTreebank {
        path: PathBuf,
        #[source]
        source: BracketError,
    },
    #[error("treebank model {0} contains no trees")]
    EmptyTreebank(PathBuf),
}

/// Resolves a model identifier to a ready parser.
pub fn load_parser(identifier: &str) -> Result<Arc<dyn Parser>, ModelError> {
    if let Some(name) = identifier.strip_prefix(BUILTIN_PREFIX) {
        let parser = load_builtin(name)?;
        info!(model = identifier, "loaded built-in parser model");
        return Ok(parser);
    }

    let path = Path::new(identifier);
    let source = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let model = LexiconModel::from_json(&source).map_err(|source| ModelError::InvalidLexicon {
            path: path.to_path_buf(),
            source,
        })?;
        info!(model = identifier, entries = model.lexicon.len(), "loaded lexicon model");
        return Ok(Arc::new(FlatParser::new(model)));
    }

    let parser = TreebankLookupParser::from_bracketed(&source, FlatParser::english()).map_err(
        |source| ModelError::InvalidTreebank {
            path: path.to_path_buf(),
            source,
        },
    )?;
    if parser.is_empty() {
        return Err(ModelError::EmptyTreebank(path.to_path_buf()));
    }
    info!(model = identifier, trees = parser.len(), "loaded treebank model");
    Ok(Arc::new(parser))
}

fn load_builtin(name: &str) -> Result<Arc<dyn Parser>, ModelError> {
    match name {
        "english-flat" => Ok(Arc::new(FlatParser::english())),
        other => Err(ModelError::UnknownBuiltin(other.to_string())),
    }
}
