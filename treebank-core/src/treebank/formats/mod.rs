//! Output formats
//!
//! - `bracketed`: the token list, the labeled tree in bracketed notation, then
//!   a blank line
//! - `json`: one JSON object per sentence (see [`json`])

pub mod bracketed;
pub mod json;

use crate::treebank::token::{format_token_list, Token};
use crate::treebank::tree::IndexedTree;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Bracketed,
    Json,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("could not serialize sentence: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutputFormat {
    /// Renders one labeled sentence, including its trailing separator.
    pub fn render(self, tokens: &[Token], tree: &IndexedTree) -> Result<String, FormatError> {
        match self {
            OutputFormat::Bracketed => Ok(format!("{}\n{}\n\n", format_token_list(tokens), tree)),
            OutputFormat::Json => Ok(format!("{}\n", json::to_json_line(tokens, tree)?)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bracketed" => Ok(OutputFormat::Bracketed),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected bracketed or json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Bracketed => write!(f, "bracketed"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
