//! Dataset building
//!
//! [`DatasetBuilder`] drives each chunk through the same fixed sequence:
//!
//! 1. tokenize the sentence line
//! 2. extract annotation spans (a malformed line aborts here, before parsing)
//! 3. parse, binarize, mark unknown labels, collapse unaries, index spans
//!    (the [`standard`](crate::treebank::transforms::standard) transform)
//! 4. project the annotated spans
//! 5. emit
//!
//! Chunks are independent: every chunk gets fresh tokens, a fresh span map and
//! a fresh tree. A chunk is written out completely before the next one is
//! read, and the first failure stops the run.

use crate::treebank::annotation::{extract_all, AnnotationError};
use crate::treebank::binarization::Binarizer;
use crate::treebank::chunking::{split_chunks, Chunk};
use crate::treebank::formats::{FormatError, OutputFormat};
use crate::treebank::parsing::Parser;
use crate::treebank::projection::{project_labels, ProjectionReport};
use crate::treebank::token::Token;
use crate::treebank::tokenization::Tokenizer;
use crate::treebank::transforms::standard::{build_tree_transform, TreeTransform};
use crate::treebank::transforms::TransformError;
use crate::treebank::tree::{IndexedTree, UNKNOWN_LABEL};
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
    #[error("chunk {chunk}: {source}")]
    Transform {
        chunk: usize,
        #[source]
        source: TransformError,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Knobs of the pipeline that don't concern the parser or binarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub tokenizer: Tokenizer,
    pub unknown_label: String,
    pub format: OutputFormat,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        PipelineSettings {
            tokenizer: Tokenizer::new(),
            unknown_label: UNKNOWN_LABEL.to_string(),
            format: OutputFormat::Bracketed,
        }
    }
}

/// A fully processed chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSentence {
    pub tokens: Vec<Token>,
    pub tree: IndexedTree,
    pub report: ProjectionReport,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sentences: usize,
    pub applied: usize,
    pub dropped: usize,
}

pub struct DatasetBuilder {
    tokenizer: Tokenizer,
    transform: TreeTransform,
    format: OutputFormat,
}

impl DatasetBuilder {
    pub fn new(
        parser: Arc<dyn Parser>,
        binarizer: Arc<dyn Binarizer>,
        settings: PipelineSettings,
    ) -> Self {
        DatasetBuilder {
            tokenizer: settings.tokenizer,
            transform: build_tree_transform(parser, binarizer, &settings.unknown_label),
            format: settings.format,
        }
    }

    /// Runs one chunk through every stage, without emitting it.
    pub fn process_chunk(&self, chunk: &Chunk<'_>) -> Result<LabeledSentence, DatasetError> {
        let tokens = self.tokenizer.tokenize(chunk.sentence);
        let labels = extract_all(&tokens, chunk.annotations.iter().copied())?;

        let mut tree = self
            .transform
            .run(tokens.clone())
            .map_err(|source| DatasetError::Transform {
                chunk: chunk.index,
                source,
            })?;
        let report = project_labels(&mut tree, &labels);

        debug!(
            chunk = chunk.index,
            tokens = tokens.len(),
            applied = report.applied.len(),
            dropped = report.dropped.len(),
            "labeled sentence"
        );
        Ok(LabeledSentence {
            tokens,
            tree,
            report,
        })
    }

    /// Processes all chunks of `input` in order, writing each one to `out`
    /// as soon as it is done.
    pub fn run<W: Write>(&self, input: &str, out: &mut W) -> Result<RunSummary, DatasetError> {
        let mut summary = RunSummary::default();
        for chunk in split_chunks(input) {
            let sentence = self.process_chunk(&chunk)?;
            out.write_all(self.format.render(&sentence.tokens, &sentence.tree)?.as_bytes())?;
            out.flush()?;

            summary.sentences += 1;
            summary.applied += sentence.report.applied.len();
            summary.dropped += sentence.report.dropped.len();
        }
        info!(
            sentences = summary.sentences,
            applied = summary.applied,
            dropped = summary.dropped,
            "dataset built"
        );
        Ok(summary)
    }
}
