//! Input loading
//!
//! `InputLoader` reads annotated input from a file or a string and hands it to
//! a [`DatasetBuilder`]. It is used by the CLI and by tests.
//!
//! ```rust,ignore
//! let loader = InputLoader::from_path("train.txt")?;
//! let summary = loader.build(&builder, &mut std::io::stderr())?;
//! ```

use crate::treebank::chunking::{split_chunks, Chunk};
use crate::treebank::pipeline::{DatasetBuilder, DatasetError, LabeledSentence, RunSummary};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("could not read input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

pub struct InputLoader {
    source: String,
}

impl InputLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(InputLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        InputLoader {
            source: source.into(),
        }
    }

    pub fn chunks(&self) -> Vec<Chunk<'_>> {
        split_chunks(&self.source)
    }

    /// Processes every chunk without emitting anything.
    pub fn label_all(&self, builder: &DatasetBuilder) -> Result<Vec<LabeledSentence>, LoaderError> {
        self.chunks()
            .iter()
            .map(|chunk| builder.process_chunk(chunk).map_err(LoaderError::from))
            .collect()
    }

    /// Processes and emits every chunk.
    pub fn build<W: Write>(
        &self,
        builder: &DatasetBuilder,
        out: &mut W,
    ) -> Result<RunSummary, LoaderError> {
        Ok(builder.run(&self.source, out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::binarization::TreeBinarizer;
    use crate::treebank::parsing::lexicon::FlatParser;
    use crate::treebank::pipeline::PipelineSettings;
    use std::sync::Arc;

    fn builder() -> DatasetBuilder {
        DatasetBuilder::new(
            Arc::new(FlatParser::english()),
            Arc::new(TreeBinarizer::default()),
            PipelineSettings::default(),
        )
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Nice.\nPOS Nice\n").unwrap();
        let loader = InputLoader::from_path(file.path()).unwrap();
        assert_eq!(loader.chunks().len(), 1);

        let mut out = Vec::new();
        let summary = loader.build(&builder(), &mut out).unwrap();
        assert_eq!(summary.sentences, 1);
        assert_eq!(summary.applied, 1);
    }

    #[test]
    fn test_missing_file() {
        let err = InputLoader::from_path("/no/such/input.txt").err().unwrap();
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().contains("/no/such/input.txt"));
    }

    #[test]
    fn test_label_all() {
        let loader = InputLoader::from_string("One.\n\nTwo.\n");
        let sentences = loader.label_all(&builder()).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].tokens[0].word(), "Two");
    }
}
