//! Input chunking
//!
//! Input is a sequence of chunks separated by one or more blank lines. A
//! chunk's first line is the sentence; the rest are annotation lines.

use once_cell::sync::Lazy;
use regex::Regex;

static CHUNK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// One sentence and its annotation lines, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position of the chunk among the non-blank chunks, from 0.
    pub index: usize,
    pub sentence: &'a str,
    pub annotations: Vec<&'a str>,
}

/// Splits raw input into chunks, in input order. Chunks that are blank after
/// trimming are skipped.
pub fn split_chunks(input: &str) -> Vec<Chunk<'_>> {
    CHUNK_SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(index, chunk)| {
            let mut lines = chunk.lines().map(str::trim_end);
            let sentence = lines.next().unwrap_or_default();
            Chunk {
                index,
                sentence,
                annotations: lines.collect(),
            }
        })
        .collect()
}
