//! Binarized sentiment treebank construction
//!
//! A chunk of input looks like this:
//!
//!     The movie was great.
//!     POS was great
//!     NEG movie
//!
//! Line 0 is tokenized and parsed; every further line assigns a label to a
//! token subsequence. The resulting tree is binarized, every internal label is
//! reset to the unknown sentinel, unary chains are collapsed, spans are indexed
//! and finally the annotated spans are projected onto the matching nodes.

pub mod annotation;
pub mod binarization;
pub mod chunking;
pub mod formats;
pub mod loader;
pub mod parsing;
pub mod pipeline;
pub mod projection;
pub mod testing;
pub mod token;
pub mod tokenization;
pub mod transforms;
pub mod tree;

pub use annotation::{extract_spans, AnnotationError, SpanLabelMap};
pub use pipeline::{DatasetBuilder, DatasetError, LabeledSentence};
pub use token::Token;
pub use tree::{IndexedTree, Span, Tree, TreeError, UNKNOWN_LABEL};
