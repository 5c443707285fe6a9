//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait.

pub mod binarize;
pub mod collapse_unary;
pub mod index_spans;
pub mod parse;
pub mod unknown_labels;

pub use binarize::Binarize;
pub use collapse_unary::{collapse_unaries, CollapseUnaries};
pub use index_spans::IndexSpans;
pub use parse::Parse;
pub use unknown_labels::{mark_unknown, MarkUnknownLabels};
