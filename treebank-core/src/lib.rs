//! # treebank-core
//!
//! Builds binarized constituency trees carrying per-node sentiment labels from
//! plain sentences plus span-level annotations.
//!
//! File Layout
//!
//! src/treebank
//!   ├── tokenization   Sentence → tokens (logos based, PTB flavoured)
//!   ├── parsing        The `Parser` seam and the models shipped with the crate
//!   ├── binarization   The `Binarizer` seam, head finders, head-driven binarizer
//!   ├── transforms     Composable stages: collapse, unknown labels, span indexing
//!   ├── formats        Bracketed and JSON renderers, bracketed reader
//!   └── pipeline       Chunk driver tying everything together
//!
//! The contract across the crate is a single one: an annotated chunk goes in,
//! a labeled binary tree comes out. Everything between is a `Runnable` stage.

pub mod treebank;
