//! Transform pipeline infrastructure
//!
//! Every step that turns a token sequence into an indexed binary tree is a
//! stage implementing [`Runnable`]. Stages are chained with [`Transform::then`],
//! and the compiler checks that each stage's output feeds the next one's input:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Parse::new(parser))          // Vec<Token> → Tree
//!     .then(Binarize::new(binarizer))    // Tree → Tree
//!     .then(MarkUnknownLabels::new())    // Tree → Tree
//!     .then(CollapseUnaries::new())      // Tree → Tree
//!     .then(IndexSpans::new());          // Tree → IndexedTree
//! ```
//!
//! # Module Organization
//!
//! - [`stages`]: the individual stages
//! - [`standard`]: the stage chain used by the dataset builder

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl TransformError {
    pub fn stage(stage: &str, err: impl std::fmt::Display) -> Self {
        TransformError::StageFailed {
            stage: stage.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual transformation stages.
/// The `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`.
/// Transforms are `Send + Sync`, so one built at startup can be shared.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
