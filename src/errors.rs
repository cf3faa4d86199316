// src/errors.rs

//! Crate-wide error types.
//!
//! Top-level orchestration uses `anyhow` throughout; `StepError` is the
//! structured failure type produced by individual pipeline transform steps,
//! which the task runner folds into a `TaskOutcome::Failed`.

use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Failure of a single transform step inside a task pipeline.
#[derive(Debug, Error)]
pub enum StepError {
    /// The underlying transformation library rejected the input
    /// (e.g. invalid SCSS syntax, corrupt PNG).
    #[error("{step}: {message}")]
    Transform { step: &'static str, message: String },

    /// A text transform was applied to a file that is not valid UTF-8.
    #[error("{path}: not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    /// An `@@include` directive pointed at a file that does not exist.
    #[error("include target not found: {path}")]
    MissingInclude { path: PathBuf },

    /// Include directives nested deeper than the recursion limit
    /// (almost always an include cycle).
    #[error("include depth limit exceeded at {path}")]
    IncludeTooDeep { path: PathBuf },

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StepError {
    pub fn transform(step: &'static str, message: impl Into<String>) -> Self {
        StepError::Transform {
            step,
            message: message.into(),
        }
    }
}
