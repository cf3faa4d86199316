// src/pipeline/mod.rs

//! The pipeline core: an in-memory file-set abstraction, a pure transform
//! step trait, and a sequential task runner.
//!
//! A task is an ordered list of [`TransformStep`]s over a [`FileSet`]. The
//! runner reads the glob matches, applies the steps strictly in sequence,
//! writes the result under the destination directory, and notifies the dev
//! server. Each step is pure over the in-memory set, so tests can invoke a
//! single step without standing up the whole pipeline.

pub mod fileset;
pub mod task;

use crate::errors::StepError;
use fileset::FileSet;

pub use fileset::FileItem;
pub use task::{run_task, TaskContext, TaskOutcome, TaskSpec};

/// One pure transformation over an in-memory file set.
pub trait TransformStep: Send + Sync {
    /// Short step name used in logs and error contexts.
    fn name(&self) -> &'static str;

    /// Apply the transform, consuming the input set.
    fn apply(&self, set: FileSet) -> Result<FileSet, StepError>;
}
