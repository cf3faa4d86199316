// src/engine/mod.rs

//! The build orchestrator.
//!
//! - [`build`] runs the four content tasks concurrently (plus lint
//!   alongside) for a one-shot build and collects explicit outcomes.
//! - [`develop`] runs the build, then the dev server, then the watch loop
//!   that reacts to file-change triggers until shutdown.

pub mod build;
pub mod develop;

use crate::paths::TaskKind;

pub use build::{run_build, run_content_task, BuildSummary};
pub use develop::{run_develop, run_watch_only};

/// Events driving the develop/watch loop.
#[derive(Debug, Clone, Copy)]
pub enum EngineEvent {
    /// A watched file changed; re-run the mapped task.
    TaskTriggered { kind: TaskKind },
    /// Ctrl-C.
    ShutdownRequested,
}
