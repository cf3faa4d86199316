// src/pipeline/task.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, error, info};

use crate::config::BuildSection;
use crate::pipeline::fileset::{relative_str, FileSet};
use crate::pipeline::TransformStep;
use crate::server::ServerHandle;

/// Static description of one content task: where it reads, the ordered
/// transform steps it applies, and where it writes.
pub struct TaskSpec {
    pub name: &'static str,
    /// Source globs, relative to the project root.
    pub sources: Vec<String>,
    /// Directory output paths are computed relative to.
    pub base: String,
    /// Output directory, relative to the project root.
    pub dest: String,
    pub steps: Vec<Box<dyn TransformStep>>,
}

/// Explicit per-invocation result, in place of fire-and-forget logging.
///
/// The orchestrator decides (configurably) whether a failure aborts the
/// overall build or is merely surfaced.
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    /// Written output paths, relative to the project root. Empty when the
    /// source glob matched nothing.
    Success { files: Vec<String> },
    Failed { reason: String },
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success { .. })
    }
}

/// Everything a task invocation needs, passed explicitly rather than
/// captured from enclosing scope.
#[derive(Clone)]
pub struct TaskContext {
    pub root: PathBuf,
    pub build: BuildSection,
    pub server: ServerHandle,
}

/// Run one task to completion: read glob matches, apply the steps in
/// sequence, write outputs, notify the dev server stream.
///
/// The synchronous pipeline body runs on the blocking pool so concurrent
/// tasks do not stall the event loop on CPU-heavy transforms.
pub async fn run_task(spec: TaskSpec, ctx: TaskContext) -> TaskOutcome {
    let name = spec.name;
    let root = ctx.root.clone();
    let build = ctx.build.clone();

    let joined = tokio::task::spawn_blocking(move || execute(&spec, &root, &build)).await;

    match joined {
        Ok(Ok(files)) => {
            info!(task = %name, files = files.len(), "task completed");
            if !files.is_empty() {
                ctx.server.stream(files.clone());
            }
            TaskOutcome::Success { files }
        }
        Ok(Err(err)) => {
            error!(task = %name, error = %format!("{err:#}"), "task failed");
            TaskOutcome::Failed {
                reason: format!("{err:#}"),
            }
        }
        Err(join_err) => {
            error!(task = %name, error = %join_err, "task panicked");
            TaskOutcome::Failed {
                reason: format!("task '{name}' panicked: {join_err}"),
            }
        }
    }
}

fn execute(spec: &TaskSpec, root: &Path, build: &BuildSection) -> Result<Vec<String>> {
    let mut set = FileSet::read_globs(root, &spec.base, &spec.sources)?;

    if set.is_empty() {
        if build.fail_on_empty_glob {
            bail!(
                "task '{}': no files matched {:?} and fail_on_empty_glob is set",
                spec.name,
                spec.sources
            );
        }
        debug!(task = %spec.name, "no source files matched; nothing to do");
        return Ok(Vec::new());
    }

    for step in &spec.steps {
        debug!(task = %spec.name, step = %step.name(), files = set.len(), "applying step");
        set = step
            .apply(set)
            .with_context(|| format!("step '{}' in task '{}'", step.name(), spec.name))?;
    }

    let dest_dir = root.join(&spec.dest);
    let written = set.write_to(&dest_dir)?;

    Ok(written
        .iter()
        .filter_map(|p| relative_str(root, p))
        .collect())
}
