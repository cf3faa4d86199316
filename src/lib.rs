// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lint;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod server;
pub mod tasks;
pub mod transform;
pub mod watch;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::{CliArgs, Command};
use crate::config::load_or_default;
use crate::engine::{run_build, run_content_task, run_develop, run_watch_only};
use crate::paths::TaskKind;
use crate::pipeline::{TaskContext, TaskOutcome};
use crate::server::ServerHandle;

/// High-level entry point used by `main.rs`.
///
/// Dispatches the CLI task:
/// - single content task / lint: run once and exit, propagating failure
/// - `build`: all content tasks plus lint concurrently, then exit
/// - `watch`: watcher only, assumes a prior build
/// - no task: develop mode (build, then dev server, then watcher)
pub async fn run(args: CliArgs) -> Result<()> {
    let root = PathBuf::from(&args.root);
    let cfg = load_or_default(root.join(&args.config))?;

    match args.command {
        Some(Command::Styles) => run_single(TaskKind::Styles, root, cfg).await,
        Some(Command::Scripts) => run_single(TaskKind::Scripts, root, cfg).await,
        Some(Command::Images) => run_single(TaskKind::Images, root, cfg).await,
        Some(Command::Html) => run_single(TaskKind::Html, root, cfg).await,
        Some(Command::Lint) => run_lint_once(root, cfg).await,
        Some(Command::Build) => {
            let ctx = TaskContext {
                root,
                build: cfg.build,
                server: ServerHandle::detached(),
            };
            run_build(&ctx).await.map(|_| ())
        }
        Some(Command::Watch) => run_watch_only(root, cfg).await,
        None => run_develop(root, cfg).await,
    }
}

/// Run one content task once. Unlike `build`, a single-task invocation
/// always propagates the underlying error.
async fn run_single(kind: TaskKind, root: PathBuf, cfg: config::ConfigFile) -> Result<()> {
    let ctx = TaskContext {
        root,
        build: cfg.build,
        server: ServerHandle::detached(),
    };

    match run_content_task(kind, ctx).await {
        TaskOutcome::Success { .. } => Ok(()),
        TaskOutcome::Failed { reason } => bail!("task '{kind}' failed: {reason}"),
    }
}

async fn run_lint_once(root: PathBuf, cfg: config::ConfigFile) -> Result<()> {
    let summary = tokio::task::spawn_blocking(move || lint::run_lint(&root))
        .await
        .context("lint task panicked")??;

    if cfg.build.fail_on_lint && summary.unfixed() > 0 {
        bail!(
            "{} unfixable lint finding(s) (fail_on_lint is set)",
            summary.unfixed()
        );
    }
    Ok(())
}
