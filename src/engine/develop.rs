// src/engine/develop.rs

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::engine::build::{run_build, run_content_task};
use crate::engine::EngineEvent;
use crate::pipeline::{TaskContext, TaskOutcome};
use crate::server::{DevServer, ServerHandle};
use crate::watch::{build_watch_profiles, spawn_watcher};

/// Develop mode: build to completion, start the dev server, then watch.
///
/// The server is fully started before the watcher begins, so early change
/// events are never handled without a running server to notify. A server
/// bind failure aborts develop mode.
pub async fn run_develop(root: PathBuf, cfg: ConfigFile) -> Result<()> {
    let handle = ServerHandle::new();
    let ctx = TaskContext {
        root: root.clone(),
        build: cfg.build.clone(),
        server: handle.clone(),
    };

    run_build(&ctx).await?;
    let _server = DevServer::start(&root, &cfg.server, handle).await?;

    watch_loop(ctx).await
}

/// Watch-only mode (assumes a prior build): same loop, no server, so
/// notifications are no-ops on a detached handle.
pub async fn run_watch_only(root: PathBuf, cfg: ConfigFile) -> Result<()> {
    let ctx = TaskContext {
        root,
        build: cfg.build.clone(),
        server: ServerHandle::detached(),
    };
    watch_loop(ctx).await
}

/// The develop/watch event loop: one trigger per change event, handled
/// strictly in arrival order, until Ctrl-C.
async fn watch_loop(ctx: TaskContext) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<EngineEvent>(64);

    let profiles = build_watch_profiles()?;
    let _watcher = spawn_watcher(ctx.root.clone(), profiles, tx.clone())?;

    // Ctrl-C -> graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(EngineEvent::ShutdownRequested).await;
        });
    }

    info!("watching for changes (Ctrl-C to stop)");

    while let Some(event) = rx.recv().await {
        match event {
            EngineEvent::TaskTriggered { kind } => {
                info!(task = %kind, "change detected; re-running task");
                match run_content_task(kind, ctx.clone()).await {
                    TaskOutcome::Success { .. } => {
                        // Styles are hot-applied by the task's own stream
                        // notification; everything else needs a full reload.
                        if kind.reload_after() {
                            ctx.server.reload();
                        }
                    }
                    TaskOutcome::Failed { reason } => {
                        warn!(task = %kind, %reason, "task failed; skipping reload");
                    }
                }
            }
            EngineEvent::ShutdownRequested => {
                info!("shutdown requested, stopping watch loop");
                break;
            }
        }
    }

    Ok(())
}
