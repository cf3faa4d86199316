// src/engine/build.rs

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::lint::{self, LintSummary};
use crate::paths::TaskKind;
use crate::pipeline::{run_task, TaskContext, TaskOutcome};
use crate::tasks;

/// Explicit result of a one-shot build: one outcome per content task plus
/// the lint summary.
#[derive(Debug)]
pub struct BuildSummary {
    pub tasks: Vec<(&'static str, TaskOutcome)>,
    pub lint: LintSummary,
}

impl BuildSummary {
    /// Names of the content tasks that failed.
    pub fn failed(&self) -> Vec<&'static str> {
        self.tasks
            .iter()
            .filter(|(_, o)| !o.is_success())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Run one content task once, building its spec fresh for this invocation.
pub async fn run_content_task(kind: TaskKind, ctx: TaskContext) -> TaskOutcome {
    match tasks::spec_for(kind, &ctx.root) {
        Ok(spec) => run_task(spec, ctx).await,
        Err(err) => TaskOutcome::Failed {
            reason: format!("{err:#}"),
        },
    }
}

/// One-shot build: the four content tasks run concurrently, lint alongside
/// them. Within a task the stages are strictly sequential; across tasks no
/// ordering is guaranteed or required.
///
/// By default a content-task failure is surfaced in the summary but does not
/// fail the build; `fail_fast` and `fail_on_lint` tighten that.
pub async fn run_build(ctx: &TaskContext) -> Result<BuildSummary> {
    info!("build started");

    let (styles, scripts, images, html, lint) = tokio::join!(
        run_content_task(TaskKind::Styles, ctx.clone()),
        run_content_task(TaskKind::Scripts, ctx.clone()),
        run_content_task(TaskKind::Images, ctx.clone()),
        run_content_task(TaskKind::Html, ctx.clone()),
        run_lint(ctx.root.clone()),
    );

    let summary = BuildSummary {
        tasks: vec![
            (TaskKind::Styles.name(), styles),
            (TaskKind::Scripts.name(), scripts),
            (TaskKind::Images.name(), images),
            (TaskKind::Html.name(), html),
        ],
        lint: lint?,
    };

    let failed = summary.failed();
    for name in &failed {
        warn!(task = %name, "task failed in this build");
    }

    if ctx.build.fail_fast && !failed.is_empty() {
        bail!("build failed: {:?} (fail_fast is set)", failed);
    }
    if ctx.build.fail_on_lint && summary.lint.unfixed() > 0 {
        bail!(
            "build failed: {} unfixable lint finding(s) (fail_on_lint is set)",
            summary.lint.unfixed()
        );
    }

    info!(
        failed = failed.len(),
        lint_findings = summary.lint.total(),
        "build finished"
    );
    Ok(summary)
}

async fn run_lint(root: PathBuf) -> Result<LintSummary> {
    tokio::task::spawn_blocking(move || lint::run_lint(&root))
        .await
        .context("lint task panicked")?
}
