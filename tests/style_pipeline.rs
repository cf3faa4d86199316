use std::error::Error;
use std::fs;
use std::path::Path;

use siteforge::config::BuildSection;
use siteforge::paths::TaskKind;
use siteforge::pipeline::{run_task, TaskContext, TaskOutcome};
use siteforge::server::ServerHandle;
use siteforge::tasks::spec_for;

type TestResult = Result<(), Box<dyn Error>>;

fn ctx(root: &Path) -> TaskContext {
    TaskContext {
        root: root.to_path_buf(),
        build: BuildSection::default(),
        server: ServerHandle::detached(),
    }
}

#[tokio::test]
async fn styles_produce_exactly_one_min_suffixed_css_file() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let scss = tmp.path().join("src/scss");
    fs::create_dir_all(&scss)?;
    fs::write(scss.join("_colors.scss"), "$accent: #ff0000;\n")?;
    fs::write(
        scss.join("style.scss"),
        "@import 'colors';\nbody { color: $accent; }\n",
    )?;

    let spec = spec_for(TaskKind::Styles, tmp.path())?;
    let files = match run_task(spec, ctx(tmp.path())).await {
        TaskOutcome::Success { files } => files,
        TaskOutcome::Failed { reason } => panic!("styles task failed: {reason}"),
    };
    assert_eq!(files, vec!["dist/css/style.min.css".to_string()]);

    let css = fs::read_to_string(tmp.path().join("dist/css/style.min.css"))?;
    assert!(css.contains("body"), "compiled css: {css}");
    assert!(!css.contains('$'), "variables must be resolved: {css}");

    // Exactly one output file.
    let entries: Vec<_> = fs::read_dir(tmp.path().join("dist/css"))?.collect();
    assert_eq!(entries.len(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_scss_is_a_failed_outcome_not_a_panic() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let scss = tmp.path().join("src/scss");
    fs::create_dir_all(&scss)?;
    fs::write(scss.join("style.scss"), "body { color: ")?;

    let spec = spec_for(TaskKind::Styles, tmp.path())?;
    let outcome = run_task(spec, ctx(tmp.path())).await;

    assert!(matches!(outcome, TaskOutcome::Failed { .. }));
    assert!(!tmp.path().join("dist/css").exists());
    Ok(())
}

#[tokio::test]
async fn empty_glob_is_success_with_no_output_by_default() -> TestResult {
    let tmp = tempfile::tempdir()?;

    let spec = spec_for(TaskKind::Styles, tmp.path())?;
    let files = match run_task(spec, ctx(tmp.path())).await {
        TaskOutcome::Success { files } => files,
        TaskOutcome::Failed { reason } => panic!("expected success on empty glob: {reason}"),
    };
    assert!(files.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_glob_fails_when_configured() -> TestResult {
    let tmp = tempfile::tempdir()?;

    let spec = spec_for(TaskKind::Styles, tmp.path())?;
    let mut context = ctx(tmp.path());
    context.build.fail_on_empty_glob = true;

    let outcome = run_task(spec, context).await;
    assert!(matches!(outcome, TaskOutcome::Failed { .. }));
    Ok(())
}
