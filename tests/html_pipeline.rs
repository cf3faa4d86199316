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
async fn templates_resolve_includes_relative_to_the_including_file() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let templates = tmp.path().join("src/html/templates");
    let partials = tmp.path().join("src/html/partials");
    fs::create_dir_all(&templates)?;
    fs::create_dir_all(&partials)?;

    fs::write(partials.join("header.html"), "<header>site</header>")?;
    fs::write(
        templates.join("index.html"),
        "<body>\n@@include('../partials/header.html')\n<main>content</main>\n</body>\n",
    )?;

    let spec = spec_for(TaskKind::Html, tmp.path())?;
    let files = match run_task(spec, ctx(tmp.path())).await {
        TaskOutcome::Success { files } => files,
        TaskOutcome::Failed { reason } => panic!("html task failed: {reason}"),
    };
    assert_eq!(files, vec!["dist/index.html".to_string()]);

    let html = fs::read_to_string(tmp.path().join("dist/index.html"))?;
    assert!(html.contains("<header>site</header>"), "output: {html}");
    assert!(!html.contains("@@include"), "directive left behind: {html}");
    Ok(())
}

#[tokio::test]
async fn partials_are_not_emitted_as_standalone_pages() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let templates = tmp.path().join("src/html/templates");
    let partials = tmp.path().join("src/html/partials");
    fs::create_dir_all(&templates)?;
    fs::create_dir_all(&partials)?;

    fs::write(partials.join("nav.html"), "<nav/>")?;
    fs::write(templates.join("about.html"), "<p>about</p>")?;

    let spec = spec_for(TaskKind::Html, tmp.path())?;
    let outcome = run_task(spec, ctx(tmp.path())).await;
    assert!(outcome.is_success());

    // Only the templates dir is read; partials feed includes but are not
    // pages themselves.
    assert!(tmp.path().join("dist/about.html").exists());
    assert!(!tmp.path().join("dist/nav.html").exists());
    Ok(())
}

#[tokio::test]
async fn missing_include_target_fails_the_task() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let templates = tmp.path().join("src/html/templates");
    fs::create_dir_all(&templates)?;
    fs::write(
        templates.join("index.html"),
        "@@include('../partials/missing.html')",
    )?;

    let spec = spec_for(TaskKind::Html, tmp.path())?;
    let outcome = run_task(spec, ctx(tmp.path())).await;
    assert!(matches!(outcome, TaskOutcome::Failed { .. }));
    Ok(())
}
