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
async fn scripts_concatenate_into_a_single_minified_bundle() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let js = tmp.path().join("src/js");
    fs::create_dir_all(js.join("lib"))?;
    fs::write(js.join("app.js"), "var appReady = true;\n")?;
    fs::write(js.join("lib/util.js"), "var utilReady = true;\n")?;

    let spec = spec_for(TaskKind::Scripts, tmp.path())?;
    let files = match run_task(spec, ctx(tmp.path())).await {
        TaskOutcome::Success { files } => files,
        TaskOutcome::Failed { reason } => panic!("scripts task failed: {reason}"),
    };
    assert_eq!(files, vec!["dist/js/main.min.js".to_string()]);

    let bundle = fs::read_to_string(tmp.path().join("dist/js/main.min.js"))?;
    let app = bundle.find("appReady").expect("app.js content in bundle");
    let util = bundle.find("utilReady").expect("util.js content in bundle");

    // Glob-match order is lexicographic by relative path:
    // "app.js" sorts before "lib/util.js".
    assert!(app < util, "bundle order wrong: {bundle}");

    // Exactly one output file.
    let entries: Vec<_> = fs::read_dir(tmp.path().join("dist/js"))?.collect();
    assert_eq!(entries.len(), 1);
    Ok(())
}
