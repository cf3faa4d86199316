// src/watch/patterns.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::GlobSet;

use crate::paths::{TaskKind, TASK_PATHS};
use crate::pipeline::fileset::build_globset;

/// Compiled watch globs for a single task.
///
/// The patterns are relative to the project root; the watcher passes
/// root-relative paths (e.g. `"src/js/app.js"`) into `matches`.
#[derive(Clone)]
pub struct TaskWatchProfile {
    kind: TaskKind,
    watch_set: GlobSet,
}

impl fmt::Debug for TaskWatchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskWatchProfile")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl TaskWatchProfile {
    /// The task this profile triggers.
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns true if this task is interested in the given path
    /// (relative to the project root).
    pub fn matches(&self, rel_path: &str) -> bool {
        self.watch_set.is_match(rel_path)
    }
}

/// Compile one watch profile per content task from the fixed path table.
pub fn build_watch_profiles() -> Result<Vec<TaskWatchProfile>> {
    let mut profiles = Vec::with_capacity(TASK_PATHS.len());

    for entry in &TASK_PATHS {
        let patterns: Vec<String> = entry.watch.iter().map(|s| s.to_string()).collect();
        let watch_set = build_globset(&patterns)
            .with_context(|| format!("building watch globset for task {}", entry.kind))?;

        profiles.push(TaskWatchProfile {
            kind: entry.kind,
            watch_set,
        });
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(kind: TaskKind) -> TaskWatchProfile {
        build_watch_profiles()
            .unwrap()
            .into_iter()
            .find(|p| p.kind() == kind)
            .unwrap()
    }

    #[test]
    fn each_watched_path_maps_to_exactly_one_task() {
        let profiles = build_watch_profiles().unwrap();
        let cases = [
            ("src/scss/components/_nav.scss", TaskKind::Styles),
            ("src/js/app.js", TaskKind::Scripts),
            ("src/images/logo.png", TaskKind::Images),
            ("src/html/partials/header.html", TaskKind::Html),
            ("src/html/templates/index.html", TaskKind::Html),
        ];

        for (path, expected) in cases {
            let matched: Vec<_> = profiles
                .iter()
                .filter(|p| p.matches(path))
                .map(|p| p.kind())
                .collect();
            assert_eq!(matched, vec![expected], "for {path}");
        }
    }

    #[test]
    fn output_and_unrelated_paths_match_nothing() {
        let profiles = build_watch_profiles().unwrap();
        for path in ["dist/css/style.min.css", "README.md", "src/js/notes.txt"] {
            assert!(profiles.iter().all(|p| !p.matches(path)), "for {path}");
        }
    }

    #[test]
    fn styles_watch_the_whole_scss_tree_not_just_the_entry() {
        let styles = profile(TaskKind::Styles);
        assert!(styles.matches("src/scss/style.scss"));
        assert!(styles.matches("src/scss/deep/nested/_mixins.scss"));
    }
}
