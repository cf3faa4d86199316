// src/paths.rs

//! The fixed PathConfig table.
//!
//! Maps each content task to its source glob(s), the base directory relative
//! to which output paths are computed, the watch glob(s), and the destination
//! directory. Immutable for the process lifetime; read by the task builders
//! and by the watcher. The watch globs are non-overlapping, so every watched
//! path maps unambiguously to exactly one task.

/// The four content tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Styles,
    Scripts,
    Images,
    Html,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Styles,
        TaskKind::Scripts,
        TaskKind::Images,
        TaskKind::Html,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Styles => "styles",
            TaskKind::Scripts => "scripts",
            TaskKind::Images => "images",
            TaskKind::Html => "html",
        }
    }

    /// Whether a watch-triggered run of this task is followed by a full
    /// browser reload. Styles are hot-applied via the stream channel only.
    pub fn reload_after(self) -> bool {
        !matches!(self, TaskKind::Styles)
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static path entry for one content task.
#[derive(Debug, Clone, Copy)]
pub struct TaskPaths {
    pub kind: TaskKind,
    /// Globs selecting the files the task reads, relative to the project root.
    pub sources: &'static [&'static str],
    /// Directory the output paths are computed relative to.
    pub base: &'static str,
    /// Globs whose changes re-trigger the task in watch mode.
    pub watch: &'static [&'static str],
    /// Output directory, relative to the project root.
    pub dest: &'static str,
}

/// Styles compile only the entry point but watch the whole SCSS tree;
/// html reads only the template dir but watches partials too.
pub const TASK_PATHS: [TaskPaths; 4] = [
    TaskPaths {
        kind: TaskKind::Styles,
        sources: &["src/scss/style.scss"],
        base: "src/scss",
        watch: &["src/scss/**/*.scss"],
        dest: "dist/css",
    },
    TaskPaths {
        kind: TaskKind::Scripts,
        sources: &["src/js/**/*.js"],
        base: "src/js",
        watch: &["src/js/**/*.js"],
        dest: "dist/js",
    },
    TaskPaths {
        kind: TaskKind::Images,
        sources: &["src/images/**/*"],
        base: "src/images",
        watch: &["src/images/**/*"],
        dest: "dist/images",
    },
    TaskPaths {
        kind: TaskKind::Html,
        sources: &["src/html/templates/*.html"],
        base: "src/html/templates",
        watch: &["src/html/**/*.html"],
        dest: "dist",
    },
];

/// Globs the lint task reads (top-level scripts only, matching the original
/// wiring; fixes are written back in place).
pub const LINT_SOURCES: &[&str] = &["src/js/*.js"];

/// Base directory for lint sources.
pub const LINT_BASE: &str = "src/js";

/// Directory the dev server serves.
pub const SERVE_DIR: &str = "dist";

/// Look up the path entry for a task.
pub fn task_paths(kind: TaskKind) -> &'static TaskPaths {
    match kind {
        TaskKind::Styles => &TASK_PATHS[0],
        TaskKind::Scripts => &TASK_PATHS[1],
        TaskKind::Images => &TASK_PATHS[2],
        TaskKind::Html => &TASK_PATHS[3],
    }
}
