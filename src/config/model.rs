// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [build]
/// fail_fast = false
/// fail_on_lint = false
/// fail_on_empty_glob = false
///
/// [server]
/// port = 3000
/// ```
///
/// All sections are optional and have defaults matching the permissive
/// original behaviour: content-task failures are surfaced but do not fail
/// the build, lint never fails it, and an empty source glob silently
/// produces no output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Build behaviour knobs from `[build]`.
    #[serde(default)]
    pub build: BuildSection,

    /// Dev server settings from `[server]`.
    #[serde(default)]
    pub server: ServerSection,
}

/// `[build]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSection {
    /// If true, a content-task failure aborts `build` with a non-zero exit.
    ///
    /// Default false: the failure is logged in the build summary and the
    /// process still exits zero.
    #[serde(default)]
    pub fail_fast: bool,

    /// If true, unfixable lint findings fail the build.
    #[serde(default)]
    pub fail_on_lint: bool,

    /// If true, a source glob matching zero files is a task failure instead
    /// of an empty (but successful) output.
    #[serde(default)]
    pub fail_on_empty_glob: bool,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// TCP port the dev server binds on `127.0.0.1`.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}
