// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `siteforge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "siteforge",
    version,
    about = "Fixed-layout static site asset builder with dev server and file watching.",
    long_about = None
)]
pub struct CliArgs {
    /// Task to run. With no task, runs develop mode:
    /// build, then dev server, then watch.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the optional config file (TOML), relative to the project root.
    ///
    /// A missing file is not an error; all settings have defaults.
    #[arg(long, value_name = "PATH", default_value = "Siteforge.toml")]
    pub config: String,

    /// Project root directory containing `src/` and `dist/`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SITEFORGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// One invokable task.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Compile the SCSS entry point, minify, write to dist/css.
    Styles,
    /// Concatenate and minify scripts into dist/js/main.min.js.
    Scripts,
    /// Optimize images into dist/images.
    Images,
    /// Resolve template includes, minify, write to dist.
    Html,
    /// Run style checks over scripts with auto-fix.
    Lint,
    /// Run all content tasks plus lint concurrently, then exit.
    Build,
    /// Watch source globs only (assumes a prior build); blocks until Ctrl-C.
    Watch,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
