// src/watch/mod.rs

//! File watching.
//!
//! This module is responsible for:
//! - Compiling the fixed watch globs into per-task matchers (`patterns.rs`).
//! - Wiring up a cross-platform filesystem watcher (`watcher.rs`, `notify`).
//!
//! It does **not** run tasks itself; it only turns filesystem change events
//! into task-level triggers on the engine's event channel. Every event is
//! forwarded independently: no debouncing, batching, or coalescing.

pub mod patterns;
pub mod watcher;

pub use patterns::{build_watch_profiles, TaskWatchProfile};
pub use watcher::{spawn_watcher, WatcherHandle};
