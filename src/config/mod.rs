// src/config/mod.rs

//! Configuration loading and validation for siteforge.
//!
//! The config file only carries behaviour knobs; the source/destination
//! path table is fixed (see [`crate::paths`]) and never read from config.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{BuildSection, ConfigFile, ServerSection};
pub use validate::validate_config;
