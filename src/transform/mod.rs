// src/transform/mod.rs

//! The concrete transform steps.
//!
//! Every step here is a thin wrapper over an external library (or, for
//! renaming/concatenation, plain path and string manipulation). All the
//! actual work of compiling, minifying, and optimizing is delegated:
//!
//! - SCSS compilation: `grass`
//! - CSS / JS minification: `minifier`
//! - HTML minification: `minify-html`
//! - PNG optimization: `oxipng`

pub mod html;
pub mod images;
pub mod rename;
pub mod scripts;
pub mod styles;

pub use html::{HtmlMinify, IncludeResolve};
pub use images::ImageOptimize;
pub use rename::MinSuffix;
pub use scripts::{Concat, JsMinify};
pub use styles::{CssMinify, SassCompile};
