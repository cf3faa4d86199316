// src/tasks.rs

//! Assembles each content task's [`TaskSpec`] from the fixed path table and
//! the transform steps.
//!
//! - styles:  entry SCSS -> sass -> css-minify -> min-suffix -> dist/css
//! - scripts: all JS -> concat(main.js) -> js-minify -> min-suffix -> dist/js
//! - images:  all images -> image-optimize -> dist/images
//! - html:    templates -> include -> html-minify -> dist

use std::path::Path;

use anyhow::Result;

use crate::paths::{task_paths, TaskKind};
use crate::pipeline::{TaskSpec, TransformStep};
use crate::transform::{
    Concat, CssMinify, HtmlMinify, ImageOptimize, IncludeResolve, JsMinify, MinSuffix, SassCompile,
};

/// The concatenated script bundle name (becomes `main.min.js` after the
/// suffix step).
pub const SCRIPT_BUNDLE: &str = "main.js";

/// Build the spec for one content task. `root` is needed because the SCSS
/// load path must be absolute.
pub fn spec_for(kind: TaskKind, root: &Path) -> Result<TaskSpec> {
    let entry = task_paths(kind);

    let steps: Vec<Box<dyn TransformStep>> = match kind {
        TaskKind::Styles => vec![
            Box::new(SassCompile::new(root.join(entry.base))),
            Box::new(CssMinify),
            Box::new(MinSuffix),
        ],
        TaskKind::Scripts => vec![
            Box::new(Concat::new(SCRIPT_BUNDLE)),
            Box::new(JsMinify),
            Box::new(MinSuffix),
        ],
        TaskKind::Images => vec![Box::new(ImageOptimize::new())],
        TaskKind::Html => vec![Box::new(IncludeResolve::new()?), Box::new(HtmlMinify::new())],
    };

    Ok(TaskSpec {
        name: entry.kind.name(),
        sources: entry.sources.iter().map(|s| s.to_string()).collect(),
        base: entry.base.to_string(),
        dest: entry.dest.to_string(),
        steps,
    })
}
