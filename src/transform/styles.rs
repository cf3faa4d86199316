// src/transform/styles.rs

use std::path::PathBuf;

use crate::errors::StepError;
use crate::pipeline::fileset::{FileItem, FileSet};
use crate::pipeline::TransformStep;

/// Compile SCSS to CSS with `grass`.
///
/// `load_path` is the directory `@use` / `@import` rules resolve against
/// (the SCSS base dir). The output item keeps its relative path with the
/// extension switched to `.css`.
pub struct SassCompile {
    load_path: PathBuf,
}

impl SassCompile {
    pub fn new(load_path: impl Into<PathBuf>) -> Self {
        Self {
            load_path: load_path.into(),
        }
    }
}

impl TransformStep for SassCompile {
    fn name(&self) -> &'static str {
        "sass"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let options = grass::Options::default().load_path(&self.load_path);

        let mut out = FileSet::new();
        for item in set.into_items() {
            let source = item.text()?.to_owned();
            let css = grass::from_string(source, &options)
                .map_err(|e| StepError::transform("sass", e.to_string()))?;

            let mut rel = item.rel_path.clone();
            rel.set_extension("css");
            out.push(FileItem::new(rel, css.into_bytes()));
        }
        Ok(out)
    }
}

/// Minify CSS with the `minifier` crate.
pub struct CssMinify;

impl TransformStep for CssMinify {
    fn name(&self) -> &'static str {
        "css-minify"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut out = FileSet::new();
        for item in set.into_items() {
            let minified = minifier::css::minify(item.text()?)
                .map_err(|e| StepError::transform("css-minify", e.to_string()))?
                .to_string();
            out.push(FileItem::new(item.rel_path, minified.into_bytes()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scss_entry_compiles_to_css() {
        let mut set = FileSet::new();
        set.push(FileItem::new(
            "style.scss",
            b"$c: red;\nbody { color: $c; }\n".to_vec(),
        ));

        let step = SassCompile::new("src/scss");
        let out = step.apply(set).unwrap();
        assert_eq!(out.len(), 1);
        let item = &out.items()[0];
        assert_eq!(item.rel_path.to_string_lossy(), "style.css");
        assert!(item.text().unwrap().contains("color: red"));
    }

    #[test]
    fn invalid_scss_is_a_step_error() {
        let mut set = FileSet::new();
        set.push(FileItem::new("style.scss", b"body { color: ".to_vec()));

        let err = SassCompile::new(".").apply(set).unwrap_err();
        assert!(matches!(err, StepError::Transform { step: "sass", .. }));
    }
}
