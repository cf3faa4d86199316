// src/transform/scripts.rs

use crate::errors::StepError;
use crate::pipeline::fileset::{FileItem, FileSet};
use crate::pipeline::TransformStep;

/// Concatenate every item, in file-set order, into a single named output.
pub struct Concat {
    output: String,
}

impl Concat {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl TransformStep for Concat {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut parts = Vec::with_capacity(set.len());
        for item in set.items() {
            parts.push(item.text()?.to_owned());
        }
        let joined = parts.join("\n");

        let mut out = FileSet::new();
        out.push(FileItem::new(self.output.clone(), joined.into_bytes()));
        Ok(out)
    }
}

/// Minify JavaScript with the `minifier` crate.
pub struct JsMinify;

impl TransformStep for JsMinify {
    fn name(&self) -> &'static str {
        "js-minify"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut out = FileSet::new();
        for item in set.into_items() {
            let minified = minifier::js::minify(item.text()?).to_string();
            out.push(FileItem::new(item.rel_path, minified.into_bytes()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_preserves_set_order() {
        let mut set = FileSet::new();
        set.push(FileItem::new("a.js", b"var a = 1;".to_vec()));
        set.push(FileItem::new("b.js", b"var b = 2;".to_vec()));

        let out = Concat::new("main.js").apply(set).unwrap();
        assert_eq!(out.len(), 1);
        let text = out.items()[0].text().unwrap().to_owned();
        assert!(text.find("var a").unwrap() < text.find("var b").unwrap());
    }

    #[test]
    fn minified_js_is_not_longer() {
        let src = b"var answer   =   42;\n\n// comment\nconsole.log( answer );\n".to_vec();
        let mut set = FileSet::new();
        set.push(FileItem::new("main.js", src.clone()));

        let out = JsMinify.apply(set).unwrap();
        assert!(out.items()[0].contents.len() <= src.len());
    }
}
