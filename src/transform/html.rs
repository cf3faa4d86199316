// src/transform/html.rs

use std::fs;
use std::path::Path;

use anyhow::Result;
use regex::Regex;

use crate::errors::StepError;
use crate::pipeline::fileset::{FileItem, FileSet};
use crate::pipeline::TransformStep;

/// Nested includes resolve relative to the included file, so a cycle would
/// recurse forever without a cap.
const MAX_INCLUDE_DEPTH: usize = 8;

/// Resolve `@@include('partial.html')` directives.
///
/// Each directive is replaced by the referenced file's contents, resolved
/// relative to the directory of the file containing the directive. Included
/// content is scanned again for directives, relative to its own location.
pub struct IncludeResolve {
    directive: Regex,
}

impl IncludeResolve {
    pub fn new() -> Result<Self> {
        let directive = Regex::new(r#"@@include\(\s*['"]([^'"]+)['"]\s*\)"#)?;
        Ok(Self { directive })
    }

    fn resolve(&self, text: &str, dir: &Path, depth: usize) -> Result<String, StepError> {
        if depth == 0 {
            return Err(StepError::IncludeTooDeep {
                path: dir.to_path_buf(),
            });
        }

        let mut out = String::with_capacity(text.len());
        let mut last_end = 0;

        for caps in self.directive.captures_iter(text) {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let target_rel = &caps[1];
            let target = dir.join(target_rel);

            let included = fs::read_to_string(&target).map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    StepError::MissingInclude {
                        path: target.clone(),
                    }
                } else {
                    StepError::Io {
                        path: target.clone(),
                        source,
                    }
                }
            })?;

            let target_dir = target.parent().unwrap_or(dir);
            let resolved = self.resolve(&included, target_dir, depth - 1)?;

            out.push_str(&text[last_end..whole.start]);
            out.push_str(&resolved);
            last_end = whole.end;
        }

        out.push_str(&text[last_end..]);
        Ok(out)
    }
}

impl TransformStep for IncludeResolve {
    fn name(&self) -> &'static str {
        "include"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut out = FileSet::new();
        for item in set.into_items() {
            // Templates come off disk, so abs_path is present; a synthesized
            // item without one cannot anchor relative includes.
            let Some(dir) = item.abs_path.as_deref().and_then(Path::parent) else {
                out.push(item);
                continue;
            };

            let resolved = self.resolve(item.text()?, dir, MAX_INCLUDE_DEPTH)?;
            out.push(FileItem::new(item.rel_path, resolved.into_bytes()));
        }
        Ok(out)
    }
}

/// Minify HTML with `minify-html` (whitespace collapsing per its defaults).
pub struct HtmlMinify {
    cfg: minify_html::Cfg,
}

impl HtmlMinify {
    pub fn new() -> Self {
        Self {
            cfg: minify_html::Cfg::new(),
        }
    }
}

impl Default for HtmlMinify {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStep for HtmlMinify {
    fn name(&self) -> &'static str {
        "html-minify"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut items = set.into_items();
        for item in &mut items {
            item.contents = minify_html::minify(&item.contents, &self.cfg);
        }
        Ok(FileSet::from_items(items))
    }
}
