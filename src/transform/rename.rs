// src/transform/rename.rs

use std::path::{Path, PathBuf};

use crate::errors::StepError;
use crate::pipeline::fileset::FileSet;
use crate::pipeline::TransformStep;

/// Insert `.min` before the final extension of every item
/// (`style.css` -> `style.min.css`). Items without an extension are left
/// unchanged.
pub struct MinSuffix;

impl TransformStep for MinSuffix {
    fn name(&self) -> &'static str {
        "min-suffix"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut items = set.into_items();
        for item in &mut items {
            item.rel_path = with_min_suffix(&item.rel_path);
        }
        Ok(FileSet::from_items(items))
    }
}

fn with_min_suffix(path: &Path) -> PathBuf {
    let (Some(stem), Some(ext)) = (path.file_stem(), path.extension()) else {
        return path.to_path_buf();
    };

    let file_name = format!(
        "{}.min.{}",
        stem.to_string_lossy(),
        ext.to_string_lossy()
    );
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fileset::FileItem;

    #[test]
    fn suffix_goes_before_the_extension() {
        let mut set = FileSet::new();
        set.push(FileItem::new("css/style.css", Vec::new()));
        set.push(FileItem::new("main.js", Vec::new()));
        set.push(FileItem::new("LICENSE", Vec::new()));

        let out = MinSuffix.apply(set).unwrap();
        let names: Vec<_> = out
            .items()
            .iter()
            .map(|i| i.rel_path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["css/style.min.css", "main.min.js", "LICENSE"]);
    }
}
