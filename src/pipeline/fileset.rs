// src/pipeline/fileset.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::StepError;

/// One file flowing through a task pipeline.
#[derive(Debug, Clone)]
pub struct FileItem {
    /// Path relative to the task's base directory; determines the output
    /// location under the destination directory.
    pub rel_path: PathBuf,
    /// Absolute source path, if the item originated on disk. Synthesized
    /// items (e.g. a concatenation result) have `None`.
    pub abs_path: Option<PathBuf>,
    pub contents: Vec<u8>,
}

impl FileItem {
    pub fn new(rel_path: impl Into<PathBuf>, contents: Vec<u8>) -> Self {
        Self {
            rel_path: rel_path.into(),
            abs_path: None,
            contents,
        }
    }

    /// View the contents as UTF-8 text, for text transforms.
    pub fn text(&self) -> Result<&str, StepError> {
        std::str::from_utf8(&self.contents).map_err(|_| StepError::NotUtf8 {
            path: self.rel_path.clone(),
        })
    }

    /// File extension of the relative path, lowercased.
    pub fn extension(&self) -> Option<String> {
        self.rel_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// Ordered collection of files, in glob-match order.
///
/// Glob-match order is defined as lexicographic by relative path, so
/// concatenation output is deterministic across platforms.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    items: Vec<FileItem>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<FileItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FileItem> {
        self.items
    }

    pub fn push(&mut self, item: FileItem) {
        self.items.push(item);
    }

    /// Read all files under `root` matching `patterns` (root-relative globs)
    /// into memory. Relative paths are computed against `base`.
    ///
    /// A missing base directory or a glob matching nothing yields an empty
    /// set, not an error; the caller decides whether that is acceptable.
    pub fn read_globs(root: &Path, base: &str, patterns: &[String]) -> Result<FileSet> {
        let glob_set = build_globset(patterns)?;
        let base_dir = root.join(base);

        if !base_dir.is_dir() {
            debug!(?base_dir, "source base directory missing; empty file set");
            return Ok(FileSet::new());
        }

        let mut items = Vec::new();
        for entry in WalkDir::new(&base_dir).follow_links(false) {
            let entry = entry.with_context(|| format!("walking {:?}", base_dir))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(root_rel) = relative_str(root, path) else {
                continue;
            };
            if !glob_set.is_match(&root_rel) {
                continue;
            }

            let rel_path = path
                .strip_prefix(&base_dir)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| PathBuf::from(entry.file_name()));

            let contents =
                fs::read(path).with_context(|| format!("reading source file {:?}", path))?;

            items.push(FileItem {
                rel_path,
                abs_path: Some(path.to_path_buf()),
                contents,
            });
        }

        items.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(FileSet { items })
    }

    /// Write every item under `dest_dir`, creating directories as needed.
    /// Returns the written paths.
    pub fn write_to(&self, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.items.len());

        for item in &self.items {
            let out = dest_dir.join(&item.rel_path);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output directory {:?}", parent))?;
            }
            fs::write(&out, &item.contents)
                .with_context(|| format!("writing output file {:?}", out))?;
            written.push(out);
        }

        Ok(written)
    }
}

/// Build a GlobSet from simple string patterns.
///
/// `*` does not cross `/` (so `src/js/*.js` means top-level only); `**`
/// matches any number of components including zero.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = GlobBuilder::new(pat)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Convert a path into a string relative to `root`, with forward slashes.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}
