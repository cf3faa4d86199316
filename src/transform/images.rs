// src/transform/images.rs

use tracing::debug;

use crate::errors::StepError;
use crate::pipeline::fileset::FileSet;
use crate::pipeline::TransformStep;

/// Lossless image optimization.
///
/// PNGs are recompressed with `oxipng`; every other format passes through
/// byte-identical. Output count always equals input count, and an optimized
/// PNG is only kept when it is not larger than the original.
pub struct ImageOptimize {
    options: oxipng::Options,
}

impl ImageOptimize {
    pub fn new() -> Self {
        Self {
            options: oxipng::Options::from_preset(2),
        }
    }
}

impl Default for ImageOptimize {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStep for ImageOptimize {
    fn name(&self) -> &'static str {
        "image-optimize"
    }

    fn apply(&self, set: FileSet) -> Result<FileSet, StepError> {
        let mut items = set.into_items();
        for item in &mut items {
            if item.extension().as_deref() != Some("png") {
                continue;
            }

            let optimized = oxipng::optimize_from_memory(&item.contents, &self.options)
                .map_err(|e| StepError::transform("image-optimize", e.to_string()))?;

            debug!(
                file = %item.rel_path.display(),
                before = item.contents.len(),
                after = optimized.len(),
                "png optimized"
            );

            if optimized.len() <= item.contents.len() {
                item.contents = optimized;
            }
        }
        Ok(FileSet::from_items(items))
    }
}
