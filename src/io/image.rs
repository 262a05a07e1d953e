//! PNG export and output file naming

use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{PaintError, Result};
use crate::io::visualization::create_parent_dir;
use crate::spatial::grid::Canvas;
use crate::spatial::shape::ShapeField;
use std::path::{Path, PathBuf};

/// Save a canvas as an image, creating parent directories as needed
///
/// The format follows the extension of `output_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas(canvas: &Canvas, output_path: &Path) -> Result<()> {
    create_parent_dir(output_path)?;

    canvas
        .to_image()
        .save(output_path)
        .map_err(|e| PaintError::ImageExport {
            path: output_path.into(),
            source: e,
        })
}

/// Parameters that distinguish one generated image from another
#[derive(Clone, Copy, Debug)]
pub struct OutputDescriptor<'a> {
    /// Shape field used for the traversal
    pub shape: ShapeField,
    /// Training region radius
    pub train_region_size: usize,
    /// Generation region radius
    pub gen_region_size: usize,
    /// Training sample target
    pub sample_count: usize,
    /// Palette files the model was trained on
    pub palettes: &'a [PathBuf],
}

impl OutputDescriptor<'_> {
    /// File stem encoding the run parameters and palette names
    ///
    /// For example `circle_train2_gen2_samples2500_sunset-forest`.
    pub fn stem(&self) -> String {
        let palette_names = self
            .palettes
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy())
            .collect::<Vec<_>>()
            .join("-");

        format!(
            "{}_train{}_gen{}_samples{}_{}",
            self.shape, self.train_region_size, self.gen_region_size, self.sample_count, palette_names
        )
    }

    /// Output image path inside `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}{}.png", self.stem(), OUTPUT_SUFFIX))
    }
}

/// Path next to `output_path` with `suffix` appended to the stem and a new
/// extension
///
/// `out/a_result.png` with suffix `_fill` and extension `gif` becomes
/// `out/a_result_fill.gif`.
pub fn sibling_path(output_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = output_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    match output_path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
