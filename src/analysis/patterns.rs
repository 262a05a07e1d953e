//! Palette image loading and resampling to a fixed training size

use crate::io::error::{PaintError, Result};
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Load a palette image as RGB and resize it to about `sample_count` pixels
///
/// Alpha is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a decodable image format
pub fn load_palette_image<P: AsRef<Path>>(path: P, sample_count: usize) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PaintError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(resize_to_sample_count(&img.to_rgb8(), sample_count))
}

/// Dimensions preserving the aspect ratio of `width` × `height` with about
/// `sample_count` pixels
///
/// Both sides are scaled by `sqrt(sample_count / (width * height))` and
/// rounded; neither side drops below 1.
pub fn sample_dimensions(width: u32, height: u32, sample_count: usize) -> (u32, u32) {
    let area = f64::from(width.max(1)) * f64::from(height.max(1));
    let factor = (sample_count as f64 / area).sqrt();

    let scale = |side: u32| (f64::from(side) * factor).round().max(1.0) as u32;
    (scale(width), scale(height))
}

/// Resample an image so its pixel count is about `sample_count`
///
/// Nearest-neighbor sampling is used so the resized image only contains colors
/// present in the original.
pub fn resize_to_sample_count(img: &RgbImage, sample_count: usize) -> RgbImage {
    let (width, height) = sample_dimensions(img.width(), img.height(), sample_count);
    if (width, height) == img.dimensions() {
        return img.clone();
    }
    imageops::resize(img, width, height, FilterType::Nearest)
}
