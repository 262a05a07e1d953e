//! Fill-order GIF capture and vector field plots

use crate::io::configuration::{
    FIELD_PLOT_GAP, MAX_GIF_FRAMES, MIN_DIRECTION_WEIGHT, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{PaintError, Result};
use crate::spatial::grid::UNSET_COLOR;
use crate::spatial::shape::{DOWN, LEFT, RIGHT, ShapeField, UP};
use image::{Frame, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// A single pixel coloring event
#[derive(Debug, Clone, Copy)]
pub struct PixelPlacement {
    /// Canvas column
    pub x: i32,
    /// Canvas row
    pub y: i32,
    /// Color assigned to the pixel
    pub color: [u8; 3],
}

/// Records the order in which pixels are colored
///
/// Enables post-processing visualization of how the flood fill spreads
pub struct VisualizationCapture {
    pub(crate) placements: Vec<PixelPlacement>,
    width: usize,
    height: usize,
}

impl VisualizationCapture {
    /// Create an empty capture for a canvas of the given size
    pub fn new(width: usize, height: usize, expected_placements: usize) -> Self {
        Self {
            placements: Vec::with_capacity(expected_placements),
            width,
            height,
        }
    }

    /// Records a pixel coloring at the given position
    pub fn record_pixel(&mut self, point: [i32; 2], color: [u8; 3]) {
        self.placements.push(PixelPlacement {
            x: point[0],
            y: point[1],
            color,
        });
    }

    /// Returns all recorded placement events
    pub fn get_placements(&self) -> &[PixelPlacement] {
        &self.placements
    }

    /// Returns the total number of placement events
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured fill order as an animated GIF
    ///
    /// Placements are grouped so that at most `MAX_GIF_FRAMES` intermediate
    /// frames are written. Delays shorter than viewers support are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`, and the final frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No pixel placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(PaintError::InvalidParameter {
                parameter: "visualization",
                value: "0 placements".to_string(),
                reason: "No pixel placements captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        create_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| PaintError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        let mut encode = |img: &RgbaImage, delay: u32| {
            encoder
                .encode_frame(Self::frame(img, delay))
                .map_err(|e| PaintError::ImageExport {
                    path: output_path.into(),
                    source: e,
                })
        };

        let [r, g, b] = UNSET_COLOR;
        let mut img = RgbaImage::from_pixel(
            self.width as u32,
            self.height as u32,
            Rgba([r, g, b, 255]),
        );
        encode(&img, delay_ms)?;

        for chunk in self.placements.chunks(self.placements_per_frame()) {
            for placement in chunk {
                let [r, g, b] = placement.color;
                if let Some(pixel) =
                    img.get_pixel_mut_checked(placement.x as u32, placement.y as u32)
                {
                    *pixel = Rgba([r, g, b, 255]);
                }
            }
            encode(&img, delay_ms)?;
        }

        // Final frame displays longer for better visibility
        encode(&img, delay_ms * 25)
    }

    /// Placements folded into each intermediate frame
    pub fn placements_per_frame(&self) -> usize {
        self.placements.len().div_ceil(MAX_GIF_FRAMES).max(1)
    }

    fn frame(img: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            img.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}

/// Render a shape field as two grayscale panels
///
/// The left panel shows the horizontal component (the larger of the right and
/// left weights), the right panel the vertical component. Weights are clamped
/// the same way the traversal clamps them and scaled so the strongest weight in
/// the field is white.
pub fn render_vector_field(
    shape: ShapeField,
    width: usize,
    height: usize,
    strength_x: f64,
    strength_y: f64,
) -> RgbImage {
    let mut x_panel = Vec::with_capacity(width * height);
    let mut y_panel = Vec::with_capacity(width * height);
    let mut max_weight = MIN_DIRECTION_WEIGHT;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let weights = shape
                .weights(x, y, width, height, strength_x, strength_y)
                .map(|w| if w.is_nan() { MIN_DIRECTION_WEIGHT } else { w.max(MIN_DIRECTION_WEIGHT) });
            let horizontal = weights[RIGHT].max(weights[LEFT]);
            let vertical = weights[DOWN].max(weights[UP]);
            max_weight = max_weight.max(horizontal).max(vertical);
            x_panel.push(horizontal);
            y_panel.push(vertical);
        }
    }

    let (w, h) = (width as u32, height as u32);
    let mut img = RgbImage::from_pixel(w * 2 + FIELD_PLOT_GAP, h, Rgb([255, 255, 255]));
    let shade = |weight: f64| {
        let level = (weight / max_weight * 255.0).round() as u8;
        Rgb([level, level, level])
    };

    for (i, (&horizontal, &vertical)) in x_panel.iter().zip(&y_panel).enumerate() {
        let (x, y) = ((i % width.max(1)) as u32, (i / width.max(1)) as u32);
        img.put_pixel(x, y, shade(horizontal));
        img.put_pixel(x + w + FIELD_PLOT_GAP, y, shade(vertical));
    }

    img
}

/// Render a shape field plot and save it to `output_path`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn export_vector_field(
    shape: ShapeField,
    width: usize,
    height: usize,
    strength: (f64, f64),
    output_path: &Path,
) -> Result<()> {
    let img = render_vector_field(shape, width, height, strength.0, strength.1);
    create_parent_dir(output_path)?;
    img.save(output_path).map_err(|e| PaintError::ImageExport {
        path: output_path.into(),
        source: e,
    })
}

pub(crate) fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PaintError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
