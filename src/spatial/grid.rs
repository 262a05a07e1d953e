//! Output canvas storing generated RGB pixels
//!
//! Pixels are stored row-major in an `Array2` indexed `[y, x]`. Coordinates are
//! passed around as `[x, y]` with `(0, 0)` in the upper left corner. Pixels that
//! were never generated stay black.

use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Color of pixels that have not been generated
pub const UNSET_COLOR: [u8; 3] = [0, 0, 0];

/// Fixed-size RGB pixel buffer written by the generation engine
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array2<[u8; 3]>,
}

impl Canvas {
    /// Create a black canvas of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), UNSET_COLOR),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Total number of pixels
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    /// Test whether a point lies on the canvas
    pub fn contains(&self, point: [i32; 2]) -> bool {
        point[0] >= 0
            && point[1] >= 0
            && (point[0] as usize) < self.width()
            && (point[1] as usize) < self.height()
    }

    /// Row-major index of a point, if it lies on the canvas
    pub fn index_of(&self, point: [i32; 2]) -> Option<usize> {
        self.contains(point)
            .then(|| point[1] as usize * self.width() + point[0] as usize)
    }

    /// Point for a row-major index
    pub fn point_of(&self, index: usize) -> [i32; 2] {
        let width = self.width().max(1);
        [(index % width) as i32, (index / width) as i32]
    }

    /// Color at a point, if it lies on the canvas
    pub fn get(&self, point: [i32; 2]) -> Option<[u8; 3]> {
        if !self.contains(point) {
            return None;
        }
        self.pixels
            .get([point[1] as usize, point[0] as usize])
            .copied()
    }

    /// Overwrite the color at a point
    ///
    /// Returns `false` and leaves the canvas untouched if the point is off canvas
    pub fn set(&mut self, point: [i32; 2], color: [u8; 3]) -> bool {
        if !self.contains(point) {
            return false;
        }
        self.pixels
            .get_mut([point[1] as usize, point[0] as usize])
            .map(|pixel| *pixel = color)
            .is_some()
    }

    /// Copy the canvas into an `image` buffer
    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width() as u32, self.height() as u32);
        for ((row, col), color) in self.pixels.indexed_iter() {
            img.put_pixel(col as u32, row as u32, Rgb(*color));
        }
        img
    }

    /// Consume the canvas and return it as an `image` buffer
    pub fn into_image(self) -> RgbImage {
        let (width, height) = (self.width() as u32, self.height() as u32);
        let raw: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        RgbImage::from_raw(width, height, raw).unwrap_or_else(|| RgbImage::new(width, height))
    }
}
