//! Markov-style color adjacency statistics learned from palette images
//!
//! Each color channel is modeled on its own: for every channel value seen in a
//! palette, the model remembers every value of the same channel observed in the
//! training region around it. Entries keep duplicates, so sampling uniformly
//! from an entry reproduces the observed transition frequencies.

use crate::analysis::patterns::load_palette_image;
use crate::io::configuration::MAX_REGION_SIZE;
use crate::io::error::{PaintError, Result, invalid_parameter};
use crate::spatial::region::Region;
use image::RgbImage;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of distinct values a color channel can take
const CHANNEL_VALUES: usize = 256;

/// How palette images are sampled during training
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Neighborhood shape around each training pixel
    pub region: Region,
    /// Radius of the training neighborhood
    pub region_size: usize,
    /// Pixel count each palette image is resized to
    pub sample_count: usize,
}

impl TrainingConfig {
    /// Check that the configuration can produce statistics
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The region size is zero or exceeds `MAX_REGION_SIZE`
    /// - The sample count is zero
    pub fn validate(&self) -> Result<()> {
        if self.region_size == 0 || self.region_size > usize::from(MAX_REGION_SIZE) {
            return Err(invalid_parameter(
                "train_region_size",
                &self.region_size,
                &format!("must be between 1 and {MAX_REGION_SIZE}"),
            ));
        }
        if self.sample_count == 0 {
            return Err(invalid_parameter(
                "sample_count",
                &self.sample_count,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Adjacency multiset for a single color channel
///
/// Entry `v` lists, in insertion order, every channel value observed next to a
/// pixel whose channel value was `v`.
#[derive(Clone, Debug)]
pub struct ChannelModel {
    entries: Vec<Vec<u8>>,
}

impl Default for ChannelModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelModel {
    /// Create a channel model with no observations
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new(); CHANNEL_VALUES],
        }
    }

    /// Record that `neighbor` was observed adjacent to `key`
    pub fn record(&mut self, key: u8, neighbor: u8) {
        if let Some(entry) = self.entries.get_mut(usize::from(key)) {
            entry.push(neighbor);
        }
    }

    /// Observed neighbors of `key` in insertion order
    pub fn entry(&self, key: u8) -> &[u8] {
        self.entries
            .get(usize::from(key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Test whether any observation is keyed by `key`
    pub fn contains_key(&self, key: u8) -> bool {
        !self.entry(key).is_empty()
    }

    /// Keys with at least one observation, ascending
    pub fn keys(&self) -> Vec<u8> {
        (0..=u8::MAX).filter(|&key| self.contains_key(key)).collect()
    }

    /// Test if the channel has no observations at all
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Total number of recorded observations
    pub fn observation_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// Nearest key present in the model
    ///
    /// Searches outward from `value` one step at a time in both directions. On
    /// a tie between the lower and upper candidate the lower key wins. Returns
    /// `None` only for an empty model.
    pub fn nearest_key(&self, value: u8) -> Option<u8> {
        let value = i32::from(value);
        let present = |candidate: i32| {
            u8::try_from(candidate)
                .ok()
                .filter(|&key| self.contains_key(key))
        };

        for distance in 0..CHANNEL_VALUES as i32 {
            if let Some(key) = present(value - distance).or_else(|| present(value + distance)) {
                return Some(key);
            }
        }
        None
    }

    /// Sample a neighbor value for a value seen on the canvas
    ///
    /// Snaps `value` to the nearest key, then draws uniformly from its entry
    pub fn predict<R: Rng + ?Sized>(&self, value: u8, rng: &mut R) -> Option<u8> {
        let key = self.nearest_key(value)?;
        self.entry(key).choose(rng).copied()
    }

    /// Uniformly random key with at least one observation
    pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u8> {
        self.keys().choose(rng).copied()
    }
}

/// Independent adjacency models for the red, green and blue channels
#[derive(Clone, Debug, Default)]
pub struct ColorModel {
    /// Red channel statistics
    pub red: ChannelModel,
    /// Green channel statistics
    pub green: ChannelModel,
    /// Blue channel statistics
    pub blue: ChannelModel,
}

impl ColorModel {
    /// Create a model with no observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Train a fresh model on palette image files
    ///
    /// Files that cannot be read or decoded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if no palette image
    /// contributed any statistics
    pub fn train(paths: &[PathBuf], config: &TrainingConfig) -> Result<Self> {
        Self::train_observed(paths, config, |_, _| {})
    }

    /// Train a fresh model, reporting each palette file once it is processed
    ///
    /// `on_file` receives the path and whether the file contributed statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if no palette image
    /// contributed any statistics
    pub fn train_observed<F>(paths: &[PathBuf], config: &TrainingConfig, mut on_file: F) -> Result<Self>
    where
        F: FnMut(&Path, bool),
    {
        config.validate()?;

        let mut model = Self::new();
        for path in paths {
            let trained = match model.train_palette_file(path, config) {
                Ok(()) => true,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping palette image");
                    false
                }
            };
            on_file(path, trained);
        }

        if model.is_empty() {
            return Err(PaintError::EmptyPalette {
                attempted: paths.len(),
            });
        }

        debug!(
            red_keys = model.red.keys().len(),
            green_keys = model.green.keys().len(),
            blue_keys = model.blue.keys().len(),
            observations = model.red.observation_count(),
            "Palette statistics collected"
        );
        Ok(model)
    }

    /// Load, resize and learn from a single palette image file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn train_palette_file(&mut self, path: &Path, config: &TrainingConfig) -> Result<()> {
        let img = load_palette_image(path, config.sample_count)?;
        self.train_image(&img, config.region, config.region_size);
        Ok(())
    }

    /// Learn adjacency statistics from an already-sized image
    ///
    /// Pixels are scanned column by column. Every in-bounds point of the region
    /// around a pixel contributes its red, green and blue values to the
    /// respective channel entries keyed by the pixel's own values.
    pub fn train_image(&mut self, img: &RgbImage, region: Region, region_size: usize) {
        let (width, height) = (img.width() as i32, img.height() as i32);
        let offsets = region.offsets(region_size);

        for x in 0..width {
            for y in 0..height {
                let Some(center) = img.get_pixel_checked(x as u32, y as u32) else {
                    continue;
                };
                let [r, g, b] = center.0;

                for &[dx, dy] in &offsets {
                    let (adj_x, adj_y) = (x + dx, y + dy);
                    if adj_x < 0 || adj_y < 0 {
                        continue;
                    }
                    if let Some(neighbor) = img.get_pixel_checked(adj_x as u32, adj_y as u32) {
                        let [adj_r, adj_g, adj_b] = neighbor.0;
                        self.red.record(r, adj_r);
                        self.green.record(g, adj_g);
                        self.blue.record(b, adj_b);
                    }
                }
            }
        }
    }

    /// Test whether any channel lacks observations
    ///
    /// Prediction needs all three channels, so a model missing any of them is
    /// treated as empty.
    pub fn is_empty(&self) -> bool {
        self.red.is_empty() || self.green.is_empty() || self.blue.is_empty()
    }

    /// Predict the color of a pixel adjacent to one colored `known`
    ///
    /// Channels are predicted independently of each other.
    pub fn predict_neighbor_color<R: Rng + ?Sized>(&self, known: [u8; 3], rng: &mut R) -> Option<[u8; 3]> {
        let [r, g, b] = known;
        Some([
            self.red.predict(r, rng)?,
            self.green.predict(g, rng)?,
            self.blue.predict(b, rng)?,
        ])
    }

    /// Color built from a random observed key of each channel
    ///
    /// Used for pixels with no colored neighbors to condition on.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[u8; 3]> {
        Some([
            self.red.random_key(rng)?,
            self.green.random_key(rng)?,
            self.blue.random_key(rng)?,
        ])
    }
}
