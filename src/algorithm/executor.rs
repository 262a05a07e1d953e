use crate::{
    algorithm::bitset::PixelMask,
    algorithm::pool::PixelPool,
    algorithm::selection::RandomSelector,
    analysis::statistics::ColorModel,
    io::configuration::{
        MAX_CANVAS_DIMENSION, MAX_REGION_SIZE, MIN_DIRECTION_WEIGHT, PROGRESS_UPDATE_INTERVAL,
    },
    io::error::{PaintError, Result, invalid_parameter},
    io::visualization::VisualizationCapture,
    spatial::grid::Canvas,
    spatial::region::Region,
    spatial::shape::{DirectionWeights, ShapeField},
};
use image::RgbImage;
use indicatif::ProgressBar;

/// Parameters controlling the size, coverage and shape of a generated image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Radius of the neighborhood averaged when predicting a pixel color
    pub gen_region_size: usize,
    /// Maximum number of pixels to color; `None` colors the whole canvas
    pub pixel_limit: Option<usize>,
    /// Vector field biasing the traversal direction
    pub shape: ShapeField,
    /// Scale of the shape field along x
    pub strength_x: f64,
    /// Scale of the shape field along y
    pub strength_y: f64,
}

impl GenerationConfig {
    /// Pixel limit clamped to the canvas area
    pub fn effective_pixel_limit(&self) -> usize {
        let area = self.width * self.height;
        self.pixel_limit.map_or(area, |limit| limit.min(area))
    }

    /// Check dimensions, region size and shape strengths
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `MAX_CANVAS_DIMENSION`
    /// - The generation region size is zero or exceeds `MAX_REGION_SIZE`
    /// - A shape strength is negative or not finite
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        if self.gen_region_size == 0 || self.gen_region_size > usize::from(MAX_REGION_SIZE) {
            return Err(invalid_parameter(
                "gen_region_size",
                &self.gen_region_size,
                &format!("must be between 1 and {MAX_REGION_SIZE}"),
            ));
        }

        for (parameter, value) in [("strength_x", self.strength_x), ("strength_y", self.strength_y)]
        {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a finite, non-negative number",
                ));
            }
        }

        Ok(())
    }
}

/// Flood-fill painter holding all state of one generation pass
///
/// Regions are filled one at a time from uniformly random seeds. Inside a
/// region the fill is a depth-first walk over an explicit stack: each colored
/// pixel shuffles its four neighbors by shape field weight and pushes them so
/// that the first in shuffled order is expanded next. A neighbor's eligibility
/// is checked when it is popped, which matches recursing into the neighbors in
/// order.
pub struct GenerationContext<'m> {
    model: &'m ColorModel,
    config: GenerationConfig,
    pixel_limit: usize,
    canvas: Canvas,
    /// Pixels colored so far in this pass
    seen: PixelMask,
    /// Pixels not claimed by any finished region
    remaining: PixelPool,
    random_selector: RandomSelector,
    regions_filled: usize,
    predictions: usize,
    /// Offsets of the four pixels a fill step can move to
    step_offsets: Vec<[i32; 2]>,
    /// Offsets of the neighborhood averaged for each prediction
    prediction_offsets: Vec<[i32; 2]>,
    /// Optional fill-order capture
    pub visualization: Option<VisualizationCapture>,
    progress: Option<ProgressBar>,
}

impl<'m> GenerationContext<'m> {
    /// Create a generation pass over a blank canvas
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - The color model has no observations in some channel
    pub fn new(model: &'m ColorModel, config: GenerationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        if model.is_empty() {
            return Err(PaintError::EmptyPalette { attempted: 0 });
        }

        let canvas = Canvas::new(config.width, config.height);
        let area = canvas.area();

        Ok(Self {
            model,
            config,
            pixel_limit: config.effective_pixel_limit(),
            canvas,
            seen: PixelMask::new(area),
            remaining: PixelPool::full(area),
            random_selector: RandomSelector::new(seed),
            regions_filled: 0,
            predictions: 0,
            step_offsets: Region::Surrounding.offsets(1),
            prediction_offsets: Region::Surrounding.offsets(config.gen_region_size),
            visualization: None,
            progress: None,
        })
    }

    /// Record every colored pixel for a fill-order animation
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(
            self.config.width,
            self.config.height,
            self.pixel_limit,
        ));
    }

    /// Report colored pixel counts to a progress bar
    pub fn enable_progress(&mut self, progress: ProgressBar) {
        progress.set_length(self.pixel_limit as u64);
        self.progress = Some(progress);
    }

    /// Fill the whole canvas, or until the pixel limit is reached
    pub fn generate(&mut self) {
        while self.fill_next_region() {}
        self.report_progress();
    }

    /// Fill one region from a random seed
    ///
    /// Returns `false` without doing anything once every pixel has been claimed
    /// or the pixel limit has been reached.
    pub fn fill_next_region(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let Some(seed) = self.remaining.choose(self.random_selector.rng()) else {
            return false;
        };

        let visited = self.expand(self.canvas.point_of(seed));
        // Pixels leave the pool only once their whole region is done
        for index in visited {
            self.remaining.remove(index);
        }
        self.regions_filled += 1;
        true
    }

    /// Test whether generation has nothing left to do
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty() || self.seen.count() >= self.pixel_limit
    }

    /// Depth-first fill from `seed`, returning the canvas indices colored
    fn expand(&mut self, seed: [i32; 2]) -> Vec<usize> {
        let mut visited = Vec::new();
        let mut stack = vec![seed];

        while let Some(point) = stack.pop() {
            let Some(index) = self.canvas.index_of(point) else {
                continue;
            };
            if self.seen.contains(index) || !self.remaining.contains(index) {
                continue;
            }
            if self.seen.count() >= self.pixel_limit {
                break;
            }

            let color = self.generate_pixel_color(point);
            self.color_pixel(point, index, color);
            visited.push(index);

            let neighbors: Vec<[i32; 2]> = self
                .step_offsets
                .iter()
                .map(|[dx, dy]| [point[0] + dx, point[1] + dy])
                .collect();
            let weights = self.direction_weights(point);
            let order = self.random_selector.weighted_shuffle(&neighbors, &weights);
            // Reversed so the first neighbor in shuffled order is popped first
            stack.extend(order.into_iter().rev());
        }

        visited
    }

    fn color_pixel(&mut self, point: [i32; 2], index: usize, color: [u8; 3]) {
        self.canvas.set(point, color);
        self.seen.insert(index);

        if let Some(ref mut viz) = self.visualization {
            viz.record_pixel(point, color);
        }

        if self.seen.count() % PROGRESS_UPDATE_INTERVAL == 0 {
            self.report_progress();
        }
    }

    fn report_progress(&self) {
        if let Some(ref progress) = self.progress {
            progress.set_position(self.seen.count() as u64);
            progress.set_prefix(format!("{} regions", self.regions_filled));
        }
    }

    /// Shape field weights at `point`, each raised to at least `MIN_DIRECTION_WEIGHT`
    pub fn direction_weights(&self, point: [i32; 2]) -> DirectionWeights {
        let raw = self.config.shape.weights(
            point[0],
            point[1],
            self.config.width,
            self.config.height,
            self.config.strength_x,
            self.config.strength_y,
        );
        raw.map(|w| if w.is_nan() { MIN_DIRECTION_WEIGHT } else { w.max(MIN_DIRECTION_WEIGHT) })
    }

    /// Predict a color for `point` from its already-colored neighbors
    ///
    /// Every colored neighbor within the generation region proposes a color
    /// from the model; the proposals are averaged per channel and rounded to
    /// the nearest integer, ties to even. With no colored neighbor a random
    /// observed key of each channel is used instead.
    pub fn generate_pixel_color(&mut self, point: [i32; 2]) -> [u8; 3] {
        self.predictions += 1;

        let mut sums = [0u32; 3];
        let mut contributors = 0u32;

        for &[dx, dy] in &self.prediction_offsets {
            let neighbor = [point[0] + dx, point[1] + dy];
            let Some(index) = self.canvas.index_of(neighbor) else {
                continue;
            };
            if !self.seen.contains(index) {
                continue;
            }
            let Some(known) = self.canvas.get(neighbor) else {
                continue;
            };
            let Some(predicted) = self
                .model
                .predict_neighbor_color(known, self.random_selector.rng())
            else {
                continue;
            };

            for (sum, value) in sums.iter_mut().zip(predicted) {
                *sum += u32::from(value);
            }
            contributors += 1;
        }

        if contributors == 0 {
            return self
                .model
                .random_color(self.random_selector.rng())
                .unwrap_or_default();
        }

        sums.map(|sum| (f64::from(sum) / f64::from(contributors)).round_ties_even() as u8)
    }

    /// The canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The configuration of this pass
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Pixel limit after clamping to the canvas area
    pub const fn pixel_limit(&self) -> usize {
        self.pixel_limit
    }

    /// Pixels colored so far
    pub const fn seen(&self) -> &PixelMask {
        &self.seen
    }

    /// Number of pixels colored so far
    pub const fn colored_count(&self) -> usize {
        self.seen.count()
    }

    /// Number of pixels not yet claimed by a finished region
    pub const fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Number of flood-fill regions completed
    pub const fn regions_filled(&self) -> usize {
        self.regions_filled
    }

    /// Number of times a pixel color has been predicted
    pub const fn prediction_count(&self) -> usize {
        self.predictions
    }

    /// Consume the pass and return the canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Consume the pass and return the finished image
    pub fn into_image(self) -> RgbImage {
        self.canvas.into_image()
    }
}
