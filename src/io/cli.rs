//! Command-line interface for training on palettes and painting a canvas

use crate::algorithm::executor::{GenerationConfig, GenerationContext};
use crate::analysis::statistics::{ColorModel, TrainingConfig};
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_GEN_REGION_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_SEED,
    DEFAULT_SHAPE_STRENGTH, DEFAULT_TRAIN_REGION_SIZE, DEFAULT_TRAIN_SAMPLE_COUNT,
    FIELD_PLOT_SUFFIX, GIF_FRAME_DELAY_MS, PALETTE_EXTENSIONS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, WithPath};
use crate::io::image::{OutputDescriptor, export_canvas, sibling_path};
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_vector_field;
use crate::spatial::region::Region;
use crate::spatial::shape::ShapeField;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "markovpaint")]
#[command(
    author,
    version,
    about = "Paint images from the color adjacency statistics of palette images"
)]
/// Command-line arguments for the painter
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Palette image files or directories of palette images
    #[arg(value_name = "PALETTE", required = true)]
    pub palettes: Vec<PathBuf>,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Radius of the region sampled around each palette pixel
    #[arg(short = 't', long, default_value_t = DEFAULT_TRAIN_REGION_SIZE)]
    pub train_region_size: usize,

    /// Region sampled around each palette pixel
    #[arg(short = 'r', long, value_enum, default_value_t = Region::Surrounding)]
    pub train_region: Region,

    /// Radius of the region averaged when predicting a pixel
    #[arg(short = 'g', long, default_value_t = DEFAULT_GEN_REGION_SIZE)]
    pub gen_region_size: usize,

    /// Pixel count each palette image is resized to before training
    #[arg(short = 'n', long = "samples", default_value_t = DEFAULT_TRAIN_SAMPLE_COUNT)]
    pub sample_count: usize,

    /// Maximum number of pixels to color (defaults to the whole canvas)
    #[arg(short = 'l', long)]
    pub pixel_limit: Option<usize>,

    /// Vector field shaping the traversal
    #[arg(short = 'S', long, value_enum, default_value_t = ShapeField::Circle)]
    pub shape: ShapeField,

    /// Shape field strength along x
    #[arg(short = 'x', long, default_value_t = DEFAULT_SHAPE_STRENGTH)]
    pub strength_x: f64,

    /// Shape field strength along y
    #[arg(short = 'y', long, default_value_t = DEFAULT_SHAPE_STRENGTH)]
    pub strength_y: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Explicit output file (overrides the generated name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for generated files when no explicit output is given
    #[arg(short = 'd', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Also write the fill order as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Also write a plot of the shape field
    #[arg(short = 'f', long)]
    pub plot_field: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas dimensions as `(width, height)`
    ///
    /// A single given dimension makes the canvas square
    pub fn dimensions(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE),
        }
    }

    /// Training parameters selected on the command line
    pub const fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            region: self.train_region,
            region_size: self.train_region_size,
            sample_count: self.sample_count,
        }
    }

    /// Generation parameters selected on the command line
    pub fn generation_config(&self) -> GenerationConfig {
        let (width, height) = self.dimensions();
        GenerationConfig {
            width,
            height,
            gen_region_size: self.gen_region_size,
            pixel_limit: self.pixel_limit,
            shape: self.shape,
            strength_x: self.strength_x,
            strength_y: self.strength_y,
        }
    }
}

/// Expand palette arguments into image files
///
/// Directories contribute their image files in sorted order. Paths that do not
/// exist are skipped with a warning.
///
/// # Errors
///
/// Returns an error if a palette directory cannot be read
pub fn collect_palette_files(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for target in targets {
        if target.is_file() {
            files.push(target.clone());
        } else if target.is_dir() {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if path.is_file() && has_palette_extension(&path) {
                    entries.push(path);
                }
            }
            entries.sort();
            files.extend(entries);
        } else {
            warn!(path = %target.display(), "Palette path does not exist, skipping");
        }
    }

    Ok(files)
}

fn has_palette_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            PALETTE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// Runs a full train-then-paint session from parsed arguments
pub struct Runner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Train on the palettes, paint the canvas and write every requested file
    ///
    /// Returns the path of the generated image.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A palette directory cannot be read
    /// - No palette image yields statistics
    /// - The generation parameters are invalid
    /// - Any output file cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let palettes = collect_palette_files(&self.cli.palettes)?;
        let training = self.cli.training_config();
        let generation = self.cli.generation_config();
        // Fail on bad parameters before spending time on training
        generation.validate()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_training(palettes.len());
        }
        let progress = self.progress_manager.as_ref();
        let model = ColorModel::train_observed(&palettes, &training, |path, trained| {
            if let Some(pm) = progress {
                pm.complete_palette(path, trained);
            }
        })?;
        info!(palettes = palettes.len(), "Training complete");

        let mut context = GenerationContext::new(&model, generation, self.cli.seed)?;
        if self.cli.visualize {
            context.enable_visualization();
        }
        if let Some(ref mut pm) = self.progress_manager {
            context.enable_progress(pm.start_generation());
        }
        context.generate();

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        info!(
            pixels = context.colored_count(),
            regions = context.regions_filled(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "Generation complete"
        );
        if !context.seen().is_full() {
            info!(coverage = %context.seen(), "Pixel limit reached before the canvas was filled");
        }

        let output_path = self.output_path(&palettes);
        export_canvas(context.canvas(), &output_path)?;
        info!(path = %output_path.display(), "Image written");

        if let Some(ref viz) = context.visualization {
            let viz_path = sibling_path(&output_path, VISUALIZATION_SUFFIX, "gif");
            viz.export_gif(&viz_path, GIF_FRAME_DELAY_MS)?;
            info!(path = %viz_path.display(), "Fill animation written");
        }

        if self.cli.plot_field {
            let field_path = sibling_path(&output_path, FIELD_PLOT_SUFFIX, "png");
            export_vector_field(
                generation.shape,
                generation.width,
                generation.height,
                (generation.strength_x, generation.strength_y),
                &field_path,
            )?;
            info!(path = %field_path.display(), "Field plot written");
        }

        Ok(output_path)
    }

    /// Output image path, explicit or derived from the run parameters
    pub fn output_path(&self, palettes: &[PathBuf]) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        OutputDescriptor {
            shape: self.cli.shape,
            train_region_size: self.cli.train_region_size,
            gen_region_size: self.cli.gen_region_size,
            sample_count: self.cli.sample_count,
            palettes,
        }
        .output_path(&self.cli.output_dir)
    }
}
