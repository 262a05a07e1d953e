//! Algorithm constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default side length of the square output canvas
pub const DEFAULT_CANVAS_SIZE: usize = 500;

/// Default radius of the region conditioned on during palette training
pub const DEFAULT_TRAIN_REGION_SIZE: usize = 2;

/// Default radius of the region conditioned on during generation
pub const DEFAULT_GEN_REGION_SIZE: usize = 2;

/// Pixel count each palette image is resized to before training
pub const DEFAULT_TRAIN_SAMPLE_COUNT: usize = 50 * 50;

/// Default shape strength for both axes
///
/// A value of 1 does not bias the traversal at all
pub const DEFAULT_SHAPE_STRENGTH: f64 = 100.0;

/// Lower bound applied to every direction weight before shuffling
pub const MIN_DIRECTION_WEIGHT: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

/// Largest accepted training or generation region radius
///
/// A region of radius `n` holds about `2n²` points and is visited for every
/// pixel, so larger radii only slow generation down.
pub const MAX_REGION_SIZE: u16 = 100;

/// Image file extensions accepted when a palette directory is expanded
pub const PALETTE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// Progress bar display settings
/// Pixels colored between generation progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Directory generated images are written to when no output path is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix added to fill-order animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_fill";
/// Suffix added to vector field plot filenames
pub const FIELD_PLOT_SUFFIX: &str = "_field";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to a fill-order animation
pub const MAX_GIF_FRAMES: usize = 100;
/// Width in pixels of the separator between vector field plot panels
pub const FIELD_PLOT_GAP: u32 = 8;
