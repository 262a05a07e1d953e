//! Markov-style image painting from the color statistics of palette images
//!
//! Palette images are reduced to per-channel adjacency statistics. A new image
//! is then painted by flood-filling random regions of a blank canvas, predicting
//! each pixel from the colors already placed around it, while a shape field
//! biases which direction the fill spreads first.

#![forbid(unsafe_code)]

/// Traversal engine, pixel bookkeeping and weighted random selection
pub mod algorithm;
/// Palette loading and color adjacency statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Polar coordinate helpers for shape fields
pub mod math;
/// Canvas storage, neighborhood regions and shape fields
pub mod spatial;

pub use io::error::{PaintError, Result};
