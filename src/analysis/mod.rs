//! Analysis modules for palette loading and color statistics

/// Palette image loading and resampling
pub mod patterns;
/// Per-channel color adjacency statistics
pub mod statistics;
