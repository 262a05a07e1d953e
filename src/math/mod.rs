//! Mathematical utilities for the shape fields

/// Canvas-centered coordinates, angles and vector normalization
pub mod polar;
