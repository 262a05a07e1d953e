//! Spatial data structures and neighborhood geometry
//!
//! This module contains spatial-related functionality including:
//! - Canvas storage
//! - Neighborhood regions
//! - Shape fields biasing the traversal

/// Canvas storage and image conversion
pub mod grid;
/// Neighborhood regions around a point
pub mod region;
/// Direction weight fields
pub mod shape;

pub use grid::Canvas;
