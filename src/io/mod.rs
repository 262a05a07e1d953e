//! Command line, configuration, errors and file output

/// Command-line parsing and session orchestration
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export and output naming
pub mod image;
/// Progress bars for training and generation
pub mod progress;
/// Fill-order animation and shape field plots
pub mod visualization;
