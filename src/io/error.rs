//! Error types and path context for palette training and image generation

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all painting operations
#[derive(Debug)]
pub enum PaintError {
    /// Failed to load or decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// No palette image contributed any color statistics
    ///
    /// Generation cannot predict colors from an empty model, so this is
    /// raised before any pixel is generated.
    EmptyPalette {
        /// Number of palette paths that were attempted
        attempted: usize,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptyPalette { attempted } => {
                write!(
                    f,
                    "Palette is empty: none of the {attempted} palette path(s) produced color statistics"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PaintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::EmptyPalette { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for painting results
pub type Result<T> = std::result::Result<T, PaintError>;

/// Attaches the offending path to errors converted from `image` or `std::io`
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PaintError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors that carry a path benefit from the context
            match &mut error {
                PaintError::ImageLoad { path: p, .. }
                | PaintError::ImageExport { path: p, .. }
                | PaintError::FileSystem { path: p, .. } => *p = path.to_path_buf(),
                PaintError::EmptyPalette { .. } | PaintError::InvalidParameter { .. } => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for PaintError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PaintError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PaintError {
    PaintError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
