//! Error types for the preview backend.

use tactigen_spec::{BackendError, GridPosition};
use thiserror::Error;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Errors that can occur while rasterizing or encoding a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The pattern has no iterations to draw.
    #[error("pattern has no iterations")]
    EmptyPattern,

    /// An event targets a position outside the grid.
    #[error("coordinate {coord} is outside the {width}x{height} grid")]
    CoordinateOutOfGrid {
        /// The offending position.
        coord: GridPosition,
        /// Grid width.
        width: u8,
        /// Grid height.
        height: u8,
    },

    /// The scaled image does not fit in a GIF frame.
    #[error("preview image {width}x{height} exceeds the GIF size limit")]
    ImageTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Preview settings are unusable.
    #[error("invalid preview settings: {0}")]
    InvalidSettings(String),

    /// GIF encoding error.
    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),

    /// NumPy array encoding error.
    #[error("NumPy encoding error: {0}")]
    Npy(#[from] ndarray_npy::WriteNpyError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for PreviewError {
    fn code(&self) -> &'static str {
        match self {
            PreviewError::EmptyPattern => "PREVIEW_001",
            PreviewError::CoordinateOutOfGrid { .. } => "PREVIEW_002",
            PreviewError::ImageTooLarge { .. } => "PREVIEW_003",
            PreviewError::InvalidSettings(_) => "PREVIEW_004",
            PreviewError::Gif(_) => "PREVIEW_005",
            PreviewError::Io(_) => "PREVIEW_006",
            PreviewError::Npy(_) => "PREVIEW_007",
        }
    }

    fn category(&self) -> &'static str {
        "preview"
    }
}
