//! Error handling for isoexport.
//!
//! One taxonomy covers the whole export path: resampling against the host,
//! buffer shape checks, color parsing, and file output. All error types use
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors that can occur while exporting a layer to a mesh file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The host failed to resample a layer onto the fixed-resolution grid.
    #[error("Failed to resample layer '{layer}': {reason}")]
    Resample {
        /// Label of the layer that failed.
        layer: String,
        /// Host-reported reason.
        reason: String,
    },

    /// A buffer's length does not match its declared grid dimensions.
    #[error("Buffer length {actual} does not match grid dimensions {dims:?}")]
    BufferShape {
        /// The declared dimensions.
        dims: [usize; 3],
        /// The actual number of samples supplied.
        actual: usize,
    },

    /// A subset mask and its attribute buffer disagree on shape.
    #[error("Mask dimensions {mask:?} do not match attribute dimensions {attribute:?}")]
    MaskShape {
        /// Dimensions of the attribute buffer.
        attribute: [usize; 3],
        /// Dimensions of the mask buffer.
        mask: [usize; 3],
    },

    /// A display color string could not be parsed.
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// I/O error while writing or reading a mesh file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;
