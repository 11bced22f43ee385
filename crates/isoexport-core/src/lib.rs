//! Core types for the isoexport workspace.
//!
//! Everything the other crates share lives here:
//! - spatial and value types ([`GridBounds`], [`ValueRange`], [`LayerColor`],
//!   [`FormatSelection`])
//! - the dense scalar buffer produced by resampling ([`ScalarField`])
//! - the host-viewer collaborator traits ([`VolumeLayer`], [`VolumeViewer`])
//! - the error taxonomy ([`ExportError`])
//!
//! The host application owns the data; this crate only describes the shape
//! of what it hands over.

pub mod error;
pub mod field;
pub mod layer;
pub mod types;

pub use error::{ExportError, Result};
pub use field::ScalarField;
pub use layer::{VolumeLayer, VolumeViewer};
pub use types::{AxisRange, FormatSelection, GridBounds, LayerColor, MeshFormat, ValueRange};
