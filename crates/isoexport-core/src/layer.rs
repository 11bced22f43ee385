//! Host-viewer collaborator traits.
//!
//! The viewer application owns layers and viewer state; the exporter only
//! sees them through these traits. A data layer exposes a scalar attribute
//! it can resample onto the viewer's fixed-resolution grid; a subset layer
//! additionally exposes a fractional membership mask derived from its
//! parent data layer.

use crate::error::Result;
use crate::field::ScalarField;
use crate::types::{GridBounds, LayerColor, ValueRange};
use std::sync::Arc;

/// One exportable layer of the volume view.
///
/// Implementations must be cheap to clone behind an `Arc` and safe to call
/// from the export worker thread.
pub trait VolumeLayer: Send + Sync {
    /// Display label, used to derive the output file stem.
    fn label(&self) -> String;

    /// The attribute's data range; its minimum seeds the default
    /// isosurface level.
    fn value_range(&self) -> ValueRange;

    /// Display color of the layer in the viewer.
    fn color(&self) -> LayerColor;

    /// For subset layers, the label of the parent data layer.
    fn parent_label(&self) -> Option<String> {
        None
    }

    /// Resample the layer's scalar attribute onto the fixed grid.
    fn attribute_buffer(&self, bounds: &GridBounds) -> Result<ScalarField>;

    /// Fractional membership mask for subset layers, resampled onto the
    /// same grid. Plain data layers return `Ok(None)`.
    fn subset_mask(&self, _bounds: &GridBounds) -> Result<Option<ScalarField>> {
        Ok(None)
    }
}

/// The viewer whose current volumetric view is being exported.
pub trait VolumeViewer {
    /// Current spatial bounds and resampling resolution.
    fn grid_bounds(&self) -> GridBounds;

    /// The layers of the view, in display order.
    fn layers(&self) -> Vec<Arc<dyn VolumeLayer>>;
}
