//! Synthetic demo volume for running the dialog outside a host viewer.
//!
//! One analytic blob layer plus a half-space subset of it, enough to
//! exercise layer enumeration, subset naming, and both export formats.

use isoexport::{
    AxisRange, GridBounds, LayerColor, Result, ScalarField, ValueRange, VolumeLayer, VolumeViewer,
};
use std::sync::Arc;

const RESOLUTION: usize = 64;

/// Radial blob: attribute is `radius - distance_to_center`.
struct BlobLayer {
    label: String,
    center: [f64; 3],
    radius: f64,
    color: LayerColor,
}

impl BlobLayer {
    fn sample(&self, world: [f64; 3]) -> f64 {
        let dx = world[0] - self.center[0];
        let dy = world[1] - self.center[1];
        let dz = world[2] - self.center[2];
        self.radius - (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

fn world_point(bounds: &GridBounds, x: usize, y: usize, z: usize) -> [f64; 3] {
    let origin = bounds.origin();
    [
        origin[0] + x as f64,
        origin[1] + y as f64,
        origin[2] + z as f64,
    ]
}

impl VolumeLayer for BlobLayer {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn value_range(&self) -> ValueRange {
        // Attribute minimum sits at the grid corner farthest from the
        // blob's center.
        let far = (3.0f64).sqrt() * (RESOLUTION - 1) as f64 / 2.0;
        ValueRange::new(self.radius - far, self.radius)
    }

    fn color(&self) -> LayerColor {
        self.color
    }

    fn attribute_buffer(&self, bounds: &GridBounds) -> Result<ScalarField> {
        Ok(ScalarField::from_fn(bounds.dims(), |x, y, z| {
            self.sample(world_point(bounds, x, y, z))
        }))
    }
}

/// Half-space subset of the blob, masked to `x <= split`.
struct HalfBlobSubset {
    label: String,
    parent: Arc<BlobLayer>,
    split: f64,
}

impl VolumeLayer for HalfBlobSubset {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn value_range(&self) -> ValueRange {
        self.parent.value_range()
    }

    fn color(&self) -> LayerColor {
        LayerColor::new(0xd6, 0x27, 0x28)
    }

    fn parent_label(&self) -> Option<String> {
        Some(self.parent.label())
    }

    fn attribute_buffer(&self, bounds: &GridBounds) -> Result<ScalarField> {
        self.parent.attribute_buffer(bounds)
    }

    fn subset_mask(&self, bounds: &GridBounds) -> Result<Option<ScalarField>> {
        Ok(Some(ScalarField::from_fn(bounds.dims(), |x, y, z| {
            if world_point(bounds, x, y, z)[0] <= self.split {
                1.0
            } else {
                0.0
            }
        })))
    }
}

/// A stand-in viewer holding the demo layers.
pub struct DemoViewer {
    bounds: GridBounds,
    layers: Vec<Arc<dyn VolumeLayer>>,
}

impl DemoViewer {
    pub fn new() -> Self {
        let span = (RESOLUTION - 1) as f64;
        let bounds = GridBounds::new(
            AxisRange::new(0.0, span),
            AxisRange::new(0.0, span),
            AxisRange::new(0.0, span),
            RESOLUTION,
        );

        let center = span / 2.0;
        let blob = Arc::new(BlobLayer {
            label: "blob".to_string(),
            center: [center; 3],
            radius: span / 4.0,
            color: LayerColor::new(0x1f, 0x77, 0xb4),
        });

        let subset = Arc::new(HalfBlobSubset {
            label: "west-half".to_string(),
            parent: Arc::clone(&blob),
            split: center,
        });

        Self {
            bounds,
            layers: vec![blob, subset],
        }
    }
}

impl VolumeViewer for DemoViewer {
    fn grid_bounds(&self) -> GridBounds {
        self.bounds
    }

    fn layers(&self) -> Vec<Arc<dyn VolumeLayer>> {
        self.layers.clone()
    }
}
