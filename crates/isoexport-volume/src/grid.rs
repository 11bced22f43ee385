//! Uniform spatial grid over a scalar field.
//!
//! Places the resampled buffer in the viewer's coordinate frame: the
//! origin is the bounds' minimum corner and, because the host resamples to
//! a fixed-resolution grid, the voxel spacing is one grid unit on every
//! axis.

use isoexport_core::ScalarField;

/// A scalar field with a spatial origin and per-axis voxel spacing.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    origin: [f64; 3],
    spacing: [f64; 3],
    field: ScalarField,
}

impl UniformGrid {
    pub fn new(origin: [f64; 3], spacing: [f64; 3], field: ScalarField) -> Self {
        Self {
            origin,
            spacing,
            field,
        }
    }

    /// The common case: unit spacing, origin at the viewer bounds'
    /// minimum corner.
    pub fn with_unit_spacing(origin: [f64; 3], field: ScalarField) -> Self {
        Self::new(origin, [1.0; 3], field)
    }

    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn dims(&self) -> [usize; 3] {
        self.field.dims()
    }

    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// Sample at a grid index.
    pub fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        self.field.get(x, y, z)
    }

    /// World-space position of a grid index.
    pub fn world_point(&self, x: usize, y: usize, z: usize) -> [f64; 3] {
        [
            self.origin[0] + x as f64 * self.spacing[0],
            self.origin[1] + y as f64 * self.spacing[1],
            self.origin[2] + z as f64 * self.spacing[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_points_follow_origin_and_spacing() {
        let field = ScalarField::filled([4, 4, 4], 0.0);
        let grid = UniformGrid::with_unit_spacing([10.0, -5.0, 0.5], field);

        assert_eq!(grid.world_point(0, 0, 0), [10.0, -5.0, 0.5]);
        assert_eq!(grid.world_point(3, 1, 2), [13.0, -4.0, 2.5]);
        assert_eq!(grid.spacing(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn value_reads_through_to_field() {
        let field = ScalarField::from_fn([3, 3, 3], |x, y, z| (x + y + z) as f64);
        let grid = UniformGrid::with_unit_spacing([0.0; 3], field);
        assert_eq!(grid.value(1, 1, 1), 3.0);
        assert_eq!(grid.dims(), [3, 3, 3]);
    }
}
