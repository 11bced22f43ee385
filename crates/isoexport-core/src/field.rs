//! Dense 3-D scalar buffer produced by resampling a layer.
//!
//! Storage is x-fastest: `index = x + nx * (y + ny * z)`. Hosts that report
//! bounds in z,y,x order hand their buffers over through
//! [`ScalarField::from_zyx`], which settles the axis convention once at the
//! boundary; everything downstream assumes the x-fastest layout.

use crate::error::{ExportError, Result};

/// A dense 3-D array of `f64` samples.
///
/// Transient: produced per export, multiplied by a subset mask where
/// applicable, smoothed, contoured, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    dims: [usize; 3],
    values: Vec<f64>,
}

impl ScalarField {
    /// A field of the given dimensions with every sample set to `value`.
    pub fn filled(dims: [usize; 3], value: f64) -> Self {
        Self {
            dims,
            values: vec![value; dims[0] * dims[1] * dims[2]],
        }
    }

    /// Build a field by evaluating `f` at every grid index.
    pub fn from_fn(dims: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        for z in 0..dims[2] {
            for y in 0..dims[1] {
                for x in 0..dims[0] {
                    values.push(f(x, y, z));
                }
            }
        }
        Self { dims, values }
    }

    /// Wrap an existing x-fastest buffer, checking its length.
    pub fn from_values(dims: [usize; 3], values: Vec<f64>) -> Result<Self> {
        let expected = dims[0] * dims[1] * dims[2];
        if values.len() != expected {
            return Err(ExportError::BufferShape {
                dims,
                actual: values.len(),
            });
        }
        Ok(Self { dims, values })
    }

    /// Adopt a buffer laid out in z,y,x axis order (z slowest), the order
    /// the viewer reports its bounds in.
    ///
    /// A C-ordered (z, y, x) cube and the internal x-fastest (x, y, z)
    /// layout share the same flat element order, so this relabels the
    /// axes without touching the data.
    pub fn from_zyx(resolution: usize, values: Vec<f64>) -> Result<Self> {
        Self::from_values([resolution; 3], values)
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.dims[0] * (y + self.dims[1] * z)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> f64 {
        self.values[self.index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.index(x, y, z);
        self.values[idx] = value;
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Minimum and maximum sample, or `None` for an empty field.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for v in iter {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// Element-wise product with a subset mask of identical dimensions.
    pub fn multiply(&self, mask: &ScalarField) -> Result<ScalarField> {
        if mask.dims != self.dims {
            return Err(ExportError::MaskShape {
                attribute: self.dims,
                mask: mask.dims,
            });
        }
        let values = self
            .values
            .iter()
            .zip(&mask.values)
            .map(|(a, m)| a * m)
            .collect();
        Ok(ScalarField {
            dims: self.dims,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_x_fastest() {
        let field = ScalarField::from_fn([2, 2, 2], |x, y, z| (x + 10 * y + 100 * z) as f64);
        assert_eq!(field.values()[0], 0.0); // (0,0,0)
        assert_eq!(field.values()[1], 1.0); // (1,0,0)
        assert_eq!(field.values()[2], 10.0); // (0,1,0)
        assert_eq!(field.values()[4], 100.0); // (0,0,1)
        assert_eq!(field.get(1, 1, 1), 111.0);
    }

    #[test]
    fn from_zyx_relabels_axes() {
        // C-ordered (z, y, x) buffer: value encodes the source index as
        // z*100 + y*10 + x, with x the innermost axis.
        let res = 2;
        let mut zyx = Vec::new();
        for z in 0..res {
            for y in 0..res {
                for x in 0..res {
                    zyx.push((z * 100 + y * 10 + x) as f64);
                }
            }
        }
        let field = ScalarField::from_zyx(res, zyx).unwrap();
        assert_eq!(field.get(1, 0, 0), 1.0);
        assert_eq!(field.get(0, 1, 0), 10.0);
        assert_eq!(field.get(0, 0, 1), 100.0);
        assert_eq!(field.get(1, 1, 1), 111.0);

        let bad = ScalarField::from_zyx(3, vec![0.0; 8]);
        assert!(bad.is_err());
    }

    #[test]
    fn from_values_checks_length() {
        let err = ScalarField::from_values([4, 4, 4], vec![0.0; 63]).unwrap_err();
        assert!(matches!(
            err,
            ExportError::BufferShape { dims: [4, 4, 4], actual: 63 }
        ));
    }

    #[test]
    fn multiply_applies_mask() {
        let field = ScalarField::filled([2, 2, 2], 3.0);
        let mask = ScalarField::from_fn([2, 2, 2], |x, _, _| if x == 0 { 1.0 } else { 0.0 });
        let masked = field.multiply(&mask).unwrap();
        assert_eq!(masked.get(0, 1, 1), 3.0);
        assert_eq!(masked.get(1, 1, 1), 0.0);
    }

    #[test]
    fn multiply_rejects_shape_mismatch() {
        let field = ScalarField::filled([2, 2, 2], 1.0);
        let mask = ScalarField::filled([3, 3, 3], 1.0);
        assert!(matches!(
            field.multiply(&mask),
            Err(ExportError::MaskShape { .. })
        ));
    }

    #[test]
    fn value_bounds_spans_samples() {
        let field = ScalarField::from_fn([3, 1, 1], |x, _, _| x as f64 - 1.0);
        assert_eq!(field.value_bounds(), Some((-1.0, 1.0)));
    }
}
