//! Gaussian smoothing of scalar fields.
//!
//! Separable convolution along each axis with a kernel truncated at 4
//! standard deviations and reflecting boundaries. Smoothing rounds off
//! voxel staircasing so the extracted surfaces look like surfaces rather
//! than stacks of bricks.

use isoexport_core::ScalarField;
use tracing::debug;

/// Kernel is cut off at this many standard deviations per side.
const TRUNCATE: f64 = 4.0;

/// Smooth a field with an isotropic Gaussian of standard deviation
/// `sigma` (in voxels). `sigma <= 0` returns the field unchanged.
pub fn gaussian_smooth(field: &ScalarField, sigma: f64) -> ScalarField {
    if sigma <= 0.0 || !sigma.is_finite() {
        return field.clone();
    }

    let kernel = gaussian_kernel(sigma);
    debug!(
        "Gaussian smoothing: sigma={}, kernel radius={}",
        sigma,
        kernel.len() / 2
    );

    let pass_x = convolve_axis(field, &kernel, 0);
    let pass_y = convolve_axis(&pass_x, &kernel, 1);
    convolve_axis(&pass_y, &kernel, 2)
}

/// Normalized 1-D Gaussian weights, `2 * radius + 1` taps.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (TRUNCATE * sigma + 0.5) as usize;
    let radius = radius.max(1);
    let denom = 2.0 * sigma * sigma;

    let mut weights = Vec::with_capacity(2 * radius + 1);
    for offset in -(radius as isize)..=(radius as isize) {
        let d = offset as f64;
        weights.push((-d * d / denom).exp());
    }

    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

/// Reflect an out-of-range index back into `0..n` ("abcd" extends as
/// "dcba|abcd|dcba").
fn reflect(index: isize, n: isize) -> usize {
    let mut i = index;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - i - 1;
        } else {
            return i as usize;
        }
    }
}

fn convolve_axis(field: &ScalarField, kernel: &[f64], axis: usize) -> ScalarField {
    let dims = field.dims();
    let radius = (kernel.len() / 2) as isize;
    let n = dims[axis] as isize;

    ScalarField::from_fn(dims, |x, y, z| {
        let along = [x, y, z][axis] as isize;
        let mut acc = 0.0;
        for (tap, weight) in kernel.iter().enumerate() {
            let offset = tap as isize - radius;
            let sample = reflect(along + offset, n);
            let mut idx = [x, y, z];
            idx[axis] = sample;
            acc += weight * field.get(idx[0], idx[1], idx[2]);
        }
        acc
    })
}
