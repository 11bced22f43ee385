//! The volumetric half of the export pipeline.
//!
//! A resampled [`ScalarField`](isoexport_core::ScalarField) is smoothed
//! ([`smooth`]), placed in space ([`grid`]), and contoured into a triangle
//! mesh ([`contour`]). The stages are pure functions over the buffer; all
//! host interaction happens before they run.

pub mod contour;
pub mod grid;
pub mod smooth;

pub use contour::extract_isosurface;
pub use grid::UniformGrid;
pub use smooth::gaussian_smooth;
