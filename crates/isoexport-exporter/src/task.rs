//! Export one layer to mesh files.
//!
//! The whole pipeline for a single entry: resample the layer (multiplying
//! in the subset mask when there is one), smooth, place on the spatial
//! grid, contour at the entry's level, and write the requested formats.
//! Failures propagate to the caller; an empty surface is written out as a
//! zero-face file rather than treated as an error.

use crate::session::ExportEntry;
use isoexport_core::{FormatSelection, GridBounds, Result};
use isoexport_meshio::{write_obj, write_stl};
use isoexport_volume::{extract_isosurface, gaussian_smooth, UniformGrid};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Export a single entry into `directory`, returning the paths written.
pub fn export_entry(
    entry: &ExportEntry,
    bounds: &GridBounds,
    formats: FormatSelection,
    smoothing_sigma: f64,
    directory: &Path,
) -> Result<Vec<PathBuf>> {
    debug!(
        "Exporting '{}' at level {} to {}",
        entry.stem,
        entry.level,
        directory.display()
    );

    let mut field = entry.source.attribute_buffer(bounds)?;
    if let Some(mask) = entry.source.subset_mask(bounds)? {
        field = field.multiply(&mask)?;
    }

    let field = gaussian_smooth(&field, smoothing_sigma);
    let grid = UniformGrid::with_unit_spacing(bounds.origin(), field);
    let mesh = extract_isosurface(&grid, entry.level);

    debug!("'{}' produced {} faces", entry.stem, mesh.face_count());

    let mut written = Vec::new();
    if formats.stl {
        let path = directory.join(format!("{}.stl", entry.stem));
        write_stl(&mesh, &path)?;
        written.push(path);
    }
    if formats.obj {
        let (obj_path, mtl_path) = write_obj(&mesh, directory, &entry.stem, entry.color)?;
        written.push(obj_path);
        written.push(mtl_path);
    }

    Ok(written)
}
