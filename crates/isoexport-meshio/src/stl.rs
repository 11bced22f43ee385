//! Binary STL output and read-back via `stl_io`.

use crate::mesh::TriangleMesh;
use isoexport_core::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write a mesh as binary STL. An empty mesh produces a valid zero-face
/// file.
pub fn write_stl(mesh: &TriangleMesh, path: &Path) -> Result<()> {
    debug!("Writing {} STL faces to {}", mesh.face_count(), path.display());

    let faces: Vec<stl_io::Triangle> = mesh
        .triangles
        .iter()
        .map(|tri| stl_io::Triangle {
            normal: stl_io::Normal::new([tri.normal.x, tri.normal.y, tri.normal.z]),
            vertices: [
                stl_io::Vertex::new([
                    tri.vertices[0].x,
                    tri.vertices[0].y,
                    tri.vertices[0].z,
                ]),
                stl_io::Vertex::new([
                    tri.vertices[1].x,
                    tri.vertices[1].y,
                    tri.vertices[1].z,
                ]),
                stl_io::Vertex::new([
                    tri.vertices[2].x,
                    tri.vertices[2].y,
                    tri.vertices[2].z,
                ]),
            ],
        })
        .collect();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, faces.iter())?;
    writer.flush()?;
    Ok(())
}

/// Read an STL file back into a triangle mesh.
pub fn read_stl(path: &Path) -> Result<TriangleMesh> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let indexed = stl_io::read_stl(&mut reader)?;
    debug!("Read {} STL faces from {}", indexed.faces.len(), path.display());
    Ok(TriangleMesh::from_stl_mesh(&indexed))
}
