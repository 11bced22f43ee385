//! Wavefront OBJ export.
//!
//! Writes vertex positions (`v`), per-face normals (`vn`), and faces (`f`)
//! referencing both, plus an MTL companion whose diffuse color is the
//! layer's display color.

use crate::mesh::TriangleMesh;
use isoexport_core::{LayerColor, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const MATERIAL_NAME: &str = "surface";

/// Write `<stem>.obj` and `<stem>.mtl` under `dir`. Returns the two paths
/// written, OBJ first.
pub fn write_obj(
    mesh: &TriangleMesh,
    dir: &Path,
    stem: &str,
    color: LayerColor,
) -> Result<(PathBuf, PathBuf)> {
    let obj_path = dir.join(format!("{stem}.obj"));
    let mtl_path = dir.join(format!("{stem}.mtl"));
    debug!(
        "Writing {} OBJ faces to {}",
        mesh.face_count(),
        obj_path.display()
    );

    let mtl_name = format!("{stem}.mtl");
    let file = File::create(&obj_path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(mesh, stem, &mtl_name, &mut writer)?;
    writer.flush()?;

    let file = File::create(&mtl_path)?;
    let mut writer = BufWriter::new(file);
    write_mtl_to(color, &mut writer)?;
    writer.flush()?;

    Ok((obj_path, mtl_path))
}

fn write_obj_to<W: Write>(
    mesh: &TriangleMesh,
    name: &str,
    mtl_name: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "mtllib {mtl_name}")?;
    writeln!(writer, "o {name}")?;

    for tri in &mesh.triangles {
        for v in &tri.vertices {
            writeln!(writer, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
        }
    }

    for tri in &mesh.triangles {
        writeln!(
            writer,
            "vn {:.6} {:.6} {:.6}",
            tri.normal.x, tri.normal.y, tri.normal.z
        )?;
    }

    writeln!(writer, "usemtl {MATERIAL_NAME}")?;

    // OBJ indices are 1-based; each face shares one normal across its
    // three corners.
    for t in 0..mesh.face_count() {
        let n = t + 1;
        let base = t * 3;
        writeln!(
            writer,
            "f {}//{n} {}//{n} {}//{n}",
            base + 1,
            base + 2,
            base + 3
        )?;
    }

    Ok(())
}

fn write_mtl_to<W: Write>(color: LayerColor, writer: &mut W) -> std::io::Result<()> {
    let [r, g, b] = color.to_unit_rgb();
    writeln!(writer, "newmtl {MATERIAL_NAME}")?;
    writeln!(writer, "Kd {r:.4} {g:.4} {b:.4}")?;
    writeln!(writer, "Ka 0.0000 0.0000 0.0000")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle3D;
    use nalgebra::Point3;

    fn two_triangle_mesh() -> TriangleMesh {
        TriangleMesh::new(vec![
            Triangle3D::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ),
            Triangle3D::new(
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ),
        ])
    }

    #[test]
    fn obj_contains_vertices_normals_and_faces() {
        let mut buf = Vec::new();
        write_obj_to(&two_triangle_mesh(), "slab", "slab.mtl", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let v_count = text.lines().filter(|l| l.starts_with("v ")).count();
        let vn_count = text.lines().filter(|l| l.starts_with("vn ")).count();
        let f_count = text.lines().filter(|l| l.starts_with("f ")).count();

        assert_eq!(v_count, 6);
        assert_eq!(vn_count, 2);
        assert_eq!(f_count, 2);
        assert!(text.starts_with("mtllib slab.mtl\n"));
        assert!(text.contains("usemtl surface"));
    }

    #[test]
    fn obj_indices_one_based() {
        let mut buf = Vec::new();
        write_obj_to(&two_triangle_mesh(), "slab", "slab.mtl", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for part in line.split_whitespace().skip(1) {
                let idx: u32 = part.split("//").next().unwrap().parse().unwrap();
                assert!(idx >= 1, "OBJ indices must be 1-based, got {idx}");
            }
        }
    }

    #[test]
    fn mtl_diffuse_matches_layer_color() {
        let mut buf = Vec::new();
        write_mtl_to(LayerColor::new(255, 0, 128), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("newmtl surface"));
        assert!(text.contains("Kd 1.0000 0.0000 0.5020"));
    }

    #[test]
    fn writes_obj_and_mtl_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (obj, mtl) =
            write_obj(&two_triangle_mesh(), dir.path(), "pair", LayerColor::default()).unwrap();

        assert!(obj.ends_with("pair.obj"));
        assert!(mtl.ends_with("pair.mtl"));
        assert!(obj.exists());
        assert!(mtl.exists());
    }
}
