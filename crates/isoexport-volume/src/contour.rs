//! Isosurface extraction with Naive Surface Nets.
//!
//! Each grid cell straddling the level gets one vertex at the mean of its
//! edge crossings; quads are stitched across every grid edge whose
//! endpoints lie on opposite sides of the level. A level outside the data
//! range produces no crossings and therefore an empty mesh, which is not
//! an error.

use crate::grid::UniformGrid;
use isoexport_meshio::{Triangle3D, TriangleMesh};
use nalgebra::Point3;
use std::collections::HashMap;
use tracing::debug;

/// Cube corner offsets: 8 vertices of a unit cell.
const CORNERS: [(usize, usize, usize); 8] = [
    (0, 0, 0),
    (1, 0, 0),
    (1, 1, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (1, 1, 1),
    (0, 1, 1),
];

/// 12 edges of a cube (pairs of corner indices).
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // bottom
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // top
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // vertical
];

/// Extract the isosurface of `grid` at the given scalar `level`.
pub fn extract_isosurface(grid: &UniformGrid, level: f64) -> TriangleMesh {
    let [nx, ny, nz] = grid.dims();
    if nx < 2 || ny < 2 || nz < 2 {
        return TriangleMesh::empty();
    }

    // Signed distance to the level; positive means above.
    let diff = |x: usize, y: usize, z: usize| grid.value(x, y, z) - level;

    // Phase 1: one vertex per straddling cell, at the mean of its edge
    // crossings.
    let mut cell_verts: HashMap<(usize, usize, usize), usize> = HashMap::new();
    let mut vertices: Vec<Point3<f64>> = Vec::new();

    for cz in 0..nz - 1 {
        for cy in 0..ny - 1 {
            for cx in 0..nx - 1 {
                let vals: [f64; 8] = std::array::from_fn(|i| {
                    let (dx, dy, dz) = CORNERS[i];
                    diff(cx + dx, cy + dy, cz + dz)
                });

                let above = vals.iter().filter(|&&v| v > 0.0).count();
                if above == 0 || above == 8 {
                    continue;
                }

                let mut avg = [0.0f64; 3];
                let mut count = 0;

                for &(i, j) in &EDGES {
                    if (vals[i] > 0.0) != (vals[j] > 0.0) {
                        let t = vals[i].abs() / (vals[i].abs() + vals[j].abs());
                        let (di, dj) = (CORNERS[i], CORNERS[j]);
                        let pi = grid.world_point(cx + di.0, cy + di.1, cz + di.2);
                        let pj = grid.world_point(cx + dj.0, cy + dj.1, cz + dj.2);
                        for axis in 0..3 {
                            avg[axis] += pi[axis] * (1.0 - t) + pj[axis] * t;
                        }
                        count += 1;
                    }
                }

                if count > 0 {
                    cell_verts.insert((cx, cy, cz), vertices.len());
                    let inv = 1.0 / count as f64;
                    vertices.push(Point3::new(avg[0] * inv, avg[1] * inv, avg[2] * inv));
                }
            }
        }
    }

    // Phase 2: a quad for each interior grid edge crossing the level,
    // joining the vertices of the four cells sharing that edge. Winding
    // follows the field gradient so normals point toward lower values.
    let mut triangles: Vec<Triangle3D> = Vec::new();

    let mut emit = |a: usize, b: usize, c: usize, d: usize, flip: bool| {
        let pa = to_f32(vertices[a]);
        let pb = to_f32(vertices[b]);
        let pc = to_f32(vertices[c]);
        let pd = to_f32(vertices[d]);
        if flip {
            triangles.push(Triangle3D::new(pa, pc, pb));
            triangles.push(Triangle3D::new(pa, pd, pc));
        } else {
            triangles.push(Triangle3D::new(pa, pb, pc));
            triangles.push(Triangle3D::new(pa, pc, pd));
        }
    };

    // X-aligned edges, shared by cells offset in y and z.
    for iz in 1..nz - 1 {
        for iy in 1..ny - 1 {
            for ix in 0..nx - 1 {
                let v0 = diff(ix, iy, iz);
                let v1 = diff(ix + 1, iy, iz);
                if (v0 > 0.0) == (v1 > 0.0) {
                    continue;
                }

                if let (Some(&a), Some(&b), Some(&c), Some(&d)) = (
                    cell_verts.get(&(ix, iy - 1, iz - 1)),
                    cell_verts.get(&(ix, iy, iz - 1)),
                    cell_verts.get(&(ix, iy, iz)),
                    cell_verts.get(&(ix, iy - 1, iz)),
                ) {
                    emit(a, b, c, d, v0 >= v1);
                }
            }
        }
    }

    // Y-aligned edges, shared by cells offset in x and z.
    for iz in 1..nz - 1 {
        for iy in 0..ny - 1 {
            for ix in 1..nx - 1 {
                let v0 = diff(ix, iy, iz);
                let v1 = diff(ix, iy + 1, iz);
                if (v0 > 0.0) == (v1 > 0.0) {
                    continue;
                }

                if let (Some(&a), Some(&b), Some(&c), Some(&d)) = (
                    cell_verts.get(&(ix - 1, iy, iz - 1)),
                    cell_verts.get(&(ix, iy, iz - 1)),
                    cell_verts.get(&(ix, iy, iz)),
                    cell_verts.get(&(ix - 1, iy, iz)),
                ) {
                    emit(a, b, c, d, v0 < v1);
                }
            }
        }
    }

    // Z-aligned edges, shared by cells offset in x and y.
    for iz in 0..nz - 1 {
        for iy in 1..ny - 1 {
            for ix in 1..nx - 1 {
                let v0 = diff(ix, iy, iz);
                let v1 = diff(ix, iy, iz + 1);
                if (v0 > 0.0) == (v1 > 0.0) {
                    continue;
                }

                if let (Some(&a), Some(&b), Some(&c), Some(&d)) = (
                    cell_verts.get(&(ix - 1, iy - 1, iz)),
                    cell_verts.get(&(ix, iy - 1, iz)),
                    cell_verts.get(&(ix, iy, iz)),
                    cell_verts.get(&(ix - 1, iy, iz)),
                ) {
                    emit(a, b, c, d, v0 >= v1);
                }
            }
        }
    }

    debug!(
        "Surface nets: {} cell vertices, {} triangles at level {}",
        vertices.len(),
        triangles.len(),
        level
    );

    TriangleMesh::new(triangles)
}

fn to_f32(p: Point3<f64>) -> Point3<f32> {
    Point3::new(p.x as f32, p.y as f32, p.z as f32)
}
