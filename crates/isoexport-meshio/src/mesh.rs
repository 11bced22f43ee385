//! Triangle soup mesh with cached bounds.

use nalgebra::{Point3, Vector3};

/// A 3D triangle made up of three vertices and a facet normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3D {
    pub vertices: [Point3<f32>; 3],
    pub normal: Vector3<f32>,
}

impl Triangle3D {
    /// Build a triangle, deriving the normal from the vertex winding.
    pub fn new(v1: Point3<f32>, v2: Point3<f32>, v3: Point3<f32>) -> Self {
        let edge1 = v2 - v1;
        let edge2 = v3 - v1;
        let cross = edge1.cross(&edge2);
        let len = cross.norm();
        // Degenerate slivers get an arbitrary up normal instead of NaN.
        let normal = if len > 1e-12 {
            cross / len
        } else {
            Vector3::new(0.0, 0.0, 1.0)
        };

        Self {
            vertices: [v1, v2, v3],
            normal,
        }
    }

    /// Axis-aligned bounding box of the triangle.
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for vertex in &self.vertices[1..] {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }
        (min, max)
    }
}

/// An extracted isosurface as a plain triangle list.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub triangles: Vec<Triangle3D>,
    bounds_min: Point3<f32>,
    bounds_max: Point3<f32>,
}

impl TriangleMesh {
    pub fn new(triangles: Vec<Triangle3D>) -> Self {
        let mut mesh = Self {
            triangles,
            bounds_min: Point3::origin(),
            bounds_max: Point3::origin(),
        };
        mesh.calculate_bounds();
        mesh
    }

    /// A mesh with no faces, the result of contouring outside the data
    /// range.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounding box over all faces. Meaningless for an empty mesh (both
    /// corners sit at the origin).
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        (self.bounds_min, self.bounds_max)
    }

    fn calculate_bounds(&mut self) {
        if self.triangles.is_empty() {
            return;
        }

        let (mut min, mut max) = self.triangles[0].bounds();
        for triangle in &self.triangles[1..] {
            let (tri_min, tri_max) = triangle.bounds();
            min.x = min.x.min(tri_min.x);
            min.y = min.y.min(tri_min.y);
            min.z = min.z.min(tri_min.z);
            max.x = max.x.max(tri_max.x);
            max.y = max.y.max(tri_max.y);
            max.z = max.z.max(tri_max.z);
        }

        self.bounds_min = min;
        self.bounds_max = max;
    }

    /// Convert an indexed STL mesh back into a triangle list.
    pub fn from_stl_mesh(stl_mesh: &stl_io::IndexedMesh) -> Self {
        let mut triangles = Vec::with_capacity(stl_mesh.faces.len());

        for face in &stl_mesh.faces {
            let v1_idx = face.vertices[0] as usize;
            let v2_idx = face.vertices[1] as usize;
            let v3_idx = face.vertices[2] as usize;

            if v1_idx < stl_mesh.vertices.len()
                && v2_idx < stl_mesh.vertices.len()
                && v3_idx < stl_mesh.vertices.len()
            {
                let v1 = stl_mesh.vertices[v1_idx];
                let v2 = stl_mesh.vertices[v2_idx];
                let v3 = stl_mesh.vertices[v3_idx];

                triangles.push(Triangle3D::new(
                    Point3::new(v1[0], v1[1], v1[2]),
                    Point3::new(v2[0], v2[1], v2[2]),
                    Point3::new(v3[0], v3[1], v3[2]),
                ));
            }
        }

        Self::new(triangles)
    }
}
