use meshcut_core::traits::{BoundingBox, Validate};
use meshcut_core::{MeshCutError, Result};
use meshcut_math::{Aabb3, Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh with parallel per-vertex attributes.
///
/// `normals` and `uvs` are either empty or exactly as long as `positions`.
/// When empty, consumers fall back to face normals and zero texture
/// coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Point3>, normals: Vec<Vector3>, indices: Vec<u32>, uvs: Vec<Point2>) -> Self {
        Self {
            positions,
            normals,
            indices,
            uvs,
        }
    }

    /// Axis-aligned box centered at `center`, 24 vertices with face normals
    /// and per-face texture coordinates, wound counter-clockwise from outside.
    pub fn cuboid(center: Point3, size: Vector3) -> Self {
        let h = size * 0.5;
        // (normal, two in-face axes chosen so u x v == normal)
        let faces = [
            (Vector3::X, Vector3::Y, Vector3::Z),
            (Vector3::NEG_X, Vector3::Z, Vector3::Y),
            (Vector3::Y, Vector3::Z, Vector3::X),
            (Vector3::NEG_Y, Vector3::X, Vector3::Z),
            (Vector3::Z, Vector3::X, Vector3::Y),
            (Vector3::NEG_Z, Vector3::Y, Vector3::X),
        ];
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

        let mut mesh = Self::default();
        for (normal, u, v) in faces {
            let base = mesh.positions.len() as u32;
            for (cu, cv) in corners {
                let local = normal + u * cu + v * cv;
                mesh.positions.push(center + local * h);
                mesh.normals.push(normal);
                mesh.uvs.push(Point2::new((cu + 1.0) * 0.5, (cv + 1.0) * 0.5));
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex indices of triangle `t`.
    pub fn triangle_indices(&self, t: usize) -> [usize; 3] {
        let i = &self.indices[t * 3..t * 3 + 3];
        [i[0] as usize, i[1] as usize, i[2] as usize]
    }

    pub fn triangle(&self, t: usize) -> [Point3; 3] {
        self.triangle_indices(t).map(|i| self.positions[i])
    }

    /// Unit face normal of triangle `t` from its winding; zero when degenerate.
    pub fn face_normal(&self, t: usize) -> Vector3 {
        let [a, b, c] = self.triangle(t);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Vertex normal, or `fallback` when the mesh carries no normals.
    pub fn normal_or(&self, i: usize, fallback: Vector3) -> Vector3 {
        self.normals.get(i).copied().unwrap_or(fallback)
    }

    /// Texture coordinate, or the origin when the mesh carries no UVs.
    pub fn uv_or_zero(&self, i: usize) -> Point2 {
        self.uvs.get(i).copied().unwrap_or(Point2::ZERO)
    }

    /// Append `other`, shifting its indices past this mesh's vertices.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|&i| base + i));
    }

    /// Smooth vertex normals: each vertex gets the normalized sum of the
    /// area-weighted normals of the triangles using it.
    ///
    /// Vertices referenced by no triangle get a zero normal.
    pub fn compute_normals(&mut self) {
        let mut accumulated = vec![Vector3::ZERO; self.positions.len()];
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            let weighted = (b - a).cross(c - a);
            for i in self.triangle_indices(t) {
                accumulated[i] += weighted;
            }
        }
        self.normals = accumulated.into_iter().map(Vector3::normalize_or_zero).collect();
    }

    /// Append a back-facing copy of every triangle.
    ///
    /// Vertices are duplicated with negated normals and each triangle
    /// `(a, b, c)` is re-emitted as `(a', c', b')` on the duplicates, so open
    /// surfaces render from both sides.
    pub fn add_reversed_faces(&mut self) {
        let count = self.positions.len();
        let offset = count as u32;

        self.positions.extend_from_within(..count);
        if self.normals.len() == count {
            self.normals.extend_from_within(..count);
            for n in &mut self.normals[count..] {
                *n = -*n;
            }
        }
        if self.uvs.len() == count {
            self.uvs.extend_from_within(..count);
        }

        let triangles = self.indices.len();
        self.indices.reserve(triangles);
        for t in 0..triangles / 3 {
            let (a, b, c) = (self.indices[t * 3], self.indices[t * 3 + 1], self.indices[t * 3 + 2]);
            self.indices.extend_from_slice(&[a + offset, c + offset, b + offset]);
        }
    }

    pub fn translate(&mut self, offset: Vector3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Move the mesh so its bounding-box center sits at the origin.
    ///
    /// Returns the removed offset; adding it to the owner's position keeps the
    /// mesh in place in world space.
    pub fn recenter(&mut self) -> Vector3 {
        let Some(bounds) = Aabb3::from_points(&self.positions) else {
            return Vector3::ZERO;
        };
        let center = bounds.center();
        self.translate(-center);
        center
    }

    /// Signed enclosed volume (divergence theorem); positive for closed meshes
    /// wound counter-clockwise from outside.
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangle_count())
            .map(|t| {
                let [a, b, c] = self.triangle(t);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    pub fn surface_area(&self) -> f64 {
        (0..self.triangle_count())
            .map(|t| {
                let [a, b, c] = self.triangle(t);
                (b - a).cross(c - a).length() * 0.5
            })
            .sum()
    }
}

impl BoundingBox for TriangleMesh {
    type Bounds = Aabb3;

    /// Compute the axis-aligned bounding box of all positions; a degenerate
    /// box at the origin for an empty mesh.
    fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl Validate for TriangleMesh {
    fn validate(&self) -> Result<()> {
        let n = self.positions.len();
        if self.indices.len() % 3 != 0 {
            return Err(MeshCutError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if !self.normals.is_empty() && self.normals.len() != n {
            return Err(MeshCutError::InvalidMesh(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                n
            )));
        }
        if !self.uvs.is_empty() && self.uvs.len() != n {
            return Err(MeshCutError::InvalidMesh(format!(
                "{} uvs for {} vertices",
                self.uvs.len(),
                n
            )));
        }
        for (t, tri) in self.indices.chunks_exact(3).enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i as usize >= n) {
                return Err(MeshCutError::InvalidMesh(format!(
                    "triangle {t} references vertex {bad} of {n}"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshCutError::InvalidMesh(format!(
                    "triangle {t} repeats a vertex: {tri:?}"
                )));
            }
        }
        Ok(())
    }
}
