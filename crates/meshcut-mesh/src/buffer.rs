use std::collections::HashMap;

use meshcut_math::{Point2, Point2Key, Point3, PointKey, Vector3};

use crate::mesh::TriangleMesh;

/// One vertex with all of its attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3,
    pub normal: Vector3,
    pub uv: Point2,
}

impl Vertex {
    pub fn new(position: Point3, normal: Vector3, uv: Point2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    fn key(&self) -> VertexKey {
        (
            PointKey::new(self.position),
            PointKey::new(self.normal),
            Point2Key::new(self.uv),
        )
    }
}

type VertexKey = (PointKey, PointKey, Point2Key);

/// Accumulates the vertex and index streams of one output mesh.
///
/// With sharing enabled, a vertex whose position, normal and UV are all
/// bit-identical to an earlier one reuses its index.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: TriangleMesh,
    shared: Option<HashMap<VertexKey, u32>>,
}

impl MeshBuilder {
    pub fn new(share_vertices: bool) -> Self {
        Self {
            mesh: TriangleMesh::default(),
            shared: share_vertices.then(HashMap::new),
        }
    }

    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        match self.shared.as_mut() {
            Some(shared) => {
                let mesh = &mut self.mesh;
                *shared
                    .entry(vertex.key())
                    .or_insert_with(|| append(mesh, vertex))
            }
            None => append(&mut self.mesh, vertex),
        }
    }

    /// Append a vertex without consulting or updating the sharing map.
    pub fn push_unshared(&mut self, vertex: Vertex) -> u32 {
        append(&mut self.mesh, vertex)
    }

    pub fn push_triangle(&mut self, triangle: [Vertex; 3]) {
        let [a, b, c] = triangle.map(|v| self.push_vertex(v));
        self.mesh.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn push_unshared_triangle(&mut self, triangle: [Vertex; 3]) {
        let [a, b, c] = triangle.map(|v| self.push_unshared(v));
        self.mesh.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn build(self) -> TriangleMesh {
        self.mesh
    }
}

fn append(mesh: &mut TriangleMesh, vertex: Vertex) -> u32 {
    let index = mesh.positions.len() as u32;
    mesh.positions.push(vertex.position);
    mesh.normals.push(vertex.normal);
    mesh.uvs.push(vertex.uv);
    index
}
