//! Per-triangle classification and splitting against a cutting plane.

use std::collections::{HashMap, HashSet};

use meshcut_core::Tolerance;
use meshcut_math::{Plane, Point2, Point3, PointKey, Side, Vector3};
use meshcut_polygon::BoundaryEdge;

use crate::buffer::{MeshBuilder, Vertex};
use crate::mesh::TriangleMesh;

/// Deduplicated cross-section edges with the texture coordinate recorded for
/// each endpoint.
#[derive(Debug, Default)]
pub struct BoundaryEdges {
    edges: Vec<BoundaryEdge>,
    seen: HashSet<(PointKey, PointKey)>,
    uvs: HashMap<PointKey, Point2>,
}

impl BoundaryEdges {
    /// Record the segment `a`-`b`; ignored if degenerate or already present
    /// in either direction. The first UV seen for an endpoint is kept.
    pub fn insert(&mut self, a: &Vertex, b: &Vertex) {
        let (ka, kb) = (PointKey::new(a.position), PointKey::new(b.position));
        if ka == kb {
            return;
        }
        let key = if ka < kb { (ka, kb) } else { (kb, ka) };
        if !self.seen.insert(key) {
            return;
        }
        self.edges.push(BoundaryEdge::new(a.position, b.position));
        self.uvs.entry(ka).or_insert(a.uv);
        self.uvs.entry(kb).or_insert(b.uv);
    }

    pub fn edges(&self) -> &[BoundaryEdge] {
        &self.edges
    }

    /// Texture coordinate recorded for an endpoint; the origin if unknown.
    pub fn uv_of(&self, point: Point3) -> Point2 {
        self.uvs
            .get(&PointKey::new(point))
            .copied()
            .unwrap_or(Point2::ZERO)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Result of splitting a mesh: both side buffers and the cut boundary.
#[derive(Debug)]
pub struct SplitOutput {
    pub positive: MeshBuilder,
    pub negative: MeshBuilder,
    pub boundary: BoundaryEdges,
}

#[derive(Debug, Clone, Copy)]
struct Classified {
    vertex: Vertex,
    near: bool,
    side: Side,
}

/// Splits triangles against a plane into two side-tagged streams.
#[derive(Debug)]
pub struct Splitter<'a> {
    plane: &'a Plane,
    tolerance: Tolerance,
    positive: MeshBuilder,
    negative: MeshBuilder,
    boundary: BoundaryEdges,
}

impl<'a> Splitter<'a> {
    pub fn new(plane: &'a Plane, tolerance: Tolerance, share_vertices: bool) -> Self {
        Self {
            plane,
            tolerance,
            positive: MeshBuilder::new(share_vertices),
            negative: MeshBuilder::new(share_vertices),
            boundary: BoundaryEdges::default(),
        }
    }

    /// Split every triangle of `mesh`. Missing normals fall back to the face
    /// normal, missing UVs to the origin.
    pub fn split_mesh(&mut self, mesh: &TriangleMesh) {
        for t in 0..mesh.triangle_count() {
            let face_normal = mesh.face_normal(t);
            let triangle = mesh
                .triangle_indices(t)
                .map(|i| Vertex::new(mesh.positions[i], mesh.normal_or(i, face_normal), mesh.uv_or_zero(i)));
            self.split_triangle(triangle);
        }
    }

    pub fn split_triangle(&mut self, triangle: [Vertex; 3]) {
        let c = triangle.map(|v| self.classify(v));
        let near_count = c.iter().filter(|v| v.near).count();

        match near_count {
            3 => {}
            2 => {
                let Some(far) = c.iter().position(|v| !v.near) else {
                    return;
                };
                let (a, b) = (c[(far + 1) % 3], c[(far + 2) % 3]);
                self.boundary.insert(&a.vertex, &b.vertex);
                self.emit(c[far].side, triangle);
            }
            1 => {
                let Some(n) = c.iter().position(|v| v.near) else {
                    return;
                };
                let (near, x, y) = (c[n], c[(n + 1) % 3], c[(n + 2) % 3]);
                if x.side == y.side {
                    self.emit(x.side, triangle);
                    return;
                }
                let i = self.intersect(&x, &y);
                self.emit_new(x.side, [near.vertex, x.vertex, i], &[2]);
                self.emit_new(y.side, [near.vertex, i, y.vertex], &[1]);
                self.boundary.insert(&near.vertex, &i);
            }
            _ => {
                if c[0].side == c[1].side && c[1].side == c[2].side {
                    self.emit(c[0].side, triangle);
                    return;
                }
                // the vertex alone on its side
                let lone = if c[1].side == c[2].side {
                    0
                } else if c[0].side == c[2].side {
                    1
                } else {
                    2
                };
                let (l, p, q) = (c[lone], c[(lone + 1) % 3], c[(lone + 2) % 3]);
                let i1 = self.intersect(&l, &p);
                let i2 = self.intersect(&l, &q);

                self.emit_new(l.side, [l.vertex, i1, i2], &[1, 2]);
                let far = l.side.opposite();
                self.emit_new(far, [i1, p.vertex, q.vertex], &[0]);
                self.emit_new(far, [i1, q.vertex, i2], &[0, 2]);
                self.boundary.insert(&i1, &i2);
            }
        }
    }

    pub fn finish(self) -> SplitOutput {
        SplitOutput {
            positive: self.positive,
            negative: self.negative,
            boundary: self.boundary,
        }
    }

    fn classify(&self, vertex: Vertex) -> Classified {
        let distance = self.plane.signed_distance(vertex.position);
        Classified {
            vertex,
            near: self.tolerance.is_near_plane(distance),
            side: self.plane.side(vertex.position),
        }
    }

    /// Point where edge `a`-`b` meets the plane.
    ///
    /// Endpoints are ordered by key first so both triangles sharing an edge
    /// compute a bit-identical point. The UV is interpolated by the same edge
    /// parameter; the normal is left for the emitting triangle to fill in.
    fn intersect(&self, a: &Classified, b: &Classified) -> Vertex {
        let (lo, hi) = if PointKey::new(a.vertex.position) <= PointKey::new(b.vertex.position) {
            (a, b)
        } else {
            (b, a)
        };
        let t = self
            .plane
            .segment_parameter(lo.vertex.position, hi.vertex.position)
            .unwrap_or(0.5);
        let position = lo.vertex.position + (hi.vertex.position - lo.vertex.position) * t;
        let uv = lo.vertex.uv + (hi.vertex.uv - lo.vertex.uv) * t;
        Vertex::new(position, Vector3::ZERO, uv)
    }

    fn emit(&mut self, side: Side, triangle: [Vertex; 3]) {
        self.buffer(side).push_triangle(triangle);
    }

    /// Emit a triangle containing new intersection points at the `fresh`
    /// corners; they receive the triangle's geometric normal.
    fn emit_new(&mut self, side: Side, mut triangle: [Vertex; 3], fresh: &[usize]) {
        let [a, b, c] = triangle.map(|v| v.position);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        for &corner in fresh {
            triangle[corner].normal = normal;
        }
        self.emit(side, triangle);
    }

    fn buffer(&mut self, side: Side) -> &mut MeshBuilder {
        match side {
            Side::Positive => &mut self.positive,
            Side::Negative => &mut self.negative,
        }
    }
}
