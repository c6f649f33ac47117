use meshcut_core::{Result, Tolerance};
use meshcut_math::{Plane, Vector3};
use meshcut_polygon::triangulate_edges;
use tracing::debug;

use crate::buffer::{MeshBuilder, Vertex};
use crate::split::BoundaryEdges;

/// Triangulate the cut cross-section and append it to both sides.
///
/// The positive side is sealed with faces pointing along `-plane.normal`, the
/// negative side along `+plane.normal`. Each triangle is wound to match its
/// side's normal. Cap vertices are never shared with the rest of the mesh so
/// the hard edge around the cut survives. Returns the number of cap triangles
/// added per side; fewer than two boundary edges add nothing.
pub fn assemble_caps(
    plane: &Plane,
    boundary: &BoundaryEdges,
    tolerance: Tolerance,
    positive: &mut MeshBuilder,
    negative: &mut MeshBuilder,
) -> Result<usize> {
    if boundary.len() < 2 {
        return Ok(0);
    }

    let points = triangulate_edges(boundary.edges(), tolerance)?;
    for tri in points.chunks_exact(3) {
        let corners = [tri[0], tri[1], tri[2]].map(|p| Vertex::new(p, Vector3::ZERO, boundary.uv_of(p)));
        positive.push_unshared_triangle(facing(corners, -plane.normal));
        negative.push_unshared_triangle(facing(corners, plane.normal));
    }

    let count = points.len() / 3;
    debug!(edges = boundary.len(), triangles = count, "capped cross-section");
    Ok(count)
}

/// Assign `normal` to every corner and wind the triangle so its geometric
/// normal does not oppose it.
fn facing(mut corners: [Vertex; 3], normal: Vector3) -> [Vertex; 3] {
    let [a, b, c] = corners.map(|v| v.position);
    if (b - a).cross(c - a).dot(normal) < 0.0 {
        corners.swap(1, 2);
    }
    for v in &mut corners {
        v.normal = normal;
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{dvec2, dvec3};
    use meshcut_math::Point2;

    fn square_boundary(z: f64) -> BoundaryEdges {
        let corners = [
            dvec3(0.0, 0.0, z),
            dvec3(1.0, 0.0, z),
            dvec3(1.0, 1.0, z),
            dvec3(0.0, 1.0, z),
        ];
        let mut boundary = BoundaryEdges::default();
        for i in 0..4 {
            let a = Vertex::new(corners[i], Vector3::ZERO, dvec2(corners[i].x, corners[i].y));
            let b = corners[(i + 1) % 4];
            let b = Vertex::new(b, Vector3::ZERO, dvec2(b.x, b.y));
            boundary.insert(&a, &b);
        }
        boundary
    }

    #[test]
    fn test_caps_face_away_from_each_side() {
        let plane = Plane::xy();
        let mut positive = MeshBuilder::new(true);
        let mut negative = MeshBuilder::new(true);
        let count = assemble_caps(&plane, &square_boundary(0.0), Tolerance::default(), &mut positive, &mut negative)
            .unwrap();
        assert_eq!(count, 2);

        let (pos, neg) = (positive.build(), negative.build());
        assert_eq!(pos.vertex_count(), 6);
        for t in 0..2 {
            assert!((pos.face_normal(t) - Vector3::NEG_Z).length() < 1e-12);
            assert!((neg.face_normal(t) - Vector3::Z).length() < 1e-12);
        }
        assert!(pos.normals.iter().all(|&n| n == Vector3::NEG_Z));
        assert!(neg.normals.iter().all(|&n| n == Vector3::Z));
        // UVs carried over from the boundary endpoints
        for (p, uv) in pos.positions.iter().zip(&pos.uvs) {
            assert_eq!(*uv, Point2::new(p.x, p.y));
        }
    }

    #[test]
    fn test_single_edge_adds_nothing() {
        let mut boundary = BoundaryEdges::default();
        let a = Vertex::new(dvec3(0.0, 0.0, 0.0), Vector3::ZERO, Point2::ZERO);
        let b = Vertex::new(dvec3(1.0, 0.0, 0.0), Vector3::ZERO, Point2::ZERO);
        boundary.insert(&a, &b);
        let mut positive = MeshBuilder::new(false);
        let mut negative = MeshBuilder::new(false);
        let count = assemble_caps(&Plane::xy(), &boundary, Tolerance::default(), &mut positive, &mut negative)
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(positive.triangle_count(), 0);
    }
}
