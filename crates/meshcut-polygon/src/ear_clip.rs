//! Ear clipping for simple counter-clockwise polygons.

use meshcut_core::{MeshCutError, Result};
use meshcut_math::Point2;
use tracing::trace;

use crate::predicates::{orient, point_in_triangle};

/// Triangulate a simple counter-clockwise polygon by repeatedly clipping ears.
///
/// The polygon may contain repeated points from hole bridges. An ear at `b`
/// with neighbours `a` and `c` is strictly convex and contains no other
/// polygon point, counting its edges but not points equal to `a`, `b` or `c`.
/// After each clip the search restarts from the first vertex.
///
/// When a full pass finds no convex ear, a flat one (`a`, `b`, `c` collinear)
/// is accepted instead: `b` is removed without emitting a triangle, so the
/// output never holds zero-area triangles.
///
/// Fails with [`MeshCutError::TriangulationFailed`] if a full pass finds no
/// ear of either kind while three or more vertices remain.
pub fn ear_clip(polygon: &[Point2]) -> Result<Vec<[Point2; 3]>> {
    let mut points = polygon.to_vec();
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));

    let mut index = 0;
    let mut allow_flat = false;
    while points.len() >= 3 && index < points.len() {
        let n = points.len();
        let a = points[index];
        let b = points[(index + 1) % n];
        let c = points[(index + 2) % n];

        if is_ear(&points, a, b, c, allow_flat) {
            if orient(a, b, c) > 0.0 {
                triangles.push([a, b, c]);
            } else {
                trace!(remaining = n, "dropped flat ear");
            }
            points.remove((index + 1) % n);
            index = 0;
            allow_flat = false;
        } else {
            index += 1;
            if index == points.len() && !allow_flat {
                index = 0;
                allow_flat = true;
            }
        }
    }

    if points.len() >= 3 {
        return Err(MeshCutError::TriangulationFailed {
            remaining: points.len(),
        });
    }
    trace!(triangles = triangles.len(), "ear clipping finished");
    Ok(triangles)
}

fn is_ear(points: &[Point2], a: Point2, b: Point2, c: Point2, allow_flat: bool) -> bool {
    let turn = orient(a, b, c);
    if a == b || turn < 0.0 || (turn == 0.0 && !allow_flat) {
        return false;
    }
    !points
        .iter()
        .any(|&p| p != a && p != b && p != c && point_in_triangle(p, a, b, c))
}
