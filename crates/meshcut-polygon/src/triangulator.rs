use std::collections::HashSet;

use meshcut_core::{Result, Tolerance};
use meshcut_math::{Point2, Point3, PlaneBasis, PointKey};
use tracing::debug;

use crate::bridge::bridge_holes;
use crate::ear_clip::ear_clip;
use crate::edge::{BoundaryEdge, Edge2};
use crate::loops::reconstruct_loops;
use crate::nesting::resolve_nesting;
use crate::polygon_loop::PolygonLoop;

/// Triangulate the planar region bounded by `edges`.
///
/// Returns a flat list of 3D points, three per triangle. Every output point is
/// one of the input endpoints, bit for bit. Triangles follow the 2D
/// counter-clockwise winding of the projection frame, which is arbitrary with
/// respect to the cutting plane; callers orient them against the normal they
/// want.
///
/// An empty edge set gives an empty result. Fails when the endpoints do not
/// span a plane, when a hole cannot be bridged or when ear clipping stalls.
pub fn triangulate_edges(edges: &[BoundaryEdge], tolerance: Tolerance) -> Result<Vec<Point3>> {
    if edges.is_empty() {
        return Ok(Vec::new());
    }

    let points = distinct_endpoints(edges);
    let basis = PlaneBasis::new(&points, tolerance)?;

    let flat = edges
        .iter()
        .map(|e| Ok(Edge2::new(basis.to_2d(e.a)?, basis.to_2d(e.b)?)))
        .collect::<Result<Vec<_>>>()?;

    let nesting = resolve_nesting(reconstruct_loops(&flat, tolerance));

    let mut triangles: Vec<[Point2; 3]> = Vec::new();
    for polygon in &nesting.polygons {
        triangles.extend(triangulate_polygon(&polygon.outer, &polygon.holes)?);
    }
    for outer in &nesting.unpaired {
        triangles.extend(triangulate_polygon(outer, &[])?);
    }

    let mut out = Vec::with_capacity(triangles.len() * 3);
    for triangle in &triangles {
        for &p in triangle {
            out.push(basis.to_3d(p)?);
        }
    }
    debug!(
        edges = edges.len(),
        loops = nesting.loop_count(),
        triangles = triangles.len(),
        "triangulated cross-section"
    );
    Ok(out)
}

/// Triangulate one counter-clockwise outer loop with counter-clockwise holes.
pub fn triangulate_polygon(outer: &PolygonLoop, holes: &[PolygonLoop]) -> Result<Vec<[Point2; 3]>> {
    if holes.is_empty() {
        return ear_clip(outer.points());
    }
    ear_clip(&bridge_holes(outer, holes)?)
}

fn distinct_endpoints(edges: &[BoundaryEdge]) -> Vec<Point3> {
    let mut seen = HashSet::with_capacity(edges.len() * 2);
    let mut points = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        for p in [edge.a, edge.b] {
            if seen.insert(PointKey::new(p)) {
                points.push(p);
            }
        }
    }
    points
}
