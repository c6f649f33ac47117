//! Merging holes into their outer loop through zero-width bridges.

use meshcut_core::{MeshCutError, Result};
use meshcut_math::Point2;

use crate::polygon_loop::PolygonLoop;
use crate::predicates::{orient, segments_intersect};

/// Splice every hole into `outer`, producing one simple polygon.
///
/// `outer` and `holes` are expected counter-clockwise. Each hole is joined at
/// the closest (outer point, hole point) pair whose connecting segment does not
/// cross the current outline or any hole and that leaves the outer point into
/// the polygon's interior; the hole is walked clockwise so the result keeps a
/// consistent winding. The bridge endpoints appear twice, and a later hole
/// joined at one of them is spliced into the copy whose corner faces it.
pub fn bridge_holes(outer: &PolygonLoop, holes: &[PolygonLoop]) -> Result<Vec<Point2>> {
    let mut outline: Vec<Point2> = outer.points().to_vec();

    for (index, hole) in holes.iter().enumerate() {
        let clockwise: Vec<Point2> = hole.reversed().into_points();
        let pending = &holes[index..];

        let mut best: Option<(f64, usize, usize)> = None;
        for (oi, &o) in outline.iter().enumerate() {
            for (hi, &h) in clockwise.iter().enumerate() {
                let distance = o.distance_squared(h);
                if best.is_some_and(|(d, _, _)| distance >= d) {
                    continue;
                }
                if !opens_into_corner(&outline, oi, h)
                    || crosses_outline(o, h, &outline)
                    || crosses_holes(o, h, pending)
                {
                    continue;
                }
                best = Some((distance, oi, hi));
            }
        }

        let (_, oi, hi) = best.ok_or(MeshCutError::UnresolvableNesting { hole: index })?;

        let mut merged = Vec::with_capacity(outline.len() + clockwise.len() + 2);
        merged.extend_from_slice(&outline[oi..]);
        merged.extend_from_slice(&outline[..=oi]);
        merged.extend_from_slice(&clockwise[hi..]);
        merged.extend_from_slice(&clockwise[..=hi]);
        outline = merged;
    }

    Ok(outline)
}

/// True if the ray from `outline[i]` towards `target` starts inside the
/// interior angle at that vertex of the counter-clockwise `outline`.
fn opens_into_corner(outline: &[Point2], i: usize, target: Point2) -> bool {
    let n = outline.len();
    let prev = outline[(i + n - 1) % n];
    let point = outline[i];
    let next = outline[(i + 1) % n];

    let left_of_incoming = orient(prev, point, target) > 0.0;
    let left_of_outgoing = orient(point, next, target) > 0.0;
    if orient(prev, point, next) >= 0.0 {
        left_of_incoming && left_of_outgoing
    } else {
        left_of_incoming || left_of_outgoing
    }
}

fn crosses_outline(a: Point2, b: Point2, outline: &[Point2]) -> bool {
    let n = outline.len();
    (0..n).any(|i| segments_intersect(a, b, outline[i], outline[(i + 1) % n]))
}

fn crosses_holes(a: Point2, b: Point2, holes: &[PolygonLoop]) -> bool {
    holes
        .iter()
        .any(|hole| hole.edges().any(|(c, d)| segments_intersect(a, b, c, d)))
}
