//! 2D geometric predicates used by the triangulator.

use meshcut_core::Tolerance;
use meshcut_math::Point2;

/// Twice the signed area of triangle `abc`; positive when counter-clockwise.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Shoelace signed area of a closed polygon; positive when counter-clockwise.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.perp_dot(b);
    }
    sum * 0.5
}

/// Distance-sum test for `prev -> point -> next`: true when `point` sits on
/// the segment between its neighbours.
pub fn is_collinear_middle(prev: Point2, point: Point2, next: Point2, tolerance: Tolerance) -> bool {
    let through = prev.distance(point) + point.distance(next);
    tolerance.lengths_eq(through, prev.distance(next))
}

/// True if `p` lies inside or on the boundary of triangle `abc` (either winding).
///
/// For a zero-area triangle this degrades to a bounding-box test along its line.
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    let d1 = orient(a, b, p);
    let d2 = orient(b, c, p);
    let d3 = orient(c, a, p);

    if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 {
        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        return p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;
    }

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// True if segments `p1p2` and `q1q2` cross or touch.
///
/// Segments sharing an endpoint never count as intersecting, so adjacent
/// polygon edges and bridges that start at a polygon vertex are allowed.
pub fn segments_intersect(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> bool {
    if p1 == p2 || q1 == q2 || p1 == q1 || p1 == q2 || p2 == q1 || p2 == q2 {
        return false;
    }

    let o1 = orient(p1, p2, q1);
    let o2 = orient(p1, p2, q2);
    let o3 = orient(q1, q2, p1);
    let o4 = orient(q1, q2, p2);

    if ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    {
        return true;
    }

    (o1 == 0.0 && on_segment(q1, p1, p2))
        || (o2 == 0.0 && on_segment(q2, p1, p2))
        || (o3 == 0.0 && on_segment(p1, q1, q2))
        || (o4 == 0.0 && on_segment(p2, q1, q2))
}

/// `p` is known to be collinear with `ab`; check it lies within the segment.
fn on_segment(p: Point2, a: Point2, b: Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Even-odd ray casting test.
pub fn point_in_polygon(polygon: &[Point2], p: Point2) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y < p.y && b.y >= p.y) || (b.y < p.y && a.y >= p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if x < p.x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
