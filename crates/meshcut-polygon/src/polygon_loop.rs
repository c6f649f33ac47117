use meshcut_core::Tolerance;
use meshcut_math::Point2;

use crate::predicates::{is_collinear_middle, point_in_polygon, segments_intersect, signed_area};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Closed 2D polygon; the last point connects back to the first implicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonLoop {
    points: Vec<Point2>,
}

impl PolygonLoop {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn orientation(&self) -> Orientation {
        if self.signed_area() < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    pub fn make_counter_clockwise(&mut self) {
        if self.orientation() == Orientation::Clockwise {
            self.points.reverse();
        }
    }

    /// Same loop traversed the other way.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Drop every vertex that lies on the segment between its neighbours.
    ///
    /// Repeats until stable, since removing one vertex can make a neighbour
    /// collinear. Stops once fewer than three points remain.
    pub fn remove_collinear(&mut self, tolerance: Tolerance) {
        let mut i = 0;
        let mut since_removal = 0;
        while self.points.len() >= 3 && since_removal < self.points.len() {
            let n = self.points.len();
            let prev = self.points[(i + n - 1) % n];
            let next = self.points[(i + 1) % n];
            if is_collinear_middle(prev, self.points[i], next, tolerance) {
                self.points.remove(i);
                since_removal = 0;
                if i >= self.points.len() {
                    i = 0;
                }
            } else {
                since_removal += 1;
                i = (i + 1) % n;
            }
        }
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        point_in_polygon(&self.points, p)
    }

    /// True if any edge of `self` crosses or touches an edge of `other`.
    pub fn intersects(&self, other: &PolygonLoop) -> bool {
        self.edges()
            .any(|(a, b)| other.edges().any(|(c, d)| segments_intersect(a, b, c, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square(min: f64, max: f64) -> PolygonLoop {
        PolygonLoop::new(vec![
            dvec2(min, min),
            dvec2(max, min),
            dvec2(max, max),
            dvec2(min, max),
        ])
    }

    #[test]
    fn test_orientation() {
        let ccw = square(0.0, 1.0);
        assert_eq!(ccw.orientation(), Orientation::CounterClockwise);
        let mut cw = ccw.reversed();
        assert_eq!(cw.orientation(), Orientation::Clockwise);
        cw.make_counter_clockwise();
        assert_eq!(cw.orientation(), Orientation::CounterClockwise);
        assert!((cw.signed_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_remove_collinear() {
        let mut octagon = PolygonLoop::new(vec![
            dvec2(0.0, 0.0),
            dvec2(0.5, 0.0),
            dvec2(1.0, 0.0),
            dvec2(1.0, 0.5),
            dvec2(1.0, 1.0),
            dvec2(0.5, 1.0),
            dvec2(0.0, 1.0),
            dvec2(0.0, 0.5),
        ]);
        octagon.remove_collinear(Tolerance::default());
        assert_eq!(octagon.len(), 4);
        assert!((octagon.signed_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_remove_collinear_first_vertex() {
        let mut lp = PolygonLoop::new(vec![
            dvec2(1.0, 0.0),
            dvec2(2.0, 0.0),
            dvec2(2.0, 2.0),
            dvec2(0.0, 2.0),
            dvec2(0.0, 0.0),
        ]);
        lp.remove_collinear(Tolerance::default());
        assert_eq!(lp.len(), 4);
        assert!(!lp.points().contains(&dvec2(1.0, 0.0)));
    }

    #[test]
    fn test_remove_collinear_flat_loop_collapses() {
        let mut flat = PolygonLoop::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(2.0, 0.0)]);
        flat.remove_collinear(Tolerance::default());
        assert!(flat.len() < 3);
    }

    #[test]
    fn test_containment_and_intersection() {
        let outer = square(0.0, 4.0);
        let inner = square(1.0, 3.0);
        let shifted = square(3.0, 5.0);
        assert!(outer.contains_point(inner.points()[0]));
        assert!(!inner.contains_point(outer.points()[0]));
        assert!(!outer.intersects(&inner));
        assert!(outer.intersects(&shifted));
        assert_eq!(outer.edges().count(), 4);
    }
}
