use meshcut_math::{Point2, Point3};

/// Segment of a cut cross-section in 3D, produced by the triangle splitter.
///
/// Endpoint order carries no meaning; two edges with swapped endpoints are the
/// same boundary segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEdge {
    pub a: Point3,
    pub b: Point3,
}

impl BoundaryEdge {
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }
}

/// Boundary edge projected into a cap's 2D frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2 {
    pub a: Point2,
    pub b: Point2,
}

impl Edge2 {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// The endpoint that is not `p`; `None` if `p` is not an endpoint.
    pub fn other(&self, p: Point2) -> Option<Point2> {
        if self.a == p {
            Some(self.b)
        } else if self.b == p {
            Some(self.a)
        } else {
            None
        }
    }
}
