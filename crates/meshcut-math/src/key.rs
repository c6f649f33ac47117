//! Hashable keys for floating-point points.
//!
//! Keys compare bit patterns, so two points share a key only when their
//! coordinates are exactly equal. `-0.0` is folded onto `0.0` first so the
//! keys agree with `==` on `f64`.

use crate::{Point2, Point3};

#[inline]
fn bits(value: f64) -> u64 {
    // -0.0 + 0.0 == +0.0 under round-to-nearest
    (value + 0.0).to_bits()
}

/// Exact-match key for a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey([u64; 3]);

impl PointKey {
    pub fn new(p: Point3) -> Self {
        Self([bits(p.x), bits(p.y), bits(p.z)])
    }
}

impl From<Point3> for PointKey {
    fn from(p: Point3) -> Self {
        Self::new(p)
    }
}

/// Exact-match key for a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2Key([u64; 2]);

impl Point2Key {
    pub fn new(p: Point2) -> Self {
        Self([bits(p.x), bits(p.y)])
    }
}

impl From<Point2> for Point2Key {
    fn from(p: Point2) -> Self {
        Self::new(p)
    }
}
