use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(first, first), |bounds, &p| {
            Self::new(bounds.min.min(p), bounds.max.max(p))
        }))
    }

    pub fn center(&self) -> Point3 {
        self.min.lerp(self.max, 0.5)
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Length of the box measured along `axis` (taken as a direction, sign ignored).
    pub fn extent_along(&self, axis: Vector3) -> f64 {
        self.extents().dot(axis.normalize_or_zero().abs())
    }
}
