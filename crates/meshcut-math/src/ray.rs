use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Half-line used to probe a cutting plane, e.g. along a blade edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    /// Unit direction.
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray starting at `from` and heading towards `to`.
    pub fn through(from: Point3, to: Point3) -> Self {
        Self::new(from, to - from)
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
