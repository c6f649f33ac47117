use crate::{Point3, Ray, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// Which half-space of a plane something lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Positive,
    Negative,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }
}

/// A plane in 3D space defined by a point and unit normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Plane of all points `p` with `dot(normal, p) == offset` (normal is normalized first).
    pub fn from_normal_and_offset(normal: Vector3, offset: f64) -> Self {
        let normal = normal.normalize();
        Self {
            origin: normal * offset,
            normal,
        }
    }

    /// Plane through `a` whose normal is `(b - a) x (b - c)`.
    ///
    /// This is the orientation used for blade geometry given as tip, base and
    /// top-center points. Returns `None` when the points are collinear.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Option<Self> {
        let normal = (b - a).cross(b - c);
        if normal.length_squared() < 1e-24 {
            return None;
        }
        Some(Self::new(a, normal))
    }

    pub fn xy() -> Self {
        Self::new(Point3::ZERO, Vector3::Z)
    }

    pub fn xz() -> Self {
        Self::new(Point3::ZERO, Vector3::Y)
    }

    pub fn yz() -> Self {
        Self::new(Point3::ZERO, Vector3::X)
    }

    /// Signed offset of the plane from the world origin along its normal.
    pub fn offset(&self) -> f64 {
        self.origin.dot(self.normal)
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Strictly above the plane is positive; on or below it is negative.
    pub fn side(&self, point: Point3) -> Side {
        if self.signed_distance(point) > 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }

    /// Same plane with the normal reversed, so the sides swap.
    pub fn flipped(&self) -> Self {
        Self {
            origin: self.origin,
            normal: -self.normal,
        }
    }

    /// Distance along the ray at which it enters the plane, if it does so ahead of its origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < f64::EPSILON {
            return None;
        }
        let t = -self.signed_distance(ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Parameter `t` such that `a + (b - a) * t` lies on the plane.
    ///
    /// `None` when the segment is parallel to the plane. The value is not
    /// clamped; it is in `[0, 1]` exactly when the endpoints straddle the plane.
    pub fn segment_parameter(&self, a: Point3, b: Point3) -> Option<f64> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        if da == db {
            return None;
        }
        Some(da / (da - db))
    }

    /// Express this world-space plane in the local space of an object.
    ///
    /// Returns `None` when the transform is not invertible.
    pub fn to_local(&self, local_to_world: &Transform) -> Option<Self> {
        let world_to_local = local_to_world.inverse()?;
        let origin = world_to_local.transform_point(self.origin);
        // normals transform by the inverse transpose of world_to_local
        let normal = local_to_world
            .to_mat4()
            .transpose()
            .transform_vector3(self.normal);
        Some(Self::new(origin, normal))
    }
}
