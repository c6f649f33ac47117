use crate::{DMat3, DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Local-to-parent affine transform of an object, stored column-major.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_scale(scale: Vector3) -> Self {
        Self::from_mat4(DMat4::from_scale(scale))
    }

    /// Rotation of `angle` radians about `axis`, built with [`rodrigues`].
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        Self::from_mat4(DMat4::from_mat3(rodrigues(axis, angle)))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// `None` when the matrix is singular, e.g. a zero scale on some axis.
    pub fn inverse(&self) -> Option<Transform> {
        let m = self.to_mat4();
        (m.determinant().abs() >= 1e-15).then(|| Self::from_mat4(m.inverse()))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation matrix of `angle` radians about `axis` (Rodrigues' formula).
///
/// `R = cos(a) I + sin(a) [k]x + (1 - cos(a)) k k^T` with `k` the normalized axis.
/// A zero axis yields the identity.
pub fn rodrigues(axis: Vector3, angle: f64) -> DMat3 {
    let k = axis.normalize_or_zero();
    if k == Vector3::ZERO {
        return DMat3::IDENTITY;
    }
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    DMat3::from_cols(
        Vector3::new(t * k.x * k.x + c, t * k.x * k.y + k.z * s, t * k.z * k.x - k.y * s),
        Vector3::new(t * k.x * k.y - k.z * s, t * k.y * k.y + c, t * k.y * k.z + k.x * s),
        Vector3::new(t * k.z * k.x + k.y * s, t * k.y * k.z - k.x * s, t * k.z * k.z + c),
    )
}
