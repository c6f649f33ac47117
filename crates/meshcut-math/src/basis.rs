//! Orthonormal 2D frame embedded in a 3D plane.
//!
//! A [`PlaneBasis`] is built from a set of coplanar points (the endpoints of a
//! cut cross-section). Every registered point is projected once and cached in
//! both directions, so `to_3d(to_2d(p))` returns `p` bit for bit. Lookups are
//! exact: a point that was not registered, or that differs in the last bit, is
//! reported as unknown.

use std::collections::HashMap;

use meshcut_core::{MeshCutError, Result, Tolerance};
use tracing::trace;

use crate::key::{Point2Key, PointKey};
use crate::{DMat4, DVec4, Point2, Point3, Vector3};

#[derive(Debug, Clone)]
pub struct PlaneBasis {
    origin: Point3,
    u: Vector3,
    v: Vector3,
    normal: Vector3,
    to_plane: DMat4,
    projected: HashMap<PointKey, Point2>,
    lifted: HashMap<Point2Key, Point3>,
}

impl PlaneBasis {
    /// Build a basis over `points` and register every one of them.
    ///
    /// Fails with [`MeshCutError::DegenerateGeometry`] when no triple of
    /// pairwise separated, non-collinear points exists.
    pub fn new(points: &[Point3], tolerance: Tolerance) -> Result<Self> {
        let (p, q, r) = find_frame_triple(points, tolerance).ok_or_else(|| {
            MeshCutError::DegenerateGeometry(format!(
                "no non-collinear triple among {} points",
                points.len()
            ))
        })?;

        let u = (q - p).normalize();
        let normal = u.cross(r - p).normalize();
        let v = u.cross(normal);

        // Source frame: the homogeneous points P, P+u, P+v, P+n as columns.
        let source = DMat4::from_cols(
            p.extend(1.0),
            (p + u).extend(1.0),
            (p + v).extend(1.0),
            (p + normal).extend(1.0),
        );
        // Destination frame: the same four points in plane coordinates.
        let destination = DMat4::from_cols(
            DVec4::new(0.0, 0.0, 0.0, 1.0),
            DVec4::new(1.0, 0.0, 0.0, 1.0),
            DVec4::new(0.0, 1.0, 0.0, 1.0),
            DVec4::new(0.0, 0.0, 1.0, 1.0),
        );
        if source.determinant().abs() < 1e-12 {
            return Err(MeshCutError::DegenerateGeometry(
                "projection frame is singular".into(),
            ));
        }
        let to_plane = destination * source.inverse();

        let mut basis = Self {
            origin: p,
            u,
            v,
            normal,
            to_plane,
            projected: HashMap::with_capacity(points.len()),
            lifted: HashMap::with_capacity(points.len()),
        };
        for &point in points {
            basis.register(point);
        }
        trace!(points = basis.projected.len(), "plane basis built");
        Ok(basis)
    }

    fn register(&mut self, point: Point3) {
        let key = PointKey::new(point);
        if self.projected.contains_key(&key) {
            return;
        }
        let flat = self.to_plane.transform_point3(point).truncate();
        self.projected.insert(key, flat);
        self.lifted.entry(Point2Key::new(flat)).or_insert(point);
    }

    /// First point of the frame triple; maps to `(0, 0)`.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Unit vectors of the 2D axes and the plane normal, in 3D.
    ///
    /// Note `u x v == -normal`, so counter-clockwise 2D polygons face `-normal`.
    pub fn axes(&self) -> (Vector3, Vector3, Vector3) {
        (self.u, self.v, self.normal)
    }

    /// Number of distinct registered points.
    pub fn len(&self) -> usize {
        self.projected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projected.is_empty()
    }

    /// Cached 2D coordinates of a registered point.
    pub fn to_2d(&self, point: Point3) -> Result<Point2> {
        self.projected
            .get(&PointKey::new(point))
            .copied()
            .ok_or_else(|| MeshCutError::UnknownPoint(format!("{point:?}")))
    }

    /// Original 3D point for cached 2D coordinates.
    pub fn to_3d(&self, point: Point2) -> Result<Point3> {
        self.lifted
            .get(&Point2Key::new(point))
            .copied()
            .ok_or_else(|| MeshCutError::UnknownPoint(format!("{point:?}")))
    }
}

/// Distance-sum collinearity test: true if one of the three distances equals
/// the sum of the other two.
pub fn are_collinear(a: Point3, b: Point3, c: Point3, tolerance: Tolerance) -> bool {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ac = a.distance(c);
    tolerance.lengths_eq(ab + bc, ac)
        || tolerance.lengths_eq(ab + ac, bc)
        || tolerance.lengths_eq(bc + ac, ab)
}

/// First index-ordered triple that is pairwise separated and not collinear.
fn find_frame_triple(points: &[Point3], tolerance: Tolerance) -> Option<(Point3, Point3, Point3)> {
    let n = points.len();
    for i in 0..n {
        for j in i + 1..n {
            if points[i].distance(points[j]) < tolerance.coincident {
                continue;
            }
            for k in j + 1..n {
                if points[i].distance(points[k]) < tolerance.coincident
                    || points[j].distance(points[k]) < tolerance.coincident
                {
                    continue;
                }
                if are_collinear(points[i], points[j], points[k], tolerance) {
                    continue;
                }
                return Some((points[i], points[j], points[k]));
            }
        }
    }
    None
}
