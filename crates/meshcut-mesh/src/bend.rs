//! Cylindrical curl deformation.
//!
//! Everything above a moving height `y` (measured along the up axis) is rolled
//! around an axis perpendicular to both up and the roll direction, like a chip
//! peeling off in front of a blade. Vertices at or below `y` do not move.

use std::f64::consts::TAU;

use meshcut_math::transform::rodrigues;
use meshcut_math::{Aabb3, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::curve::{lerp, Curve};

/// Shape of the curl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendParameters {
    /// Unit up axis; the bend coordinate is measured along it.
    pub up: Vector3,
    /// Unit direction the curl rolls towards.
    pub roll: Vector3,
    /// Base curl radius.
    pub radius: f64,
    /// How fast the radius grows with remaining height, and how far rolled
    /// material drifts towards the curl axis.
    pub deviation: f64,
    /// Height of the mesh top along `up`.
    pub mesh_top: f64,
    /// Distance along `roll` from the origin to the start of the curl.
    pub roll_offset: f64,
}

impl BendParameters {
    /// Axes are normalized.
    pub fn new(
        up: Vector3,
        roll: Vector3,
        radius: f64,
        deviation: f64,
        mesh_top: f64,
        roll_offset: f64,
    ) -> Self {
        Self {
            up: up.normalize_or_zero(),
            roll: roll.normalize_or_zero(),
            radius,
            deviation,
            mesh_top,
            roll_offset,
        }
    }

    /// Rotation axis of the curl, `normalize(up x roll)`.
    pub fn axis(&self) -> Vector3 {
        self.up.cross(self.roll).normalize_or_zero()
    }
}

/// Bend one vertex with the curl positioned at height `y`.
pub fn bend_point(v: Point3, params: &BendParameters, y: f64) -> Point3 {
    let up = params.up;
    let d = (v - up * y).dot(up).max(0.0);
    if d == 0.0 {
        return v;
    }

    let lowered = v - up * d;
    let lift = (params.mesh_top - y).max(0.0);
    let radius = params.radius + params.deviation * lift;
    let length = TAU * (radius - params.deviation * lift / 2.0);
    // a non-positive circumference cannot be rolled onto
    let angle = if length > 0.0 { TAU * d / length } else { 0.0 };

    let axis = params.axis();
    let rotation = rodrigues(axis, angle);

    let center = params.roll * params.roll_offset + params.roll * radius + up * y;
    let mut from_center = lowered - center;
    let drift = axis.cross(from_center).cross(axis).normalize_or_zero();
    from_center -= drift * params.deviation * d;

    rotation * from_center + center
}

/// Bend a whole vertex buffer in parallel. Returns a new buffer; the input is
/// not modified.
#[instrument(skip(vertices, params), fields(vertices = vertices.len()))]
pub fn bend(vertices: &[Point3], params: &BendParameters, y: f64) -> Vec<Point3> {
    vertices.par_iter().map(|&v| bend_point(v, params, y)).collect()
}

/// Derives [`BendParameters`] from the size of the piece being bent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BendProfile {
    /// Lower and upper clamp for the piece depth; the upper one also
    /// normalizes it.
    pub size_clamp: [f64; 2],
    /// Radius factor at normalized depth curve values 0 and 1.
    pub radius_bounds: [f64; 2],
    /// Deviation at normalized depth curve values 0 and 1.
    pub deviation_bounds: [f64; 2],
    pub radius_curve: Curve,
    pub deviation_curve: Curve,
}

impl Default for BendProfile {
    fn default() -> Self {
        Self {
            size_clamp: [0.01, 1.0],
            radius_bounds: [1.2, 1.0],
            deviation_bounds: [3.5, 0.01],
            radius_curve: Curve::linear(),
            deviation_curve: Curve::linear(),
        }
    }
}

impl BendProfile {
    /// Parameters for a piece with the given bounds.
    ///
    /// Depth is the extent along `roll`, height the extent along `up`. The
    /// curl starts halfway through the depth and thicker pieces get a wider,
    /// tighter-packed curl.
    pub fn parameters_for(&self, bounds: &Aabb3, up: Vector3, roll: Vector3) -> BendParameters {
        let depth = bounds.extent_along(roll);
        let height = bounds.extent_along(up);

        let [min, max] = self.size_clamp;
        let s = if max > 0.0 { depth.clamp(min.min(max), max) / max } else { 0.0 };

        let radius = s * lerp(self.radius_bounds[0], self.radius_bounds[1], self.radius_curve.evaluate(s));
        let deviation = lerp(
            self.deviation_bounds[0],
            self.deviation_bounds[1],
            self.deviation_curve.evaluate(s),
        );
        debug!(depth, height, radius, deviation, "derived bend parameters");
        BendParameters::new(up, roll, radius, deviation, height, depth / 2.0)
    }
}

/// A rest-pose vertex buffer with the curl parameters that go with it.
#[derive(Debug, Clone)]
pub struct Bender {
    rest: Vec<Point3>,
    params: BendParameters,
}

impl Bender {
    pub fn new(rest: Vec<Point3>, params: BendParameters) -> Self {
        Self { rest, params }
    }

    pub fn params(&self) -> &BendParameters {
        &self.params
    }

    pub fn rest(&self) -> &[Point3] {
        &self.rest
    }

    /// Rest pose bent with the curl at height `y`.
    pub fn bend(&self, y: f64) -> Vec<Point3> {
        bend(&self.rest, &self.params, y)
    }

    /// Bend for a blade whose tip is at `height`; the curl tracks half of it.
    pub fn bend_for_blade(&self, height: f64) -> Vec<Point3> {
        self.bend(height / 2.0)
    }
}
