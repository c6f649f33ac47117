/// Numeric tolerances shared by the slicer and the cap triangulator.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Distance below which a vertex is treated as lying on the cutting plane (model units)
    pub plane: f64,
    /// Distance below which two points are considered coincident when choosing a projection basis
    pub coincident: f64,
    /// Relative epsilon for the distance-sum collinearity test
    pub collinear: f64,
}

impl Tolerance {
    pub const DEFAULT_PLANE: f64 = 1e-4;
    pub const DEFAULT_COINCIDENT: f64 = 0.01;
    pub const DEFAULT_COLLINEAR: f64 = 1e-9;

    pub fn new(plane: f64, coincident: f64, collinear: f64) -> Self {
        Self {
            plane,
            coincident,
            collinear,
        }
    }

    /// Check if a signed distance puts a point on the plane
    pub fn is_near_plane(self, signed_distance: f64) -> bool {
        signed_distance.abs() < self.plane
    }

    /// Check if two lengths are equal within the relative collinearity epsilon.
    ///
    /// `a` is usually the sum of two sub-distances and `b` the third distance.
    pub fn lengths_eq(self, a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= (self.collinear * scale).max(f64::EPSILON * 8.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            plane: Self::DEFAULT_PLANE,
            coincident: Self::DEFAULT_COINCIDENT,
            collinear: Self::DEFAULT_COLLINEAR,
        }
    }
}
