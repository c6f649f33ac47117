use meshcut_core::{MeshCutError, Result};
use serde::{Deserialize, Serialize};

/// Piecewise-linear curve through `(time, value)` keys.
///
/// Keys are kept sorted by time. Evaluation clamps to the first and last key
/// outside their range; a curve with no keys evaluates to its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Curve {
    keys: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(mut keys: Vec<(f64, f64)>) -> Result<Self> {
        if keys.iter().any(|(t, v)| !t.is_finite() || !v.is_finite()) {
            return Err(MeshCutError::Config("curve keys must be finite".into()));
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { keys })
    }

    /// Straight line from `(0, 0)` to `(1, 1)`.
    pub fn linear() -> Self {
        Self {
            keys: vec![(0.0, 0.0), (1.0, 1.0)],
        }
    }

    pub fn constant(value: f64) -> Self {
        Self {
            keys: vec![(0.0, value)],
        }
    }

    pub fn keys(&self) -> &[(f64, f64)] {
        &self.keys
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.keys.first(), self.keys.last()) else {
            return t;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        let upper = self.keys.partition_point(|k| k.0 <= t);
        let (t0, v0) = self.keys[upper - 1];
        let (t1, v1) = self.keys[upper];
        if t1 == t0 {
            return v1;
        }
        v0 + (v1 - v0) * (t - t0) / (t1 - t0)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::linear()
    }
}

impl TryFrom<Vec<(f64, f64)>> for Curve {
    type Error = MeshCutError;

    fn try_from(keys: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<(f64, f64)> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
