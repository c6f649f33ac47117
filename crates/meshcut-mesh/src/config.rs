use std::path::Path;

use meshcut_core::{MeshCutError, Result, Tolerance};
use meshcut_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::bend::BendProfile;
use crate::slice::SliceOptions;

/// Everything a [`SliceSession`](crate::session::SliceSession) needs, loadable
/// from JSON. Missing fields take their defaults.
///
/// ```json
/// { "slice": { "share_vertices": true }, "bend": { "size_clamp": [0.05, 2.0] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshCutConfig {
    pub tolerance: Tolerance,
    pub slice: SliceOptions,
    pub bend: BendProfile,
    /// World up axis used to orient cuts and curls.
    pub up: Vector3,
}

impl Default for MeshCutConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            slice: SliceOptions::default(),
            bend: BendProfile::default(),
            up: Vector3::Y,
        }
    }
}

impl MeshCutConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| MeshCutError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MeshCutError::Config(e.to_string()))
    }

    fn check(&self) -> Result<()> {
        if !(self.tolerance.plane >= 0.0 && self.tolerance.coincident >= 0.0 && self.tolerance.collinear >= 0.0) {
            return Err(MeshCutError::Config("tolerances must be non-negative".into()));
        }
        if self.up.length_squared() == 0.0 || !self.up.is_finite() {
            return Err(MeshCutError::Config("up axis must be a finite non-zero vector".into()));
        }
        Ok(())
    }
}
