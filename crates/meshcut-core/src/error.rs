use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshCutError {
    /// The cut cross-section has no three usable points to span a plane.
    #[error("Degenerate plane geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Point not registered in projection basis: {0}")]
    UnknownPoint(String),

    #[error("Triangulation failed: no ear found with {remaining} vertices remaining")]
    TriangulationFailed { remaining: usize },

    #[error("Unresolvable nesting: hole {hole} cannot be bridged to its outer loop")]
    UnresolvableNesting { hole: usize },

    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("Invalid blade pose: {0}")]
    InvalidPose(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshCutError {
    /// True for failures raised while building the cap of a slice.
    ///
    /// These depend on the cutting plane, so a caller may retry with a
    /// perturbed plane. Every other variant is a caller or environment error.
    pub fn is_cap_failure(&self) -> bool {
        matches!(
            self,
            MeshCutError::DegenerateGeometry(_)
                | MeshCutError::UnknownPoint(_)
                | MeshCutError::TriangulationFailed { .. }
                | MeshCutError::UnresolvableNesting { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MeshCutError>;
