pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{MeshCutError, Result};
pub use tolerance::Tolerance;
