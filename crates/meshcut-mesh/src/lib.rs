//! Plane slicing of triangle meshes with capped cross-sections, and the
//! cylindrical curl applied to freshly cut pieces.

pub mod bend;
pub mod buffer;
pub mod cap;
pub mod config;
pub mod curve;
pub mod mesh;
pub mod session;
pub mod slice;
pub mod split;
pub mod topology;

pub use bend::{bend, bend_point, BendParameters, BendProfile, Bender};
pub use buffer::{MeshBuilder, Vertex};
pub use config::MeshCutConfig;
pub use curve::Curve;
pub use mesh::TriangleMesh;
pub use session::{BladePose, SessionSlice, SliceSession};
pub use slice::{slice, slice_submeshes, slice_with_tolerance, SliceOptions, SlicedMesh, SubmeshSlices};
pub use split::{BoundaryEdges, SplitOutput, Splitter};
pub use topology::{is_closed, open_edges};
