//! Cap triangulation for planar cross-sections.
//!
//! Input is an unordered set of 3D boundary edges lying in one plane. They are
//! projected to 2D, chained into closed loops, sorted into outer loops and
//! holes, bridged into simple polygons and ear-clipped.

pub mod bridge;
pub mod ear_clip;
pub mod edge;
pub mod loops;
pub mod nesting;
pub mod polygon_loop;
pub mod predicates;
pub mod triangulator;

pub use bridge::bridge_holes;
pub use ear_clip::ear_clip;
pub use edge::{BoundaryEdge, Edge2};
pub use loops::reconstruct_loops;
pub use nesting::{resolve_nesting, NestedPolygon, NestingResult};
pub use polygon_loop::{Orientation, PolygonLoop};
pub use triangulator::{triangulate_edges, triangulate_polygon};
