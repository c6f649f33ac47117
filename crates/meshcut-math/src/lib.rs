pub mod aabb;
pub mod basis;
pub mod key;
pub mod plane;
pub mod ray;
pub mod transform;

pub use glam::{DMat3, DMat4, DQuat, DVec2, DVec3, DVec4};
pub use aabb::Aabb3;
pub use basis::PlaneBasis;
pub use key::{Point2Key, PointKey};
pub use plane::{Plane, Side};
pub use ray::Ray;
pub use transform::Transform;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
