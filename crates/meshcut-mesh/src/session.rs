use meshcut_core::traits::BoundingBox;
use meshcut_core::{MeshCutError, Result};
use meshcut_math::{Plane, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::bend::Bender;
use crate::config::MeshCutConfig;
use crate::mesh::TriangleMesh;
use crate::slice::slice_with_tolerance;

/// Three reference points on a blade, in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BladePose {
    pub tip: Point3,
    pub base: Point3,
    pub top_center: Point3,
}

impl BladePose {
    pub fn new(tip: Point3, base: Point3, top_center: Point3) -> Self {
        Self {
            tip,
            base,
            top_center,
        }
    }

    /// The blade plane in the local space of an object, oriented so that
    /// [`Side::Positive`](meshcut_math::Side::Positive) is the upper piece.
    ///
    /// The plane passes through the blade tip with normal
    /// `(base - tip) x (base - top_center)`. It is flipped when the tip, in
    /// local coordinates, lies below the origin along `up`.
    pub fn cutting_plane(&self, local_to_world: &Transform, up: Vector3) -> Result<Plane> {
        let world = Plane::from_points(self.tip, self.base, self.top_center)
            .ok_or_else(|| MeshCutError::InvalidPose("blade reference points are collinear".into()))?;
        let local = world
            .to_local(local_to_world)
            .ok_or_else(|| MeshCutError::InvalidPose("object transform is not invertible".into()))?;
        Ok(if up.dot(local.origin) < 0.0 {
            local.flipped()
        } else {
            local
        })
    }
}

/// Both pieces of a session slice, each moved so its bounds are centered on
/// its local origin.
#[derive(Debug, Clone)]
pub struct SessionSlice {
    pub positive: TriangleMesh,
    pub negative: TriangleMesh,
    /// Add to the sliced object's position to place the positive piece.
    pub positive_offset: Vector3,
    /// Add to the sliced object's position to place the negative piece.
    pub negative_offset: Vector3,
    /// The plane the mesh was cut with, in the mesh's original local space.
    pub plane: Plane,
}

/// Explicit slicing context: configuration plus a running count of
/// successful slices.
#[derive(Debug, Clone, Default)]
pub struct SliceSession {
    config: MeshCutConfig,
    total_slices: usize,
}

impl SliceSession {
    pub fn new(config: MeshCutConfig) -> Self {
        Self {
            config,
            total_slices: 0,
        }
    }

    pub fn config(&self) -> &MeshCutConfig {
        &self.config
    }

    pub fn total_slices(&self) -> usize {
        self.total_slices
    }

    /// Slice `mesh` and recenter both pieces. Failed slices are not counted.
    #[instrument(skip(self, mesh), fields(triangles = mesh.triangle_count()))]
    pub fn slice(&mut self, mesh: &TriangleMesh, plane: &Plane) -> Result<SessionSlice> {
        let sliced = slice_with_tolerance(plane, mesh, self.config.slice, self.config.tolerance)?;
        let (mut positive, mut negative) = sliced.into_parts();
        let positive_offset = positive.recenter();
        let negative_offset = negative.recenter();

        self.total_slices += 1;
        info!(total = self.total_slices, "slice complete");
        Ok(SessionSlice {
            positive,
            negative,
            positive_offset,
            negative_offset,
            plane: *plane,
        })
    }

    /// Slice `mesh`, owned by an object with the given transform, with a blade.
    pub fn slice_with_blade(
        &mut self,
        mesh: &TriangleMesh,
        blade: &BladePose,
        local_to_world: &Transform,
    ) -> Result<SessionSlice> {
        let plane = blade.cutting_plane(local_to_world, self.config.up)?;
        self.slice(mesh, &plane)
    }

    /// Curl set up for the positive piece of `piece`, rolling along the cut
    /// normal with parameters from the configured bend profile.
    pub fn prepare_bender(&self, piece: &SessionSlice) -> Bender {
        let params = self.config.bend.parameters_for(
            &piece.positive.bounding_box(),
            self.config.up,
            piece.plane.normal,
        );
        Bender::new(piece.positive.positions.clone(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;
    use meshcut_math::DVec3;

    #[test]
    fn test_blade_plane_orientation() {
        // blade lying in the plane x = 0
        let blade = BladePose::new(dvec3(0.0, 1.0, 0.0), dvec3(0.0, 1.0, 1.0), dvec3(0.0, 2.0, 0.5));
        let plane = blade.cutting_plane(&Transform::identity(), Vector3::Y).unwrap();
        assert!(plane.normal.x.abs() > 0.999);
        assert!(plane.signed_distance(dvec3(0.0, 5.0, 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_blade_plane_flips_below_up() {
        let blade = BladePose::new(dvec3(0.0, -1.0, 0.0), dvec3(0.0, -1.0, 1.0), dvec3(0.0, 0.0, 0.5));
        let above = BladePose::new(dvec3(0.0, 1.0, 0.0), dvec3(0.0, 1.0, 1.0), dvec3(0.0, 2.0, 0.5));
        let below_plane = blade.cutting_plane(&Transform::identity(), Vector3::Y).unwrap();
        let above_plane = above.cutting_plane(&Transform::identity(), Vector3::Y).unwrap();
        assert!((below_plane.normal + above_plane.normal).length() < 1e-12);
    }

    #[test]
    fn test_blade_plane_in_local_space() {
        let blade = BladePose::new(dvec3(10.0, 1.0, 0.0), dvec3(10.0, 1.0, 1.0), dvec3(10.0, 2.0, 0.5));
        let object = Transform::from_translation(dvec3(10.0, 0.0, 0.0));
        let plane = blade.cutting_plane(&object, Vector3::Y).unwrap();
        // world x = 10 is local x = 0
        assert!(plane.signed_distance(DVec3::ZERO).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_blade_is_rejected() {
        let blade = BladePose::new(DVec3::ZERO, DVec3::X, dvec3(2.0, 0.0, 0.0));
        assert!(matches!(
            blade.cutting_plane(&Transform::identity(), Vector3::Y),
            Err(MeshCutError::InvalidPose(_))
        ));
    }

    #[test]
    fn test_session_counts_and_recenters() {
        let mut session = SliceSession::default();
        let cube = TriangleMesh::cuboid(dvec3(0.0, 0.0, 0.0), DVec3::ONE);
        let piece = session.slice(&cube, &Plane::yz()).unwrap();
        assert_eq!(session.total_slices(), 1);
        assert!((piece.positive_offset - dvec3(0.25, 0.0, 0.0)).length() < 1e-12);
        assert!((piece.negative_offset - dvec3(-0.25, 0.0, 0.0)).length() < 1e-12);
        assert!(piece.positive.bounding_box().center().length() < 1e-12);

        let bender = session.prepare_bender(&piece);
        assert_eq!(bender.rest().len(), piece.positive.vertex_count());
        assert!((bender.params().mesh_top - 1.0).abs() < 1e-12);
        assert!((bender.params().roll_offset - 0.25).abs() < 1e-12);
        assert_eq!(bender.params().axis(), Vector3::NEG_Z);
    }

    #[test]
    fn test_failed_slice_is_not_counted() {
        let mut session = SliceSession::default();
        let mut broken = TriangleMesh::cuboid(DVec3::ZERO, DVec3::ONE);
        broken.indices.pop();
        assert!(session.slice(&broken, &Plane::xy()).is_err());
        assert_eq!(session.total_slices(), 0);
    }
}
