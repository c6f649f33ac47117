//! Property-based tests for slicing closed meshes with random planes.
//!
//! Run with: cargo test -p meshcut-mesh -- proptest

mod common;

use common::{ring_prism, unit_cube};
use glam::DVec3;
use meshcut_core::Tolerance;
use meshcut_math::Plane;
use meshcut_mesh::{is_closed, slice, SliceOptions, TriangleMesh};
use proptest::prelude::*;

/// A random unit normal, away from the degenerate zero vector.
fn arb_normal() -> impl Strategy<Value = DVec3> {
    prop::array::uniform3(-1.0..1.0f64)
        .prop_filter("normal too short", |[x, y, z]| DVec3::new(*x, *y, *z).length() > 0.2)
        .prop_map(|[x, y, z]| DVec3::new(x, y, z).normalize())
}

/// A plane through the central region of a mesh centered on the origin.
fn arb_plane() -> impl Strategy<Value = Plane> {
    (arb_normal(), -0.3..0.3f64).prop_map(|(normal, offset)| Plane::new(normal * offset, normal))
}

fn check_slice(mesh: &TriangleMesh, plane: &Plane) -> Result<(), TestCaseError> {
    let sliced = slice(plane, mesh, SliceOptions::default())
        .map_err(|e| TestCaseError::fail(format!("slice failed: {e}")))?;

    let total = sliced.positive.signed_volume() + sliced.negative.signed_volume();
    prop_assert!(
        (total - mesh.signed_volume()).abs() < 1e-9,
        "volume {} != {}",
        total,
        mesh.signed_volume()
    );

    let limit = Tolerance::default().plane + 1e-12;
    for p in &sliced.positive.positions {
        prop_assert!(plane.signed_distance(*p) > -limit);
    }
    for p in &sliced.negative.positions {
        prop_assert!(plane.signed_distance(*p) < limit);
    }

    for piece in [&sliced.positive, &sliced.negative] {
        if !piece.is_empty() {
            prop_assert!(is_closed(piece, Tolerance::default()));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_cube_slice_is_watertight(plane in arb_plane()) {
        check_slice(&unit_cube(), &plane)?;
    }

    #[test]
    fn proptest_ring_slice_is_watertight(plane in arb_plane()) {
        check_slice(&ring_prism(), &plane)?;
    }
}
