use approx::assert_relative_eq;
use glam::{dvec2, dvec3, DVec3};
use meshcut_core::{MeshCutError, Tolerance};
use meshcut_polygon::{triangulate_edges, triangulate_polygon, BoundaryEdge, PolygonLoop};

fn ring(points: &[DVec3]) -> Vec<BoundaryEdge> {
    (0..points.len())
        .map(|i| BoundaryEdge::new(points[i], points[(i + 1) % points.len()]))
        .collect()
}

fn triangle_area_sum(points: &[DVec3]) -> f64 {
    points
        .chunks(3)
        .map(|t| (t[1] - t[0]).cross(t[2] - t[0]).length() * 0.5)
        .sum()
}

/// Regular polygon of `n` sides in the plane through `center` spanned by `u`, `v`.
fn regular_polygon(n: usize, center: DVec3, u: DVec3, v: DVec3, radius: f64) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / n as f64;
            center + u * (radius * a.cos()) + v * (radius * a.sin())
        })
        .collect()
}

#[test]
fn test_convex_polygon_on_tilted_plane() {
    let u = dvec3(1.0, -1.0, 0.0).normalize();
    let v = dvec3(1.0, 1.0, -2.0).normalize();
    for n in [3, 5, 8, 17] {
        let points = regular_polygon(n, dvec3(2.0, -1.0, 0.5), u, v, 3.0);
        let out = triangulate_edges(&ring(&points), Tolerance::default()).unwrap();
        assert_eq!(out.len(), 3 * (n - 2), "n = {n}");

        let expected = 0.5 * n as f64 * 9.0 * (std::f64::consts::TAU / n as f64).sin();
        assert_relative_eq!(triangle_area_sum(&out), expected, epsilon = 1e-9);
        // every output point is an input point, exactly
        assert!(out.iter().all(|p| points.contains(p)));
    }
}

#[test]
fn test_triangles_share_one_orientation() {
    let u = dvec3(0.0, 1.0, 0.0);
    let v = dvec3(0.0, 0.0, 1.0);
    let points = regular_polygon(12, DVec3::ZERO, u, v, 1.0);
    let out = triangulate_edges(&ring(&points), Tolerance::default()).unwrap();
    let first = (out[1] - out[0]).cross(out[2] - out[0]).normalize();
    for t in out.chunks(3) {
        let n = (t[1] - t[0]).cross(t[2] - t[0]).normalize();
        assert_relative_eq!(n.dot(first), 1.0, epsilon = 1e-9);
    }
    assert_relative_eq!(first.x.abs(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_square_with_hole() {
    let outer = [
        dvec3(0.0, 0.0, 1.0),
        dvec3(4.0, 0.0, 1.0),
        dvec3(4.0, 4.0, 1.0),
        dvec3(0.0, 4.0, 1.0),
    ];
    let hole = [
        dvec3(1.0, 1.0, 1.0),
        dvec3(3.0, 1.0, 1.0),
        dvec3(3.0, 3.0, 1.0),
        dvec3(1.0, 3.0, 1.0),
    ];
    let mut edges = ring(&hole);
    edges.extend(ring(&outer));
    let out = triangulate_edges(&edges, Tolerance::default()).unwrap();
    assert_eq!(out.len(), 8 * 3);
    assert_relative_eq!(triangle_area_sum(&out), 12.0, epsilon = 1e-9);
    assert!(out.iter().all(|p| (p.z - 1.0).abs() < 1e-15));
}

#[test]
fn test_two_separate_islands() {
    let a = regular_polygon(4, DVec3::ZERO, DVec3::X, DVec3::Y, 1.0);
    let b = regular_polygon(6, dvec3(5.0, 0.0, 0.0), DVec3::X, DVec3::Y, 1.0);
    let mut edges = ring(&a);
    edges.extend(ring(&b));
    let out = triangulate_edges(&edges, Tolerance::default()).unwrap();
    assert_eq!(out.len(), 3 * (2 + 4));
}

#[test]
fn test_edge_order_and_direction_do_not_matter() {
    let points = regular_polygon(7, DVec3::ZERO, DVec3::X, DVec3::Z, 2.0);
    let mut edges = ring(&points);
    edges.reverse();
    for (i, edge) in edges.iter_mut().enumerate() {
        if i % 2 == 0 {
            *edge = BoundaryEdge::new(edge.b, edge.a);
        }
    }
    let out = triangulate_edges(&edges, Tolerance::default()).unwrap();
    assert_eq!(out.len(), 3 * 5);
}

#[test]
fn test_collinear_edges_are_degenerate() {
    let edges = vec![
        BoundaryEdge::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)),
        BoundaryEdge::new(dvec3(1.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0)),
    ];
    let err = triangulate_edges(&edges, Tolerance::default()).unwrap_err();
    assert!(matches!(err, MeshCutError::DegenerateGeometry(_)));
    assert!(err.is_cap_failure());
}

#[test]
fn test_open_boundary_gives_nothing() {
    let edges = vec![
        BoundaryEdge::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)),
        BoundaryEdge::new(dvec3(1.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0)),
    ];
    assert!(triangulate_edges(&edges, Tolerance::default()).unwrap().is_empty());
}

/// Counter-clockwise axis-aligned square loop.
fn square_loop(x0: f64, y0: f64, x1: f64, y1: f64) -> PolygonLoop {
    PolygonLoop::new(vec![dvec2(x0, y0), dvec2(x1, y0), dvec2(x1, y1), dvec2(x0, y1)])
}

/// Counter-clockwise axis-aligned square at height `z`, as 3D points.
fn square_points(x0: f64, y0: f64, x1: f64, y1: f64, z: f64) -> Vec<DVec3> {
    vec![dvec3(x0, y0, z), dvec3(x1, y0, z), dvec3(x1, y1, z), dvec3(x0, y1, z)]
}

#[test]
fn test_holes_sharing_a_bridge_corner_in_either_order() {
    let outer = square_loop(0.0, 0.0, 10.0, 10.0);
    let big = square_loop(1.0, 1.0, 2.0, 2.0);
    // closest to (0, 0) but above the diagonal that the first bridge runs along
    let small = square_loop(0.1, 0.5, 0.2, 0.6);

    for holes in [[big.clone(), small.clone()], [small.clone(), big.clone()]] {
        let tris = triangulate_polygon(&outer, &holes).unwrap();
        assert_eq!(tris.len(), 12 + 2 * 2 - 2);
        let area: f64 = tris.iter().map(|[a, b, c]| (*b - *a).perp_dot(*c - *a) * 0.5).sum();
        assert_relative_eq!(area, 100.0 - 1.0 - 0.01, epsilon = 1e-9);
        assert!(tris.iter().all(|[a, b, c]| (*b - *a).perp_dot(*c - *a) > 0.0));
    }
}

#[test]
fn test_three_holes_competing_for_one_corner() {
    let outer = square_loop(0.0, 0.0, 10.0, 10.0);
    let holes = [
        square_loop(1.0, 1.0, 2.0, 2.0),
        square_loop(0.1, 0.5, 0.2, 0.6),
        square_loop(0.5, 0.1, 0.6, 0.2),
    ];
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for order in orders {
        let ordered: Vec<PolygonLoop> = order.iter().map(|&i| holes[i].clone()).collect();
        let tris = triangulate_polygon(&outer, &ordered).unwrap_or_else(|e| panic!("{order:?}: {e}"));
        let area: f64 = tris.iter().map(|[a, b, c]| (*b - *a).perp_dot(*c - *a) * 0.5).sum();
        assert_relative_eq!(area, 100.0 - 1.0 - 0.01 - 0.01, epsilon = 1e-9);
        assert!(tris.iter().all(|[a, b, c]| (*b - *a).perp_dot(*c - *a) > 0.0), "{order:?}");
    }
}

#[test]
fn test_cross_section_with_holes_near_one_corner() {
    let outer = square_points(0.0, 0.0, 10.0, 10.0, 0.0);
    let big = square_points(1.0, 1.0, 2.0, 2.0, 0.0);
    let small = square_points(0.5, 0.1, 0.6, 0.2, 0.0);

    for rings in [[&outer, &big, &small], [&outer, &small, &big], [&small, &big, &outer]] {
        let edges: Vec<BoundaryEdge> = rings.iter().flat_map(|r| ring(r)).collect();
        let out = triangulate_edges(&edges, Tolerance::default()).unwrap();
        assert_relative_eq!(triangle_area_sum(&out), 100.0 - 1.0 - 0.01, epsilon = 1e-9);
        assert!(out
            .chunks(3)
            .all(|t| (t[1] - t[0]).cross(t[2] - t[0]).length() > 0.0));
    }
}
