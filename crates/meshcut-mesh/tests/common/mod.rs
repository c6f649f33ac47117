use glam::{dvec3, DVec3};
use meshcut_mesh::TriangleMesh;

/// Square ring (4x4 outside, 2x2 hole) extruded from z = -0.5 to z = 0.5.
/// Closed, wound counter-clockwise from outside, volume 12.
pub fn ring_prism() -> TriangleMesh {
    let outer = [(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)];
    let inner = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let at = |(x, y): (f64, f64), z: f64| dvec3(x, y, z);

    let mut quads: Vec<[DVec3; 4]> = Vec::new();
    for i in 0..4 {
        let j = (i + 1) % 4;
        let (o0, o1, i0, i1) = (outer[i], outer[j], inner[i], inner[j]);
        quads.push([at(o0, -0.5), at(o1, -0.5), at(o1, 0.5), at(o0, 0.5)]);
        quads.push([at(i1, -0.5), at(i0, -0.5), at(i0, 0.5), at(i1, 0.5)]);
        quads.push([at(o0, 0.5), at(o1, 0.5), at(i1, 0.5), at(i0, 0.5)]);
        quads.push([at(o0, -0.5), at(i0, -0.5), at(i1, -0.5), at(o1, -0.5)]);
    }

    let mut mesh = TriangleMesh::default();
    for [a, b, c, d] in quads {
        let base = mesh.positions.len() as u32;
        mesh.positions.extend_from_slice(&[a, b, c, d]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh.compute_normals();
    mesh
}

pub fn unit_cube() -> TriangleMesh {
    TriangleMesh::cuboid(DVec3::ZERO, DVec3::ONE)
}
