//! Edge-level closedness checks on position-welded meshes.
//!
//! Vertices are identified by exact position, so per-face vertex copies (hard
//! edges, UV seams) still count as connected.

use std::collections::{HashMap, HashSet};

use meshcut_core::Tolerance;
use meshcut_math::{Point3, PointKey};

use crate::mesh::TriangleMesh;

type DirectedEdge = (Point3, Point3);

/// Directed edges that are not cancelled by an opposite edge.
///
/// An edge `a -> b` cancels one `b -> a`. Before giving up on an unmatched
/// edge it is split at every other unmatched endpoint lying on it, which
/// resolves T-junctions where one side has a single long edge and the other
/// has the same span in several pieces.
pub fn open_edges(mesh: &TriangleMesh, tolerance: Tolerance) -> Vec<DirectedEdge> {
    let mut directed = Vec::with_capacity(mesh.indices.len());
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        directed.extend_from_slice(&[(a, b), (b, c), (c, a)]);
    }

    let unmatched = cancel_opposites(directed);
    if unmatched.is_empty() {
        return unmatched;
    }

    let mut endpoints: Vec<Point3> = Vec::new();
    let mut seen = HashSet::new();
    for &(a, b) in &unmatched {
        for p in [a, b] {
            if seen.insert(PointKey::new(p)) {
                endpoints.push(p);
            }
        }
    }

    let mut split = Vec::with_capacity(unmatched.len());
    for (a, b) in unmatched {
        let mut inner: Vec<(f64, Point3)> = endpoints
            .iter()
            .filter(|&&p| p != a && p != b && lies_between(a, p, b, tolerance))
            .map(|&p| ((p - a).length_squared(), p))
            .collect();
        inner.sort_by(|x, y| x.0.total_cmp(&y.0));

        let mut from = a;
        for (_, p) in inner {
            split.push((from, p));
            from = p;
        }
        split.push((from, b));
    }

    cancel_opposites(split)
}

/// True when every edge of the mesh is matched by an opposite edge, allowing
/// T-junctions along straight edges.
pub fn is_closed(mesh: &TriangleMesh, tolerance: Tolerance) -> bool {
    !mesh.is_empty() && open_edges(mesh, tolerance).is_empty()
}

fn lies_between(a: Point3, p: Point3, b: Point3, tolerance: Tolerance) -> bool {
    tolerance.lengths_eq(a.distance(p) + p.distance(b), a.distance(b))
}

fn cancel_opposites(edges: Vec<DirectedEdge>) -> Vec<DirectedEdge> {
    let mut pending: HashMap<(PointKey, PointKey), Vec<DirectedEdge>> = HashMap::new();
    for (a, b) in edges {
        let (ka, kb) = (PointKey::new(a), PointKey::new(b));
        if ka == kb {
            continue;
        }
        if let Some(opposite) = pending.get_mut(&(kb, ka)) {
            if opposite.pop().is_some() {
                continue;
            }
        }
        pending.entry((ka, kb)).or_default().push((a, b));
    }
    let mut remaining: Vec<DirectedEdge> = pending.into_values().flatten().collect();
    remaining.sort_by_key(|&(a, b)| (PointKey::new(a), PointKey::new(b)));
    remaining
}
