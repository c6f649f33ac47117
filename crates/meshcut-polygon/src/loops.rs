//! Chaining unordered boundary edges into closed loops.

use std::collections::HashMap;

use meshcut_core::Tolerance;
use meshcut_math::Point2Key;
use tracing::{debug, warn};

use crate::edge::Edge2;
use crate::polygon_loop::PolygonLoop;

/// Chain `edges` into closed loops, normalized to counter-clockwise with
/// collinear vertices removed.
///
/// Endpoints are matched exactly. Chains that never return to their start are
/// dropped with a warning, as are loops left with fewer than three vertices.
pub fn reconstruct_loops(edges: &[Edge2], tolerance: Tolerance) -> Vec<PolygonLoop> {
    let mut incident: HashMap<Point2Key, Vec<usize>> = HashMap::with_capacity(edges.len() * 2);
    for (i, edge) in edges.iter().enumerate() {
        if edge.is_degenerate() {
            continue;
        }
        incident.entry(Point2Key::new(edge.a)).or_default().push(i);
        incident.entry(Point2Key::new(edge.b)).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();
    let mut open_chains = 0usize;

    for start in 0..edges.len() {
        if used[start] || edges[start].is_degenerate() {
            continue;
        }
        used[start] = true;
        let first = edges[start].a;
        let mut chain = vec![first, edges[start].b];

        let closed = loop {
            let last = chain[chain.len() - 1];
            if last == first {
                break true;
            }
            let next = incident
                .get(&Point2Key::new(last))
                .and_then(|candidates| candidates.iter().copied().find(|&e| !used[e]));
            let Some(e) = next else {
                break false;
            };
            used[e] = true;
            match edges[e].other(last) {
                Some(p) => chain.push(p),
                None => break false,
            }
        };

        if !closed {
            open_chains += 1;
            continue;
        }

        chain.pop();
        chain.dedup();
        let mut polygon = PolygonLoop::new(chain);
        polygon.make_counter_clockwise();
        polygon.remove_collinear(tolerance);
        if polygon.len() >= 3 {
            loops.push(polygon);
        }
    }

    if open_chains > 0 {
        warn!(open_chains, "discarded boundary chains that do not close");
    }
    debug!(edges = edges.len(), loops = loops.len(), "reconstructed loops");
    loops
}
