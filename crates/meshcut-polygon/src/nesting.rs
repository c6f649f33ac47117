//! Classifying loops as outer boundaries or holes.

use tracing::debug;

use crate::polygon_loop::PolygonLoop;

/// An outer loop together with the holes cut out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedPolygon {
    pub outer: PolygonLoop,
    pub holes: Vec<PolygonLoop>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestingResult {
    /// Outer loops that have at least one hole.
    pub polygons: Vec<NestedPolygon>,
    /// Outer loops with no holes.
    pub unpaired: Vec<PolygonLoop>,
}

impl NestingResult {
    pub fn loop_count(&self) -> usize {
        self.unpaired.len() + self.polygons.iter().map(|p| 1 + p.holes.len()).sum::<usize>()
    }
}

/// Pair holes with the outer loops that contain them.
///
/// A loop's depth is the number of other loops containing it. Containment is
/// only considered between loops whose edges do not intersect, and is tested
/// with the contained loop's first point. Even depth means an outer boundary
/// (depth 2 is an island inside a hole); odd depth means a hole of its deepest
/// container.
pub fn resolve_nesting(loops: Vec<PolygonLoop>) -> NestingResult {
    let n = loops.len();
    let mut contains = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j || loops[j].is_empty() {
                continue;
            }
            contains[i][j] =
                loops[i].contains_point(loops[j].points()[0]) && !loops[i].intersects(&loops[j]);
        }
    }

    let depth: Vec<usize> = (0..n)
        .map(|j| (0..n).filter(|&i| contains[i][j]).count())
        .collect();

    let mut parent: Vec<Option<usize>> = vec![None; n];
    for j in 0..n {
        if depth[j] % 2 == 1 {
            parent[j] = (0..n)
                .filter(|&i| contains[i][j])
                .max_by_key(|&i| depth[i]);
        }
    }

    let mut holes_of: Vec<Vec<PolygonLoop>> = vec![Vec::new(); n];
    let mut outers = Vec::new();
    let mut slots: Vec<Option<PolygonLoop>> = loops.into_iter().map(Some).collect();
    for j in 0..n {
        if let Some(p) = parent[j] {
            if let Some(hole) = slots[j].take() {
                holes_of[p].push(hole);
            }
        }
    }
    for (i, slot) in slots.into_iter().enumerate() {
        if let Some(outer) = slot {
            outers.push((outer, std::mem::take(&mut holes_of[i])));
        }
    }

    let mut result = NestingResult::default();
    for (outer, holes) in outers {
        if holes.is_empty() {
            result.unpaired.push(outer);
        } else {
            result.polygons.push(NestedPolygon { outer, holes });
        }
    }
    debug!(
        with_holes = result.polygons.len(),
        unpaired = result.unpaired.len(),
        "resolved loop nesting"
    );
    result
}
