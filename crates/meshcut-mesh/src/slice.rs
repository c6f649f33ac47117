use meshcut_core::traits::Validate;
use meshcut_core::{Result, Tolerance};
use meshcut_math::{Plane, Side};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::cap::assemble_caps;
use crate::mesh::TriangleMesh;
use crate::split::{SplitOutput, Splitter};

/// Switches controlling how a mesh is cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    /// Seal the cross-section on both pieces.
    pub solid: bool,
    /// For hollow meshes, add a back-facing copy of every triangle.
    /// Ignored when `solid` is set.
    pub reverse_winding: bool,
    /// Reuse vertices whose position, normal and UV match exactly.
    pub share_vertices: bool,
    /// Recompute smooth vertex normals on both pieces after cutting.
    pub smooth_vertices: bool,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            solid: true,
            reverse_winding: false,
            share_vertices: false,
            smooth_vertices: false,
        }
    }
}

/// The two pieces of a sliced mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlicedMesh {
    pub positive: TriangleMesh,
    pub negative: TriangleMesh,
    /// Cap triangles added to each piece.
    pub cap_triangles: usize,
}

impl SlicedMesh {
    pub fn side(&self, side: Side) -> &TriangleMesh {
        match side {
            Side::Positive => &self.positive,
            Side::Negative => &self.negative,
        }
    }

    pub fn into_parts(self) -> (TriangleMesh, TriangleMesh) {
        (self.positive, self.negative)
    }
}

/// Cut `mesh` with `plane` using the default tolerances.
#[instrument(skip(mesh), fields(triangles = mesh.triangle_count()))]
pub fn slice(plane: &Plane, mesh: &TriangleMesh, options: SliceOptions) -> Result<SlicedMesh> {
    slice_with_tolerance(plane, mesh, options, Tolerance::default())
}

/// Cut `mesh` with `plane`.
///
/// Vertices strictly above the plane (beyond the near-plane tolerance) end up
/// in `positive`, those below in `negative`; vertices on the plane may appear
/// in both. The input must pass [`Validate`]. When `options.solid` is set and
/// the cut crosses the mesh, the cross-section is capped on both pieces and a
/// cap failure aborts the whole slice.
pub fn slice_with_tolerance(
    plane: &Plane,
    mesh: &TriangleMesh,
    options: SliceOptions,
    tolerance: Tolerance,
) -> Result<SlicedMesh> {
    mesh.validate()?;

    let mut splitter = Splitter::new(plane, tolerance, options.share_vertices);
    splitter.split_mesh(mesh);
    let SplitOutput {
        mut positive,
        mut negative,
        boundary,
    } = splitter.finish();

    let cap_triangles = if options.solid {
        assemble_caps(plane, &boundary, tolerance, &mut positive, &mut negative).map_err(|err| {
            warn!(%err, edges = boundary.len(), "cap triangulation failed");
            err
        })?
    } else {
        0
    };

    let mut positive = positive.build();
    let mut negative = negative.build();

    if !options.solid && options.reverse_winding {
        positive.add_reversed_faces();
        negative.add_reversed_faces();
    }
    if options.smooth_vertices {
        positive.compute_normals();
        negative.compute_normals();
    }

    info!(
        positive = positive.triangle_count(),
        negative = negative.triangle_count(),
        boundary_edges = boundary.len(),
        cap_triangles,
        "sliced mesh"
    );
    Ok(SlicedMesh {
        positive,
        negative,
        cap_triangles,
    })
}

/// Pieces of a multi-part mesh, tagged with the index of the submesh they
/// came from so per-part data (materials) can follow them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmeshSlices {
    pub positive: Vec<(usize, TriangleMesh)>,
    pub negative: Vec<(usize, TriangleMesh)>,
}

impl SubmeshSlices {
    /// Every piece on `side` combined into one mesh.
    pub fn merged(&self, side: Side) -> TriangleMesh {
        let parts = match side {
            Side::Positive => &self.positive,
            Side::Negative => &self.negative,
        };
        let mut merged = TriangleMesh::default();
        for (_, mesh) in parts {
            merged.merge(mesh);
        }
        merged
    }

    /// Submesh indices present on `side`.
    pub fn indices(&self, side: Side) -> Vec<usize> {
        let parts = match side {
            Side::Positive => &self.positive,
            Side::Negative => &self.negative,
        };
        parts.iter().map(|(i, _)| *i).collect()
    }
}

/// Slice every submesh independently and in parallel.
///
/// Pieces without triangles are left out of the result. The first failing
/// submesh aborts the whole operation.
#[instrument(skip(submeshes), fields(submeshes = submeshes.len()))]
pub fn slice_submeshes(
    plane: &Plane,
    submeshes: &[TriangleMesh],
    options: SliceOptions,
    tolerance: Tolerance,
) -> Result<SubmeshSlices> {
    let sliced = submeshes
        .par_iter()
        .map(|mesh| slice_with_tolerance(plane, mesh, options, tolerance))
        .collect::<Result<Vec<_>>>()?;

    let mut result = SubmeshSlices::default();
    for (index, piece) in sliced.into_iter().enumerate() {
        let (positive, negative) = piece.into_parts();
        if !positive.is_empty() {
            result.positive.push((index, positive));
        }
        if !negative.is_empty() {
            result.negative.push((index, negative));
        }
    }
    Ok(result)
}
