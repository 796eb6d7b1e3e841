//! lyon-backed tessellation into `scene::Mesh3D`.
//!
//! Flat geometry (outlines, discs, edges) lives in a z = const plane. We build a 2D
//! `lyon::path::Path`, tessellate it, and lift every output vertex onto that plane.
//!
//! - Outlines and edges use *stroke* tessellation with a fixed line width.
//! - Discs use *fill* tessellation with the non-zero rule.

use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::mesh::MeshError;
use crate::scene::{Mesh3D, Vertex3D};

/// Lifts lyon's 2D output vertices onto the plane `z`.
struct LiftToPlane {
    z: f32,
}

impl FillVertexConstructor<Vertex3D> for LiftToPlane {
    fn new_vertex(&mut self, v: FillVertex) -> Vertex3D {
        let p = v.position();
        Vertex3D {
            position: [p.x, p.y, self.z],
        }
    }
}

impl StrokeVertexConstructor<Vertex3D> for LiftToPlane {
    fn new_vertex(&mut self, v: StrokeVertex) -> Vertex3D {
        let p = v.position();
        Vertex3D {
            position: [p.x, p.y, self.z],
        }
    }
}

fn mesh_from_buffers(buffers: VertexBuffers<Vertex3D, u16>) -> Mesh3D {
    Mesh3D {
        positions: buffers.vertices.into_iter().map(|v| v.position).collect(),
        indices: buffers.indices,
    }
}

#[inline]
pub fn is_finite_xy(p: [f32; 2]) -> bool {
    p[0].is_finite() && p[1].is_finite()
}

/// Split a point sequence into maximal runs of finite points.
///
/// lyon rejects NaN positions, so non-finite points become gaps. Runs shorter than
/// two points are dropped.
pub fn finite_runs<I>(points: I) -> Vec<Vec<[f32; 2]>>
where
    I: IntoIterator<Item = [f32; 2]>,
{
    let mut runs: Vec<Vec<[f32; 2]>> = vec![Vec::new()];
    for p in points {
        if is_finite_xy(p) {
            if let Some(run) = runs.last_mut() {
                run.push(p);
            }
        } else if runs.last().is_some_and(|r| !r.is_empty()) {
            runs.push(Vec::new());
        }
    }
    runs.retain(|r| r.len() >= 2);
    runs
}

/// Build a path with one sub-path per polyline.
pub fn polylines_path<'a, I>(polylines: I, closed: bool) -> Path
where
    I: IntoIterator<Item = &'a [[f32; 2]]>,
{
    let mut b = Path::builder();
    for line in polylines {
        let Some((first, rest)) = line.split_first() else {
            continue;
        };
        b.begin(point(first[0], first[1]));
        for p in rest {
            b.line_to(point(p[0], p[1]));
        }
        b.end(closed);
    }
    b.build()
}

/// Stroke `path` with `line_width`, lifted onto plane `z`.
pub fn stroke_path(
    path: &Path,
    z: f32,
    line_width: f32,
    tolerance: f32,
) -> Result<Mesh3D, MeshError> {
    let mut tess = StrokeTessellator::new();
    let mut buffers: VertexBuffers<Vertex3D, u16> = VertexBuffers::new();
    let opts = StrokeOptions::tolerance(tolerance).with_line_width(line_width);

    tess.tessellate_path(
        path,
        &opts,
        &mut BuffersBuilder::new(&mut buffers, LiftToPlane { z }),
    )
    .map_err(|e| MeshError::Tessellation(format!("{e:?}")))?;

    Ok(mesh_from_buffers(buffers))
}

/// Fill `path` (non-zero rule), lifted onto plane `z`.
pub fn fill_path(path: &Path, z: f32, tolerance: f32) -> Result<Mesh3D, MeshError> {
    let mut tess = FillTessellator::new();
    let mut buffers: VertexBuffers<Vertex3D, u16> = VertexBuffers::new();
    let opts = FillOptions::tolerance(tolerance).with_fill_rule(FillRule::NonZero);

    tess.tessellate_path(
        path,
        &opts,
        &mut BuffersBuilder::new(&mut buffers, LiftToPlane { z }),
    )
    .map_err(|e| MeshError::Tessellation(format!("{e:?}")))?;

    Ok(mesh_from_buffers(buffers))
}
