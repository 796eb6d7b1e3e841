//! Layout data → triangle meshes.
//!
//! Each builder here consumes the plain output of `crate::layout` and produces a
//! `scene::Mesh3D`:
//! - `ellipse_outline_mesh`: stroked closed outline in the z = 0 plane
//! - `riemann_box_mesh`: one cuboid per `BoxDatum`
//! - `neuron_disc_mesh`: a filled disc per neuron
//! - `network_edge_mesh`: a stroked segment per connection
//!
//! Builders never clamp or reorder layout data. A negative box height produces a box
//! below the axis, exactly as laid out.

pub mod tessellate;

use log::debug;

use crate::layout::{BoxDatum, NetworkLayout, Point3, generate_ellipse_points, to_f32};
use crate::scene::Mesh3D;

/// Errors produced while building meshes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("lyon tessellation failed: {0}")]
    Tessellation(String),

    #[error("mesh needs {vertices} vertices, more than u16 indices can address")]
    IndexOverflow { vertices: usize },
}

/// Tessellation and styling knobs shared by the mesh builders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshOptions {
    /// Outline stroke width, in scene units.
    pub stroke_width: f32,
    /// Network edge stroke width.
    pub edge_width: f32,
    /// lyon flattening tolerance: smaller => more triangles.
    pub tolerance: f32,
    pub neuron_radius: f32,
    /// Segments per neuron disc outline.
    pub neuron_segments: i64,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            stroke_width: 0.05,
            edge_width: 0.02,
            tolerance: 0.01,
            neuron_radius: 0.3,
            neuron_segments: 32,
        }
    }
}

#[inline]
fn xy(p: Point3) -> [f32; 2] {
    [p[0] as f32, p[1] as f32]
}

/// Plane height for a set of layout points: the first finite z, else 0.
fn plane_z(points: &[Point3]) -> f32 {
    points
        .iter()
        .map(|p| p[2] as f32)
        .find(|z| z.is_finite())
        .unwrap_or(0.0)
}

/// Stroke a sampled ellipse as a closed outline.
///
/// The repeated closing point is dropped (lyon closes the sub-path itself). Degenerate
/// samples (a single point, or every point identical) give an empty mesh. Non-finite
/// samples break the outline: the finite stretches between them are stroked as open
/// polylines, and a fully non-finite ellipse gives an empty mesh.
pub fn ellipse_outline_mesh(points: &[Point3], opts: &MeshOptions) -> Result<Mesh3D, MeshError> {
    let mut ring: Vec<[f32; 2]> = points.iter().copied().map(xy).collect();
    // sin(2π) is not exactly 0, so the closing sample only matches approximately.
    if let [first, .., last] = ring[..] {
        let scale = first[0].abs().max(first[1].abs()).max(1.0);
        if (first[0] - last[0]).abs() <= 1e-6 * scale && (first[1] - last[1]).abs() <= 1e-6 * scale
        {
            ring.pop();
        }
    }

    let closed = ring.iter().copied().all(tessellate::is_finite_xy);
    let mut runs = if closed { vec![ring] } else { tessellate::finite_runs(ring) };
    runs.retain(|run| run.len() >= 2 && run.iter().any(|p| *p != run[0]));
    if runs.is_empty() {
        return Ok(Mesh3D::default());
    }

    let path = tessellate::polylines_path(runs.iter().map(Vec::as_slice), closed);
    let z = plane_z(points);
    let mesh = tessellate::stroke_path(&path, z, opts.stroke_width, opts.tolerance)?;
    debug!(
        "ellipse outline: {} samples -> {} triangles",
        points.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

// Cuboid faces as quads over the corner numbering used in `cuboid`.
// Corner bit 0 = +x, bit 1 = +y, bit 2 = +z.
const CUBOID_QUADS: [[u16; 4]; 6] = [
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
];

/// A single axis-aligned cuboid centered at `center` with full extents `size`.
pub fn cuboid(center: [f32; 3], size: [f32; 3]) -> Mesh3D {
    let half = size.map(|s| s * 0.5);
    let positions = (0..8u8)
        .map(|corner| {
            std::array::from_fn(|axis| {
                let sign = if (corner >> axis) & 1 == 1 { 1.0 } else { -1.0 };
                center[axis] + sign * half[axis]
            })
        })
        .collect();

    let indices = CUBOID_QUADS
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .collect();

    Mesh3D { positions, indices }
}

/// One cuboid per Riemann box.
pub fn riemann_box_mesh(boxes: &[BoxDatum]) -> Result<Mesh3D, MeshError> {
    let mut out = Mesh3D::with_capacity(boxes.len() * 8, boxes.len() * 36);
    for b in boxes {
        out.append(&cuboid(to_f32(b.position), to_f32(b.scale)))?;
    }
    debug!("riemann boxes: {} boxes -> {} triangles", boxes.len(), out.triangle_count());
    Ok(out)
}

/// A filled disc of `opts.neuron_radius` around each position.
///
/// Discs with any non-finite outline point are skipped.
pub fn neuron_disc_mesh(positions: &[Point3], opts: &MeshOptions) -> Result<Mesh3D, MeshError> {
    let r = f64::from(opts.neuron_radius);
    let outline = generate_ellipse_points(r, r, opts.neuron_segments);
    // Without a real outline there is nothing to fill.
    if outline.len() < 4 {
        return Ok(Mesh3D::default());
    }
    let ring = &outline[..outline.len() - 1];

    let discs: Vec<Vec<[f32; 2]>> = positions
        .iter()
        .map(|c| {
            ring.iter()
                .map(|p| xy([c[0] + p[0], c[1] + p[1], 0.0]))
                .collect::<Vec<_>>()
        })
        .filter(|disc| disc.iter().copied().all(tessellate::is_finite_xy))
        .collect();
    if discs.is_empty() {
        return Ok(Mesh3D::default());
    }

    let z = plane_z(positions);
    let path = tessellate::polylines_path(discs.iter().map(Vec::as_slice), true);
    let mesh = tessellate::fill_path(&path, z, opts.tolerance)?;
    debug!(
        "neuron discs: {} nodes -> {} triangles",
        positions.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// A stroked segment for every connection in `layout`.
///
/// Edges with a non-finite endpoint are skipped.
pub fn network_edge_mesh(layout: &NetworkLayout, opts: &MeshOptions) -> Result<Mesh3D, MeshError> {
    let segments: Vec<[[f32; 2]; 2]> = layout
        .edges()
        .into_iter()
        .map(|(a, b)| [xy(a), xy(b)])
        .filter(|s| s.iter().copied().all(tessellate::is_finite_xy))
        .collect();
    if segments.is_empty() {
        return Ok(Mesh3D::default());
    }

    let path = tessellate::polylines_path(segments.iter().map(|s| s.as_slice()), false);
    let mesh = tessellate::stroke_path(&path, 0.0, opts.edge_width, opts.tolerance)?;
    debug!(
        "network edges: {} edges -> {} triangles",
        segments.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
