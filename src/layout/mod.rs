//! Layout core: closed-form geometry that feeds the scene graph.
//!
//! Every function in this module is a pure, deterministic function over plain numbers:
//! - no I/O, no logging, no shared state
//! - degenerate counts (`<= 0`) take documented branches instead of erroring
//! - NaN / infinities are not guarded; they propagate into the output
//!
//! Conventions:
//! - World units are abstract scene units, y-up, with z = 0 as the drawing plane.
//! - Counts are `i64` so that negative inputs from sliders stay representable.
//! - Output uses `f64`; meshes downcast to `f32` only at the `scene` boundary.

pub mod ellipse;
pub mod network;
pub mod neuron;
pub mod riemann;

pub use ellipse::{EllipseSpec, generate_ellipse_points};
pub use network::NetworkLayout;
pub use neuron::{
    DEFAULT_NEURON_SPACING, NeuronLayerSpec, neuron_positions, neuron_positions_default,
};
pub use riemann::{
    BOX_DEPTH, BOX_GAP_FACTOR, RiemannSpec, calculate_riemann_boxes, riemann_sum,
    try_calculate_riemann_boxes,
};

use serde::{Deserialize, Serialize};

/// A point (or extent) in scene space: `[x, y, z]`.
pub type Point3 = [f64; 3];

/// Placement data for one axis-aligned box.
///
/// - `position`: box center.
/// - `scale`: full extents along x / y / z (not half-extents).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDatum {
    pub position: Point3,
    pub scale: Point3,
}

/// Downcast a layout point into mesh precision.
#[inline]
pub fn to_f32(p: Point3) -> [f32; 3] {
    [p[0] as f32, p[1] as f32, p[2] as f32]
}
