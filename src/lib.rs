//! `mathviz` library crate root.
//!
//! Geometry and layout core for interactive 3D math visualizations. The crate is a
//! **library** first; the `mathviz` binary is a thin JSON dumper over these modules.
//!
//! Layering:
//! - `layout`: pure closed-form layouts (ellipse samples, neuron columns, Riemann boxes)
//! - `sample`: named sample functions for Riemann / density scenes
//! - `scene` + `mesh`: renderer-agnostic meshes and a small scene graph
//! - `anim`: parameter timelines for slider-driven scenes
//! - `viz`: one request type tying the above together per visualization
//!
//! Note: the library never initializes logging; binaries decide their own setup.

pub mod anim;
pub mod layout;
pub mod mesh;
pub mod sample;
pub mod scene;
pub mod viz;

use anyhow::Context as _;

pub use layout::{
    BoxDatum, Point3, calculate_riemann_boxes, generate_ellipse_points, neuron_positions,
};

/// Serialize the layout of `request` as JSON.
///
/// This is the format handed to external renderers and plotting tools.
pub fn layout_json(request: &viz::VizRequest, pretty: bool) -> anyhow::Result<String> {
    let layout = request.layout();
    let out = if pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    };
    out.with_context(|| format!("failed to serialize {} layout", request.kind()))
}
