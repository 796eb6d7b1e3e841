//! Scene builders: one entrypoint per visualization kind.
//!
//! A `VizRequest` names a visualization and its parameters. From it we can produce:
//! - `layout()`: the raw layout data (what a plotting library would consume)
//! - `build_scene()`: a `Scene` with one named root per visual element
//!
//! Slider-driven scenes override request parameters from a sampled timeline via
//! `with_params()`, then rebuild.

use log::info;
use serde::Serialize;

use crate::anim::Params;
use crate::layout::{
    BoxDatum, EllipseSpec, NetworkLayout, NeuronLayerSpec, Point3, RiemannSpec, riemann_sum,
};
use crate::mesh::{self, MeshError, MeshOptions, tessellate};
use crate::sample::SampleFn;
use crate::scene::{Rgba, Scene, SceneNode};

/// Number of samples used to draw the reference curve over Riemann boxes.
pub const CURVE_SAMPLES: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum VizRequest {
    Ellipse(EllipseSpec),
    Neurons(NeuronLayerSpec),
    Riemann {
        spec: RiemannSpec,
        function: SampleFn,
    },
    Network {
        layer_sizes: Vec<i64>,
        layer_gap: f64,
        spacing: f64,
    },
}

/// Raw layout output of a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VizLayout {
    Ellipse {
        points: Vec<Point3>,
    },
    Neurons {
        positions: Vec<Point3>,
    },
    Riemann {
        function: String,
        boxes: Vec<BoxDatum>,
        sum: f64,
    },
    Network {
        layers: Vec<Vec<Point3>>,
        edges: Vec<(Point3, Point3)>,
    },
}

impl VizRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            VizRequest::Ellipse(_) => "ellipse",
            VizRequest::Neurons(_) => "neurons",
            VizRequest::Riemann { .. } => "riemann",
            VizRequest::Network { .. } => "network",
        }
    }

    /// Override parameters by name from a sampled timeline.
    ///
    /// Recognized names per kind:
    /// - ellipse: `radius_x`, `radius_y`, `segments`
    /// - neurons: `count`, `x`, `spacing`
    /// - riemann: `start`, `end`, `partitions`
    /// - network: `layer_gap`, `spacing`
    ///
    /// Unknown names are ignored.
    pub fn with_params(&self, params: &Params) -> Self {
        match self {
            VizRequest::Ellipse(s) => VizRequest::Ellipse(EllipseSpec {
                radius_x: params.get_or("radius_x", s.radius_x),
                radius_y: params.get_or("radius_y", s.radius_y),
                segments: params.count("segments", s.segments),
            }),
            VizRequest::Neurons(s) => VizRequest::Neurons(NeuronLayerSpec {
                count: params.count("count", s.count),
                x: params.get_or("x", s.x),
                spacing: params.get_or("spacing", s.spacing),
            }),
            VizRequest::Riemann { spec, function } => VizRequest::Riemann {
                spec: RiemannSpec {
                    start: params.get_or("start", spec.start),
                    end: params.get_or("end", spec.end),
                    partitions: params.count("partitions", spec.partitions),
                },
                function: function.clone(),
            },
            VizRequest::Network {
                layer_sizes,
                layer_gap,
                spacing,
            } => VizRequest::Network {
                layer_sizes: layer_sizes.clone(),
                layer_gap: params.get_or("layer_gap", *layer_gap),
                spacing: params.get_or("spacing", *spacing),
            },
        }
    }

    pub fn layout(&self) -> VizLayout {
        match self {
            VizRequest::Ellipse(s) => VizLayout::Ellipse { points: s.points() },
            VizRequest::Neurons(s) => VizLayout::Neurons {
                positions: s.positions(),
            },
            VizRequest::Riemann { spec, function } => {
                let boxes = spec.boxes(|x| function.eval(x));
                VizLayout::Riemann {
                    function: function.to_string(),
                    sum: riemann_sum(&boxes),
                    boxes,
                }
            }
            VizRequest::Network {
                layer_sizes,
                layer_gap,
                spacing,
            } => {
                let net = NetworkLayout::new(layer_sizes, *layer_gap, *spacing);
                VizLayout::Network {
                    edges: net.edges(),
                    layers: net.layers().to_vec(),
                }
            }
        }
    }

    /// Build a renderable scene for this request.
    pub fn build_scene(&self, opts: &MeshOptions) -> Result<Scene, MeshError> {
        let mut scene = Scene::new();

        match self {
            VizRequest::Ellipse(s) => {
                let mesh = mesh::ellipse_outline_mesh(&s.points(), opts)?;
                scene.add_root(SceneNode::new("ellipse").with_mesh(mesh).with_fill(Rgba::CURVE));
            }
            VizRequest::Neurons(s) => {
                let mesh = mesh::neuron_disc_mesh(&s.positions(), opts)?;
                scene.add_root(SceneNode::new("neurons").with_mesh(mesh).with_fill(Rgba::NODE));
            }
            VizRequest::Riemann { spec, function } => {
                let boxes = spec.boxes(|x| function.eval(x));
                let (pos, neg): (Vec<BoxDatum>, Vec<BoxDatum>) =
                    boxes.into_iter().partition(|b| b.scale[1] >= 0.0);

                scene.add_root(
                    SceneNode::new("area_positive")
                        .with_mesh(mesh::riemann_box_mesh(&pos)?)
                        .with_fill(Rgba::AREA),
                );
                scene.add_root(
                    SceneNode::new("area_negative")
                        .with_mesh(mesh::riemann_box_mesh(&neg)?)
                        .with_fill(Rgba::NEGATIVE_AREA),
                );
                scene.add_root(
                    SceneNode::new("curve")
                        .with_mesh(curve_mesh(spec, function, opts)?)
                        .with_fill(Rgba::CURVE),
                );
            }
            VizRequest::Network {
                layer_sizes,
                layer_gap,
                spacing,
            } => {
                let net = NetworkLayout::new(layer_sizes, *layer_gap, *spacing);
                let nodes: Vec<Point3> = net.layers().iter().flatten().copied().collect();

                // Edges first so nodes draw on top.
                scene.add_root(
                    SceneNode::new("edges")
                        .with_mesh(mesh::network_edge_mesh(&net, opts)?)
                        .with_fill(Rgba::EDGE),
                );
                scene.add_root(
                    SceneNode::new("nodes")
                        .with_mesh(mesh::neuron_disc_mesh(&nodes, opts)?)
                        .with_fill(Rgba::NODE),
                );
            }
        }

        info!(
            "built {} scene: {} roots, {} triangles",
            self.kind(),
            scene.roots.len(),
            scene
                .flatten()
                .iter()
                .map(|d| d.mesh.triangle_count())
                .sum::<usize>()
        );
        Ok(scene)
    }
}

/// The sampled function drawn as a stroked polyline over `[start, end]`.
///
/// Non-finite samples split the curve so gaps stay gaps.
fn curve_mesh(
    spec: &RiemannSpec,
    function: &SampleFn,
    opts: &MeshOptions,
) -> Result<crate::scene::Mesh3D, MeshError> {
    let n = CURVE_SAMPLES - 1;
    let runs = tessellate::finite_runs((0..=n).map(|i| {
        let x = spec.start + (spec.end - spec.start) * i as f64 / n as f64;
        [x as f32, function.eval(x) as f32]
    }));

    let path = tessellate::polylines_path(runs.iter().map(Vec::as_slice), false);
    tessellate::stroke_path(&path, 0.0, opts.stroke_width, opts.tolerance)
}
