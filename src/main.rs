//! Thin binary wrapper over the `mathviz` library.
//!
//! Prints layout data as JSON on stdout so an external renderer or plotting tool can
//! consume it. Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! Run:
//! - `cargo run -- riemann --fn sin --partitions 16 --pretty`
//! - `RUST_LOG=debug cargo run -- --mesh network --layers 3,5,2`

mod cli;

use anyhow::Context as _;
use clap::Parser;
use log::info;
use serde::Serialize;

use mathviz::{
    anim::{Ease, Keyframe, Timeline, Track},
    layout::{EllipseSpec, NeuronLayerSpec, RiemannSpec, riemann_sum},
    mesh::MeshOptions,
    viz::VizRequest,
};

use cli::{Cli, Commands, RiemannArgs};

/// Per-node mesh summary printed with `--mesh`.
#[derive(Debug, Serialize)]
struct MeshSummary {
    name: String,
    vertices: usize,
    triangles: usize,
    bounds_min: [f32; 3],
    bounds_max: [f32; 3],
}

#[derive(Debug, Serialize)]
struct SweepFrame {
    t: f64,
    partitions: i64,
    sum: f64,
}

fn riemann_request(args: &RiemannArgs) -> VizRequest {
    VizRequest::Riemann {
        spec: RiemannSpec::new(args.start, args.end, args.partitions),
        function: args.function.clone(),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.context("failed to serialize output")
}

fn run_sweep(
    riemann: &RiemannArgs,
    to: i64,
    duration: f64,
    frames: usize,
    pretty: bool,
) -> anyhow::Result<()> {
    let base = RiemannSpec::new(riemann.start, riemann.end, riemann.partitions);

    let mut timeline = Timeline::new();
    timeline.add_track(Track::new("partitions").with_keyframes(vec![
        Keyframe::at(0.0, riemann.partitions as f64).ease(Ease::InOutCubic),
        Keyframe::at(duration, to as f64),
    ]));

    for (t, params) in timeline.frames(frames) {
        let spec = RiemannSpec {
            partitions: params.count("partitions", base.partitions),
            ..base
        };
        let boxes = spec.boxes(|x| riemann.function.eval(x));
        let frame = SweepFrame {
            t,
            partitions: spec.partitions,
            sum: riemann_sum(&boxes),
        };
        println!("{}", to_json(&frame, pretty)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the binary so the library remains unopinionated.
    env_logger::init();

    let cli = Cli::parse();

    let request = match &cli.command {
        Commands::Ellipse {
            radius_x,
            radius_y,
            segments,
        } => VizRequest::Ellipse(EllipseSpec::new(*radius_x, *radius_y, *segments)),
        Commands::Neurons { count, x, spacing } => {
            VizRequest::Neurons(NeuronLayerSpec::new(*count, *x).with_spacing(*spacing))
        }
        Commands::Riemann(args) => riemann_request(args),
        Commands::Network {
            layers,
            layer_gap,
            spacing,
        } => VizRequest::Network {
            layer_sizes: layers.clone(),
            layer_gap: *layer_gap,
            spacing: *spacing,
        },
        Commands::Sweep {
            riemann,
            to,
            duration,
            frames,
        } => return run_sweep(riemann, *to, *duration, *frames, cli.pretty),
    };

    info!("layout request: {request:?}");
    println!("{}", mathviz::layout_json(&request, cli.pretty)?);

    if cli.mesh {
        let opts = MeshOptions {
            stroke_width: cli.mesh_opts.stroke_width,
            tolerance: cli.mesh_opts.tolerance,
            ..Default::default()
        };
        let scene = request
            .build_scene(&opts)
            .with_context(|| format!("failed to build {} meshes", request.kind()))?;

        let summary: Vec<MeshSummary> = scene
            .flatten()
            .into_iter()
            .map(|item| {
                let b = item.mesh.bounds();
                MeshSummary {
                    name: item.name,
                    vertices: item.mesh.positions.len(),
                    triangles: item.mesh.triangle_count(),
                    bounds_min: b.min,
                    bounds_max: b.max,
                }
            })
            .collect();
        println!("{}", to_json(&summary, cli.pretty)?);
    }

    Ok(())
}
