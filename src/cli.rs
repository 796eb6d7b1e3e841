use clap::{Args, Parser, Subcommand};

use mathviz::layout::DEFAULT_NEURON_SPACING;
use mathviz::sample::SampleFn;

#[derive(Parser, Debug)]
#[command(name = "mathviz")]
#[command(author, version, about = "Dump math visualization layouts as JSON")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Also build meshes and print a per-node summary
    #[arg(long, global = true)]
    pub mesh: bool,

    #[command(flatten)]
    pub mesh_opts: MeshArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct MeshArgs {
    /// Outline stroke width
    #[arg(long, global = true, default_value_t = 0.05)]
    pub stroke_width: f32,

    /// Tessellation tolerance
    #[arg(long, global = true, default_value_t = 0.01)]
    pub tolerance: f32,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample a closed ellipse outline
    Ellipse {
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        radius_x: f64,

        #[arg(long, default_value_t = 1.2, allow_negative_numbers = true)]
        radius_y: f64,

        #[arg(long, default_value_t = 64, allow_negative_numbers = true)]
        segments: i64,
    },

    /// Lay out a single column of neurons
    Neurons {
        #[arg(long, allow_negative_numbers = true)]
        count: i64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, default_value_t = DEFAULT_NEURON_SPACING)]
        spacing: f64,
    },

    /// Midpoint Riemann boxes under a sample function
    Riemann(RiemannArgs),

    /// Fully connected network diagram
    Network {
        /// Layer sizes, e.g. `3,5,2`
        #[arg(long, value_delimiter = ',', required = true)]
        layers: Vec<i64>,

        #[arg(long, default_value_t = 3.0)]
        layer_gap: f64,

        #[arg(long, default_value_t = DEFAULT_NEURON_SPACING)]
        spacing: f64,
    },

    /// Sweep the partition count of a Riemann layout and print the sum per frame
    Sweep {
        #[command(flatten)]
        riemann: RiemannArgs,

        /// Partition count at the end of the sweep
        #[arg(long, default_value_t = 64)]
        to: i64,

        /// Sweep duration in seconds
        #[arg(long, default_value_t = 2.0)]
        duration: f64,

        /// Number of frames sampled across the sweep
        #[arg(long, default_value_t = 8)]
        frames: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RiemannArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub end: f64,

    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub partitions: i64,

    /// Sample function: `const:<c>`, `x`, `poly:<c0>,<c1>,..`, `sin`, `cos`, `gauss:<mean>,<sd>`
    #[arg(long = "fn", default_value = "sin")]
    pub function: SampleFn,
}
