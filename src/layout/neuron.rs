//! Neuron layer layout: one vertical column of evenly spaced nodes.

use serde::{Deserialize, Serialize};

use super::Point3;

/// Vertical distance between neighbouring neurons when none is given.
pub const DEFAULT_NEURON_SPACING: f64 = 1.2;

/// A single column of `count` neurons at horizontal offset `x`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronLayerSpec {
    pub count: i64,
    pub x: f64,
    pub spacing: f64,
}

impl NeuronLayerSpec {
    /// Layer with the default spacing.
    #[inline]
    pub fn new(count: i64, x: f64) -> Self {
        Self {
            count,
            x,
            spacing: DEFAULT_NEURON_SPACING,
        }
    }

    #[inline]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    #[inline]
    pub fn positions(&self) -> Vec<Point3> {
        neuron_positions(self.count, self.x, self.spacing)
    }
}

/// Lay out `count` nodes at `x`, centered on y = 0, `spacing` apart.
///
/// `count <= 0` yields no nodes. A single node sits exactly at y = 0.
pub fn neuron_positions(count: i64, x: f64, spacing: f64) -> Vec<Point3> {
    if count <= 0 {
        return Vec::new();
    }

    let offset = ((count - 1) as f64 * spacing) / 2.0;
    (0..count)
        .map(|i| [x, i as f64 * spacing - offset, 0.0])
        .collect()
}

/// [`neuron_positions`] with [`DEFAULT_NEURON_SPACING`].
#[inline]
pub fn neuron_positions_default(count: i64, x: f64) -> Vec<Point3> {
    neuron_positions(count, x, DEFAULT_NEURON_SPACING)
}
