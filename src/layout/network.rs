//! Fully connected network diagrams built from neuron layers.
//!
//! Layers are stacked left to right, `layer_gap` apart, with the whole diagram centered
//! on x = 0. Each layer is laid out by [`neuron_positions`], so every column is also
//! centered on y = 0.

use serde::{Deserialize, Serialize};

use super::{Point3, neuron::neuron_positions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLayout {
    layers: Vec<Vec<Point3>>,
}

impl NetworkLayout {
    /// Lay out one column per entry of `layer_sizes`.
    ///
    /// Sizes `<= 0` produce empty columns that still occupy their horizontal slot.
    pub fn new(layer_sizes: &[i64], layer_gap: f64, spacing: f64) -> Self {
        let half_width = (layer_sizes.len().saturating_sub(1)) as f64 * layer_gap / 2.0;
        let layers = layer_sizes
            .iter()
            .enumerate()
            .map(|(j, &count)| neuron_positions(count, j as f64 * layer_gap - half_width, spacing))
            .collect();
        Self { layers }
    }

    #[inline]
    pub fn layers(&self) -> &[Vec<Point3>] {
        &self.layers
    }

    /// Total node count across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Connections between adjacent layers, source-major.
    pub fn edges(&self) -> Vec<(Point3, Point3)> {
        self.layers
            .windows(2)
            .flat_map(|pair| {
                let (src, dst) = (&pair[0], &pair[1]);
                src.iter()
                    .flat_map(move |&a| dst.iter().map(move |&b| (a, b)))
            })
            .collect()
    }
}
