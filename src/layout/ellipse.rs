//! Ellipse sampling.
//!
//! Produces a closed polyline in the z = 0 plane. For `segments > 0` the output has
//! `segments + 1` points and the last point repeats the first (θ = 0 and θ = 2π), so
//! consumers can draw it as an open line strip without special-casing the seam.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::Point3;

/// Parameters of a sampled ellipse.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseSpec {
    pub radius_x: f64,
    pub radius_y: f64,
    pub segments: i64,
}

impl EllipseSpec {
    #[inline]
    pub fn new(radius_x: f64, radius_y: f64, segments: i64) -> Self {
        Self {
            radius_x,
            radius_y,
            segments,
        }
    }

    /// A circle of radius `r`.
    #[inline]
    pub fn circle(r: f64, segments: i64) -> Self {
        Self::new(r, r, segments)
    }

    #[inline]
    pub fn points(&self) -> Vec<Point3> {
        generate_ellipse_points(self.radius_x, self.radius_y, self.segments)
    }
}

/// Sample `segments + 1` points on the ellipse `(rx·cos θ, ry·sin θ, 0)`.
///
/// `segments <= 0` returns the single point `[radius_x, 0, 0]` (no interpolation).
/// Negative radii are accepted and mirror the curve.
pub fn generate_ellipse_points(radius_x: f64, radius_y: f64, segments: i64) -> Vec<Point3> {
    if segments <= 0 {
        return vec![[radius_x, 0.0, 0.0]];
    }

    let n = segments as f64;
    (0..=segments)
        .map(|i| {
            let theta = (i as f64 / n) * TAU;
            let (s, c) = theta.sin_cos();
            [c * radius_x, s * radius_y, 0.0]
        })
        .collect()
}
