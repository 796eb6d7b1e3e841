//! Midpoint Riemann-sum box layout.
//!
//! Each partition of `[start, end]` becomes one box standing on the y = 0 baseline:
//! - centered horizontally at the partition midpoint
//! - as tall as the sampled function value at that midpoint (signed, never clamped)
//! - slightly narrower than the partition, so neighbouring boxes stay visually distinct
//!
//! The sample function is called exactly once per box, in left-to-right order.

use serde::{Deserialize, Serialize};

use super::BoxDatum;

/// Box width as a fraction of the partition width.
pub const BOX_GAP_FACTOR: f64 = 0.9;

/// Fixed box depth along z.
pub const BOX_DEPTH: f64 = 0.5;

/// Interval and partition count of a Riemann layout.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiemannSpec {
    pub start: f64,
    pub end: f64,
    pub partitions: i64,
}

impl RiemannSpec {
    #[inline]
    pub fn new(start: f64, end: f64, partitions: i64) -> Self {
        Self {
            start,
            end,
            partitions,
        }
    }

    /// Partition width, or `None` when there are no partitions.
    #[inline]
    pub fn dx(&self) -> Option<f64> {
        (self.partitions > 0).then(|| (self.end - self.start) / self.partitions as f64)
    }

    pub fn boxes<F>(&self, sample_fn: F) -> Vec<BoxDatum>
    where
        F: FnMut(f64) -> f64,
    {
        calculate_riemann_boxes(self.start, self.end, self.partitions, sample_fn)
    }

    pub fn try_boxes<F, E>(&self, sample_fn: F) -> Result<Vec<BoxDatum>, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        try_calculate_riemann_boxes(self.start, self.end, self.partitions, sample_fn)
    }
}

/// Lay out `partitions` midpoint boxes approximating `sample_fn` over `[start, end]`.
///
/// `partitions <= 0` yields no boxes. A panic inside `sample_fn` unwinds to the caller;
/// use [`try_calculate_riemann_boxes`] for fallible sample functions.
pub fn calculate_riemann_boxes<F>(
    start: f64,
    end: f64,
    partitions: i64,
    mut sample_fn: F,
) -> Vec<BoxDatum>
where
    F: FnMut(f64) -> f64,
{
    let res: Result<_, std::convert::Infallible> =
        try_calculate_riemann_boxes(start, end, partitions, |x| Ok(sample_fn(x)));
    match res {
        Ok(boxes) => boxes,
        Err(never) => match never {},
    }
}

/// Fallible form of [`calculate_riemann_boxes`].
///
/// Stops at the first error returned by `sample_fn` and hands it back unchanged.
pub fn try_calculate_riemann_boxes<F, E>(
    start: f64,
    end: f64,
    partitions: i64,
    mut sample_fn: F,
) -> Result<Vec<BoxDatum>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    if partitions <= 0 {
        return Ok(Vec::new());
    }

    let dx = (end - start) / partitions as f64;
    (0..partitions)
        .map(|i| {
            let center_x = start + i as f64 * dx + dx / 2.0;
            let height = sample_fn(center_x)?;
            Ok(BoxDatum {
                position: [center_x, height / 2.0, 0.0],
                scale: [dx * BOX_GAP_FACTOR, height, BOX_DEPTH],
            })
        })
        .collect()
}

/// Midpoint-rule estimate of the integral represented by `boxes`.
///
/// Recovers each partition width from the box width (`scale.x / BOX_GAP_FACTOR`), so the
/// visual gap does not shrink the estimate. Boxes below the axis subtract.
pub fn riemann_sum(boxes: &[BoxDatum]) -> f64 {
    boxes
        .iter()
        .map(|b| (b.scale[0] / BOX_GAP_FACTOR) * b.scale[1])
        .sum()
}
