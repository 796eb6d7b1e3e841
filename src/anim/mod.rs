//! Parameter timelines for slider-driven scenes.
//!
//! Interactive scenes recompute their geometry from a few scalar parameters (ellipse
//! radii, partition counts, layer sizes). Instead of animating transforms, a timeline
//! here animates those *parameters*; the caller rebuilds the scene from the sampled
//! values each frame.
//!
//! Usage sketch:
//! ```
//! use mathviz::anim::{Ease, Keyframe, Timeline, Track};
//!
//! let mut tl = Timeline::new();
//! tl.add_track(Track::new("partitions").with_keyframes(vec![
//!     Keyframe::at(0.0, 1.0),
//!     Keyframe::at(2.0, 64.0).ease(Ease::InOutCubic),
//! ]));
//!
//! let params = tl.sample(1.0);
//! let n = params.count("partitions", 1);
//! assert!(n > 1 && n < 64);
//! ```

use std::collections::BTreeMap;

use log::trace;
use serde::Serialize;

/// How to map a segment's local progress into a normalized [0,1] blend factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
}

impl Ease {
    #[inline]
    pub fn sample(self, x: f64) -> f64 {
        let t = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::InQuad => t * t,
            Ease::OutQuad => 1.0 - (1.0 - t).powi(2),
            Ease::InOutQuad => in_out(t, 2),
            Ease::InCubic => t.powi(3),
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
            Ease::InOutCubic => in_out(t, 3),
            Ease::InQuart => t.powi(4),
            Ease::OutQuart => 1.0 - (1.0 - t).powi(4),
            Ease::InOutQuart => in_out(t, 4),
        }
    }
}

/// Symmetric in-out power curve.
#[inline]
fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) * 0.5
    }
}

/// A keyframe in seconds with a scalar value.
///
/// `ease` shapes the segment that *starts* at this keyframe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keyframe {
    pub time_s: f64,
    pub value: f64,
    pub ease: Ease,
}

impl Keyframe {
    #[inline]
    pub fn at(time_s: f64, value: f64) -> Self {
        Self {
            time_s: time_s.max(0.0),
            value,
            ease: Ease::Linear,
        }
    }

    #[inline]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Interpolate across time-sorted keyframes, holding the end values outside the range.
fn sample_keyframes(frames: &[Keyframe], t_s: f64) -> Option<f64> {
    let (first, rest) = frames.split_first()?;
    if t_s <= first.time_s {
        return Some(first.value);
    }

    let mut prev = first;
    for next in rest {
        if t_s < next.time_s {
            let dt = (next.time_s - prev.time_s).max(1e-9);
            let k = prev.ease.sample((t_s - prev.time_s) / dt);
            return Some(prev.value + (next.value - prev.value) * k);
        }
        prev = next;
    }

    Some(prev.value)
}

/// One track drives one named parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub param: String,
    pub keyframes: Vec<Keyframe>,
}

impl Track {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            keyframes: Vec::new(),
        }
    }

    pub fn with_keyframes(mut self, mut keyframes: Vec<Keyframe>) -> Self {
        // Stable sort keeps insertion order for equal times.
        keyframes.sort_by(|a, b| a.time_s.total_cmp(&b.time_s));
        self.keyframes = keyframes;
        self
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.keyframes.first()?.time_s, self.keyframes.last()?.time_s))
    }

    #[inline]
    pub fn sample(&self, t_s: f64) -> Option<f64> {
        sample_keyframes(&self.keyframes, t_s)
    }
}

/// Sampled parameter values at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Params(pub BTreeMap<String, f64>);

impl Params {
    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    #[inline]
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Integer-valued parameter (segments, partitions, counts), rounded to nearest.
    ///
    /// Non-finite samples fall back to `default`.
    pub fn count(&self, name: &str, default: i64) -> i64 {
        match self.get(name) {
            Some(v) if v.is_finite() => v.round() as i64,
            _ => default,
        }
    }
}

/// A timeline holds multiple tracks, evaluated independently at time t.
///
/// When two tracks drive the same parameter, the later track wins.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    pub tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_track(&mut self, track: Track) -> &mut Self {
        self.tracks.push(track);
        self
    }

    /// Time span covered by all tracks, if any track has keyframes.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.tracks
            .iter()
            .filter_map(Track::bounds)
            .reduce(|(s0, e0), (s1, e1)| (s0.min(s1), e0.max(e1)))
    }

    /// Sample every track at `t_s`.
    pub fn sample(&self, t_s: f64) -> Params {
        let mut out = BTreeMap::new();
        for tr in &self.tracks {
            if let Some(v) = tr.sample(t_s) {
                out.insert(tr.param.clone(), v);
            }
        }
        trace!("timeline t={t_s:.3}s -> {out:?}");
        Params(out)
    }

    /// Sample `frames` evenly spaced instants across `bounds()` (inclusive).
    ///
    /// Empty when the timeline has no keyframes or `frames == 0`.
    pub fn frames(&self, frames: usize) -> Vec<(f64, Params)> {
        let Some((start, end)) = self.bounds() else {
            return Vec::new();
        };
        match frames {
            0 => Vec::new(),
            1 => vec![(start, self.sample(start))],
            n => (0..n)
                .map(|i| {
                    let t = start + (end - start) * i as f64 / (n - 1) as f64;
                    (t, self.sample(t))
                })
                .collect(),
        }
    }
}
