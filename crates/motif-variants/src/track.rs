//! Keyframe tracks — the animation parameters a descriptor hands to the
//! external animation runtime.
//!
//! A track says "animate `property` of element `part[index]` through these
//! keyframe values, evenly spaced over `duration` seconds, starting after
//! `delay`". The runtime owns interpolation and frame timing; the engine only
//! owns the numbers.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Property / Repeat / Easing
// ---------------------------------------------------------------------------

/// Which presentational property a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Element opacity multiplier, `[0, 1]`.
    Opacity,
    /// Position along a path, `[0, 1]`. A looping track may run past 1; the
    /// position wraps back to the start of the path.
    Progress,
    /// Rotation in degrees.
    Rotation,
    /// Uniform scale factor.
    Scale,
    /// Horizontal translation in canvas units.
    TranslateX,
    /// Vertical translation in canvas units.
    TranslateY,
    /// Circle radius in canvas units.
    Radius,
    /// Fraction of a shape drawn (bar height, ring fill, line length), `[0, 1]`.
    Reveal,
    /// Stroke dash offset in canvas units.
    DashOffset,
}

impl Property {
    /// Whether a value of zero (or below) leaves the element invisible.
    #[must_use]
    pub const fn hides_at_zero(self) -> bool {
        matches!(self, Self::Opacity | Self::Scale | Self::Radius | Self::Reveal)
    }

    /// Whether values are confined to `[0, 1]` once wrapped.
    #[must_use]
    pub const fn is_unit(self) -> bool {
        matches!(self, Self::Opacity | Self::Progress | Self::Reveal)
    }

    /// Fold a value into the range this property displays.
    ///
    /// Progress past the end of a path wraps to its start; every other
    /// property passes through.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Self::Progress if value > 1.0 => value.fract(),
            _ => value,
        }
    }
}

/// How a track continues after its last keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    /// Play once and hold the final value.
    Once,
    /// Restart from the first keyframe.
    Loop,
    /// Play forward, then backward, forever.
    Mirror,
}

/// Interpolation curve between keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOut,
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// One animated property of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Element group name within the descriptor (`"stream"`, `"node"`, ...).
    pub part: &'static str,
    /// Element index within its group.
    pub index: usize,
    pub property: Property,
    /// Keyframe values, evenly spaced in time.
    pub keyframes: Vec<f64>,
    /// Seconds per cycle.
    pub duration: f64,
    /// Seconds before the first cycle.
    pub delay: f64,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl Track {
    /// A looping, linear track with zero delay and a one-second cycle.
    /// Chain the builder methods to set the rest.
    #[must_use]
    pub fn new(part: &'static str, index: usize, property: Property, keyframes: Vec<f64>) -> Self {
        Self {
            part,
            index,
            property,
            keyframes,
            duration: 1.0,
            delay: 0.0,
            repeat: Repeat::Loop,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn timing(mut self, duration: f64, delay: f64) -> Self {
        self.duration = duration;
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Keyframe value at `phase` in `[0, 1]`, linearly interpolated.
    ///
    /// Phase outside the unit interval is clamped. An empty track reads `0`.
    #[must_use]
    pub fn value_at(&self, phase: f64) -> f64 {
        match self.keyframes.as_slice() {
            [] => 0.0,
            [only] => *only,
            frames => {
                let segments = (frames.len() - 1) as f64;
                let pos = phase.clamp(0.0, 1.0) * segments;
                let i = (pos.floor() as usize).min(frames.len() - 2);
                let t = pos - i as f64;
                (frames[i + 1] - frames[i]).mul_add(t, frames[i])
            }
        }
    }

    /// Time-averaged value over one cycle of the piecewise-linear keyframe
    /// curve.
    ///
    /// For `[a, b]` this is the midpoint; for a pulse `[lo, hi, lo]` it is
    /// halfway between trough and peak, never either extreme.
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        match self.keyframes.as_slice() {
            [] => 0.0,
            [only] => *only,
            frames => {
                let sum: f64 = frames.windows(2).map(|w| (w[0] + w[1]) * 0.5).sum();
                sum / (frames.len() - 1) as f64
            }
        }
    }

    /// Smallest and largest keyframe value.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        self.keyframes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
