//! `pieSegments` — a donut chart whose segments sweep in one after another.
//!
//! Segment sizes come from integer weights normalized to fractions, so the
//! sweeps always sum to a full turn.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{Appearance, TILE_CANVAS};
use crate::registry::VariantId;
use crate::track::{Easing, Property, Repeat, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const SEGMENTS: RangeInclusive<usize> = 3..=6;
    pub const WEIGHT: RangeInclusive<usize> = 1..=4;
    /// Angle of the first segment, degrees.
    pub const START: Span = Span::new(0.0, 360.0);
    /// Inner radius as a fraction of the outer radius.
    pub const INNER: Span = Span::new(0.45, 0.65);
    pub const DURATION: Span = Span::new(0.8, 1.6);
    pub const STAGGER: Span = Span::new(0.05, 0.2);
    pub const OUTER_RADIUS: f64 = 72.0;
}

use ranges::{DURATION, INNER, OUTER_RADIUS, SEGMENTS, STAGGER, START, WEIGHT};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Share of the full turn, `(0, 1]`.
    pub fraction: f64,
    /// Start angle in degrees, `[0, 360)`.
    pub start: f64,
    pub sweep: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSegments {
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_ratio: f64,
    pub duration: f64,
    pub segments: Vec<Segment>,
    pub appearance: Appearance,
}

impl Variant for PieSegments {
    const ID: VariantId = VariantId::PieSegments;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let n = count.count(&SEGMENTS);
        let weights: Vec<usize> = (0..n).map(|_| count.count(&WEIGHT)).collect();
        let total: usize = weights.iter().sum();

        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let first = layout.float_in(START);
        let inner_ratio = layout.float_in(INNER);
        let duration = timing.float_in(DURATION);
        let stagger = timing.float_in(STAGGER);

        let mut covered = 0usize;
        let segments = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let fraction = w as f64 / total as f64;
                let start = (covered as f64 / total as f64).mul_add(360.0, first) % 360.0;
                covered += w;
                Segment { fraction, start, sweep: fraction * 360.0, delay: i as f64 * stagger }
            })
            .collect();

        Self {
            center: TILE_CANVAS.center(),
            outer_radius: OUTER_RADIUS,
            inner_ratio,
            duration,
            segments,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Track::new("segment", i, Property::Reveal, vec![0.0, 1.0])
                    .timing(self.duration, s.delay)
                    .repeat(Repeat::Once)
                    .easing(Easing::EaseOut)
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let total: f64 = self.segments.iter().map(|s| s.fraction).sum();
        let n = self.segments.len() as f64;
        SEGMENTS.contains(&self.segments.len())
            && self.appearance.is_valid()
            && (total - 1.0).abs() < 1e-9
            && INNER.contains(self.inner_ratio)
            && DURATION.contains(self.duration)
            && self.outer_radius <= self.center.0.min(self.center.1)
            && self.segments.iter().all(|s| {
                s.fraction > 0.0
                    && (0.0..360.0).contains(&s.start)
                    && (0.0..=n * STAGGER.max).contains(&s.delay)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::generate;

    #[test]
    fn sweeps_make_a_full_turn() {
        for i in 0..200 {
            let p: PieSegments = generate(&format!("pie-{i}"), IntensityLevel::Medium);
            let sweep: f64 = p.segments.iter().map(|s| s.sweep).sum();
            assert!((sweep - 360.0).abs() < 1e-6, "pie-{i}: {sweep}");
            assert!(p.within_bounds(), "pie-{i}");
        }
    }

    #[test]
    fn segments_are_contiguous() {
        let p: PieSegments = generate("contiguous", IntensityLevel::Medium);
        for w in p.segments.windows(2) {
            let end = (w[0].start + w[0].sweep) % 360.0;
            let gap = (w[1].start - end).rem_euclid(360.0);
            assert!(gap < 1e-6 || (360.0 - gap) < 1e-6, "gap {gap}");
        }
    }
}
