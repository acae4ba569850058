//! `trendLine` — a rising polyline that draws itself in, with a pulsing
//! marker on the latest point.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::Appearance;
use crate::registry::VariantId;
use crate::track::{Easing, Property, Repeat, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const POINTS: RangeInclusive<usize> = 6..=10;
    /// Every value is clamped into this span.
    pub const VALUE: Span = Span::new(0.1, 0.95);
    pub const START: Span = Span::new(0.15, 0.35);
    /// Total rise from the first point to the last, before jitter.
    pub const RISE: Span = Span::new(0.3, 0.55);
    pub const JITTER: Span = Span::symmetric(0.08);
    pub const DRAW: Span = Span::new(1.5, 3.0);
    pub const MARKER: Span = Span::new(1.2, 2.4);
    pub const LEFT: f64 = 20.0;
    pub const RIGHT: f64 = 180.0;
    pub const BOTTOM: f64 = 175.0;
    pub const HEIGHT: f64 = 150.0;
}

use ranges::{BOTTOM, DRAW, HEIGHT, JITTER, LEFT, MARKER, POINTS, RIGHT, RISE, START, VALUE};

const BASE_OPACITY: f64 = 0.6;
const BASE_STROKE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub x: f64,
    /// Normalized value; the renderer maps it with [`TrendLine::y_of`].
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub points: Vec<TrendPoint>,
    pub draw: f64,
    pub marker: f64,
    pub appearance: Appearance,
}

impl TrendLine {
    /// Tile y coordinate of a normalized value.
    #[must_use]
    pub fn y_of(value: f64) -> f64 {
        value.mul_add(-HEIGHT, BOTTOM)
    }
}

impl Variant for TrendLine {
    const ID: VariantId = VariantId::TrendLine;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&POINTS);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let start = layout.float_in(START);
        let rise = layout.float_in(RISE);
        let last = (n - 1) as f64;
        let points = (0..n)
            .map(|i| {
                let t = i as f64 / last;
                let raw = rise.mul_add(t, start) + layout.float_in(JITTER);
                TrendPoint {
                    x: (RIGHT - LEFT).mul_add(t, LEFT),
                    value: raw.clamp(VALUE.min, VALUE.max),
                }
            })
            .collect();

        Self {
            points,
            draw: timing.float_in(DRAW),
            marker: timing.float_in(MARKER),
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let last = self.points.len().saturating_sub(1);
        vec![
            Track::new("line", 0, Property::Reveal, vec![0.0, 1.0])
                .timing(self.draw, 0.0)
                .repeat(Repeat::Once)
                .easing(Easing::EaseInOut),
            Track::new("marker", last, Property::Scale, vec![0.8, 1.3])
                .timing(self.marker, self.draw)
                .repeat(Repeat::Mirror)
                .easing(Easing::EaseInOut),
            Track::new("marker", last, Property::Opacity, vec![0.6, 1.0])
                .timing(self.marker, self.draw)
                .repeat(Repeat::Mirror),
        ]
    }

    fn within_bounds(&self) -> bool {
        POINTS.contains(&self.points.len())
            && self.appearance.is_valid()
            && DRAW.contains(self.draw)
            && MARKER.contains(self.marker)
            && self.points.windows(2).all(|w| w[1].x > w[0].x)
            && self.points.iter().all(|p| {
                VALUE.contains(p.value) && (LEFT..=RIGHT).contains(&p.x) && Self::y_of(p.value) > 0.0
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
