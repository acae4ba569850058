//! `barChart` — a row of bars growing from the baseline, one highlighted.

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

    pub const BARS: RangeInclusive<usize> = 4..=7;
    /// Height as a fraction of the plot area.
    pub const HEIGHT: Span = Span::new(0.2, 0.95);
    pub const GROW: Span = Span::new(0.6, 1.4);
    /// Fixed per-index offset added to every bar's delay.
    pub const STEP: f64 = 0.08;
    pub const JITTER: Span = Span::new(0.0, 0.12);
    /// Plot area inside the tile.
    pub const PLOT_LEFT: f64 = 24.0;
    pub const PLOT_WIDTH: f64 = 152.0;
    pub const BASELINE: f64 = 170.0;
    pub const PLOT_HEIGHT: f64 = 140.0;
}

use ranges::{BARS, BASELINE, GROW, HEIGHT, JITTER, PLOT_HEIGHT, PLOT_LEFT, PLOT_WIDTH, STEP};

const BASE_OPACITY: f64 = 0.55;
const BASE_STROKE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Left edge in tile units.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub grow: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub baseline: f64,
    pub bars: Vec<Bar>,
    pub highlight: usize,
    pub appearance: Appearance,
}

impl Variant for BarChart {
    const ID: VariantId = VariantId::BarChart;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&BARS);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let slot = PLOT_WIDTH / n as f64;
        let bars = (0..n)
            .map(|i| Bar {
                x: (i as f64).mul_add(slot, PLOT_LEFT + slot * 0.15),
                width: slot * 0.7,
                height: layout.float_in(HEIGHT) * PLOT_HEIGHT,
                grow: timing.float_in(GROW),
                delay: (i as f64).mul_add(STEP, timing.float_in(JITTER)),
            })
            .collect();
        let highlight = scope.stream("style").rand_int(0, n as i64 - 1) as usize;

        Self {
            baseline: BASELINE,
            bars,
            highlight,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let mut tracks: Vec<Track> = self
            .bars
            .iter()
            .enumerate()
            .map(|(i, b)| {
                Track::new("bar", i, Property::Scale, vec![0.0, 1.0])
                    .timing(b.grow, b.delay)
                    .repeat(Repeat::Once)
                    .easing(Easing::EaseOut)
            })
            .collect();
        if let Some(bar) = self.bars.get(self.highlight) {
            tracks.push(
                Track::new("bar", self.highlight, Property::Opacity, vec![0.7, 1.0])
                    .timing(bar.grow * 1.5, bar.delay + bar.grow)
                    .repeat(Repeat::Mirror)
                    .easing(Easing::EaseInOut),
            );
        }
        tracks
    }

    fn within_bounds(&self) -> bool {
        let heights = HEIGHT.min * PLOT_HEIGHT..=HEIGHT.max * PLOT_HEIGHT;
        BARS.contains(&self.bars.len())
            && self.highlight < self.bars.len()
            && self.appearance.is_valid()
            && self.bars.iter().enumerate().all(|(i, b)| {
                let offset = b.delay - i as f64 * STEP;
                heights.contains(&b.height)
                    && b.height <= self.baseline
                    && b.x >= PLOT_LEFT
                    && b.x + b.width <= PLOT_LEFT + PLOT_WIDTH + 1e-9
                    && GROW.contains(b.grow)
                    && offset >= JITTER.min - 1e-9
                    && offset <= JITTER.max + 1e-9
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
    fn bars_bounded_and_highlight_valid() {
        for i in 0..200 {
            let c: BarChart = generate(&format!("bars-{i}"), IntensityLevel::Medium);
            assert!(c.within_bounds(), "bars-{i}");
        }
    }

    #[test]
    fn bars_do_not_overlap() {
        let c: BarChart = generate("overlap", IntensityLevel::Medium);
        assert!(c.bars.windows(2).all(|w| w[0].x + w[0].width < w[1].x));
    }

    #[test]
    fn highlight_gets_emphasis_track() {
        let c: BarChart = generate("emphasis", IntensityLevel::Medium);
        let emphasis: Vec<_> =
            c.tracks().into_iter().filter(|t| t.property == Property::Opacity).collect();
        assert_eq!(emphasis.len(), 1);
        assert_eq!(emphasis[0].index, c.highlight);
    }
}
