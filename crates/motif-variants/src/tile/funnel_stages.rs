//! `funnelStages` — stacked trapezoid bands narrowing geometrically toward
//! the bottom, filling in from the top.

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

    pub const STAGES: RangeInclusive<usize> = 3..=5;
    pub const TOP_WIDTH: Span = Span::new(150.0, 180.0);
    /// Width of each stage relative to the one above.
    pub const RATIO: Span = Span::new(0.62, 0.82);
    pub const STAGGER: Span = Span::new(0.15, 0.35);
    pub const JITTER: Span = Span::new(0.0, 0.1);
    pub const DURATION: Span = Span::new(0.6, 1.2);
    /// Vertical band the stages share.
    pub const TOP: f64 = 30.0;
    pub const BOTTOM: f64 = 170.0;
}

use ranges::{BOTTOM, DURATION, JITTER, RATIO, STAGES, STAGGER, TOP, TOP_WIDTH};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub width: f64,
    /// Top edge of the band.
    pub y: f64,
    pub height: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStages {
    pub ratio: f64,
    pub stagger: f64,
    pub duration: f64,
    pub stages: Vec<FunnelStage>,
    pub appearance: Appearance,
}

impl Variant for FunnelStages {
    const ID: VariantId = VariantId::FunnelStages;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&STAGES);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let top_width = layout.float_in(TOP_WIDTH);
        let ratio = layout.float_in(RATIO);
        let stagger = timing.float_in(STAGGER);
        let duration = timing.float_in(DURATION);
        let height = (BOTTOM - TOP) / n as f64;

        let mut width = top_width;
        let stages = (0..n)
            .map(|i| {
                let stage = FunnelStage {
                    width,
                    y: (i as f64).mul_add(height, TOP),
                    height,
                    delay: (i as f64).mul_add(stagger, timing.float_in(JITTER)),
                };
                width *= ratio;
                stage
            })
            .collect();

        Self {
            ratio,
            stagger,
            duration,
            stages,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.stages
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                [
                    Track::new("stage", i, Property::Scale, vec![0.0, 1.0])
                        .timing(self.duration, s.delay)
                        .repeat(Repeat::Once)
                        .easing(Easing::EaseOut),
                    Track::new("stage", i, Property::Opacity, vec![0.55, 1.0])
                        .timing(self.duration * 2.0, s.delay)
                        .repeat(Repeat::Mirror),
                ]
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let n = self.stages.len();
        let latest = (n.saturating_sub(1)) as f64 * STAGGER.max + JITTER.max;
        STAGES.contains(&n)
            && self.appearance.is_valid()
            && RATIO.contains(self.ratio)
            && STAGGER.contains(self.stagger)
            && DURATION.contains(self.duration)
            && self.stages.first().is_some_and(|s| TOP_WIDTH.contains(s.width))
            && self.stages.windows(2).all(|w| {
                (w[1].width - w[0].width * self.ratio).abs() < 1e-9 && w[1].y > w[0].y
            })
            && self.stages.iter().all(|s| {
                s.width > 0.0
                    && s.width <= TILE_CANVAS.width
                    && s.y >= TOP - 1e-9
                    && s.y + s.height <= BOTTOM + 1e-9
                    && (0.0..=latest).contains(&s.delay)
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
    fn widths_decrease_geometrically() {
        for i in 0..200 {
            let f: FunnelStages = generate(&format!("funnel-{i}"), IntensityLevel::Medium);
            assert!(f.stages.windows(2).all(|w| w[1].width < w[0].width));
            assert!(f.within_bounds(), "funnel-{i}");
        }
    }

    #[test]
    fn stages_fill_top_down() {
        let f: FunnelStages = generate("order", IntensityLevel::Medium);
        assert!(f.stages.windows(2).all(|w| w[1].delay > w[0].delay));
    }
}
