//! `gradientBlobs` — a few large blurred blobs drifting slowly.
//!
//! Colors are not part of the descriptor. Each blob names a palette slot and
//! the renderer maps slots onto the active theme.

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

    pub const BLOBS: RangeInclusive<usize> = 3..=5;
    pub const CX: Span = Span::new(150.0, 1050.0);
    pub const CY: Span = Span::new(100.0, 700.0);
    pub const RADIUS: Span = Span::new(160.0, 320.0);
    /// Drift offset on each axis.
    pub const DRIFT: Span = Span::symmetric(60.0);
    pub const DURATION: Span = Span::new(14.0, 28.0);
    pub const DELAY: Span = Span::new(0.0, 4.0);
    pub const PALETTE: RangeInclusive<usize> = 0..=2;
}

use ranges::{BLOBS, CX, CY, DELAY, DRIFT, DURATION, PALETTE, RADIUS};

const BASE_OPACITY: f64 = 0.12;
const BASE_STROKE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration: f64,
    pub delay: f64,
    pub palette: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientBlobs {
    pub blobs: Vec<Blob>,
    pub appearance: Appearance,
}

impl Variant for GradientBlobs {
    const ID: VariantId = VariantId::GradientBlobs;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&BLOBS);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let mut style = scope.stream("style");

        let blobs = (0..n)
            .map(|_| Blob {
                cx: layout.float_in(CX),
                cy: layout.float_in(CY),
                radius: layout.float_in(RADIUS),
                drift_x: layout.float_in(DRIFT),
                drift_y: layout.float_in(DRIFT),
                duration: timing.float_in(DURATION),
                delay: timing.float_in(DELAY),
                palette: style.count(&PALETTE),
            })
            .collect();

        Self { blobs, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.blobs
            .iter()
            .enumerate()
            .flat_map(|(i, b)| {
                [
                    Track::new("blob", i, Property::TranslateX, vec![0.0, b.drift_x])
                        .timing(b.duration, b.delay)
                        .repeat(Repeat::Mirror)
                        .easing(Easing::EaseInOut),
                    Track::new("blob", i, Property::TranslateY, vec![0.0, b.drift_y])
                        .timing(b.duration, b.delay)
                        .repeat(Repeat::Mirror)
                        .easing(Easing::EaseInOut),
                    Track::new("blob", i, Property::Scale, vec![0.9, 1.1])
                        .timing(b.duration * 0.75, b.delay)
                        .repeat(Repeat::Mirror)
                        .easing(Easing::EaseInOut),
                ]
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        BLOBS.contains(&self.blobs.len())
            && self.appearance.is_valid()
            && self.blobs.iter().all(|b| {
                CX.contains(b.cx)
                    && CY.contains(b.cy)
                    && RADIUS.contains(b.radius)
                    && DRIFT.contains(b.drift_x)
                    && DRIFT.contains(b.drift_y)
                    && DURATION.contains(b.duration)
                    && DELAY.contains(b.delay)
                    && PALETTE.contains(&b.palette)
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
    fn blobs_bounded() {
        for i in 0..200 {
            let g: GradientBlobs = generate(&format!("blob-{i}"), IntensityLevel::Bold);
            assert!(g.within_bounds(), "blob-{i}");
        }
    }

    #[test]
    fn uses_more_than_one_palette_slot_across_seeds() {
        let slots: std::collections::BTreeSet<usize> = (0..50)
            .flat_map(|i| {
                let g: GradientBlobs = generate(&format!("p{i}"), IntensityLevel::Medium);
                g.blobs.into_iter().map(|b| b.palette).collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(slots.len(), 3);
    }
}
