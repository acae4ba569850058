//! `progressRings` — concentric arcs filling to different completion levels.

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

    pub const RINGS: RangeInclusive<usize> = 2..=4;
    pub const OUTER_RADIUS: f64 = 80.0;
    /// Radial gap between rings.
    pub const SPACING: Span = Span::new(12.0, 18.0);
    /// Completed fraction of the ring.
    pub const FILL: Span = Span::new(0.35, 0.95);
    pub const DURATION: Span = Span::new(1.0, 2.2);
    pub const STEP: f64 = 0.15;
    pub const JITTER: Span = Span::new(0.0, 0.2);
}

use ranges::{DURATION, FILL, JITTER, OUTER_RADIUS, RINGS, SPACING, STEP};

const BASE_OPACITY: f64 = 0.55;
const BASE_STROKE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub radius: f64,
    pub fill: f64,
    pub duration: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRings {
    pub center: (f64, f64),
    pub spacing: f64,
    pub rings: Vec<Ring>,
    pub appearance: Appearance,
}

impl Variant for ProgressRings {
    const ID: VariantId = VariantId::ProgressRings;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&RINGS);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let spacing = layout.float_in(SPACING);
        let rings = (0..n)
            .map(|i| Ring {
                radius: (i as f64).mul_add(-spacing, OUTER_RADIUS),
                fill: layout.float_in(FILL),
                duration: timing.float_in(DURATION),
                delay: (i as f64).mul_add(STEP, timing.float_in(JITTER)),
            })
            .collect();

        Self {
            center: TILE_CANVAS.center(),
            spacing,
            rings,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.rings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Track::new("ring", i, Property::Progress, vec![0.0, r.fill])
                    .timing(r.duration, r.delay)
                    .repeat(Repeat::Once)
                    .easing(Easing::EaseOut)
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        SPACING.contains(self.spacing)
            && RINGS.contains(&self.rings.len())
            && self.appearance.is_valid()
            && self.rings.iter().enumerate().all(|(i, r)| {
                let offset = r.delay - i as f64 * STEP;
                r.radius > 0.0
                    && r.radius <= OUTER_RADIUS
                    && FILL.contains(r.fill)
                    && DURATION.contains(r.duration)
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
    fn rings_shrink_inward() {
        for i in 0..200 {
            let p: ProgressRings = generate(&format!("rings-{i}"), IntensityLevel::Medium);
            assert!(p.rings.windows(2).all(|w| {
                (w[0].radius - w[1].radius - p.spacing).abs() < 1e-9
            }));
            assert!(p.within_bounds(), "rings-{i}");
        }
    }

    #[test]
    fn fill_track_ends_at_fill() {
        let p: ProgressRings = generate("fill", IntensityLevel::Medium);
        for (ring, track) in p.rings.iter().zip(p.tracks()) {
            assert_eq!(track.extent(), (0.0, ring.fill));
        }
    }
}
