//! `pulseBeacon` — a glowing core emitting evenly staggered ripples.

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

    pub const RIPPLES: RangeInclusive<usize> = 2..=4;
    pub const MAX_RADIUS: Span = Span::new(50.0, 90.0);
    pub const DURATION: Span = Span::new(1.8, 3.2);
    pub const CORE_RADIUS: Span = Span::new(6.0, 12.0);
    /// Beacon center on both axes.
    pub const CENTER: Span = Span::new(92.0, 108.0);
}

use ranges::{CENTER, CORE_RADIUS, DURATION, MAX_RADIUS, RIPPLES};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 1.5;

/// One expanding ring. Ripples share duration and radius; only the delay
/// differs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ripple {
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseBeacon {
    pub center: (f64, f64),
    pub core_radius: f64,
    pub max_radius: f64,
    pub duration: f64,
    pub ripples: Vec<Ripple>,
    pub appearance: Appearance,
}

impl Variant for PulseBeacon {
    const ID: VariantId = VariantId::PulseBeacon;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&RIPPLES);
        let mut layout = scope.stream("layout");

        let center = (layout.float_in(CENTER), layout.float_in(CENTER));
        let core_radius = layout.float_in(CORE_RADIUS);
        let max_radius = layout.float_in(MAX_RADIUS);
        let duration = scope.stream("timing").float_in(DURATION);
        let stagger = duration / n as f64;

        Self {
            center,
            core_radius,
            max_radius,
            duration,
            ripples: (0..n).map(|i| Ripple { delay: i as f64 * stagger }).collect(),
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let core = Track::new("core", 0, Property::Scale, vec![0.9, 1.15])
            .timing(self.duration * 0.5, 0.0)
            .repeat(Repeat::Mirror)
            .easing(Easing::EaseInOut);
        let ripples = self.ripples.iter().enumerate().flat_map(|(i, r)| {
            [
                Track::new("ripple", i, Property::Radius, vec![self.core_radius, self.max_radius])
                    .timing(self.duration, r.delay)
                    .easing(Easing::EaseOut),
                Track::new("ripple", i, Property::Opacity, vec![0.9, 0.0])
                    .timing(self.duration, r.delay)
                    .easing(Easing::EaseOut),
            ]
        });
        std::iter::once(core).chain(ripples).collect()
    }

    fn within_bounds(&self) -> bool {
        let (cx, cy) = self.center;
        RIPPLES.contains(&self.ripples.len())
            && self.appearance.is_valid()
            && CENTER.contains(cx)
            && CENTER.contains(cy)
            && CORE_RADIUS.contains(self.core_radius)
            && MAX_RADIUS.contains(self.max_radius)
            && TILE_CANVAS.contains(cx - self.max_radius, cy - self.max_radius)
            && TILE_CANVAS.contains(cx + self.max_radius, cy + self.max_radius)
            && DURATION.contains(self.duration)
            && self.ripples.iter().all(|r| (0.0..self.duration).contains(&r.delay))
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
    fn beacon_fits_the_tile() {
        for i in 0..200 {
            let b: PulseBeacon = generate(&format!("beacon-{i}"), IntensityLevel::Medium);
            assert!(b.within_bounds(), "beacon-{i}");
        }
    }

    #[test]
    fn ripples_evenly_staggered() {
        let b: PulseBeacon = generate("stagger", IntensityLevel::Medium);
        let step = b.duration / b.ripples.len() as f64;
        for (i, r) in b.ripples.iter().enumerate() {
            assert!((r.delay - i as f64 * step).abs() < 1e-9);
        }
    }
}
