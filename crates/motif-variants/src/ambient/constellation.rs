//! `constellation` — a scatter of twinkling stars with a few faint links.

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

    pub const STARS: RangeInclusive<usize> = 18..=32;
    pub const LINKS: RangeInclusive<usize> = 4..=8;
    pub const X: Span = Span::new(40.0, 1160.0);
    pub const Y: Span = Span::new(40.0, 760.0);
    pub const RADIUS: Span = Span::new(0.8, 2.4);
    pub const TWINKLE: Span = Span::new(2.0, 6.0);
    pub const DELAY: Span = Span::new(0.0, 5.0);
}

use ranges::{DELAY, LINKS, RADIUS, STARS, TWINKLE, X, Y};

const BASE_OPACITY: f64 = 0.3;
const BASE_STROKE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub twinkle: f64,
    pub delay: f64,
}

/// A link between two distinct stars. Links are not deduplicated; a repeated
/// pair just draws the same faint line twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarLink {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constellation {
    pub stars: Vec<Star>,
    pub links: Vec<StarLink>,
    pub appearance: Appearance,
}

impl Variant for Constellation {
    const ID: VariantId = VariantId::Constellation;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let n = count.count(&STARS);
        let k = count.count(&LINKS);

        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let stars = (0..n)
            .map(|_| Star {
                x: layout.float_in(X),
                y: layout.float_in(Y),
                radius: layout.float_in(RADIUS),
                twinkle: timing.float_in(TWINKLE),
                delay: timing.float_in(DELAY),
            })
            .collect();

        // `to` is offset from `from` by 1..n-1, so it never equals `from`.
        let mut links_rng = scope.stream("links");
        let last = n as i64 - 1;
        let links = (0..k)
            .map(|_| {
                let from = links_rng.rand_int(0, last) as usize;
                let step = links_rng.rand_int(0, last - 1) as usize;
                StarLink { from, to: (from + 1 + step) % n }
            })
            .collect();

        Self { stars, links, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.stars
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Track::new("star", i, Property::Opacity, vec![0.3, 1.0])
                    .timing(s.twinkle, s.delay)
                    .repeat(Repeat::Mirror)
                    .easing(Easing::EaseInOut)
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let n = self.stars.len();
        STARS.contains(&n)
            && LINKS.contains(&self.links.len())
            && self.appearance.is_valid()
            && self.stars.iter().all(|s| {
                X.contains(s.x)
                    && Y.contains(s.y)
                    && RADIUS.contains(s.radius)
                    && TWINKLE.contains(s.twinkle)
                    && DELAY.contains(s.delay)
            })
            && self.links.iter().all(|l| l.from < n && l.to < n && l.from != l.to)
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
    fn links_never_self_loop() {
        for i in 0..300 {
            let c: Constellation = generate(&format!("sky-{i}"), IntensityLevel::Medium);
            assert!(c.links.iter().all(|l| l.from != l.to), "sky-{i}");
            assert!(c.within_bounds(), "sky-{i}");
        }
    }

    #[test]
    fn one_twinkle_per_star() {
        let c: Constellation = generate("twinkle", IntensityLevel::Subtle);
        assert_eq!(c.tracks().len(), c.stars.len());
    }
}
