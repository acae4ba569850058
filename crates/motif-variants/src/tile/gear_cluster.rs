//! `gearCluster` — a few toothed gears turning, neighbors in opposite
//! directions.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{Appearance, TILE_CANVAS};
use crate::registry::VariantId;
use crate::track::{Property, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const GEARS: RangeInclusive<usize> = 2..=4;
    pub const TEETH: RangeInclusive<usize> = 8..=16;
    pub const RADIUS: Span = Span::new(18.0, 42.0);
    /// Center coordinates on both axes.
    pub const POSITION: Span = Span::new(50.0, 150.0);
    /// Seconds per revolution.
    pub const PERIOD: Span = Span::new(4.0, 12.0);
    /// Starting rotation, degrees.
    pub const PHASE: Span = Span::new(0.0, 360.0);
}

use ranges::{GEARS, PERIOD, PHASE, POSITION, RADIUS, TEETH};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gear {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub teeth: usize,
    pub period: f64,
    pub phase: f64,
    /// Even indices turn clockwise, odd counter-clockwise.
    pub clockwise: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearCluster {
    pub gears: Vec<Gear>,
    pub appearance: Appearance,
}

impl Variant for GearCluster {
    const ID: VariantId = VariantId::GearCluster;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let n = count.count(&GEARS);
        let teeth: Vec<usize> = (0..n).map(|_| count.count(&TEETH)).collect();

        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let gears = teeth
            .into_iter()
            .enumerate()
            .map(|(i, teeth)| Gear {
                x: layout.float_in(POSITION),
                y: layout.float_in(POSITION),
                radius: layout.float_in(RADIUS),
                teeth,
                period: timing.float_in(PERIOD),
                phase: timing.float_in(PHASE),
                clockwise: i % 2 == 0,
            })
            .collect();

        Self { gears, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.gears
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let turn = if g.clockwise { 360.0 } else { -360.0 };
                Track::new("gear", i, Property::Rotation, vec![g.phase, g.phase + turn])
                    .timing(g.period, 0.0)
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        GEARS.contains(&self.gears.len())
            && self.appearance.is_valid()
            && self.gears.iter().enumerate().all(|(i, g)| {
                POSITION.contains(g.x)
                    && POSITION.contains(g.y)
                    && RADIUS.contains(g.radius)
                    && TILE_CANVAS.contains(g.x - g.radius, g.y - g.radius)
                    && TILE_CANVAS.contains(g.x + g.radius, g.y + g.radius)
                    && TEETH.contains(&g.teeth)
                    && PERIOD.contains(g.period)
                    && PHASE.contains(g.phase)
                    && g.clockwise == (i % 2 == 0)
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
    fn gears_fit_the_tile() {
        for i in 0..200 {
            let g: GearCluster = generate(&format!("gears-{i}"), IntensityLevel::Medium);
            assert!(g.within_bounds(), "gears-{i}");
        }
    }

    #[test]
    fn neighbors_counter_rotate() {
        let g: GearCluster = generate("mesh", IntensityLevel::Medium);
        let sweeps: Vec<f64> = g
            .tracks()
            .iter()
            .map(|t| t.keyframes[1] - t.keyframes[0])
            .collect();
        assert!(sweeps.windows(2).all(|w| w[0] * w[1] < 0.0));
    }
}
