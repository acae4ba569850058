//! `networkHub` — a central hub with spokes out to satellite nodes, each
//! carrying a pulse outward.

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

    pub const SPOKES: RangeInclusive<usize> = 5..=9;
    /// Deviation from even angular spacing, degrees.
    pub const ANGLE_JITTER: Span = Span::symmetric(12.0);
    pub const LENGTH: Span = Span::new(45.0, 80.0);
    pub const NODE_RADIUS: Span = Span::new(4.0, 8.0);
    pub const HUB_RADIUS: Span = Span::new(10.0, 16.0);
    pub const PULSE: Span = Span::new(1.2, 2.6);
    pub const DELAY: Span = Span::new(0.0, 1.5);
}

use ranges::{ANGLE_JITTER, DELAY, HUB_RADIUS, LENGTH, NODE_RADIUS, PULSE, SPOKES};

const BASE_OPACITY: f64 = 0.55;
const BASE_STROKE: f64 = 1.25;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spoke {
    /// Degrees, `[0, 360)`.
    pub angle: f64,
    pub length: f64,
    pub node_radius: f64,
    pub pulse: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHub {
    pub center: (f64, f64),
    pub hub_radius: f64,
    pub spokes: Vec<Spoke>,
    pub appearance: Appearance,
}

impl Variant for NetworkHub {
    const ID: VariantId = VariantId::NetworkHub;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&SPOKES);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let hub_radius = layout.float_in(HUB_RADIUS);
        let step = 360.0 / n as f64;
        let spokes = (0..n)
            .map(|i| Spoke {
                angle: (i as f64).mul_add(step, layout.float_in(ANGLE_JITTER)).rem_euclid(360.0),
                length: layout.float_in(LENGTH),
                node_radius: layout.float_in(NODE_RADIUS),
                pulse: timing.float_in(PULSE),
                delay: timing.float_in(DELAY),
            })
            .collect();

        Self {
            center: TILE_CANVAS.center(),
            hub_radius,
            spokes,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let hub = Track::new("hub", 0, Property::Scale, vec![0.92, 1.08])
            .timing(PULSE.max, 0.0)
            .repeat(Repeat::Mirror)
            .easing(Easing::EaseInOut);
        let spokes = self.spokes.iter().enumerate().flat_map(|(i, s)| {
            [
                Track::new("pulse", i, Property::Progress, vec![0.0, 1.0])
                    .timing(s.pulse, s.delay)
                    .easing(Easing::EaseOut),
                Track::new("node", i, Property::Opacity, vec![0.5, 1.0, 0.5])
                    .timing(s.pulse, s.delay),
            ]
        });
        std::iter::once(hub).chain(spokes).collect()
    }

    fn within_bounds(&self) -> bool {
        let reach = self.center.0.min(self.center.1);
        SPOKES.contains(&self.spokes.len())
            && self.appearance.is_valid()
            && HUB_RADIUS.contains(self.hub_radius)
            && self.spokes.iter().all(|s| {
                (0.0..360.0).contains(&s.angle)
                    && LENGTH.contains(s.length)
                    && NODE_RADIUS.contains(s.node_radius)
                    && s.length + s.node_radius <= reach
                    && PULSE.contains(s.pulse)
                    && DELAY.contains(s.delay)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
