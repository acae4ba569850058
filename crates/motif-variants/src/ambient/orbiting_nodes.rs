//! `orbitingNodes` — concentric orbits around the canvas center, each
//! carrying a ring of evenly spaced nodes.
//!
//! Positions are stored in polar form (radius, degrees). Trigonometry is left
//! to the renderer so descriptor values stay bit-identical across platforms.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{AMBIENT_CANVAS, Appearance};
use crate::registry::VariantId;
use crate::track::{Property, Repeat, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const ORBITS: RangeInclusive<usize> = 2..=4;
    pub const NODES: RangeInclusive<usize> = 4..=8;
    /// Radius of the innermost orbit (fixed).
    pub const INNER_RADIUS: f64 = 110.0;
    /// Gap between consecutive orbits.
    pub const SPACING: Span = Span::new(70.0, 92.0);
    /// Angular offset of the first node, degrees.
    pub const OFFSET: Span = Span::new(0.0, 360.0);
    /// Seconds per revolution.
    pub const PERIOD: Span = Span::new(18.0, 40.0);
    pub const NODE_RADIUS: Span = Span::new(3.0, 7.0);
    /// Outer radius bound implied by the above: 110 + 3 × 92.
    pub const RADIUS: Span = Span::new(INNER_RADIUS, 386.0);
}

use ranges::{INNER_RADIUS, NODES, NODE_RADIUS, OFFSET, ORBITS, PERIOD, RADIUS, SPACING};

const BASE_OPACITY: f64 = 0.22;
const BASE_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitNode {
    /// Angle in degrees at phase zero.
    pub angle: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orbit {
    pub radius: f64,
    pub offset: f64,
    pub period: f64,
    pub clockwise: bool,
    pub nodes: Vec<OrbitNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitingNodes {
    pub center: (f64, f64),
    pub orbits: Vec<Orbit>,
    pub appearance: Appearance,
}

impl Variant for OrbitingNodes {
    const ID: VariantId = VariantId::OrbitingNodes;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let n = count.count(&ORBITS);
        let per_orbit: Vec<usize> = (0..n).map(|_| count.count(&NODES)).collect();

        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let mut radius = INNER_RADIUS;

        let orbits = per_orbit
            .iter()
            .enumerate()
            .map(|(i, &nodes)| {
                if i > 0 {
                    radius += layout.float_in(SPACING);
                }
                let offset = layout.float_in(OFFSET);
                let step = 360.0 / nodes as f64;
                let nodes = (0..nodes)
                    .map(|k| OrbitNode {
                        angle: (k as f64).mul_add(step, offset) % 360.0,
                        radius: layout.float_in(NODE_RADIUS),
                    })
                    .collect();
                Orbit {
                    radius,
                    offset,
                    period: timing.float_in(PERIOD),
                    clockwise: timing.chance(0.5),
                    nodes,
                }
            })
            .collect();

        Self {
            center: AMBIENT_CANVAS.center(),
            orbits,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let mut tracks = Vec::new();
        let mut node = 0;
        for (i, orbit) in self.orbits.iter().enumerate() {
            let sweep = if orbit.clockwise { 360.0 } else { -360.0 };
            tracks.push(
                Track::new("orbit", i, Property::Rotation, vec![0.0, sweep])
                    .timing(orbit.period, 0.0),
            );
            let count = orbit.nodes.len() as f64;
            for (k, _) in orbit.nodes.iter().enumerate() {
                tracks.push(
                    Track::new("node", node, Property::Scale, vec![0.8, 1.2])
                        .timing(orbit.period / count, orbit.period * k as f64 / count / count)
                        .repeat(Repeat::Mirror),
                );
                node += 1;
            }
        }
        tracks
    }

    fn within_bounds(&self) -> bool {
        ORBITS.contains(&self.orbits.len())
            && self.appearance.is_valid()
            && self.orbits.windows(2).all(|w| {
                let gap = w[1].radius - w[0].radius;
                gap >= SPACING.min - 1e-9 && gap <= SPACING.max + 1e-9
            })
            && self.orbits.iter().all(|o| {
                RADIUS.contains(o.radius)
                    && o.radius + NODE_RADIUS.max <= self.center.1
                    && OFFSET.contains(o.offset)
                    && PERIOD.contains(o.period)
                    && NODES.contains(&o.nodes.len())
                    && o.nodes.iter().all(|n| {
                        (0.0..360.0).contains(&n.angle) && NODE_RADIUS.contains(n.radius)
                    })
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

    fn sample(seed: &str) -> OrbitingNodes {
        generate(seed, IntensityLevel::Medium)
    }

    #[test]
    fn orbits_are_concentric_and_increasing() {
        for i in 0..200 {
            let o = sample(&format!("seed-{i}"));
            assert!((o.orbits[0].radius - INNER_RADIUS).abs() < f64::EPSILON);
            assert!(o.orbits.windows(2).all(|w| w[1].radius > w[0].radius));
            assert!(o.within_bounds(), "seed-{i}");
        }
    }

    #[test]
    fn nodes_evenly_spaced() {
        let o = sample("spacing");
        for orbit in &o.orbits {
            let step = 360.0 / orbit.nodes.len() as f64;
            for pair in orbit.nodes.windows(2) {
                let gap = (pair[1].angle - pair[0].angle).rem_euclid(360.0);
                assert!((gap - step).abs() < 1e-6, "gap {gap} vs {step}");
            }
        }
    }

    #[test]
    fn one_rotation_track_per_orbit() {
        let o = sample("tracks");
        let rotations = o.tracks().iter().filter(|t| t.property == Property::Rotation).count();
        assert_eq!(rotations, o.orbits.len());
    }

    #[test]
    fn centered_on_canvas() {
        assert_eq!(sample("c").center, (600.0, 400.0));
    }
}
