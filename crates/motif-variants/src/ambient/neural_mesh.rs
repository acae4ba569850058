//! `neuralMesh` — scattered nodes, each linked to its nearest neighbors,
//! with pulses travelling along the links.
//!
//! Link selection is pure arithmetic on the drawn positions (squared
//! distance, ties broken by index), so it adds no draws and no platform
//! dependence.

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

    pub const NODES: RangeInclusive<usize> = 12..=20;
    /// Nearest-neighbor links requested per node.
    pub const LINKS_PER_NODE: RangeInclusive<usize> = 1..=2;
    pub const X: Span = Span::new(60.0, 1140.0);
    pub const Y: Span = Span::new(60.0, 740.0);
    pub const RADIUS: Span = Span::new(2.0, 5.0);
    pub const PULSE: Span = Span::new(2.5, 5.0);
    pub const DELAY: Span = Span::new(0.0, 4.0);
    pub const FLOW: Span = Span::new(3.0, 7.0);
}

use ranges::{DELAY, FLOW, LINKS_PER_NODE, NODES, PULSE, RADIUS, X, Y};

const BASE_OPACITY: f64 = 0.2;
const BASE_STROKE: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshNode {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub pulse: f64,
    pub delay: f64,
}

/// An undirected link, `from < to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshLink {
    pub from: usize,
    pub to: usize,
    /// Seconds for a signal to travel the link.
    pub flow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeuralMesh {
    pub nodes: Vec<MeshNode>,
    pub links: Vec<MeshLink>,
    pub appearance: Appearance,
}

/// Indices of the `k` nodes nearest to `nodes[i]`, nearest first.
fn nearest(nodes: &[MeshNode], i: usize, k: usize) -> Vec<usize> {
    let (x, y) = (nodes[i].x, nodes[i].y);
    let mut others: Vec<(f64, usize)> = nodes
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, n)| ((n.x - x).mul_add(n.x - x, (n.y - y) * (n.y - y)), j))
        .collect();
    others.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    others.into_iter().take(k).map(|(_, j)| j).collect()
}

impl Variant for NeuralMesh {
    const ID: VariantId = VariantId::NeuralMesh;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&NODES);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let nodes: Vec<MeshNode> = (0..n)
            .map(|_| MeshNode {
                x: layout.float_in(X),
                y: layout.float_in(Y),
                radius: layout.float_in(RADIUS),
                pulse: timing.float_in(PULSE),
                delay: timing.float_in(DELAY),
            })
            .collect();

        let mut links_rng = scope.stream("links");
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for i in 0..n {
            let k = links_rng.count(&LINKS_PER_NODE);
            for j in nearest(&nodes, i, k) {
                let pair = (i.min(j), i.max(j));
                if !pairs.contains(&pair) {
                    pairs.push(pair);
                }
            }
        }

        let links = pairs
            .into_iter()
            .map(|(from, to)| MeshLink { from, to, flow: timing.float_in(FLOW) })
            .collect();

        Self { nodes, links, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let nodes = self.nodes.iter().enumerate().map(|(i, n)| {
            Track::new("node", i, Property::Opacity, vec![0.35, 1.0, 0.35])
                .timing(n.pulse, n.delay)
                .easing(Easing::EaseInOut)
        });
        let links = self.links.iter().enumerate().map(|(i, l)| {
            Track::new("link", i, Property::Progress, vec![0.0, 1.0])
                .timing(l.flow, self.nodes[l.from].delay)
                .repeat(Repeat::Loop)
        });
        nodes.chain(links).collect()
    }

    fn within_bounds(&self) -> bool {
        let n = self.nodes.len();
        NODES.contains(&n)
            && self.appearance.is_valid()
            && self.links.len() >= n / 2
            && self.links.len() <= n * *LINKS_PER_NODE.end()
            && self.nodes.iter().all(|m| {
                X.contains(m.x)
                    && Y.contains(m.y)
                    && RADIUS.contains(m.radius)
                    && PULSE.contains(m.pulse)
                    && DELAY.contains(m.delay)
            })
            && self
                .links
                .iter()
                .all(|l| l.from < l.to && l.to < n && FLOW.contains(l.flow))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::generate;

    fn sample(seed: &str) -> NeuralMesh {
        generate(seed, IntensityLevel::Subtle)
    }

    #[test]
    fn every_node_has_a_link() {
        for i in 0..100 {
            let mesh = sample(&format!("mesh-{i}"));
            for node in 0..mesh.nodes.len() {
                assert!(
                    mesh.links.iter().any(|l| l.from == node || l.to == node),
                    "mesh-{i}: node {node} isolated"
                );
            }
        }
    }

    #[test]
    fn links_are_unique() {
        let mesh = sample("unique");
        let mut pairs: Vec<(usize, usize)> = mesh.links.iter().map(|l| (l.from, l.to)).collect();
        let before = pairs.len();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
    }

    #[test]
    fn nearest_breaks_ties_by_index() {
        let at = |x, y| MeshNode { x, y, radius: 3.0, pulse: 3.0, delay: 0.0 };
        let nodes = vec![at(0.0, 0.0), at(10.0, 0.0), at(-10.0, 0.0), at(0.0, 50.0)];
        assert_eq!(nearest(&nodes, 0, 2), vec![1, 2]);
        assert_eq!(nearest(&nodes, 0, 3), vec![1, 2, 3]);
    }

    #[test]
    fn bounded_over_many_seeds() {
        for i in 0..200 {
            assert!(sample(&format!("b{i}")).within_bounds(), "b{i}");
        }
    }
}
