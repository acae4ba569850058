//! `GeometryDescriptor` — the tagged union over every style's output.
//!
//! A descriptor is plain, immutable data. Equal inputs produce equal
//! descriptors; nothing inside one is ever shared or mutated across visuals.

use serde::Serialize;

use crate::ambient::{
    Constellation, ContentFlow, DataRain, GradientBlobs, GridPulse, NeuralMesh, OrbitingNodes,
    SignalWaves,
};
use crate::canvas::{Appearance, Canvas};
use crate::registry::VariantId;
use crate::tile::{
    BarChart, DocumentStack, FunnelStages, GearCluster, NetworkHub, PieSegments, ProgressRings,
    PulseBeacon, SearchScan, TrendLine,
};
use crate::track::Track;
use crate::variant::Variant;

/// Declares the descriptor enum, its `From` conversions, and delegation to
/// the per-style [`Variant`] impls in one place.
macro_rules! descriptors {
    ($($name:ident),* $(,)?) => {
        /// The geometry of one visual instance, tagged by style.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "variant", rename_all = "camelCase")]
        pub enum GeometryDescriptor {
            $($name($name),)*
        }

        $(
            impl From<$name> for GeometryDescriptor {
                fn from(d: $name) -> Self {
                    Self::$name(d)
                }
            }
        )*

        impl GeometryDescriptor {
            /// Which style produced this descriptor.
            #[must_use]
            pub const fn variant(&self) -> VariantId {
                match self {
                    $(Self::$name(_) => <$name as Variant>::ID,)*
                }
            }

            #[must_use]
            pub fn appearance(&self) -> Appearance {
                match self {
                    $(Self::$name(d) => d.appearance(),)*
                }
            }

            /// Keyframe targets for the animated presentation.
            #[must_use]
            pub fn tracks(&self) -> Vec<Track> {
                match self {
                    $(Self::$name(d) => d.tracks(),)*
                }
            }

            /// True if every field lies within the style's documented ranges.
            #[must_use]
            pub fn within_bounds(&self) -> bool {
                match self {
                    $(Self::$name(d) => d.within_bounds(),)*
                }
            }
        }
    };
}

descriptors! {
    ContentFlow,
    OrbitingNodes,
    NeuralMesh,
    SignalWaves,
    GridPulse,
    Constellation,
    DataRain,
    GradientBlobs,
    FunnelStages,
    BarChart,
    TrendLine,
    PieSegments,
    NetworkHub,
    ProgressRings,
    DocumentStack,
    SearchScan,
    GearCluster,
    PulseBeacon,
}

impl GeometryDescriptor {
    /// The canvas this descriptor's coordinates live in.
    #[must_use]
    pub const fn canvas(&self) -> Canvas {
        self.variant().family().canvas()
    }

    /// Number of primary elements (streams, nodes, bars, ...). Used for
    /// summaries and as a cheap sanity check; never zero for a generated
    /// descriptor.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::ContentFlow(d) => d.streams.len(),
            Self::OrbitingNodes(d) => d.orbits.iter().map(|o| o.nodes.len()).sum(),
            Self::NeuralMesh(d) => d.nodes.len(),
            Self::SignalWaves(d) => d.waves.len(),
            Self::GridPulse(d) => d.pulses.len(),
            Self::Constellation(d) => d.stars.len(),
            Self::DataRain(d) => d.columns.len(),
            Self::GradientBlobs(d) => d.blobs.len(),
            Self::FunnelStages(d) => d.stages.len(),
            Self::BarChart(d) => d.bars.len(),
            Self::TrendLine(d) => d.points.len(),
            Self::PieSegments(d) => d.segments.len(),
            Self::NetworkHub(d) => d.spokes.len(),
            Self::ProgressRings(d) => d.rings.len(),
            Self::DocumentStack(d) => d.sheets.len(),
            Self::SearchScan(d) => d.lines.len(),
            Self::GearCluster(d) => d.gears.len(),
            Self::PulseBeacon(d) => d.ripples.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
