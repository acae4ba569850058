//! Variant names and renderer dispatch.
//!
//! Names are the camelCase identifiers page code passes around
//! (`"contentFlow"`, `"orbitingNodes"`). Lookup is ASCII-case-insensitive.
//! An unknown name dispatches to nothing: the caller renders no visual, and
//! no error is raised.

use std::fmt;
use std::str::FromStr;

use motif_seed::IntensityLevel;
use serde::Serialize;

use crate::ambient::{
    Constellation, ContentFlow, DataRain, GradientBlobs, GridPulse, NeuralMesh, OrbitingNodes,
    SignalWaves,
};
use crate::canvas::Family;
use crate::descriptor::GeometryDescriptor;
use crate::error::UnknownVariant;
use crate::tile::{
    BarChart, DocumentStack, FunnelStages, GearCluster, NetworkHub, PieSegments, ProgressRings,
    PulseBeacon, SearchScan, TrendLine,
};
use crate::variant::generate_descriptor;

/// A resolved generator: `(seed, intensity) -> descriptor`.
pub type Generator = fn(&str, IntensityLevel) -> GeometryDescriptor;

// ---------------------------------------------------------------------------
// VariantId
// ---------------------------------------------------------------------------

/// Every known visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum VariantId {
    // ── Ambient backgrounds ───────────────────────────────────
    ContentFlow,
    OrbitingNodes,
    NeuralMesh,
    SignalWaves,
    GridPulse,
    Constellation,
    DataRain,
    GradientBlobs,

    // ── Tile decorations ──────────────────────────────────────
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

impl VariantId {
    /// Canonical camelCase name, also the variant component of composite seeds.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ContentFlow => "contentFlow",
            Self::OrbitingNodes => "orbitingNodes",
            Self::NeuralMesh => "neuralMesh",
            Self::SignalWaves => "signalWaves",
            Self::GridPulse => "gridPulse",
            Self::Constellation => "constellation",
            Self::DataRain => "dataRain",
            Self::GradientBlobs => "gradientBlobs",
            Self::FunnelStages => "funnelStages",
            Self::BarChart => "barChart",
            Self::TrendLine => "trendLine",
            Self::PieSegments => "pieSegments",
            Self::NetworkHub => "networkHub",
            Self::ProgressRings => "progressRings",
            Self::DocumentStack => "documentStack",
            Self::SearchScan => "searchScan",
            Self::GearCluster => "gearCluster",
            Self::PulseBeacon => "pulseBeacon",
        }
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::ContentFlow
            | Self::OrbitingNodes
            | Self::NeuralMesh
            | Self::SignalWaves
            | Self::GridPulse
            | Self::Constellation
            | Self::DataRain
            | Self::GradientBlobs => Family::Ambient,
            Self::FunnelStages
            | Self::BarChart
            | Self::TrendLine
            | Self::PieSegments
            | Self::NetworkHub
            | Self::ProgressRings
            | Self::DocumentStack
            | Self::SearchScan
            | Self::GearCluster
            | Self::PulseBeacon => Family::Tile,
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::ContentFlow => "curved streams carrying content packets across the page",
            Self::OrbitingNodes => "concentric orbits of nodes circling a hub",
            Self::NeuralMesh => "scattered nodes linked to their nearest neighbors",
            Self::SignalWaves => "layered sine waves drifting horizontally",
            Self::GridPulse => "a faint grid with cells pulsing in sequence",
            Self::Constellation => "twinkling stars joined by a few faint links",
            Self::DataRain => "columns of glyphs falling at varied speeds",
            Self::GradientBlobs => "large soft blobs drifting slowly",
            Self::FunnelStages => "a conversion funnel narrowing stage by stage",
            Self::BarChart => "bars growing to their values",
            Self::TrendLine => "a rising line chart drawing itself",
            Self::PieSegments => "a donut chart sweeping in segment by segment",
            Self::NetworkHub => "a hub with pulsing spokes",
            Self::ProgressRings => "concentric rings filling to their targets",
            Self::DocumentStack => "a gently floating stack of documents",
            Self::SearchScan => "a lens scanning lines of results",
            Self::GearCluster => "a loose cluster of gears turning in alternate directions",
            Self::PulseBeacon => "ripples expanding from a beacon",
        }
    }

    /// Look up a variant by name (ASCII-case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// All variants, ambient family first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ContentFlow,
            Self::OrbitingNodes,
            Self::NeuralMesh,
            Self::SignalWaves,
            Self::GridPulse,
            Self::Constellation,
            Self::DataRain,
            Self::GradientBlobs,
            Self::FunnelStages,
            Self::BarChart,
            Self::TrendLine,
            Self::PieSegments,
            Self::NetworkHub,
            Self::ProgressRings,
            Self::DocumentStack,
            Self::SearchScan,
            Self::GearCluster,
            Self::PulseBeacon,
        ]
    }

    /// The generator for this variant.
    #[must_use]
    pub fn generator(self) -> Generator {
        match self {
            Self::ContentFlow => generate_descriptor::<ContentFlow>,
            Self::OrbitingNodes => generate_descriptor::<OrbitingNodes>,
            Self::NeuralMesh => generate_descriptor::<NeuralMesh>,
            Self::SignalWaves => generate_descriptor::<SignalWaves>,
            Self::GridPulse => generate_descriptor::<GridPulse>,
            Self::Constellation => generate_descriptor::<Constellation>,
            Self::DataRain => generate_descriptor::<DataRain>,
            Self::GradientBlobs => generate_descriptor::<GradientBlobs>,
            Self::FunnelStages => generate_descriptor::<FunnelStages>,
            Self::BarChart => generate_descriptor::<BarChart>,
            Self::TrendLine => generate_descriptor::<TrendLine>,
            Self::PieSegments => generate_descriptor::<PieSegments>,
            Self::NetworkHub => generate_descriptor::<NetworkHub>,
            Self::ProgressRings => generate_descriptor::<ProgressRings>,
            Self::DocumentStack => generate_descriptor::<DocumentStack>,
            Self::SearchScan => generate_descriptor::<SearchScan>,
            Self::GearCluster => generate_descriptor::<GearCluster>,
            Self::PulseBeacon => generate_descriptor::<PulseBeacon>,
        }
    }

    /// Generate this variant's descriptor.
    #[must_use]
    pub fn generate(self, seed: &str, level: IntensityLevel) -> GeometryDescriptor {
        (self.generator())(seed, level)
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<VariantId> for &'static str {
    fn from(id: VariantId) -> Self {
        id.name()
    }
}

impl FromStr for VariantId {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Resolve a variant name to its generator.
///
/// Returns `None` for unknown names. Callers render nothing in that case;
/// there is no fallback style.
#[must_use]
pub fn dispatch(name: &str) -> Option<Generator> {
    let id = VariantId::from_name(name);
    if id.is_none() {
        tracing::debug!(variant = name, "unknown variant, rendering nothing");
    }
    id.map(VariantId::generator)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_variants_in_two_families() {
        let all = VariantId::all();
        assert_eq!(all.len(), 18);
        let ambient = all.iter().filter(|v| v.family() == Family::Ambient).count();
        let tile = all.iter().filter(|v| v.family() == Family::Tile).count();
        assert_eq!((ambient, tile), (8, 10));
    }

    #[test]
    fn all_lists_ambient_before_tile() {
        let families: Vec<Family> = VariantId::all().iter().map(|v| v.family()).collect();
        let split = families.iter().position(|&f| f == Family::Tile);
        assert_eq!(split, Some(8));
        assert!(families[8..].iter().all(|&f| f == Family::Tile));
    }

    #[test]
    fn summaries_are_distinct() {
        let mut summaries: Vec<&str> = VariantId::all().iter().map(|v| v.summary()).collect();
        summaries.sort_unstable();
        summaries.dedup();
        assert_eq!(summaries.len(), 18);
        assert!(VariantId::GearCluster.summary().contains("alternate directions"));
    }

    #[test]
    fn names_round_trip() {
        for &id in VariantId::all() {
            assert_eq!(VariantId::from_name(id.name()), Some(id));
            assert_eq!(id.to_string().parse::<VariantId>(), Ok(id));
        }
    }

    #[test]
    fn names_are_unique_and_separator_free() {
        let mut names: Vec<&str> = VariantId::all().iter().map(|v| v.name()).collect();
        assert!(names.iter().all(|n| !n.contains('|')));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(VariantId::from_name("CONTENTFLOW"), Some(VariantId::ContentFlow));
        assert_eq!(VariantId::from_name("orbitingnodes"), Some(VariantId::OrbitingNodes));
    }

    #[test]
    fn unknown_name_dispatches_nothing() {
        assert!(dispatch("doesNotExist").is_none());
        assert!(dispatch("").is_none());
    }

    #[test]
    fn unknown_name_parse_error() {
        let err = "doesNotExist".parse::<VariantId>().unwrap_err();
        assert_eq!(err, UnknownVariant("doesNotExist".into()));
    }

    #[test]
    fn dispatch_matches_variant() {
        for &id in VariantId::all() {
            let generator = dispatch(id.name()).unwrap();
            let d = generator("home-hero", IntensityLevel::Medium);
            assert_eq!(d.variant(), id);
        }
    }

    #[test]
    fn generate_matches_dispatch() {
        let via_id = VariantId::BarChart.generate("pricing", IntensityLevel::Bold);
        let via_dispatch = dispatch("barChart").unwrap()("pricing", IntensityLevel::Bold);
        assert_eq!(via_id, via_dispatch);
    }
}
