//! Tile decorations — small 200×200 visuals for cards and feature grids.
//!
//! Tiles run short, readable cycles: the motion should suggest the card's
//! topic (a funnel filling, a ring completing) and then settle.

mod bar_chart;
mod document_stack;
mod funnel_stages;
mod gear_cluster;
mod network_hub;
mod pie_segments;
mod progress_rings;
mod pulse_beacon;
mod search_scan;
mod trend_line;

pub use bar_chart::{Bar, BarChart};
pub use document_stack::{DocumentStack, Sheet};
pub use funnel_stages::{FunnelStage, FunnelStages};
pub use gear_cluster::{Gear, GearCluster};
pub use network_hub::{NetworkHub, Spoke};
pub use pie_segments::{PieSegments, Segment};
pub use progress_rings::{ProgressRings, Ring};
pub use pulse_beacon::{PulseBeacon, Ripple};
pub use search_scan::{SearchScan, TextLine};
pub use trend_line::{TrendLine, TrendPoint};

/// Public range constants, one module per style.
pub mod ranges {
    pub use super::bar_chart::ranges as bar_chart;
    pub use super::document_stack::ranges as document_stack;
    pub use super::funnel_stages::ranges as funnel_stages;
    pub use super::gear_cluster::ranges as gear_cluster;
    pub use super::network_hub::ranges as network_hub;
    pub use super::pie_segments::ranges as pie_segments;
    pub use super::progress_rings::ranges as progress_rings;
    pub use super::pulse_beacon::ranges as pulse_beacon;
    pub use super::search_scan::ranges as search_scan;
    pub use super::trend_line::ranges as trend_line;
}
