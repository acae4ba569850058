//! Ambient backgrounds — full-viewport visuals on the 1200×800 canvas.
//!
//! These sit behind hero sections and page headers, so they favor low
//! opacity, long cycles, and slow drift over anything attention-grabbing.

mod constellation;
mod content_flow;
mod data_rain;
mod gradient_blobs;
mod grid_pulse;
mod neural_mesh;
mod orbiting_nodes;
mod signal_waves;

pub use constellation::{Constellation, Star, StarLink};
pub use content_flow::{ContentFlow, Stream};
pub use data_rain::{DataRain, RainColumn};
pub use gradient_blobs::{Blob, GradientBlobs};
pub use grid_pulse::{GridPulse, Pulse};
pub use neural_mesh::{MeshLink, MeshNode, NeuralMesh};
pub use orbiting_nodes::{Orbit, OrbitNode, OrbitingNodes};
pub use signal_waves::{SignalWaves, Wave};

/// Public range constants, one module per style.
pub mod ranges {
    pub use super::constellation::ranges as constellation;
    pub use super::content_flow::ranges as content_flow;
    pub use super::data_rain::ranges as data_rain;
    pub use super::gradient_blobs::ranges as gradient_blobs;
    pub use super::grid_pulse::ranges as grid_pulse;
    pub use super::neural_mesh::ranges as neural_mesh;
    pub use super::orbiting_nodes::ranges as orbiting_nodes;
    pub use super::signal_waves::ranges as signal_waves;
}
