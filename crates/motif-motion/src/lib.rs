//! # motif-motion — presenting procedural visuals
//!
//! Takes descriptors from `motif-variants` and decides how they move:
//!
//! - **[`mode`]** — [`MotionMode`]: animated, or static for reduced motion
//! - **[`presentation`]** — [`present`] turns a descriptor into a
//!   [`Presentation`] for one mode
//! - **[`cache`]** — [`DescriptorCache`], an owned memo keyed by
//!   `(variant, seed, intensity)`
//! - **[`gallery`]** — [`Gallery`], the mounted visuals of one page
//! - **[`config`]** — [`MotionConfig`] from TOML plus `MOTIF_*` overrides

// Cache counters are u64; hit rates are f64.
#![allow(clippy::cast_precision_loss)]

pub mod cache;
pub mod config;
pub mod error;
pub mod gallery;
pub mod mode;
pub mod presentation;

pub use cache::{CacheStats, DescriptorCache, DescriptorKey};
pub use config::{MotionConfig, StaticPose};
pub use error::ConfigError;
pub use gallery::{Gallery, VisualId};
pub use mode::MotionMode;
use motif_seed::IntensityLevel;
use motif_variants::dispatch;
pub use presentation::{AnimatedScene, Pose, Presentation, StaticScene, present};

/// One-shot render with default configuration and no caching.
///
/// Returns `None` for an unknown variant name.
#[must_use]
pub fn render_variant(
    name: &str,
    seed: &str,
    intensity: IntensityLevel,
    reduced_motion: bool,
) -> Option<Presentation> {
    let generator = dispatch(name)?;
    let mode = MotionMode::from_reduced_motion(reduced_motion);
    Some(present(generator(seed, intensity), mode, &MotionConfig::default()))
}
