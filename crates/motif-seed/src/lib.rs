//! # motif-seed — reproducible randomness for procedural visuals
//!
//! Everything a variant generator needs to turn a caller-supplied string into
//! numbers, and nothing more:
//!
//! - **[`hash`]** — FNV-1a string hash + `fmix32` finalizer
//! - **[`prng`]** — [`SeededRng`], a string-seeded xorshift32 stream, and the
//!   [`Span`] range type generators document their bounds with
//! - **[`composite`]** — `variant|seed|purpose` namespacing so independent
//!   aspects of one visual never share a stream
//! - **[`intensity`]** — the `subtle | medium | bold` opacity/stroke table
//!
//! No clock, no ambient entropy, no I/O. The same seed string produces the
//! same draws on every platform, in every process.

// Counts are drawn as i64 and narrowed to usize; ranges are tiny.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod composite;
pub mod error;
pub mod hash;
pub mod intensity;
pub mod prng;

pub use composite::{CompositeSeed, SeedScope};
pub use error::ParseIntensityError;
pub use intensity::{IntensityLevel, IntensityScale, scale_opacity, scale_stroke};
pub use prng::{SeededRng, Span};
