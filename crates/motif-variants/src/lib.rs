//! # motif-variants — procedural visual styles
//!
//! Eighteen named styles in two families, each a pure function
//! `(seed, intensity) -> GeometryDescriptor`.
//!
//! # Architecture
//!
//! ```text
//! "contentFlow" ──► registry::dispatch ──► Generator
//!                                             │
//!         seed ──► SeedScope("contentFlow", seed)
//!                     │  count / layout / timing / links / style streams
//!                     ▼
//!            <style>::generate  (ambient/*.rs, tile/*.rs)
//!                     │
//!                     ▼
//!            GeometryDescriptor  ──► tracks() ──► animated or static pose
//! ```
//!
//! Intensity only reaches [`Appearance`]; it never changes geometry. Every
//! drawn field is bounded by a public range constant in the style's
//! `ranges` module, and [`GeometryDescriptor::within_bounds`] checks them.

// Loop indices and small counts become f64 coordinates all over.
#![allow(clippy::cast_precision_loss)]
// Counts are drawn as i64 and narrowed to usize; ranges are tiny.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
// `within_bounds` reads best as one conjunction per field.
#![allow(clippy::nonminimal_bool)]

pub mod ambient;
pub mod canvas;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod tile;
pub mod track;
pub mod variant;

pub use canvas::{AMBIENT_CANVAS, Appearance, Canvas, Family, TILE_CANVAS};
pub use descriptor::GeometryDescriptor;
pub use error::UnknownVariant;
pub use registry::{Generator, VariantId, dispatch};
pub use track::{Easing, Property, Repeat, Track};
pub use variant::{Variant, generate, generate_descriptor};
