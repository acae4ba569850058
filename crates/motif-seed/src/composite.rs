//! Composite seeds: namespacing one caller seed into independent streams.
//!
//! A visual draws several unrelated aspects from the same caller seed (how
//! many nodes, where the nodes go, how fast they pulse). Feeding all of them
//! from one stream would make "more nodes" also mean "different timing for
//! node 0". Each aspect instead gets its own stream seeded from
//!
//! ```text
//! {variant}|{seed}|{purpose}
//! ```
//!
//! Variant names and purpose tags are fixed identifiers without `|`, so the
//! first and last separators always delimit the caller seed, even when the
//! caller seed itself contains `|`.

use std::fmt;

use crate::prng::SeededRng;

/// Separator between composite seed components.
pub const SEPARATOR: char = '|';

// ---------------------------------------------------------------------------
// CompositeSeed
// ---------------------------------------------------------------------------

/// A fully namespaced seed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeSeed(String);

impl CompositeSeed {
    /// Build `variant|seed|purpose`, or `variant|seed` when there is no purpose.
    #[must_use]
    pub fn new(variant: &str, seed: &str, purpose: Option<&str>) -> Self {
        debug_assert!(!variant.contains(SEPARATOR), "variant id contains separator");
        let mut s = String::with_capacity(variant.len() + seed.len() + 16);
        s.push_str(variant);
        s.push(SEPARATOR);
        s.push_str(seed);
        if let Some(purpose) = purpose {
            debug_assert!(!purpose.contains(SEPARATOR), "purpose tag contains separator");
            s.push(SEPARATOR);
            s.push_str(purpose);
        }
        Self(s)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A fresh stream for this composite seed.
    #[must_use]
    pub fn rng(&self) -> SeededRng {
        SeededRng::new(&self.0)
    }
}

impl fmt::Display for CompositeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SeedScope
// ---------------------------------------------------------------------------

/// The (variant, seed) pair a generator runs under.
///
/// Generators never see a raw seed; they ask the scope for one stream per
/// purpose. Two calls with the same purpose return identical fresh streams.
#[derive(Debug, Clone, Copy)]
pub struct SeedScope<'a> {
    variant: &'a str,
    seed: &'a str,
}

impl<'a> SeedScope<'a> {
    #[must_use]
    pub const fn new(variant: &'a str, seed: &'a str) -> Self {
        Self { variant, seed }
    }

    #[must_use]
    pub const fn variant(&self) -> &'a str {
        self.variant
    }

    #[must_use]
    pub const fn seed(&self) -> &'a str {
        self.seed
    }

    /// The composite seed for one purpose.
    #[must_use]
    pub fn composite(&self, purpose: &str) -> CompositeSeed {
        CompositeSeed::new(self.variant, self.seed, Some(purpose))
    }

    /// A fresh stream for one purpose.
    #[must_use]
    pub fn stream(&self, purpose: &str) -> SeededRng {
        self.composite(purpose).rng()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
