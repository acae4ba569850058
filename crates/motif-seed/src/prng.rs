//! String-seeded pseudo-random stream.
//!
//! A minimal xorshift32 generator whose state comes from hashing a seed
//! string. Quality is "looks random on a marketing page", not cryptographic;
//! the property that matters is that identical seeds give identical draws.

use std::ops::RangeInclusive;

use crate::hash::seed_hash;

/// State used when a seed hashes to zero (xorshift's only fixed point).
const ZERO_STATE_FALLBACK: u32 = 0x9e37_79b9;

/// 2^32, the exclusive upper bound of `next_u32` as a float.
const U32_RANGE: f64 = 4_294_967_296.0;

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// An inclusive `f64` range used to document and draw bounded fields.
///
/// Generators publish their contract as `Span` constants; the same constant
/// drives the draw and the bounds check, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A span symmetric around zero: `[-half, half]`.
    #[must_use]
    pub const fn symmetric(half: f64) -> Self {
        Self { min: -half, max: half }
    }

    /// True if `value` lies within `[min, max]`.
    #[inline]
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }
}

// ---------------------------------------------------------------------------
// SeededRng
// ---------------------------------------------------------------------------

/// Deterministic PRNG seeded from an arbitrary string.
///
/// ```
/// use motif_seed::SeededRng;
///
/// let mut a = SeededRng::new("home-hero");
/// let mut b = SeededRng::new("home-hero");
/// assert_eq!(a.rand_int(3, 5), b.rand_int(3, 5));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a stream from a seed string. Any string is valid, including `""`.
    #[must_use]
    pub const fn new(seed: &str) -> Self {
        Self::from_hash(seed_hash(seed))
    }

    /// Create a stream from an already-mixed hash.
    #[must_use]
    pub const fn from_hash(hash: u32) -> Self {
        let state = if hash == 0 { ZERO_STATE_FALLBACK } else { hash };
        Self { state }
    }

    /// Next raw 32-bit value.
    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Integer in `[min, max]`, both ends inclusive. Swapped bounds are
    /// treated as `[max, min]`.
    pub fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = i128::from(hi) - i128::from(lo) + 1;
        let offset = (self.next_f64() * span as f64) as i128;
        (i128::from(lo) + offset).min(i128::from(hi)) as i64
    }

    /// Float in `[min, max]`. Swapped bounds are normalized.
    pub fn rand_float(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        (hi - lo).mul_add(self.next_f64(), lo).min(hi)
    }

    /// Float within a documented span.
    pub fn float_in(&mut self, span: Span) -> f64 {
        self.rand_float(span.min, span.max)
    }

    /// Count within an inclusive range.
    pub fn count(&mut self, range: &RangeInclusive<usize>) -> usize {
        self.rand_int(*range.start() as i64, *range.end() as i64) as usize
    }

    /// True with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p.clamp(0.0, 1.0)
    }

    /// `k` distinct indices from `0..n`, in draw order (partial Fisher–Yates).
    ///
    /// `k` larger than `n` is truncated to `n`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..n).collect();
        let k = k.min(n);
        for i in 0..k {
            let j = self.rand_int(i as i64, (n - 1) as i64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Determinism ─────────────────────────────────────────────────

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new("about/team");
        let mut b = SeededRng::new("about/team");
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new("page-1");
        let mut b = SeededRng::new("page-2");
        let same = (0..32).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 2, "Streams nearly identical: {same}/32");
    }

    #[test]
    fn empty_seed_is_valid() {
        let mut rng = SeededRng::new("");
        let first = rng.next_u32();
        assert_ne!(first, 0);
        let mut again = SeededRng::new("");
        assert_eq!(again.next_u32(), first);
    }

    #[test]
    fn zero_hash_uses_fallback() {
        let mut rng = SeededRng::from_hash(0);
        assert_ne!(rng.next_u32(), 0);
    }

    // ── next_f64 ────────────────────────────────────────────────────

    #[test]
    fn unit_floats_in_half_open_range() {
        let mut rng = SeededRng::new("unit");
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn unit_floats_cover_both_halves() {
        let mut rng = SeededRng::new("coverage");
        let low = (0..1000).filter(|_| rng.next_f64() < 0.5).count();
        assert!(low > 400 && low < 600, "Skewed distribution: {low}/1000");
    }

    // ── rand_int ────────────────────────────────────────────────────

    #[test]
    fn rand_int_inclusive_both_ends() {
        let mut rng = SeededRng::new("ends");
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = rng.rand_int(3, 5);
            assert!((3..=5).contains(&v), "{v}");
            seen[(v - 3) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn rand_int_single_value() {
        let mut rng = SeededRng::new("single");
        for _ in 0..50 {
            assert_eq!(rng.rand_int(7, 7), 7);
        }
    }

    #[test]
    fn rand_int_swapped_bounds() {
        let mut rng = SeededRng::new("swapped");
        for _ in 0..200 {
            let v = rng.rand_int(10, 2);
            assert!((2..=10).contains(&v), "{v}");
        }
    }

    #[test]
    fn rand_int_extreme_bounds() {
        let mut rng = SeededRng::new("extreme");
        for _ in 0..200 {
            let _ = rng.rand_int(i64::MIN, i64::MAX);
        }
    }

    // ── rand_float / spans ──────────────────────────────────────────

    #[test]
    fn rand_float_within_bounds() {
        let mut rng = SeededRng::new("floats");
        for _ in 0..5000 {
            let v = rng.rand_float(-2.5, 7.25);
            assert!((-2.5..=7.25).contains(&v), "{v}");
        }
    }

    #[test]
    fn rand_float_degenerate_span() {
        let mut rng = SeededRng::new("flat");
        assert!((rng.rand_float(4.0, 4.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn float_in_respects_span() {
        let span = Span::new(6.0, 12.0);
        let mut rng = SeededRng::new("span");
        for _ in 0..1000 {
            assert!(span.contains(rng.float_in(span)));
        }
    }

    #[test]
    fn symmetric_span() {
        let s = Span::symmetric(12.0);
        assert!(s.contains(-12.0) && s.contains(12.0) && !s.contains(12.5));
        assert!((s.width() - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn count_within_range() {
        let mut rng = SeededRng::new("count");
        for _ in 0..500 {
            let n = rng.count(&(4..=8));
            assert!((4..=8).contains(&n), "{n}");
        }
    }

    // ── chance / sample_indices ─────────────────────────────────────

    #[test]
    fn chance_extremes() {
        let mut rng = SeededRng::new("chance");
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn sample_indices_distinct() {
        let mut rng = SeededRng::new("sample");
        let picked = rng.sample_indices(40, 10);
        assert_eq!(picked.len(), 10);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
        assert!(picked.iter().all(|&i| i < 40));
    }

    #[test]
    fn sample_indices_truncates() {
        let mut rng = SeededRng::new("sample-small");
        assert_eq!(rng.sample_indices(3, 10).len(), 3);
        assert!(rng.sample_indices(0, 4).is_empty());
    }
}
