//! Stable string hashing for seed derivation.
//!
//! FNV-1a gives a fixed-width, platform-independent hash of arbitrary bytes.
//! Its low bits avalanche poorly for seeds that differ only in the last
//! character (`"page-1"` vs `"page-2"`), so the result is run through the
//! MurmurHash3 `fmix32` finalizer before it becomes PRNG state.

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over a byte slice. Wrapping arithmetic, so input length is
/// unbounded.
#[must_use]
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// MurmurHash3 32-bit finalizer. Bijective, so distinct hashes stay distinct.
#[must_use]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hash a seed string into mixed 32-bit state.
#[must_use]
pub const fn seed_hash(seed: &str) -> u32 {
    fmix32(fnv1a(seed.as_bytes()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
