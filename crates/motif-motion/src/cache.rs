//! Descriptor cache.
//!
//! Generation is pure, so a descriptor can be reused for as long as its
//! `(variant, seed, intensity)` key is alive. The cache is an ordinary value
//! owned by whoever renders (normally a [`Gallery`](crate::Gallery)); there is
//! no process-wide memo.
//!
//! Capacity is counted in entries. When full, the oldest insertion goes first.

use std::collections::{HashMap, VecDeque};

use motif_seed::IntensityLevel;
use motif_variants::{GeometryDescriptor, VariantId};

/// Everything a descriptor depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorKey {
    pub variant: VariantId,
    pub seed: String,
    pub intensity: IntensityLevel,
}

impl DescriptorKey {
    #[must_use]
    pub fn new(variant: VariantId, seed: impl Into<String>, intensity: IntensityLevel) -> Self {
        Self { variant, seed: seed.into(), intensity }
    }

    /// Run the generator this key names.
    #[must_use]
    pub fn generate(&self) -> GeometryDescriptor {
        self.variant.generate(&self.seed, self.intensity)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub lookups: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate (0.0 - 1.0)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 { 0.0 } else { self.hits as f64 / self.lookups as f64 }
    }
}

#[derive(Debug, Clone)]
pub struct DescriptorCache {
    entries: HashMap<DescriptorKey, GeometryDescriptor>,
    /// Insertion order, oldest first.
    order: VecDeque<DescriptorKey>,
    capacity: usize,
    stats: CacheStats,
}

impl DescriptorCache {
    /// A cache holding at most `capacity` descriptors (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            stats: CacheStats::default(),
        }
    }

    /// The cached descriptor for `key`, generating and inserting it on a miss.
    pub fn get_or_generate(&mut self, key: &DescriptorKey) -> &GeometryDescriptor {
        self.stats.lookups += 1;
        if self.entries.contains_key(key) {
            self.stats.hits += 1;
            tracing::trace!(variant = %key.variant, seed = %key.seed, "descriptor cache hit");
        } else {
            self.stats.misses += 1;
            tracing::trace!(variant = %key.variant, seed = %key.seed, "descriptor cache miss");
            while self.entries.len() >= self.capacity && self.evict_oldest() {}
            self.order.push_back(key.clone());
        }
        self.entries.entry(key.clone()).or_insert_with(|| key.generate())
    }

    #[must_use]
    pub fn contains(&self, key: &DescriptorKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop one entry. Returns true if it was cached.
    pub fn remove(&mut self, key: &DescriptorKey) -> bool {
        if self.entries.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| k != key);
        tracing::trace!(variant = %key.variant, seed = %key.seed, "descriptor removed");
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    fn evict_oldest(&mut self) -> bool {
        let Some(key) = self.order.pop_front() else {
            return false;
        };
        self.entries.remove(&key);
        self.stats.evictions += 1;
        tracing::debug!(variant = %key.variant, seed = %key.seed, "descriptor evicted");
        true
    }
}

impl Default for DescriptorCache {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CACHE_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
