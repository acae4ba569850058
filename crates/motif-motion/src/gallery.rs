//! The gallery: mounted visuals, the viewer's motion preference, and the
//! descriptor cache they share.
//!
//! Mounting resolves a name once. Unknown names mount nothing and the page
//! simply shows no visual. Rendering reads the current motion mode each
//! time, so flipping reduced motion takes effect on the next render without
//! regenerating anything.

use std::collections::BTreeMap;
use std::fmt;

use motif_seed::IntensityLevel;
use motif_variants::VariantId;

use crate::cache::{DescriptorCache, DescriptorKey};
use crate::config::MotionConfig;
use crate::mode::MotionMode;
use crate::presentation::{Presentation, present};

/// Handle to a mounted visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualId(u64);

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "visual#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    config: MotionConfig,
    cache: DescriptorCache,
    visuals: BTreeMap<VisualId, DescriptorKey>,
    next_id: u64,
    reduced_motion: bool,
}

impl Gallery {
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            cache: DescriptorCache::new(config.cache_capacity),
            config,
            visuals: BTreeMap::new(),
            next_id: 0,
            reduced_motion: false,
        }
    }

    /// Mount a visual by name. Returns `None`, and mounts nothing, for an
    /// unknown name.
    pub fn mount(&mut self, name: &str, seed: &str, intensity: IntensityLevel) -> Option<VisualId> {
        let Some(variant) = VariantId::from_name(name) else {
            tracing::debug!(variant = name, seed, "unknown variant, nothing mounted");
            return None;
        };
        let key = DescriptorKey::new(variant, seed, intensity);
        self.cache.get_or_generate(&key);

        let id = VisualId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, %variant, seed, %intensity, "mounted");
        self.visuals.insert(id, key);
        Some(id)
    }

    /// Mount with the configured default intensity.
    pub fn mount_default(&mut self, name: &str, seed: &str) -> Option<VisualId> {
        self.mount(name, seed, self.config.intensity)
    }

    /// Unmount a visual. Its cached descriptor is dropped unless another
    /// mounted visual uses the same key. Returns false for an unknown id.
    pub fn unmount(&mut self, id: VisualId) -> bool {
        let Some(key) = self.visuals.remove(&id) else {
            return false;
        };
        if !self.visuals.values().any(|k| *k == key) {
            self.cache.remove(&key);
        }
        tracing::debug!(%id, variant = %key.variant, "unmounted");
        true
    }

    /// Record the viewer's reduced-motion preference. Returns true if the
    /// motion mode changed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> bool {
        if self.reduced_motion == reduced_motion {
            return false;
        }
        self.reduced_motion = reduced_motion;
        tracing::debug!(mode = %self.motion_mode(), "motion mode changed");
        true
    }

    #[must_use]
    pub const fn motion_mode(&self) -> MotionMode {
        MotionMode::from_reduced_motion(self.reduced_motion)
    }

    /// Present one mounted visual in the current mode.
    pub fn render(&mut self, id: VisualId) -> Option<Presentation> {
        let mode = self.motion_mode();
        let key = self.visuals.get(&id)?;
        let descriptor = self.cache.get_or_generate(key).clone();
        Some(present(descriptor, mode, &self.config))
    }

    /// Present every mounted visual, in mount order.
    pub fn render_all(&mut self) -> Vec<(VisualId, Presentation)> {
        let mode = self.motion_mode();
        self.visuals
            .iter()
            .map(|(&id, key)| {
                let descriptor = self.cache.get_or_generate(key).clone();
                (id, present(descriptor, mode, &self.config))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    #[must_use]
    pub fn key(&self, id: VisualId) -> Option<&DescriptorKey> {
        self.visuals.get(&id)
    }

    #[must_use]
    pub const fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    #[must_use]
    pub const fn config(&self) -> &MotionConfig {
        &self.config
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Mounting ────────────────────────────────────────────────

    #[test]
    fn unknown_name_mounts_nothing() {
        let mut gallery = Gallery::default();
        assert_eq!(gallery.mount("doesNotExist", "x", IntensityLevel::Medium), None);
        assert!(gallery.is_empty());
        assert!(gallery.cache().is_empty());
    }

    #[test]
    fn mount_warms_the_cache() {
        let mut gallery = Gallery::default();
        let id = gallery.mount("gearCluster", "about", IntensityLevel::Medium);
        assert!(id.is_some());
        assert_eq!(gallery.cache().len(), 1);
        assert_eq!(gallery.cache().stats().misses, 1);
    }

    #[test]
    fn ids_are_unique() {
        let mut gallery = Gallery::default();
        let a = gallery.mount("barChart", "s", IntensityLevel::Medium);
        let b = gallery.mount("barChart", "s", IntensityLevel::Medium);
        assert_ne!(a, b);
        assert_eq!(gallery.cache().len(), 1);
    }

    #[test]
    fn mount_default_uses_configured_intensity() {
        let config = MotionConfig { intensity: IntensityLevel::Bold, ..MotionConfig::default() };
        let mut gallery = Gallery::new(config);
        let id = gallery.mount_default("trendLine", "t");
        assert_eq!(id.and_then(|id| gallery.key(id)).map(|k| k.intensity), Some(IntensityLevel::Bold));
    }

    // ── Unmounting ──────────────────────────────────────────────

    #[test]
    fn unmount_evicts_unshared_descriptor() {
        let mut gallery = Gallery::default();
        let id = gallery.mount("dataRain", "hero", IntensityLevel::Medium).unwrap();
        assert!(gallery.unmount(id));
        assert!(gallery.cache().is_empty());
        assert!(!gallery.unmount(id));
    }

    #[test]
    fn unmount_keeps_shared_descriptor() {
        let mut gallery = Gallery::default();
        let a = gallery.mount("dataRain", "hero", IntensityLevel::Medium).unwrap();
        let b = gallery.mount("dataRain", "hero", IntensityLevel::Medium).unwrap();
        gallery.unmount(a);
        assert_eq!(gallery.cache().len(), 1);
        assert!(gallery.render(b).is_some());
        assert!(gallery.render(a).is_none());
    }

    // ── Motion mode ─────────────────────────────────────────────

    #[test]
    fn toggle_reports_changes_only() {
        let mut gallery = Gallery::default();
        assert!(!gallery.set_reduced_motion(false));
        assert!(gallery.set_reduced_motion(true));
        assert!(!gallery.set_reduced_motion(true));
        assert_eq!(gallery.motion_mode(), MotionMode::Static);
    }

    #[test]
    fn toggle_does_not_regenerate() {
        let mut gallery = Gallery::default();
        let id = gallery.mount("neuralMesh", "docs", IntensityLevel::Subtle).unwrap();
        let animated = gallery.render(id).unwrap();
        gallery.set_reduced_motion(true);
        let still = gallery.render(id).unwrap();
        assert_eq!(animated.descriptor(), still.descriptor());
        assert_eq!(still.mode(), MotionMode::Static);
        assert_eq!(gallery.cache().stats().misses, 1);
    }

    #[test]
    fn render_all_in_mount_order() {
        let mut gallery = Gallery::default();
        let ids: Vec<VisualId> = ["contentFlow", "nope", "pieSegments", "gridPulse"]
            .iter()
            .filter_map(|name| gallery.mount(name, "home", IntensityLevel::Medium))
            .collect();
        let rendered: Vec<VisualId> = gallery.render_all().into_iter().map(|(id, _)| id).collect();
        assert_eq!(rendered, ids);
        assert_eq!(rendered.len(), 3);
    }
}
