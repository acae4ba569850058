//! Runtime configuration for presentation and caching.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults ([`MotionConfig::default`])
//! 2. A TOML file ([`MotionConfig::load`])
//! 3. Environment overrides ([`MotionConfig::apply_env`])
//!
//! ```toml
//! time_scale = 1.5
//! cache_capacity = 128
//! intensity = "subtle"
//! static_pose = { phase = 0.5 }   # or "average"
//! ```
//!
//! Out-of-range values are clamped, not rejected. A bad environment value is
//! skipped with a warning and the previous value kept.

use std::path::Path;

use motif_seed::IntensityLevel;
use motif_variants::Track;
use serde::Deserialize;

use crate::error::ConfigError;

pub const ENV_TIME_SCALE: &str = "MOTIF_TIME_SCALE";
pub const ENV_INTENSITY: &str = "MOTIF_INTENSITY";
pub const ENV_CACHE_CAPACITY: &str = "MOTIF_CACHE_CAPACITY";

pub const MIN_TIME_SCALE: f64 = 0.25;
pub const MAX_TIME_SCALE: f64 = 4.0;
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

// ---------------------------------------------------------------------------
// StaticPose
// ---------------------------------------------------------------------------

/// Which moment of a track a static presentation shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPose {
    /// Time-average of the keyframe curve.
    #[default]
    Average,
    /// The keyframe curve sampled at a fixed phase in `[0, 1]`.
    Phase(f64),
}

impl StaticPose {
    /// The frozen value of `track`.
    ///
    /// A pose never hides its element: if the chosen phase lands on zero
    /// for a property where zero means invisible (opacity, scale, radius,
    /// reveal), the track's average is used instead. Progress is wrapped
    /// onto the path.
    #[must_use]
    pub fn value_of(self, track: &Track) -> f64 {
        let value = match self {
            Self::Average => track.mean_value(),
            Self::Phase(p) => track.value_at(p),
        };
        let value =
            if track.property.hides_at_zero() && value <= 0.0 { track.mean_value() } else { value };
        track.property.normalize(value)
    }

    fn clamped(self) -> Self {
        match self {
            Self::Phase(p) if p.is_nan() => Self::Average,
            Self::Phase(p) => Self::Phase(p.clamp(0.0, 1.0)),
            Self::Average => Self::Average,
        }
    }
}

// ---------------------------------------------------------------------------
// MotionConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Multiplier on every animated duration and delay. Larger is slower.
    pub time_scale: f64,
    pub static_pose: StaticPose,
    /// Maximum descriptors a gallery keeps cached.
    pub cache_capacity: usize,
    /// Intensity used when a caller does not pick one.
    pub intensity: IntensityLevel,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            static_pose: StaticPose::Average,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            intensity: IntensityLevel::Medium,
        }
    }
}

impl MotionConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is not valid TOML for this shape.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded motion config");
        Ok(config)
    }

    /// Parse TOML text, then clamp.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `text` does not parse.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(text).map(Self::clamped)
    }

    /// Apply `MOTIF_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. [`apply_env`](Self::apply_env)
    /// passes the process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_TIME_SCALE) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => self.time_scale = v,
                _ => tracing::warn!(key = ENV_TIME_SCALE, value = %raw, "ignoring invalid override"),
            }
        }
        if let Some(raw) = lookup(ENV_INTENSITY) {
            match raw.parse::<IntensityLevel>() {
                Ok(level) => self.intensity = level,
                Err(e) => tracing::warn!(key = ENV_INTENSITY, error = %e, "ignoring invalid override"),
            }
        }
        if let Some(raw) = lookup(ENV_CACHE_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(v) => self.cache_capacity = v,
                Err(e) => {
                    tracing::warn!(key = ENV_CACHE_CAPACITY, value = %raw, error = %e, "ignoring invalid override");
                }
            }
        }
        *self = self.clone().clamped();
    }

    /// Pull every field into its documented range.
    #[must_use]
    pub fn clamped(self) -> Self {
        let time_scale = if self.time_scale.is_finite() {
            self.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        } else {
            1.0
        };
        Self {
            time_scale,
            static_pose: self.static_pose.clamped(),
            cache_capacity: self.cache_capacity.max(1),
            intensity: self.intensity,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use motif_variants::{Property, Repeat};
    use pretty_assertions::assert_eq;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn empty_file_is_default() {
        assert_eq!(MotionConfig::from_toml("").ok(), Some(MotionConfig::default()));
    }

    #[test]
    fn parses_every_field() {
        let text = r#"
            time_scale = 1.5
            cache_capacity = 8
            intensity = "bold"
            static_pose = { phase = 0.25 }
        "#;
        let config = MotionConfig::from_toml(text).ok();
        assert_eq!(
            config,
            Some(MotionConfig {
                time_scale: 1.5,
                static_pose: StaticPose::Phase(0.25),
                cache_capacity: 8,
                intensity: IntensityLevel::Bold,
            })
        );
    }

    #[test]
    fn average_pose_by_name() {
        let config = MotionConfig::from_toml(r#"static_pose = "average""#).ok();
        assert_eq!(config.map(|c| c.static_pose), Some(StaticPose::Average));
    }

    #[test]
    fn rejects_unknown_intensity() {
        assert!(MotionConfig::from_toml(r#"intensity = "loud""#).is_err());
    }

    // ── Clamping ────────────────────────────────────────────────

    #[test]
    fn clamps_out_of_range_values() {
        let text = r"
            time_scale = 40.0
            cache_capacity = 0
            static_pose = { phase = 3.0 }
        ";
        let config = MotionConfig::from_toml(text).unwrap();
        assert_eq!(config.time_scale, MAX_TIME_SCALE);
        assert_eq!(config.cache_capacity, 1);
        assert_eq!(config.static_pose, StaticPose::Phase(1.0));

        let slow = MotionConfig::from_toml("time_scale = 0.01").unwrap();
        assert_eq!(slow.time_scale, MIN_TIME_SCALE);
    }

    // ── Overrides ───────────────────────────────────────────────

    #[test]
    fn overrides_apply() {
        let mut config = MotionConfig::default();
        config.apply_overrides(env(&[
            (ENV_TIME_SCALE, "2"),
            (ENV_INTENSITY, "Subtle"),
            (ENV_CACHE_CAPACITY, "16"),
        ]));
        assert_eq!(config.time_scale, 2.0);
        assert_eq!(config.intensity, IntensityLevel::Subtle);
        assert_eq!(config.cache_capacity, 16);
    }

    #[test]
    fn bad_overrides_keep_previous_values() {
        let mut config = MotionConfig::default();
        config.apply_overrides(env(&[
            (ENV_TIME_SCALE, "fast"),
            (ENV_INTENSITY, "loud"),
            (ENV_CACHE_CAPACITY, "-3"),
        ]));
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn overrides_are_clamped() {
        let mut config = MotionConfig::default();
        config.apply_overrides(env(&[(ENV_TIME_SCALE, "100"), (ENV_CACHE_CAPACITY, "0")]));
        assert_eq!(config.time_scale, MAX_TIME_SCALE);
        assert_eq!(config.cache_capacity, 1);
    }

    // ── Static pose ─────────────────────────────────────────────

    #[test]
    fn average_pose_is_the_midpoint() {
        let track = Track::new("dot", 0, Property::Scale, vec![0.0, 1.0]);
        assert!((StaticPose::Average.value_of(&track) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn phase_pose_never_freezes_at_zero_size() {
        for property in [Property::Scale, Property::Reveal, Property::Radius] {
            let grow = Track::new("bar", 0, property, vec![0.0, 1.0]).repeat(Repeat::Once);
            assert!((StaticPose::Phase(0.0).value_of(&grow) - 0.5).abs() < 1e-12, "{property:?}");
            assert!((StaticPose::Phase(1.0).value_of(&grow) - 1.0).abs() < 1e-12, "{property:?}");
        }
    }

    #[test]
    fn progress_pose_stays_on_the_path() {
        let packet = Track::new("packet", 0, Property::Progress, vec![0.7, 1.7]);
        let average = StaticPose::Average.value_of(&packet);
        assert!((average - 0.2).abs() < 1e-9);
        assert!((StaticPose::Phase(0.0).value_of(&packet) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn toml_phase_zero_still_shows_growth() {
        let config = MotionConfig::from_toml("static_pose = { phase = 0.0 }").unwrap();
        let bar = Track::new("bar", 0, Property::Scale, vec![0.0, 1.0]).repeat(Repeat::Once);
        assert!(config.static_pose.value_of(&bar) > 0.0);
    }

    #[test]
    fn phase_pose_never_freezes_invisible() {
        let fade = Track::new("dot", 0, Property::Opacity, vec![0.0, 1.0, 1.0, 0.0]);
        assert!(StaticPose::Phase(0.0).value_of(&fade) > 0.0);
        assert!((StaticPose::Phase(0.5).value_of(&fade) - 1.0).abs() < 1e-12);
    }
}
