//! Presentations: a descriptor dressed for one motion mode.
//!
//! ```text
//! GeometryDescriptor ──► present(mode) ──┬─► Animated: tracks, time-scaled
//!                                        └─► Static:   one Pose per track
//! ```
//!
//! The descriptor passes through untouched in both arms, so toggling
//! reduced motion never changes what is drawn, only whether it moves.

use motif_variants::{GeometryDescriptor, Property, Track};
use serde::Serialize;

use crate::config::MotionConfig;
use crate::mode::MotionMode;

/// A track frozen at a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pose {
    pub part: &'static str,
    pub index: usize,
    pub property: Property,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatedScene {
    pub descriptor: GeometryDescriptor,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticScene {
    pub descriptor: GeometryDescriptor,
    pub poses: Vec<Pose>,
}

/// What a renderer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Presentation {
    Animated(AnimatedScene),
    Static(StaticScene),
}

impl Presentation {
    #[must_use]
    pub const fn descriptor(&self) -> &GeometryDescriptor {
        match self {
            Self::Animated(scene) => &scene.descriptor,
            Self::Static(scene) => &scene.descriptor,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> MotionMode {
        match self {
            Self::Animated(_) => MotionMode::Animated,
            Self::Static(_) => MotionMode::Static,
        }
    }

    /// Number of tracks (animated) or poses (static).
    #[must_use]
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Animated(scene) => scene.tracks.len(),
            Self::Static(scene) => scene.poses.len(),
        }
    }
}

/// Dress `descriptor` for `mode`.
#[must_use]
pub fn present(descriptor: GeometryDescriptor, mode: MotionMode, config: &MotionConfig) -> Presentation {
    let tracks = descriptor.tracks();
    match mode {
        MotionMode::Animated => {
            let scale = config.time_scale;
            let tracks = tracks
                .into_iter()
                .map(|t| {
                    let (duration, delay) = (t.duration * scale, t.delay * scale);
                    t.timing(duration, delay)
                })
                .collect();
            Presentation::Animated(AnimatedScene { descriptor, tracks })
        }
        MotionMode::Static => {
            let poses = tracks
                .iter()
                .map(|t| Pose {
                    part: t.part,
                    index: t.index,
                    property: t.property,
                    value: config.static_pose.value_of(t),
                })
                .collect();
            Presentation::Static(StaticScene { descriptor, poses })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use motif_seed::IntensityLevel;
    use motif_variants::VariantId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::StaticPose;

    fn descriptor() -> GeometryDescriptor {
        VariantId::PulseBeacon.generate("beacon", IntensityLevel::Medium)
    }

    #[test]
    fn both_modes_share_geometry() {
        let config = MotionConfig::default();
        let animated = present(descriptor(), MotionMode::Animated, &config);
        let still = present(descriptor(), MotionMode::Static, &config);
        assert_eq!(animated.descriptor(), still.descriptor());
        assert_eq!(animated.channel_count(), still.channel_count());
        assert_eq!(animated.mode(), MotionMode::Animated);
        assert_eq!(still.mode(), MotionMode::Static);
    }

    #[test]
    fn time_scale_stretches_timing_only() {
        let config = MotionConfig { time_scale: 2.0, ..MotionConfig::default() };
        let base = descriptor().tracks();
        let Presentation::Animated(scene) = present(descriptor(), MotionMode::Animated, &config)
        else {
            panic!("expected animated scene");
        };
        for (a, b) in base.iter().zip(&scene.tracks) {
            assert!((b.duration - a.duration * 2.0).abs() < 1e-12);
            assert!((b.delay - a.delay * 2.0).abs() < 1e-12);
            assert_eq!(a.keyframes, b.keyframes);
        }
    }

    #[test]
    fn static_poses_use_configured_policy() {
        let config = MotionConfig { static_pose: StaticPose::Phase(1.0), ..MotionConfig::default() };
        let tracks = descriptor().tracks();
        let Presentation::Static(scene) = present(descriptor(), MotionMode::Static, &config) else {
            panic!("expected static scene");
        };
        for (track, pose) in tracks.iter().zip(&scene.poses) {
            assert_eq!((pose.part, pose.index, pose.property), (track.part, track.index, track.property));
            assert!((pose.value - StaticPose::Phase(1.0).value_of(track)).abs() < 1e-12);
        }
    }
}
