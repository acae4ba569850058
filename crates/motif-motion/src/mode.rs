//! Motion modes.
//!
//! A visual is presented in exactly one [`MotionMode`], chosen once per
//! render from the viewer's reduced-motion preference. The mode never feeds
//! back into generation: both modes show the same geometry.

use std::fmt;

/// How a visual is presented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionMode {
    /// Keyframe tracks play on loop.
    #[default]
    Animated,
    /// Every track is frozen at a representative pose.
    Static,
}

impl MotionMode {
    /// The mode a reduced-motion preference selects.
    #[must_use]
    pub const fn from_reduced_motion(reduced_motion: bool) -> Self {
        if reduced_motion { Self::Static } else { Self::Animated }
    }

    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animated => "animated",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_selects_static() {
        assert_eq!(MotionMode::from_reduced_motion(true), MotionMode::Static);
        assert_eq!(MotionMode::from_reduced_motion(false), MotionMode::Animated);
    }

    #[test]
    fn default_is_animated() {
        assert_eq!(MotionMode::default(), MotionMode::Animated);
        assert!(!MotionMode::default().is_static());
    }

    #[test]
    fn display() {
        assert_eq!(MotionMode::Static.to_string(), "static");
    }
}
