//! Intensity levels and the opacity/stroke scaling table.
//!
//! | Level    | Opacity × | Stroke + |
//! |----------|-----------|----------|
//! | `subtle` | 1.0       | 0.0      |
//! | `medium` | 1.5       | 0.25     |
//! | `bold`   | 2.25      | 0.5      |
//!
//! Both columns are non-decreasing down the table, so a bolder level never
//! renders fainter or thinner than a subtler one. Opacity results are clamped
//! to `[0, 1]`; stroke results never go negative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIntensityError;

// ---------------------------------------------------------------------------
// IntensityScale
// ---------------------------------------------------------------------------

/// The numeric multipliers one intensity level maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
    pub opacity_multiplier: f64,
    pub stroke_add: f64,
}

// ---------------------------------------------------------------------------
// IntensityLevel
// ---------------------------------------------------------------------------

/// Qualitative emphasis of a visual.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Subtle,
    #[default]
    Medium,
    Bold,
}

impl IntensityLevel {
    /// All levels, subtlest first.
    pub const ALL: [Self; 3] = [Self::Subtle, Self::Medium, Self::Bold];

    #[must_use]
    pub const fn scale(self) -> IntensityScale {
        match self {
            Self::Subtle => IntensityScale { opacity_multiplier: 1.0, stroke_add: 0.0 },
            Self::Medium => IntensityScale { opacity_multiplier: 1.5, stroke_add: 0.25 },
            Self::Bold => IntensityScale { opacity_multiplier: 2.25, stroke_add: 0.5 },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Medium => "medium",
            Self::Bold => "bold",
        }
    }

    /// Parse a level name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|level| level.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    #[must_use]
    pub fn scale_opacity(self, base: f64) -> f64 {
        scale_opacity(base, self)
    }

    #[must_use]
    pub fn scale_stroke(self, base: f64) -> f64 {
        scale_stroke(base, self)
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntensityLevel {
    type Err = ParseIntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseIntensityError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

/// Scale a base opacity for `level`, clamped to `[0, 1]`.
///
/// Non-finite input (NaN) degrades to fully transparent rather than
/// propagating.
#[must_use]
pub fn scale_opacity(base: f64, level: IntensityLevel) -> f64 {
    if base.is_nan() {
        return 0.0;
    }
    (base * level.scale().opacity_multiplier).clamp(0.0, 1.0)
}

/// Scale a base stroke width for `level`. Never negative; NaN and infinite
/// input degrade to `0`.
#[must_use]
pub fn scale_stroke(base: f64, level: IntensityLevel) -> f64 {
    if !base.is_finite() {
        return 0.0;
    }
    (base + level.scale().stroke_add).max(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Table ───────────────────────────────────────────────────────

    #[test]
    fn table_is_monotone() {
        let scales: Vec<IntensityScale> = IntensityLevel::ALL.iter().map(|l| l.scale()).collect();
        for pair in scales.windows(2) {
            assert!(pair[0].opacity_multiplier <= pair[1].opacity_multiplier);
            assert!(pair[0].stroke_add <= pair[1].stroke_add);
        }
    }

    #[test]
    fn subtle_is_identity() {
        assert!((scale_opacity(0.3, IntensityLevel::Subtle) - 0.3).abs() < 1e-12);
        assert!((scale_stroke(1.5, IntensityLevel::Subtle) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn medium_values() {
        assert!((scale_opacity(0.2, IntensityLevel::Medium) - 0.3).abs() < 1e-12);
        assert!((scale_stroke(1.0, IntensityLevel::Medium) - 1.25).abs() < 1e-12);
    }

    // ── Clamping ────────────────────────────────────────────────────

    #[test]
    fn opacity_clamps_high() {
        assert!((scale_opacity(0.9, IntensityLevel::Bold) - 1.0).abs() < f64::EPSILON);
        assert!((scale_opacity(f64::INFINITY, IntensityLevel::Medium) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn opacity_clamps_low() {
        assert!(scale_opacity(-0.5, IntensityLevel::Bold).abs() < f64::EPSILON);
    }

    #[test]
    fn opacity_nan_is_zero() {
        assert!(scale_opacity(f64::NAN, IntensityLevel::Bold).abs() < f64::EPSILON);
    }

    #[test]
    fn stroke_never_negative() {
        assert!(scale_stroke(-3.0, IntensityLevel::Bold).abs() < f64::EPSILON);
        assert!(scale_stroke(f64::NAN, IntensityLevel::Medium).abs() < f64::EPSILON);
        assert!(scale_stroke(f64::NEG_INFINITY, IntensityLevel::Subtle).abs() < f64::EPSILON);
    }

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn parse_names() {
        assert_eq!("subtle".parse(), Ok(IntensityLevel::Subtle));
        assert_eq!("MEDIUM".parse(), Ok(IntensityLevel::Medium));
        assert_eq!(" bold ".parse(), Ok(IntensityLevel::Bold));
    }

    #[test]
    fn parse_unknown() {
        let err = "loud".parse::<IntensityLevel>().unwrap_err();
        assert_eq!(err, ParseIntensityError("loud".into()));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn display_round_trips_name() {
        for level in IntensityLevel::ALL {
            assert_eq!(IntensityLevel::from_name(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(IntensityLevel::default(), IntensityLevel::Medium);
    }
}
