//! Coordinate spaces and the intensity-scaled appearance every descriptor
//! carries.

use motif_seed::{IntensityLevel, scale_opacity, scale_stroke};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Family / Canvas
// ---------------------------------------------------------------------------

/// The two visual families. Each has a fixed canvas its generators draw in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Full-viewport ambient backgrounds.
    Ambient,
    /// Compact tile-sized decorations.
    Tile,
}

impl Family {
    #[must_use]
    pub const fn canvas(self) -> Canvas {
        match self {
            Self::Ambient => AMBIENT_CANVAS,
            Self::Tile => TILE_CANVAS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ambient => "ambient",
            Self::Tile => "tile",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Ambient, Self::Tile]
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

/// A fixed-size viewBox in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Center point `(x, y)`.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// True if `(x, y)` lies inside the canvas, edges included.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Canvas for ambient backgrounds.
pub const AMBIENT_CANVAS: Canvas = Canvas { width: 1200.0, height: 800.0 };

/// Canvas for tile decorations.
pub const TILE_CANVAS: Canvas = Canvas { width: 200.0, height: 200.0 };

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Intensity-scaled presentation values shared by all elements of a visual.
///
/// Per-element emphasis (a node's `weight`, a bar's highlight) multiplies
/// into `opacity` at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Base element opacity, `[0, 1]`.
    pub opacity: f64,
    /// Stroke width in canvas units, `>= 0`.
    pub stroke_width: f64,
}

impl Appearance {
    /// Scale a style's base opacity and stroke for `level`.
    #[must_use]
    pub fn scaled(base_opacity: f64, base_stroke: f64, level: IntensityLevel) -> Self {
        Self {
            opacity: scale_opacity(base_opacity, level),
            stroke_width: scale_stroke(base_stroke, level),
        }
    }

    /// The invariant every appearance satisfies.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (0.0..=1.0).contains(&self.opacity) && self.stroke_width >= 0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_canvases() {
        assert_eq!(Family::Ambient.canvas(), AMBIENT_CANVAS);
        assert_eq!(Family::Tile.canvas(), TILE_CANVAS);
    }

    #[test]
    fn family_names() {
        assert_eq!(Family::from_name("Ambient"), Some(Family::Ambient));
        assert_eq!(Family::from_name("tile"), Some(Family::Tile));
        assert_eq!(Family::from_name("hero"), None);
    }

    #[test]
    fn canvas_center_and_contains() {
        assert_eq!(TILE_CANVAS.center(), (100.0, 100.0));
        assert!(AMBIENT_CANVAS.contains(0.0, 800.0));
        assert!(!AMBIENT_CANVAS.contains(1200.5, 10.0));
    }

    #[test]
    fn appearance_follows_intensity() {
        let subtle = Appearance::scaled(0.2, 1.0, IntensityLevel::Subtle);
        let bold = Appearance::scaled(0.2, 1.0, IntensityLevel::Bold);
        assert!(subtle.opacity < bold.opacity);
        assert!(subtle.stroke_width < bold.stroke_width);
        assert!(subtle.is_valid() && bold.is_valid());
    }

    #[test]
    fn appearance_clamps() {
        let a = Appearance::scaled(0.8, 1.0, IntensityLevel::Bold);
        assert!((a.opacity - 1.0).abs() < f64::EPSILON);
        assert!(a.is_valid());
    }
}
