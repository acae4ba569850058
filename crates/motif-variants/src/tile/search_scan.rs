//! `searchScan` — a magnifying lens sweeping over lines of text and
//! lingering on the matching one.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{Appearance, TILE_CANVAS};
use crate::registry::VariantId;
use crate::track::{Easing, Property, Repeat, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const LINES: RangeInclusive<usize> = 3..=6;
    /// Line length as a fraction of the text column.
    pub const WIDTH: Span = Span::new(0.35, 1.0);
    pub const LENS_RADIUS: Span = Span::new(14.0, 22.0);
    /// Seconds for one top-to-bottom sweep.
    pub const SCAN: Span = Span::new(1.6, 3.2);
    pub const FIRST_LINE: f64 = 60.0;
    pub const LINE_GAP: f64 = 22.0;
    pub const LEFT: f64 = 30.0;
    pub const COLUMN: f64 = 140.0;
}

use ranges::{COLUMN, FIRST_LINE, LEFT, LENS_RADIUS, LINE_GAP, LINES, SCAN, WIDTH};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchScan {
    pub left: f64,
    pub column: f64,
    pub lines: Vec<TextLine>,
    /// Index of the highlighted line.
    pub match_index: usize,
    pub lens_radius: f64,
    pub scan: f64,
    pub appearance: Appearance,
}

impl Variant for SearchScan {
    const ID: VariantId = VariantId::SearchScan;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&LINES);
        let mut layout = scope.stream("layout");

        let lines = (0..n)
            .map(|i| TextLine {
                y: (i as f64).mul_add(LINE_GAP, FIRST_LINE),
                width: layout.float_in(WIDTH),
            })
            .collect();
        let match_index = layout.rand_int(0, n as i64 - 1) as usize;
        let lens_radius = layout.float_in(LENS_RADIUS);

        Self {
            left: LEFT,
            column: COLUMN,
            lines,
            match_index,
            lens_radius,
            scan: scope.stream("timing").float_in(SCAN),
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let travel = (self.lines.len().saturating_sub(1)) as f64 * LINE_GAP;
        vec![
            Track::new("lens", 0, Property::TranslateY, vec![0.0, travel])
                .timing(self.scan, 0.0)
                .repeat(Repeat::Mirror)
                .easing(Easing::EaseInOut),
            Track::new("match", self.match_index, Property::Opacity, vec![0.4, 1.0, 0.4])
                .timing(self.scan, 0.0)
                .easing(Easing::EaseInOut),
        ]
    }

    fn within_bounds(&self) -> bool {
        LINES.contains(&self.lines.len())
            && self.match_index < self.lines.len()
            && self.appearance.is_valid()
            && LENS_RADIUS.contains(self.lens_radius)
            && SCAN.contains(self.scan)
            && self.lines.iter().all(|l| {
                WIDTH.contains(l.width)
                    && l.y - self.lens_radius >= 0.0
                    && l.y + self.lens_radius <= TILE_CANVAS.height
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
