//! `documentStack` — a loose stack of slightly rotated pages with text lines,
//! bobbing gently.

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

    pub const SHEETS: RangeInclusive<usize> = 3..=5;
    pub const LINES: RangeInclusive<usize> = 3..=6;
    /// Horizontal offset from the stack center.
    pub const OFFSET_X: Span = Span::symmetric(10.0);
    /// Vertical gap between text lines.
    pub const LINE_SPACING: Span = Span::new(6.0, 10.0);
    /// Degrees.
    pub const ROTATION: Span = Span::symmetric(6.0);
    /// Line length as a fraction of the sheet's text width.
    pub const LINE_WIDTH: Span = Span::new(0.4, 1.0);
    pub const FLOAT: Span = Span::new(3.0, 6.0);
    pub const DELAY: Span = Span::new(0.0, 1.0);
    pub const SHEET_WIDTH: f64 = 96.0;
    pub const SHEET_HEIGHT: f64 = 120.0;
    /// Vertical step between stacked sheets.
    pub const SHEET_STEP: f64 = 8.0;
}

use ranges::{
    DELAY, FLOAT, LINE_SPACING, LINE_WIDTH, LINES, OFFSET_X, ROTATION, SHEET_HEIGHT, SHEET_STEP,
    SHEET_WIDTH, SHEETS,
};

const BASE_OPACITY: f64 = 0.5;
const BASE_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub offset_x: f64,
    /// Top edge of the sheet.
    pub y: f64,
    pub rotation: f64,
    /// Fractional length of each text line, top to bottom.
    pub lines: Vec<f64>,
    pub float: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStack {
    pub sheet_size: (f64, f64),
    pub line_spacing: f64,
    /// Back to front.
    pub sheets: Vec<Sheet>,
    pub appearance: Appearance,
}

impl Variant for DocumentStack {
    const ID: VariantId = VariantId::DocumentStack;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let n = count.count(&SHEETS);
        let per_sheet: Vec<usize> = (0..n).map(|_| count.count(&LINES)).collect();

        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");
        let line_spacing = layout.float_in(LINE_SPACING);
        let top = (TILE_CANVAS.height - SHEET_HEIGHT - SHEET_STEP * (n - 1) as f64) * 0.5;

        let sheets = per_sheet
            .iter()
            .enumerate()
            .map(|(i, &lines)| Sheet {
                offset_x: layout.float_in(OFFSET_X),
                y: (i as f64).mul_add(SHEET_STEP, top),
                rotation: layout.float_in(ROTATION),
                lines: (0..lines).map(|_| layout.float_in(LINE_WIDTH)).collect(),
                float: timing.float_in(FLOAT),
                delay: timing.float_in(DELAY),
            })
            .collect();

        Self {
            sheet_size: (SHEET_WIDTH, SHEET_HEIGHT),
            line_spacing,
            sheets,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.sheets
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Track::new("sheet", i, Property::TranslateY, vec![0.0, -4.0])
                    .timing(s.float, s.delay)
                    .repeat(Repeat::Mirror)
                    .easing(Easing::EaseInOut)
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let half = SHEET_WIDTH * 0.5;
        let cx = TILE_CANVAS.width * 0.5;
        SHEETS.contains(&self.sheets.len())
            && self.appearance.is_valid()
            && LINE_SPACING.contains(self.line_spacing)
            && self.sheets.iter().all(|s| {
                OFFSET_X.contains(s.offset_x)
                    && cx + s.offset_x - half >= 0.0
                    && cx + s.offset_x + half <= TILE_CANVAS.width
                    && s.y >= 0.0
                    && s.y + SHEET_HEIGHT <= TILE_CANVAS.height
                    && ROTATION.contains(s.rotation)
                    && LINES.contains(&s.lines.len())
                    && s.lines.iter().all(|&w| LINE_WIDTH.contains(w))
                    && FLOAT.contains(s.float)
                    && DELAY.contains(s.delay)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::generate;

    #[test]
    fn stack_fits_the_tile() {
        for i in 0..200 {
            let d: DocumentStack = generate(&format!("docs-{i}"), IntensityLevel::Medium);
            assert!(d.within_bounds(), "docs-{i}");
        }
    }

    #[test]
    fn text_fits_on_a_sheet() {
        let worst = *LINES.end() as f64 * LINE_SPACING.max;
        assert!(worst < SHEET_HEIGHT);
    }
}
