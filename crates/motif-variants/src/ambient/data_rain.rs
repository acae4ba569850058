//! `dataRain` — evenly spaced columns of glyph trails falling down the page.

use motif_seed::{IntensityLevel, SeedScope, Span};
use serde::Serialize;

use crate::canvas::{AMBIENT_CANVAS, Appearance};
use crate::registry::VariantId;
use crate::track::{Easing, Property, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const COLUMNS: RangeInclusive<usize> = 10..=18;
    /// Horizontal jitter as a fraction of the column width.
    pub const JITTER: Span = Span::symmetric(0.3);
    pub const GLYPHS: RangeInclusive<usize> = 6..=14;
    /// Trail length in canvas units.
    pub const LENGTH: Span = Span::new(80.0, 260.0);
    /// Seconds to fall the full height.
    pub const FALL: Span = Span::new(4.0, 10.0);
    pub const DELAY: Span = Span::new(0.0, 5.0);
}

use ranges::{COLUMNS, DELAY, FALL, GLYPHS, JITTER, LENGTH};

const BASE_OPACITY: f64 = 0.15;
const BASE_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainColumn {
    pub x: f64,
    pub glyphs: usize,
    pub length: f64,
    pub fall: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRain {
    pub columns: Vec<RainColumn>,
    pub appearance: Appearance,
}

impl Variant for DataRain {
    const ID: VariantId = VariantId::DataRain;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&COLUMNS);
        let width = AMBIENT_CANVAS.width / n as f64;
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let columns = (0..n)
            .map(|i| RainColumn {
                x: (i as f64 + 0.5 + layout.float_in(JITTER)) * width,
                glyphs: layout.count(&GLYPHS),
                length: layout.float_in(LENGTH),
                fall: timing.float_in(FALL),
                delay: timing.float_in(DELAY),
            })
            .collect();

        Self { columns, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let height = AMBIENT_CANVAS.height;
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                [
                    Track::new("column", i, Property::TranslateY, vec![-c.length, height])
                        .timing(c.fall, c.delay),
                    Track::new("column", i, Property::Opacity, vec![0.0, 1.0, 1.0, 0.0])
                        .timing(c.fall, c.delay)
                        .easing(Easing::EaseInOut),
                ]
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let n = self.columns.len();
        let width = AMBIENT_CANVAS.width / n as f64;
        COLUMNS.contains(&n)
            && self.appearance.is_valid()
            && self.columns.iter().enumerate().all(|(i, c)| {
                let slot = Span::new(
                    (i as f64 + 0.5 + JITTER.min) * width - 1e-9,
                    (i as f64 + 0.5 + JITTER.max) * width + 1e-9,
                );
                slot.contains(c.x)
                    && AMBIENT_CANVAS.contains(c.x, 0.0)
                    && GLYPHS.contains(&c.glyphs)
                    && LENGTH.contains(c.length)
                    && FALL.contains(c.fall)
                    && DELAY.contains(c.delay)
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
    fn columns_stay_in_their_slot() {
        for i in 0..200 {
            let r: DataRain = generate(&format!("rain-{i}"), IntensityLevel::Medium);
            assert!(r.within_bounds(), "rain-{i}");
        }
    }

    #[test]
    fn columns_ordered_left_to_right() {
        let r: DataRain = generate("order", IntensityLevel::Medium);
        assert!(r.columns.windows(2).all(|w| w[0].x < w[1].x));
    }
}
