//! `gridPulse` — a faint dot grid with a handful of cells that light up in
//! turn.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{AMBIENT_CANVAS, Appearance};
use crate::registry::VariantId;
use crate::track::{Easing, Property, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const COLUMNS: RangeInclusive<usize> = 8..=14;
    pub const ROWS: RangeInclusive<usize> = 5..=9;
    /// Distinct pulsing cells.
    pub const PULSES: RangeInclusive<usize> = 4..=10;
    pub const DURATION: Span = Span::new(1.5, 4.0);
    pub const DELAY: Span = Span::new(0.0, 6.0);
}

use ranges::{COLUMNS, DELAY, DURATION, PULSES, ROWS};

const BASE_OPACITY: f64 = 0.14;
const BASE_STROKE: f64 = 1.0;

/// One lit cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pulse {
    pub column: usize,
    pub row: usize,
    pub duration: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPulse {
    pub columns: usize,
    pub rows: usize,
    /// Width and height of one cell in canvas units.
    pub cell: (f64, f64),
    pub pulses: Vec<Pulse>,
    pub appearance: Appearance,
}

impl GridPulse {
    /// Center of cell `(column, row)`.
    #[must_use]
    pub fn cell_center(&self, column: usize, row: usize) -> (f64, f64) {
        ((column as f64 + 0.5) * self.cell.0, (row as f64 + 0.5) * self.cell.1)
    }
}

impl Variant for GridPulse {
    const ID: VariantId = VariantId::GridPulse;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let mut count = scope.stream("count");
        let columns = count.count(&COLUMNS);
        let rows = count.count(&ROWS);
        let k = count.count(&PULSES);

        let mut timing = scope.stream("timing");
        let pulses = scope
            .stream("layout")
            .sample_indices(columns * rows, k)
            .into_iter()
            .map(|cell| Pulse {
                column: cell % columns,
                row: cell / columns,
                duration: timing.float_in(DURATION),
                delay: timing.float_in(DELAY),
            })
            .collect();

        Self {
            columns,
            rows,
            cell: (AMBIENT_CANVAS.width / columns as f64, AMBIENT_CANVAS.height / rows as f64),
            pulses,
            appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level),
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.pulses
            .iter()
            .enumerate()
            .flat_map(|(i, p)| {
                [
                    Track::new("pulse", i, Property::Opacity, vec![0.2, 1.0, 0.2])
                        .timing(p.duration, p.delay)
                        .easing(Easing::EaseInOut),
                    Track::new("pulse", i, Property::Scale, vec![1.0, 1.6, 1.0])
                        .timing(p.duration, p.delay)
                        .easing(Easing::EaseOut),
                ]
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        let mut cells: Vec<(usize, usize)> = self.pulses.iter().map(|p| (p.column, p.row)).collect();
        cells.sort_unstable();
        cells.dedup();
        COLUMNS.contains(&self.columns)
            && ROWS.contains(&self.rows)
            && PULSES.contains(&self.pulses.len())
            && cells.len() == self.pulses.len()
            && self.appearance.is_valid()
            && self.pulses.iter().all(|p| {
                p.column < self.columns
                    && p.row < self.rows
                    && DURATION.contains(p.duration)
                    && DELAY.contains(p.delay)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
