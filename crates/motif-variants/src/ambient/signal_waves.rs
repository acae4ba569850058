//! `signalWaves` — layered horizontal sine waves scrolling across the page.
//!
//! The descriptor keeps each wave as (baseline, amplitude, wavelength, phase);
//! the renderer samples the curve. Amplitude is capped by the distance from
//! the baseline to the nearer edge.

use motif_seed::{IntensityLevel, SeedScope};
use serde::Serialize;

use crate::canvas::{AMBIENT_CANVAS, Appearance};
use crate::registry::VariantId;
use crate::track::{Easing, Property, Repeat, Track};
use crate::variant::Variant;

/// Documented ranges for every drawn field.
pub mod ranges {
    use std::ops::RangeInclusive;

    use motif_seed::Span;

    pub const WAVES: RangeInclusive<usize> = 3..=6;
    pub const BASELINE: Span = Span::new(200.0, 600.0);
    pub const AMPLITUDE: Span = Span::new(20.0, 90.0);
    pub const WAVELENGTH: Span = Span::new(240.0, 600.0);
    /// Fraction of a wavelength at phase zero.
    pub const PHASE: Span = Span::new(0.0, 1.0);
    /// Seconds to scroll one wavelength.
    pub const DURATION: Span = Span::new(8.0, 16.0);
    pub const DELAY: Span = Span::new(0.0, 2.0);
}

use ranges::{AMPLITUDE, BASELINE, DELAY, DURATION, PHASE, WAVELENGTH, WAVES};

const BASE_OPACITY: f64 = 0.16;
const BASE_STROKE: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wave {
    pub baseline: f64,
    pub amplitude: f64,
    pub wavelength: f64,
    pub phase: f64,
    pub duration: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalWaves {
    pub waves: Vec<Wave>,
    pub appearance: Appearance,
}

impl Variant for SignalWaves {
    const ID: VariantId = VariantId::SignalWaves;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&WAVES);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let waves = (0..n)
            .map(|_| {
                let baseline = layout.float_in(BASELINE);
                let headroom = baseline.min(AMBIENT_CANVAS.height - baseline);
                Wave {
                    baseline,
                    amplitude: layout.float_in(AMPLITUDE).min(headroom),
                    wavelength: layout.float_in(WAVELENGTH),
                    phase: layout.float_in(PHASE),
                    duration: timing.float_in(DURATION),
                    delay: timing.float_in(DELAY),
                }
            })
            .collect();

        Self { waves, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        self.waves
            .iter()
            .enumerate()
            .flat_map(|(i, w)| {
                [
                    Track::new("wave", i, Property::TranslateX, vec![0.0, -w.wavelength])
                        .timing(w.duration, w.delay),
                    Track::new("wave", i, Property::Scale, vec![0.85, 1.0])
                        .timing(w.duration * 0.5, w.delay)
                        .repeat(Repeat::Mirror)
                        .easing(Easing::EaseInOut),
                ]
            })
            .collect()
    }

    fn within_bounds(&self) -> bool {
        WAVES.contains(&self.waves.len())
            && self.appearance.is_valid()
            && self.waves.iter().all(|w| {
                BASELINE.contains(w.baseline)
                    && AMPLITUDE.contains(w.amplitude)
                    && w.baseline - w.amplitude >= 0.0
                    && w.baseline + w.amplitude <= AMBIENT_CANVAS.height
                    && WAVELENGTH.contains(w.wavelength)
                    && PHASE.contains(w.phase)
                    && DURATION.contains(w.duration)
                    && DELAY.contains(w.delay)
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
    fn waves_stay_on_canvas() {
        for i in 0..200 {
            let w: SignalWaves = generate(&format!("w{i}"), IntensityLevel::Bold);
            assert!(w.within_bounds(), "w{i}");
        }
    }

    #[test]
    fn scroll_covers_one_wavelength() {
        let w: SignalWaves = generate("scroll", IntensityLevel::Medium);
        for (wave, track) in w
            .waves
            .iter()
            .zip(w.tracks().iter().filter(|t| t.property == Property::TranslateX))
        {
            assert_eq!(track.extent(), (-wave.wavelength, 0.0));
        }
    }
}
