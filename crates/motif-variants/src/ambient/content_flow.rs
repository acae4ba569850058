//! `contentFlow` — curved horizontal streams carrying packets across the
//! page.
//!
//! Each stream is a cubic curve from the left edge to the right edge around
//! its baseline. The amplitude is capped by the distance to the nearer canvas
//! edge, so a curve never leaves the canvas.

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

    pub const STREAMS: RangeInclusive<usize> = 3..=5;
    pub const PACKETS: RangeInclusive<usize> = 2..=4;
    pub const BASELINE: Span = Span::new(120.0, 680.0);
    pub const AMPLITUDE: Span = Span::new(40.0, 160.0);
    pub const DASH: Span = Span::new(6.0, 18.0);
    pub const DURATION: Span = Span::new(6.0, 12.0);
    pub const DELAY: Span = Span::new(0.0, 3.0);
    pub const PHASE: Span = Span::new(0.0, 1.0);
}

use ranges::{AMPLITUDE, BASELINE, DASH, DELAY, DURATION, PACKETS, PHASE, STREAMS};

const BASE_OPACITY: f64 = 0.18;
const BASE_STROKE: f64 = 1.25;

/// One stream path and its packet timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    pub baseline: f64,
    pub amplitude: f64,
    pub dash: f64,
    pub packets: usize,
    /// Seconds for a packet to cross the canvas.
    pub duration: f64,
    pub delay: f64,
    /// Starting position of the first packet along the path, `[0, 1]`.
    pub phase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentFlow {
    pub streams: Vec<Stream>,
    pub appearance: Appearance,
}

impl Variant for ContentFlow {
    const ID: VariantId = VariantId::ContentFlow;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self {
        let n = scope.stream("count").count(&STREAMS);
        let mut layout = scope.stream("layout");
        let mut timing = scope.stream("timing");

        let streams = (0..n)
            .map(|_| {
                let baseline = layout.float_in(BASELINE);
                let headroom = baseline.min(AMBIENT_CANVAS.height - baseline);
                let amplitude = layout.float_in(AMPLITUDE).min(headroom);
                let dash = layout.float_in(DASH);
                let packets = layout.count(&PACKETS);
                Stream {
                    baseline,
                    amplitude,
                    dash,
                    packets,
                    duration: timing.float_in(DURATION),
                    delay: timing.float_in(DELAY),
                    phase: timing.float_in(PHASE),
                }
            })
            .collect();

        Self { streams, appearance: Appearance::scaled(BASE_OPACITY, BASE_STROKE, level) }
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn tracks(&self) -> Vec<Track> {
        let mut tracks = Vec::new();
        let mut packet = 0;
        for (i, s) in self.streams.iter().enumerate() {
            tracks.push(
                Track::new("stream", i, Property::DashOffset, vec![0.0, -s.dash * 4.0])
                    .timing(s.duration, s.delay),
            );
            for j in 0..s.packets {
                let start = (s.phase + j as f64 / s.packets as f64).fract();
                tracks.push(
                    Track::new("packet", packet, Property::Progress, vec![start, start + 1.0])
                        .timing(s.duration, s.delay),
                );
                tracks.push(
                    Track::new("packet", packet, Property::Opacity, vec![0.0, 1.0, 1.0, 0.0])
                        .timing(s.duration, s.delay)
                        .easing(Easing::EaseInOut),
                );
                packet += 1;
            }
            tracks.push(
                Track::new("stream", i, Property::Opacity, vec![0.6, 1.0])
                    .timing(s.duration * 0.5, s.delay)
                    .repeat(Repeat::Mirror),
            );
        }
        tracks
    }

    fn within_bounds(&self) -> bool {
        STREAMS.contains(&self.streams.len())
            && self.appearance.is_valid()
            && self.streams.iter().all(|s| {
                BASELINE.contains(s.baseline)
                    && AMPLITUDE.contains(s.amplitude)
                    && s.baseline - s.amplitude >= 0.0
                    && s.baseline + s.amplitude <= AMBIENT_CANVAS.height
                    && DASH.contains(s.dash)
                    && PACKETS.contains(&s.packets)
                    && DURATION.contains(s.duration)
                    && DELAY.contains(s.delay)
                    && PHASE.contains(s.phase)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
