//! Interfaces to the external collaborators driven by the occupancy tasks.
//!
//! Pixel rendering, tone synthesis and peripheral setup live behind these
//! traits; the core only calls them with a band, a frame or a tone.

use crate::occupancy::{Alert, IconFrame, Instant, Millis, OccupancyBand};

/// Monotonic millisecond clock.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// A physical input sampled by polling (entry/exit buttons).
pub trait RawInput {
    /// Returns true while the input is actuated.
    fn is_active(&mut self) -> bool;
}

/// Textual status display.
pub trait StatusDisplay {
    /// Draws `lines` top to bottom. Expected to finish within one status period.
    fn render_status(&mut self, lines: &[&str], highlight: OccupancyBand);
}

/// Tri-color indicator; see [`OccupancyBand::indicator_color`] for the mapping.
pub trait Indicator {
    fn set_indicator_color(&mut self, band: OccupancyBand);
}

/// Animated icon matrix.
pub trait IconMatrix {
    fn draw_icon(&mut self, band: OccupancyBand, frame: IconFrame);
}

/// One step of an alert sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStep {
    Tone { frequency_hz: u16, duration: Millis },
    Rest(Millis),
}

const fn tone(frequency_hz: u16, ms: u32) -> ToneStep {
    ToneStep::Tone {
        frequency_hz,
        duration: Millis::from_millis(ms),
    }
}

const fn rest(ms: u32) -> ToneStep {
    ToneStep::Rest(Millis::from_millis(ms))
}

/// Played once when an entry is rejected at capacity.
pub const FULL_SEQUENCE: &[ToneStep] = &[tone(200, 200), rest(100)];

/// Played once after a reset: low-high twice.
pub const RESET_SEQUENCE: &[ToneStep] = &[
    tone(100, 100),
    tone(200, 100),
    rest(50),
    tone(100, 100),
    tone(200, 100),
    rest(50),
];

impl Alert {
    pub const fn sequence(self) -> &'static [ToneStep] {
        match self {
            Alert::Full => FULL_SEQUENCE,
            Alert::JustReset => RESET_SEQUENCE,
        }
    }
}

/// Audible output. Calls block for their own duration.
pub trait Buzzer {
    fn play_tone(&mut self, frequency_hz: u16, duration: Millis);

    /// Stays silent for `duration`.
    fn rest(&mut self, duration: Millis);

    fn play_alert_sequence(&mut self, alert: Alert) {
        for step in alert.sequence() {
            match *step {
                ToneStep::Tone {
                    frequency_hz,
                    duration,
                } => self.play_tone(frequency_hz, duration),
                ToneStep::Rest(duration) => self.rest(duration),
            }
        }
    }
}

/// Buzzer that discards every tone.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Buzzer for Silent {
    fn play_tone(&mut self, _frequency_hz: u16, _duration: Millis) {}
    fn rest(&mut self, _duration: Millis) {}
}
