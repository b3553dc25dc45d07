//! Test support utilities - only compiled in test builds.

use std::{
    string::{String, ToString},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU32, Ordering},
    },
    vec::Vec,
};

use crate::occupancy::{
    Buzzer, Clock, DEFAULT_CAPACITY, IconFrame, IconMatrix, Indicator, Instant, Millis,
    Occupancy, OccupancyBand, RawInput, StatusDisplay,
};

/// Standard test configuration: capacity 10
pub type TestOccupancy = Occupancy<DEFAULT_CAPACITY>;

/// Shared, cloneable log of collaborator calls.
#[derive(Debug)]
pub struct Recorder<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> Recorder<T> {
    pub fn push(&self, item: T) {
        self.0.lock().unwrap().push(item);
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<T> {
        self.0.lock().unwrap().last().cloned()
    }
}

/// Clock advanced by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU32,
}

impl ManualClock {
    pub fn at(ms: u32) -> Self {
        Self {
            now: AtomicU32::new(ms),
        }
    }

    pub fn advance(&self, ms: u32) -> Instant {
        let now = self.now.fetch_add(ms, Ordering::SeqCst).wrapping_add(ms);
        Instant::from_millis(now)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now.load(Ordering::SeqCst))
    }
}

/// Input whose level is set by the test; clones share the level.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    active: Arc<AtomicBool>,
}

impl ScriptedInput {
    pub fn press(&self) {
        self.active.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl RawInput for ScriptedInput {
    fn is_active(&mut self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

pub type StatusFrame = (Vec<String>, OccupancyBand);

#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    pub frames: Recorder<StatusFrame>,
}

impl StatusDisplay for RecordingDisplay {
    fn render_status(&mut self, lines: &[&str], highlight: OccupancyBand) {
        let lines = lines.iter().map(|l| l.to_string()).collect();
        self.frames.push((lines, highlight));
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingIndicator {
    pub bands: Recorder<OccupancyBand>,
}

impl Indicator for RecordingIndicator {
    fn set_indicator_color(&mut self, band: OccupancyBand) {
        self.bands.push(band);
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingIcon {
    pub draws: Recorder<(OccupancyBand, IconFrame)>,
}

impl IconMatrix for RecordingIcon {
    fn draw_icon(&mut self, band: OccupancyBand, frame: IconFrame) {
        self.draws.push((band, frame));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerEvent {
    Tone(u16, Millis),
    Rest(Millis),
}

#[derive(Debug, Default, Clone)]
pub struct RecordingBuzzer {
    pub events: Recorder<BuzzerEvent>,
}

impl Buzzer for RecordingBuzzer {
    fn play_tone(&mut self, frequency_hz: u16, duration: Millis) {
        self.events.push(BuzzerEvent::Tone(frequency_hz, duration));
    }

    fn rest(&mut self, duration: Millis) {
        self.events.push(BuzzerEvent::Rest(duration));
    }
}

/// Asserts the recorded status frame has the given lines.
pub fn assert_lines(frame: &StatusFrame, expected: &[&str]) {
    let lines: Vec<&str> = frame.0.iter().map(String::as_str).collect();
    assert_eq!(lines, expected);
}

/// Shorthand for a millisecond instant.
pub fn at(ms: u32) -> Instant {
    Instant::from_millis(ms)
}
