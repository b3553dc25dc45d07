use core::fmt::Write;

use heapless::String;

use crate::occupancy::{
    Alert, Instant, Millis, Occupancy, OccupancyBand, Refresh, StatusDisplay, Subscriber,
    log::debug,
};

pub const TITLE: &str = "ACCESS CONTROL";
pub const RESET_BANNER: [&str; 2] = ["SYSTEM", "RESET"];

/// "OCCUPANTS: 65535" is the longest line.
type Line = String<24>;

fn occupants_line(count: u16) -> Line {
    let mut line = Line::new();
    // Cannot overflow: at most 16 bytes.
    write!(line, "OCCUPANTS: {count}").ok();
    line
}

/// Drives the status display.
///
/// Redraws when the count changes. A [`Alert::JustReset`] replaces the
/// screen with a reset banner for the hold period, after which the normal
/// screen is redrawn unconditionally.
pub struct StatusRenderer<'a, const CAP: u16, D>
where
    D: StatusDisplay,
{
    state: &'a Occupancy<CAP>,
    display: D,
    banner_hold: Millis,
    banner_since: Option<Instant>,
    last_count: Option<u16>,
}

impl<'a, const CAP: u16, D> core::fmt::Debug for StatusRenderer<'a, CAP, D>
where
    D: StatusDisplay,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StatusRenderer")
            .field("banner_since", &self.banner_since)
            .field("last_count", &self.last_count)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, D> StatusRenderer<'a, CAP, D>
where
    D: StatusDisplay,
{
    pub fn new(state: &'a Occupancy<CAP>, display: D, banner_hold: Millis) -> Self {
        Self {
            state,
            display,
            banner_hold,
            banner_since: None,
            last_count: None,
        }
    }

    pub fn poll(&mut self, now: Instant) -> Refresh {
        if let Some(since) = self.banner_since {
            if now.elapsed_since(since) < self.banner_hold {
                return Refresh::Skipped;
            }
            self.banner_since = None;
            self.last_count = None;
        }

        if self.state.alerts().take(Alert::JustReset, Subscriber::Status) {
            self.display.render_status(&RESET_BANNER, OccupancyBand::Empty);
            self.banner_since = Some(now);
            debug!("status shows reset banner");
            return Refresh::Drawn;
        }

        let count = self.state.counter().snapshot();
        if self.last_count == Some(count) {
            return Refresh::Skipped;
        }

        let band = OccupancyBand::classify(count, CAP);
        let occupants = occupants_line(count);
        self.display
            .render_status(&[TITLE, occupants.as_str(), band.message()], band);
        self.last_count = Some(count);
        debug!(count, ?band, "status redrawn");
        Refresh::Drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::test_support::{RecordingDisplay, TestOccupancy, assert_lines, at};

    fn renderer(state: &TestOccupancy) -> (StatusRenderer<'_, 10, RecordingDisplay>, RecordingDisplay) {
        let display = RecordingDisplay::default();
        let renderer = StatusRenderer::new(state, display.clone(), Millis::from_millis(1_000));
        (renderer, display)
    }

    #[test]
    fn first_cycle_draws_empty_screen() {
        let state = TestOccupancy::new();
        let (mut status, display) = renderer(&state);

        assert_eq!(status.poll(at(0)), Refresh::Drawn);
        let frame = display.frames.last().unwrap();
        assert_lines(&frame, &["ACCESS CONTROL", "OCCUPANTS: 0", "COME IN"]);
        assert_eq!(frame.1, OccupancyBand::Empty);
    }

    #[test]
    fn unchanged_count_skips_redraw() {
        let state = TestOccupancy::new();
        let (mut status, display) = renderer(&state);

        status.poll(at(0));
        assert_eq!(status.poll(at(200)), Refresh::Skipped);
        assert_eq!(display.frames.len(), 1);

        state.counter().try_admit();
        assert_eq!(status.poll(at(400)), Refresh::Drawn);
        assert_eq!(display.frames.len(), 2);
    }

    #[test]
    fn messages_follow_band() {
        let state = TestOccupancy::new();
        let (mut status, display) = renderer(&state);

        for _ in 0..9 {
            state.counter().try_admit();
        }
        status.poll(at(0));
        assert_lines(
            &display.frames.last().unwrap(),
            &["ACCESS CONTROL", "OCCUPANTS: 9", "ONLY 1 SLOT LEFT"],
        );

        state.counter().try_admit();
        status.poll(at(200));
        let frame = display.frames.last().unwrap();
        assert_lines(&frame, &["ACCESS CONTROL", "OCCUPANTS: 10", "MAXIMUM REACHED"]);
        assert_eq!(frame.1, OccupancyBand::Full);
    }

    #[test]
    fn reset_banner_is_held_then_screen_redrawn() {
        let state = TestOccupancy::new();
        let (mut status, display) = renderer(&state);

        status.poll(at(0));
        state.alerts().post(Alert::JustReset);

        assert_eq!(status.poll(at(200)), Refresh::Drawn);
        assert_lines(&display.frames.last().unwrap(), &RESET_BANNER);

        assert_eq!(status.poll(at(400)), Refresh::Skipped);
        assert_eq!(status.poll(at(1_199)), Refresh::Skipped);

        // Count is still 0, but the banner must be replaced.
        assert_eq!(status.poll(at(1_200)), Refresh::Drawn);
        assert_lines(
            &display.frames.last().unwrap(),
            &["ACCESS CONTROL", "OCCUPANTS: 0", "COME IN"],
        );
        assert_eq!(display.frames.len(), 3);
    }

    #[test]
    fn reset_alert_is_consumed_once() {
        let state = TestOccupancy::new();
        let (mut status, _display) = renderer(&state);

        state.alerts().post(Alert::JustReset);
        status.poll(at(0));
        assert!(!state.alerts().is_pending(Alert::JustReset, Subscriber::Status));
        assert!(state.alerts().is_pending(Alert::JustReset, Subscriber::Tone));
    }

    #[test]
    fn occupants_line_fits_largest_count() {
        assert_eq!(occupants_line(u16::MAX).as_str(), "OCCUPANTS: 65535");
    }
}
