use crate::occupancy::{
    Admission, Alert, DebounceFilter, Instant, Millis, Occupancy, RawInput,
    log::{info, warn},
};

/// Periodic poller of the entry input.
///
/// Each accepted press attempts to admit one occupant. A rejection at
/// capacity posts [`Alert::Full`] for the tone driver.
pub struct EntryHandler<'a, const CAP: u16, I>
where
    I: RawInput,
{
    state: &'a Occupancy<CAP>,
    input: I,
    debounce: DebounceFilter,
}

impl<'a, const CAP: u16, I> core::fmt::Debug for EntryHandler<'a, CAP, I>
where
    I: RawInput,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntryHandler")
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, I> EntryHandler<'a, CAP, I>
where
    I: RawInput,
{
    pub fn new(state: &'a Occupancy<CAP>, input: I, quiet_period: Millis) -> Self {
        Self {
            state,
            input,
            debounce: DebounceFilter::new(quiet_period),
        }
    }

    /// Samples the input once. Returns the admission outcome if the sample
    /// was an accepted press.
    pub fn poll(&mut self, now: Instant) -> Option<Admission> {
        let raw = self.input.is_active();
        if !self.debounce.admit(raw, now) {
            return None;
        }

        let state = self.state;
        let outcome = critical_section::with(|cs| {
            let outcome = state.counter().try_admit_in(cs);
            if outcome == Admission::Rejected {
                state.alerts().post_in(cs, Alert::Full);
            }
            outcome
        });
        match outcome {
            Admission::Admitted(_) => info!(?outcome, "occupant entered"),
            Admission::Rejected => warn!(capacity = CAP, "entry rejected: space is full"),
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::{
        ResetHandler, Subscriber,
        test_support::{ScriptedInput, TestOccupancy, at},
    };

    fn handler<'a>(
        state: &'a TestOccupancy,
        input: &ScriptedInput,
    ) -> EntryHandler<'a, 10, ScriptedInput> {
        EntryHandler::new(state, input.clone(), Millis::from_millis(250))
    }

    #[test]
    fn idle_input_does_nothing() {
        let state = TestOccupancy::new();
        let input = ScriptedInput::default();
        let mut entry = handler(&state, &input);

        assert_eq!(entry.poll(at(1_000)), None);
        assert_eq!(state.counter().snapshot(), 0);
    }

    #[test]
    fn held_press_admits_once_per_quiet_period() {
        let state = TestOccupancy::new();
        let input = ScriptedInput::default();
        let mut entry = handler(&state, &input);

        input.press();
        assert_eq!(entry.poll(at(1_000)), Some(Admission::Admitted(1)));
        assert_eq!(entry.poll(at(1_010)), None);
        assert_eq!(entry.poll(at(1_240)), None);
        assert_eq!(entry.poll(at(1_260)), Some(Admission::Admitted(2)));
    }

    #[test]
    fn rejection_posts_full_alert() {
        let state = TestOccupancy::new();
        for _ in 0..10 {
            state.counter().try_admit();
        }
        let input = ScriptedInput::default();
        let mut entry = handler(&state, &input);

        input.press();
        assert_eq!(entry.poll(at(0)), Some(Admission::Rejected));
        assert_eq!(state.counter().snapshot(), 10);
        assert!(state.alerts().take(Alert::Full, Subscriber::Tone));
    }

    #[test]
    fn admission_does_not_post_alert() {
        let state = TestOccupancy::new();
        let input = ScriptedInput::default();
        let mut entry = handler(&state, &input);

        input.press();
        entry.poll(at(0));
        assert!(!state.alerts().any_pending());
    }

    #[test]
    fn reset_after_rejection_leaves_no_stale_full_alert() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        for _ in 0..10 {
            parts.state.counter().try_admit();
        }
        let input = ScriptedInput::default();
        let mut entry = handler(parts.state, &input);
        let mut reset = ResetHandler::new(parts.state, parts.receiver);

        input.press();
        assert_eq!(entry.poll(at(0)), Some(Admission::Rejected));
        assert!(parts.state.alerts().is_pending(Alert::Full, Subscriber::Tone));

        parts.trigger.raise();
        assert!(reset.service());
        assert!(!parts.state.alerts().is_pending(Alert::Full, Subscriber::Tone));
        assert!(!parts.state.alerts().take(Alert::Full, Subscriber::Tone));
        assert_eq!(entry.poll(at(300)), Some(Admission::Admitted(1)));
        assert!(!parts.state.alerts().is_pending(Alert::Full, Subscriber::Tone));
    }
}
