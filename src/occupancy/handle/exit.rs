use crate::occupancy::{
    DebounceFilter, Instant, Millis, Occupancy, RawInput, Removal,
    log::{debug, info},
};

/// Periodic poller of the exit input.
///
/// Each accepted press attempts to remove one occupant. Removing from an
/// empty space is logged and otherwise ignored.
pub struct ExitHandler<'a, const CAP: u16, I>
where
    I: RawInput,
{
    state: &'a Occupancy<CAP>,
    input: I,
    debounce: DebounceFilter,
}

impl<'a, const CAP: u16, I> core::fmt::Debug for ExitHandler<'a, CAP, I>
where
    I: RawInput,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExitHandler")
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, I> ExitHandler<'a, CAP, I>
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

    pub fn poll(&mut self, now: Instant) -> Option<Removal> {
        let raw = self.input.is_active();
        if !self.debounce.admit(raw, now) {
            return None;
        }

        let outcome = self.state.counter().try_remove();
        match outcome {
            Removal::Removed(_) => info!(?outcome, "occupant left"),
            Removal::Empty => debug!("exit ignored: space is empty"),
        }
        Some(outcome)
    }
}
