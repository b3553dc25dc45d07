use crate::occupancy::{
    AlertBoard, OccupancyBand, OccupancyCounter, ResetReceiver, ResetSignal, ResetTrigger,
};

/// Owned occupancy state shared by every task.
///
/// Holds the counter, the reset token and the alert board. Tasks receive it
/// by shared reference; all mutation goes through the counter and alert
/// methods, each guarded by its own short critical section.
///
/// # Const Generics
/// - `CAP`: Capacity of the space
#[derive(Debug, Default)]
pub struct Occupancy<const CAP: u16> {
    counter: OccupancyCounter<CAP>,
    reset: ResetSignal,
    alerts: AlertBoard,
}

/// Handles produced by [`Occupancy::split`].
#[derive(Debug)]
pub struct Parts<'a, const CAP: u16> {
    /// Shared state for tasks.
    pub state: &'a Occupancy<CAP>,
    /// Interrupt-side end of the reset signal.
    pub trigger: ResetTrigger<'a>,
    /// Task-side end of the reset signal.
    pub receiver: ResetReceiver<'a>,
}

impl<const CAP: u16> Occupancy<CAP> {
    pub fn new() -> Self {
        Self {
            counter: OccupancyCounter::new(),
            reset: ResetSignal::new(),
            alerts: AlertBoard::new(),
        }
    }

    /// Splits the state into the shared view and the two reset signal ends.
    ///
    /// Taking `&mut self` guarantees a single trigger and a single receiver
    /// exist for as long as the returned parts are alive.
    pub fn split(&mut self) -> Parts<'_, CAP> {
        let state: &Self = self;
        Parts {
            state,
            trigger: ResetTrigger::new(&state.reset),
            receiver: ResetReceiver::new(&state.reset),
        }
    }

    #[inline]
    pub fn counter(&self) -> &OccupancyCounter<CAP> {
        &self.counter
    }

    #[inline]
    pub fn alerts(&self) -> &AlertBoard {
        &self.alerts
    }

    #[inline]
    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    #[inline]
    pub const fn capacity(&self) -> u16 {
        CAP
    }

    #[inline]
    pub fn band(&self) -> OccupancyBand {
        self.counter.band()
    }
}

#[cfg(test)]
mod tests {
    use crate::occupancy::{Admission, Raise, test_support::TestOccupancy};

    #[test]
    fn split_hands_out_working_signal_ends() {
        let mut occupancy = TestOccupancy::new();
        let mut parts = occupancy.split();

        assert_eq!(parts.state.counter().try_admit(), Admission::Admitted(1));
        assert_eq!(parts.trigger.raise(), Raise::Raised);
        assert!(parts.state.reset_pending());
        assert!(parts.receiver.try_take());
        assert!(!parts.state.reset_pending());
    }

    #[test]
    fn capacity_comes_from_const_generic() {
        let occupancy = TestOccupancy::new();
        assert_eq!(occupancy.capacity(), 10);
    }
}
