use crate::occupancy::{Alert, Occupancy, ResetReceiver, log::info};

/// Consumer of the reset signal.
///
/// On a pending reset it clears the token, empties the counter, drops any
/// unconsumed [`Alert::Full`] and posts [`Alert::JustReset`], all inside one
/// critical section.
pub struct ResetHandler<'a, const CAP: u16> {
    state: &'a Occupancy<CAP>,
    receiver: ResetReceiver<'a>,
}

impl<'a, const CAP: u16> core::fmt::Debug for ResetHandler<'a, CAP> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetHandler").finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16> ResetHandler<'a, CAP> {
    pub fn new(state: &'a Occupancy<CAP>, receiver: ResetReceiver<'a>) -> Self {
        Self { state, receiver }
    }

    /// Performs a pending reset. Returns false without side effects if none
    /// was pending.
    pub fn service(&mut self) -> bool {
        let state = self.state;
        let receiver = &mut self.receiver;
        let serviced = critical_section::with(|cs| {
            if !receiver.take_in(cs) {
                return false;
            }
            state.counter().reset_in(cs);
            state.alerts().discard_in(cs, Alert::Full);
            state.alerts().post_in(cs, Alert::JustReset);
            true
        });
        if serviced {
            info!(count = 0u16, "occupancy reset");
        }
        serviced
    }

    /// Blocks until a reset is pending, then performs it.
    ///
    /// `idle` is called between checks and is where the caller suspends:
    /// a wait-for-interrupt on bare metal, a thread park on a host.
    pub fn wait_and_service(&mut self, mut idle: impl FnMut()) {
        while !self.service() {
            idle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::{
        Raise, Subscriber,
        test_support::TestOccupancy,
    };

    #[test]
    fn service_without_pending_reset_is_a_no_op() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        parts.state.counter().try_admit();
        let mut handler = ResetHandler::new(parts.state, parts.receiver);

        assert!(!handler.service());
        assert_eq!(parts.state.counter().snapshot(), 1);
        assert!(!parts.state.alerts().any_pending());
    }

    #[test]
    fn pending_reset_empties_counter_and_alerts_both_views() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        for _ in 0..4 {
            parts.state.counter().try_admit();
        }
        let mut handler = ResetHandler::new(parts.state, parts.receiver);

        parts.trigger.raise();
        assert!(handler.service());
        assert_eq!(parts.state.counter().snapshot(), 0);

        let alerts = parts.state.alerts();
        assert!(alerts.take(Alert::JustReset, Subscriber::Tone));
        assert!(alerts.take(Alert::JustReset, Subscriber::Status));
    }

    #[test]
    fn double_raise_resets_once() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        let mut handler = ResetHandler::new(parts.state, parts.receiver);

        assert_eq!(parts.trigger.raise(), Raise::Raised);
        assert_eq!(parts.trigger.raise(), Raise::Collapsed);
        assert!(handler.service());
        assert!(!handler.service());
    }

    #[test]
    fn reset_drops_stale_full_alert() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        let mut handler = ResetHandler::new(parts.state, parts.receiver);

        parts.state.alerts().post(Alert::Full);
        parts.trigger.raise();
        handler.service();

        assert!(!parts.state.alerts().take(Alert::Full, Subscriber::Tone));
    }

    #[test]
    fn wait_and_service_idles_until_raised() {
        let mut occupancy = TestOccupancy::new();
        let parts = occupancy.split();
        parts.state.counter().try_admit();
        let trigger = parts.trigger;
        let mut handler = ResetHandler::new(parts.state, parts.receiver);

        let mut idles = 0;
        handler.wait_and_service(|| {
            idles += 1;
            if idles == 3 {
                trigger.raise();
            }
        });

        assert_eq!(idles, 3);
        assert_eq!(parts.state.counter().snapshot(), 0);
    }
}
