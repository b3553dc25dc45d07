use core::cell::RefCell;

use bitmaps::Bitmap;
use critical_section::{CriticalSection, Mutex};

use crate::occupancy::{Alert, Subscriber};

const SUBSCRIBERS: usize = 2;
const ALERTS: usize = 2;
const SLOTS: usize = SUBSCRIBERS * ALERTS;

/// Consumers that must each observe an alert exactly once.
const fn routes(alert: Alert) -> &'static [Subscriber] {
    match alert {
        Alert::Full => &[Subscriber::Tone],
        Alert::JustReset => &[Subscriber::Status, Subscriber::Tone],
    }
}

#[inline]
const fn slot(alert: Alert, subscriber: Subscriber) -> usize {
    alert as usize * SUBSCRIBERS + subscriber as usize
}

/// One-shot alert mailboxes, one single-slot channel per (alert, subscriber).
///
/// Posting an alert fills the slot of every subscriber routed to it; each
/// subscriber clears only its own slot when it takes the alert, so one
/// consumer can never hide the event from another. Posting into a full slot
/// collapses, like the reset token.
pub struct AlertBoard {
    pending: Mutex<RefCell<Bitmap<SLOTS>>>,
}

impl core::fmt::Debug for AlertBoard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AlertBoard").finish_non_exhaustive()
    }
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertBoard {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Bitmap::new())),
        }
    }

    pub fn post(&self, alert: Alert) {
        critical_section::with(|cs| self.post_in(cs, alert));
    }

    pub fn post_in(&self, cs: CriticalSection<'_>, alert: Alert) {
        let mut pending = self.pending.borrow_ref_mut(cs);
        for &subscriber in routes(alert) {
            pending.set(slot(alert, subscriber), true);
        }
    }

    /// Takes `alert` for `subscriber`, returning true if it was pending.
    ///
    /// Subscribers not routed to the alert never see it.
    pub fn take(&self, alert: Alert, subscriber: Subscriber) -> bool {
        critical_section::with(|cs| {
            self.pending
                .borrow_ref_mut(cs)
                .set(slot(alert, subscriber), false)
        })
    }

    /// Drops `alert` for every subscriber that has not consumed it yet.
    pub fn discard_in(&self, cs: CriticalSection<'_>, alert: Alert) {
        let mut pending = self.pending.borrow_ref_mut(cs);
        for &subscriber in routes(alert) {
            pending.set(slot(alert, subscriber), false);
        }
    }

    pub fn is_pending(&self, alert: Alert, subscriber: Subscriber) -> bool {
        critical_section::with(|cs| self.pending.borrow_ref(cs).get(slot(alert, subscriber)))
    }

    pub fn any_pending(&self) -> bool {
        critical_section::with(|cs| !self.pending.borrow_ref(cs).is_empty())
    }
}
