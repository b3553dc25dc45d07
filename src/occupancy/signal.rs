use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::occupancy::{DebounceFilter, Instant, Millis, Raise};

/// Single-slot reset token: either pending or empty.
///
/// Raising an already pending token collapses into it, so any number of
/// raises before consumption produce exactly one reset. The two ends are
/// handed out by [`Occupancy::split`](crate::occupancy::Occupancy::split):
/// a [`ResetTrigger`] for the interrupt and a [`ResetReceiver`] for the task.
pub struct ResetSignal {
    pending: Mutex<Cell<bool>>,
}

impl core::fmt::Debug for ResetSignal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetSignal")
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Default for ResetSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetSignal {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    pub(crate) fn raise(&self) -> Raise {
        critical_section::with(|cs| {
            if self.pending.borrow(cs).replace(true) {
                Raise::Collapsed
            } else {
                Raise::Raised
            }
        })
    }

    pub(crate) fn take_in(&self, cs: CriticalSection<'_>) -> bool {
        self.pending.borrow(cs).replace(false)
    }
}

/// Interrupt-side end of the reset signal.
///
/// The only operation is [`raise`](Self::raise): constant time, no
/// allocation, no access to the occupancy counter.
pub struct ResetTrigger<'a> {
    signal: &'a ResetSignal,
}

impl core::fmt::Debug for ResetTrigger<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetTrigger").finish_non_exhaustive()
    }
}

impl<'a> ResetTrigger<'a> {
    pub(crate) fn new(signal: &'a ResetSignal) -> Self {
        Self { signal }
    }

    /// Marks a reset as pending.
    ///
    /// Returns [`Raise::Raised`] when the caller should request a scheduling
    /// pass to wake the consumer.
    #[inline]
    pub fn raise(&self) -> Raise {
        self.signal.raise()
    }
}

/// Task-side end of the reset signal. Exactly one exists per signal.
pub struct ResetReceiver<'a> {
    signal: &'a ResetSignal,
}

impl core::fmt::Debug for ResetReceiver<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetReceiver").finish_non_exhaustive()
    }
}

impl<'a> ResetReceiver<'a> {
    pub(crate) fn new(signal: &'a ResetSignal) -> Self {
        Self { signal }
    }

    /// Consumes a pending reset, returning true if one was pending.
    pub fn try_take(&mut self) -> bool {
        critical_section::with(|cs| self.take_in(cs))
    }

    /// Consumes a pending reset inside a critical section the caller holds.
    pub fn take_in(&mut self, cs: CriticalSection<'_>) -> bool {
        self.signal.take_in(cs)
    }
}

/// Interrupt handler state for the reset button.
///
/// Debounces falling edges against the monotonic clock: an edge raises the
/// reset only if the pin still reads active and the quiet period elapsed
/// since the last accepted edge.
#[derive(Debug)]
pub struct ResetButtonIrq<'a> {
    trigger: ResetTrigger<'a>,
    debounce: DebounceFilter,
}

impl<'a> ResetButtonIrq<'a> {
    pub fn new(trigger: ResetTrigger<'a>, quiet_period: Millis) -> Self {
        Self {
            trigger,
            debounce: DebounceFilter::new(quiet_period),
        }
    }

    /// Handles one edge. Returns `None` if the edge was filtered out.
    pub fn on_edge(&mut self, now: Instant, pin_active: bool) -> Option<Raise> {
        if self.debounce.admit(pin_active, now) {
            Some(self.trigger.raise())
        } else {
            None
        }
    }

    #[inline]
    pub fn trigger(&self) -> &ResetTrigger<'a> {
        &self.trigger
    }
}
