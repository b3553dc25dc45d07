use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::occupancy::{Admission, OccupancyBand, Removal};

/// Bounded occupancy count guarded by a critical section.
///
/// Behaves like a counting semaphore with maximum `CAP` taken and given with
/// zero timeout: admission never blocks, it either succeeds or is rejected.
/// Every operation holds the critical section for O(1) work only, so readers
/// must copy the value out with [`snapshot`](Self::snapshot) before rendering.
///
/// # Const Generics
/// - `CAP`: Capacity of the space; must be non-zero (checked at compile time)
pub struct OccupancyCounter<const CAP: u16> {
    count: Mutex<Cell<u16>>,
}

impl<const CAP: u16> core::fmt::Debug for OccupancyCounter<CAP> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OccupancyCounter")
            .field("count", &self.snapshot())
            .field("capacity", &CAP)
            .finish()
    }
}

impl<const CAP: u16> Default for OccupancyCounter<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: u16> OccupancyCounter<CAP> {
    pub const CAPACITY: u16 = CAP;

    const CAPACITY_IS_POSITIVE: () = assert!(CAP > 0, "occupancy capacity must be non-zero");

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_IS_POSITIVE;
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> u16 {
        CAP
    }

    /// Admits one occupant unless the space is full.
    pub fn try_admit(&self) -> Admission {
        critical_section::with(|cs| self.try_admit_in(cs))
    }

    /// Admits one occupant inside a critical section the caller already
    /// holds, so a rejection can be paired with other state atomically.
    pub fn try_admit_in(&self, cs: CriticalSection<'_>) -> Admission {
        let count = self.count.borrow(cs);
        let current = count.get();
        if current < CAP {
            count.set(current + 1);
            Admission::Admitted(current + 1)
        } else {
            Admission::Rejected
        }
    }

    /// Removes one occupant unless the space is empty.
    pub fn try_remove(&self) -> Removal {
        critical_section::with(|cs| {
            let count = self.count.borrow(cs);
            match count.get() {
                0 => Removal::Empty,
                current => {
                    count.set(current - 1);
                    Removal::Removed(current - 1)
                }
            }
        })
    }

    /// Unconditionally empties the space.
    pub fn reset(&self) {
        critical_section::with(|cs| self.reset_in(cs));
    }

    /// Empties the space inside a critical section the caller already holds.
    pub fn reset_in(&self, cs: CriticalSection<'_>) {
        self.count.borrow(cs).set(0);
    }

    /// Returns the current count. The value may be stale by the time the
    /// caller uses it, but it was valid at some point during the call.
    pub fn snapshot(&self) -> u16 {
        critical_section::with(|cs| self.snapshot_in(cs))
    }

    pub fn snapshot_in(&self, cs: CriticalSection<'_>) -> u16 {
        self.count.borrow(cs).get()
    }

    /// Classifies the current snapshot.
    pub fn band(&self) -> OccupancyBand {
        OccupancyBand::classify(self.snapshot(), CAP)
    }
}
