use crate::occupancy::{Instant, Millis};

/// Time-based debounce for one physical input.
///
/// A raw "active" reading becomes a logical event only if more than
/// `quiet_period` elapsed since the last accepted event. The first active
/// reading after construction is always accepted.
#[derive(Debug, Clone, Copy)]
pub struct DebounceFilter {
    last_event: Option<Instant>,
    quiet_period: Millis,
}

impl DebounceFilter {
    pub const fn new(quiet_period: Millis) -> Self {
        Self {
            last_event: None,
            quiet_period,
        }
    }

    /// Returns true if this reading is a new logical event.
    ///
    /// Records `now` as the last event time on acceptance. A quiet period of
    /// zero accepts every active reading at a distinct instant.
    pub fn admit(&mut self, raw_active: bool, now: Instant) -> bool {
        if !raw_active {
            return false;
        }
        if let Some(last) = self.last_event {
            if now.elapsed_since(last) <= self.quiet_period {
                return false;
            }
        }
        self.last_event = Some(now);
        true
    }

    #[inline]
    pub fn quiet_period(&self) -> Millis {
        self.quiet_period
    }

    #[inline]
    pub fn last_event(&self) -> Option<Instant> {
        self.last_event
    }
}
