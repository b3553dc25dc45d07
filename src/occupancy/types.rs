use crate::occupancy::Anomaly;

/// Monotonic timestamp in milliseconds since boot.
///
/// Wraps around like a 32-bit hardware tick; compare instants only through
/// [`Instant::elapsed_since`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(u32);

impl Instant {
    #[inline]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, correct across one tick wrap.
    #[inline]
    pub const fn elapsed_since(self, earlier: Instant) -> Millis {
        Millis(self.0.wrapping_sub(earlier.0))
    }

    #[inline]
    pub const fn plus(self, d: Millis) -> Instant {
        Instant(self.0.wrapping_add(d.0))
    }
}

/// Duration in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    #[inline]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Classification of the current occupancy relative to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccupancyBand {
    /// No occupants.
    Empty,
    /// At least one occupant and at least two free slots.
    Normal,
    /// Exactly one free slot.
    LastSlot,
    /// No free slots.
    Full,
}

impl OccupancyBand {
    /// Classifies `count` against `capacity`. Pure; never cached.
    pub const fn classify(count: u16, capacity: u16) -> Self {
        if count == 0 {
            OccupancyBand::Empty
        } else if count >= capacity {
            OccupancyBand::Full
        } else if count == capacity - 1 {
            OccupancyBand::LastSlot
        } else {
            OccupancyBand::Normal
        }
    }

    /// Fixed color mapping shared by the indicator and the icon.
    pub const fn indicator_color(self) -> IndicatorColor {
        match self {
            OccupancyBand::Empty => IndicatorColor::Blue,
            OccupancyBand::Normal => IndicatorColor::Green,
            OccupancyBand::LastSlot => IndicatorColor::Yellow,
            OccupancyBand::Full => IndicatorColor::Red,
        }
    }

    /// Status line shown under the occupant count.
    pub const fn message(self) -> &'static str {
        match self {
            OccupancyBand::Full => "MAXIMUM REACHED",
            OccupancyBand::LastSlot => "ONLY 1 SLOT LEFT",
            OccupancyBand::Empty | OccupancyBand::Normal => "COME IN",
        }
    }
}

/// Tri-color indicator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorColor {
    Blue,
    Green,
    Yellow,
    Red,
}

impl IndicatorColor {
    /// Red, green and blue channel levels, each on or off.
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            IndicatorColor::Blue => (false, false, true),
            IndicatorColor::Green => (false, true, false),
            IndicatorColor::Yellow => (true, true, false),
            IndicatorColor::Red => (true, false, false),
        }
    }
}

/// Animation frame of the icon matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconFrame {
    /// Arrow lit in the band color.
    Lit = 0,
    /// All pixels dark.
    Dark = 1,
}

impl IconFrame {
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn next(self) -> Self {
        match self {
            IconFrame::Lit => IconFrame::Dark,
            IconFrame::Dark => IconFrame::Lit,
        }
    }
}

/// Result of an admission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// One occupant admitted; carries the new count.
    Admitted(u16),
    /// The space was full; nothing changed.
    Rejected,
}

impl Admission {
    #[inline]
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted(_))
    }

    #[inline]
    pub fn anomaly(&self) -> Option<Anomaly> {
        match self {
            Admission::Admitted(_) => None,
            Admission::Rejected => Some(Anomaly::CapacityExceeded),
        }
    }
}

/// Result of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// One occupant removed; carries the new count.
    Removed(u16),
    /// The space was already empty; nothing changed.
    Empty,
}

impl Removal {
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }

    #[inline]
    pub fn anomaly(&self) -> Option<Anomaly> {
        match self {
            Removal::Removed(_) => None,
            Removal::Empty => Some(Anomaly::SpuriousRemoval),
        }
    }
}

/// Result of raising the reset signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raise {
    /// Token went from empty to pending; the consumer should be woken.
    Raised,
    /// Token was already pending; the raise collapsed into it.
    Collapsed,
}

impl Raise {
    /// Returns true if the caller should request a scheduling pass.
    #[inline]
    pub fn wake_required(&self) -> bool {
        matches!(self, Raise::Raised)
    }

    #[inline]
    pub fn anomaly(&self) -> Option<Anomaly> {
        match self {
            Raise::Raised => None,
            Raise::Collapsed => Some(Anomaly::DuplicateResetTrigger),
        }
    }
}

/// One-shot alerts handed from writers to presentation consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alert {
    /// An entry was rejected at capacity.
    Full = 0,
    /// The counter was just reset.
    JustReset = 1,
}

/// Presentation consumers that receive one-shot alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscriber {
    Status = 0,
    Tone = 1,
}

/// Outcome of one presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The external collaborator was invoked.
    Drawn,
    /// Nothing changed since the last cycle; no I/O performed.
    Skipped,
}

impl Refresh {
    #[inline]
    pub fn is_drawn(&self) -> bool {
        matches!(self, Refresh::Drawn)
    }
}
