/// Recoverable anomalies reported by occupancy operations.
///
/// None of these are fatal. They describe the physical world disagreeing with
/// the count (bouncing buttons, over- or under-counting) and are surfaced as
/// outcome values for logging and alerting, never propagated as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// Entry attempted while the space was already at capacity.
    CapacityExceeded,
    /// Exit attempted while the space was already empty.
    SpuriousRemoval,
    /// Reset raised while a previous reset was still pending.
    DuplicateResetTrigger,
}

impl core::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Anomaly::CapacityExceeded => write!(f, "entry attempted at full capacity"),
            Anomaly::SpuriousRemoval => write!(f, "exit attempted with no occupants"),
            Anomaly::DuplicateResetTrigger => write!(f, "reset raised while already pending"),
        }
    }
}

/// Errors that can occur while building a [`Timing`](crate::occupancy::Timing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A task cadence or animation frame duration is zero.
    ZeroPeriod,
    /// The input poll period is not shorter than a non-zero quiet period.
    PollNotShorterThanQuiet,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPeriod => write!(f, "task periods and frame durations must be non-zero"),
            ConfigError::PollNotShorterThanQuiet => {
                write!(f, "input poll period must be shorter than the quiet period")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn anomaly_messages_are_distinct() {
        let a = Anomaly::CapacityExceeded.to_string();
        let b = Anomaly::SpuriousRemoval.to_string();
        let c = Anomaly::DuplicateResetTrigger.to_string();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::PollNotShorterThanQuiet.to_string(),
            "input poll period must be shorter than the quiet period"
        );
    }
}
