use crate::occupancy::{ConfigError, Millis};

/// Capacity used when none is chosen explicitly.
pub const DEFAULT_CAPACITY: u16 = 10;

const fn ms(v: u32) -> Millis {
    Millis::from_millis(v)
}

/// Quiet periods, task cadences and animation timing.
///
/// Capacity is not part of this struct; it is the `CAP` const generic of
/// [`Occupancy`](crate::occupancy::Occupancy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Debounce quiet period for the entry and exit inputs.
    pub input_quiet: Millis,
    /// Debounce quiet period applied by the reset interrupt.
    pub reset_quiet: Millis,
    /// Poll period of the entry and exit handlers.
    pub input_poll: Millis,
    pub status_period: Millis,
    pub indicator_period: Millis,
    pub icon_period: Millis,
    pub tone_period: Millis,
    /// How long the icon shows its lit frame.
    pub icon_lit: Millis,
    /// How long the icon shows its dark frame.
    pub icon_dark: Millis,
    /// How long the status display holds the reset banner.
    pub reset_banner: Millis,
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Timing {
    pub const DEFAULT: Timing = Timing {
        input_quiet: ms(250),
        reset_quiet: ms(300),
        input_poll: ms(10),
        status_period: ms(200),
        indicator_period: ms(200),
        icon_period: ms(50),
        tone_period: ms(50),
        icon_lit: ms(1000),
        icon_dark: ms(500),
        reset_banner: ms(1000),
    };

    pub fn builder() -> TimingBuilder {
        TimingBuilder {
            timing: Self::DEFAULT,
        }
    }

    /// Checks that every cadence is non-zero and inputs poll faster than
    /// they debounce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            self.input_poll,
            self.status_period,
            self.indicator_period,
            self.icon_period,
            self.tone_period,
            self.icon_lit,
            self.icon_dark,
        ];
        if periods.iter().any(|p| p.is_zero()) {
            return Err(ConfigError::ZeroPeriod);
        }
        if !self.input_quiet.is_zero() && self.input_poll >= self.input_quiet {
            return Err(ConfigError::PollNotShorterThanQuiet);
        }
        Ok(())
    }
}

/// Builder for [`Timing`], starting from [`Timing::DEFAULT`].
#[derive(Debug, Clone, Copy)]
pub struct TimingBuilder {
    timing: Timing,
}

impl TimingBuilder {
    pub fn input_quiet(mut self, quiet: Millis) -> Self {
        self.timing.input_quiet = quiet;
        self
    }

    pub fn reset_quiet(mut self, quiet: Millis) -> Self {
        self.timing.reset_quiet = quiet;
        self
    }

    pub fn input_poll(mut self, period: Millis) -> Self {
        self.timing.input_poll = period;
        self
    }

    /// Sets the status, indicator, icon and tone cadences at once.
    pub fn output_periods(
        mut self,
        status: Millis,
        indicator: Millis,
        icon: Millis,
        tone: Millis,
    ) -> Self {
        self.timing.status_period = status;
        self.timing.indicator_period = indicator;
        self.timing.icon_period = icon;
        self.timing.tone_period = tone;
        self
    }

    pub fn icon_frames(mut self, lit: Millis, dark: Millis) -> Self {
        self.timing.icon_lit = lit;
        self.timing.icon_dark = dark;
        self
    }

    pub fn reset_banner(mut self, hold: Millis) -> Self {
        self.timing.reset_banner = hold;
        self
    }

    pub fn build(self) -> Result<Timing, ConfigError> {
        self.timing.validate()?;
        Ok(self.timing)
    }
}
