pub mod alerts;
pub mod collab;
pub mod counter;
pub mod debounce;
pub mod error;
pub mod handle;
pub(crate) mod log;
#[cfg(any(test, feature = "std"))]
pub mod runtime;
pub mod shutdown;
pub mod signal;
pub mod state;
pub mod timing;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_support;

pub use alerts::AlertBoard;
pub use collab::{
    Buzzer, Clock, FULL_SEQUENCE, IconMatrix, Indicator, RESET_SEQUENCE, RawInput, Silent,
    StatusDisplay, ToneStep,
};
pub use counter::OccupancyCounter;
pub use debounce::DebounceFilter;
pub use error::{Anomaly, ConfigError};
pub use handle::{EntryHandler, ExitHandler, ResetHandler};
pub use shutdown::Shutdown;
pub use signal::{ResetButtonIrq, ResetReceiver, ResetSignal, ResetTrigger};
pub use state::{Occupancy, Parts};
pub use timing::{DEFAULT_CAPACITY, Timing, TimingBuilder};
pub use types::{
    Admission, Alert, IconFrame, IndicatorColor, Instant, Millis, OccupancyBand, Raise, Refresh,
    Removal, Subscriber,
};
pub use view::{IconAnimator, IndicatorDriver, RESET_BANNER, StatusRenderer, TITLE, ToneDriver};

pub mod prelude {
    pub use super::{
        Admission, Alert, AlertBoard, Anomaly, Buzzer, Clock, ConfigError, DEFAULT_CAPACITY,
        DebounceFilter, EntryHandler, ExitHandler, IconAnimator, IconFrame, IconMatrix,
        Indicator, IndicatorColor, IndicatorDriver, Instant, Millis, Occupancy, OccupancyBand,
        OccupancyCounter, Parts, Raise, RawInput, Refresh, Removal, ResetButtonIrq,
        ResetHandler, ResetReceiver, ResetSignal, ResetTrigger, Shutdown, Silent,
        StatusDisplay, StatusRenderer, Subscriber, Timing, ToneDriver,
    };

    #[cfg(feature = "std")]
    pub use super::runtime::{Controls, Inputs, Outputs, StdClock, run};
}
