//! Presentation consumers.
//!
//! Each consumer runs on its own cadence, copies the count out with a
//! snapshot, classifies it and calls its collaborator only when its view
//! changed. None of them hold the counter's critical section while rendering.

mod icon;
mod indicator;
mod status;
mod tone;

pub use icon::IconAnimator;
pub use indicator::IndicatorDriver;
pub use status::{RESET_BANNER, StatusRenderer, TITLE};
pub use tone::ToneDriver;
