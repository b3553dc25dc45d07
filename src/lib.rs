//! A `no_std`, no-alloc occupancy control core for a space with a fixed capacity.
//!
//! This crate tracks how many occupants are present, reacts to entry/exit/reset
//! stimuli arriving from physical inputs and drives several independent output
//! channels (status display, tri-color indicator, animated icon, buzzer) from
//! the same shared state.
//!
//! # Features
//!
//! - **Zero heap allocation** - All state statically sized, capacity is a const generic
//! - **Bounded counter** - `0 <= count <= CAP` holds for every reader
//! - **Debounced inputs** - Time-based quiet period per physical input
//! - **Interrupt-safe reset** - Single-slot signal raised from an ISR, consumed by one task
//! - **Per-consumer alerts** - One-shot alerts delivered once to each subscribed view
//! - **Optional logging** - `tracing` events with the `std` feature, compiled out otherwise
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  raise   ┌──────────────┐  reset   ┌──────────────────┐
//! │ ResetButtonIrq│────────▶│ ResetSignal  │────────▶ │                  │
//! │  (ISR)        │         │  (1 slot)    │  Handler │ OccupancyCounter │
//! └──────────────┘          └──────────────┘          │  (cs-guarded)    │
//! ┌──────────────┐  debounce  +1 / -1                 │                  │
//! │ Entry / Exit │──────────────────────────────────▶ │                  │
//! └──────────────┘                                    └────────┬─────────┘
//!                                              snapshot        │
//!          ┌──────────────┬──────────────┬─────────────────────┤
//!          ▼              ▼              ▼                     ▼
//!     StatusRenderer IndicatorDriver IconAnimator          ToneDriver
//! ```
//!
//! - **Writers** serialize through one critical section per O(1) operation
//! - **Readers** copy the count out of the critical section before rendering
//! - **The ISR** only flips the reset token and never touches the counter
//! - **Alerts** (`Full`, `JustReset`) are delivered through per-subscriber slots
//!
//! # Example
//!
//! ```rust,no_run
//! use occupancy_guard::prelude::*;
//!
//! let mut occupancy = Occupancy::<10>::new();
//! let parts = occupancy.split();
//!
//! // Interrupt side: only the trigger is reachable from the ISR.
//! let mut irq = ResetButtonIrq::new(parts.trigger, Timing::DEFAULT.reset_quiet);
//!
//! // Task side: admit one occupant, then service a pending reset.
//! assert_eq!(parts.state.counter().try_admit(), Admission::Admitted(1));
//! irq.on_edge(Instant::from_millis(1_000), true);
//!
//! let mut reset = ResetHandler::new(parts.state, parts.receiver);
//! assert!(reset.service());
//! assert_eq!(parts.state.counter().snapshot(), 0);
//! ```

#![deny(unsafe_code)]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod occupancy;

pub mod prelude {
    pub use crate::occupancy::prelude::*;
}
