//! Hosted runtime: one thread per task, for simulation and tests.
//!
//! Available with the `std` feature. Every loop checks a [`Shutdown`] token,
//! the reset task parks until the interrupt side wakes it, and [`run`] joins
//! all tasks before returning.

use std::thread::{self, Thread};
use std::time::Duration;

use crate::occupancy::{
    Buzzer, Clock, EntryHandler, ExitHandler, IconAnimator, IconMatrix, Indicator,
    IndicatorDriver, Instant, Millis, Occupancy, Parts, Raise, RawInput, ResetButtonIrq,
    ResetHandler, Shutdown, StatusDisplay, StatusRenderer, Timing, ToneDriver,
    log::{debug, info},
};

/// [`Clock`] backed by [`std::time::Instant`], starting at zero.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn now(&self) -> Instant {
        // Truncation wraps like a 32-bit hardware tick.
        Instant::from_millis(self.origin.elapsed().as_millis() as u32)
    }
}

/// Polled inputs handed to [`run`].
#[derive(Debug)]
pub struct Inputs<E, X> {
    pub entry: E,
    pub exit: X,
}

/// Output collaborators handed to [`run`].
#[derive(Debug)]
pub struct Outputs<D, L, M, B> {
    pub display: D,
    pub indicator: L,
    pub icon: M,
    pub buzzer: B,
}

/// Caller-side handle while the tasks are running.
///
/// Plays the role of the interrupt: reset edges go through the same
/// debounced [`ResetButtonIrq`] an ISR would use.
pub struct Controls<'a, const CAP: u16, C>
where
    C: Clock,
{
    state: &'a Occupancy<CAP>,
    clock: &'a C,
    irq: ResetButtonIrq<'a>,
    stop: StopOnDrop<'a>,
}

impl<'a, const CAP: u16, C> core::fmt::Debug for Controls<'a, CAP, C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controls")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, C> Controls<'a, CAP, C>
where
    C: Clock,
{
    #[inline]
    pub fn state(&self) -> &'a Occupancy<CAP> {
        self.state
    }

    /// Feeds one reset-button edge through the interrupt debounce.
    pub fn reset_edge(&mut self, pin_active: bool) -> Option<Raise> {
        let raised = self.irq.on_edge(self.clock.now(), pin_active)?;
        self.wake(raised);
        Some(raised)
    }

    /// Raises the reset signal directly, bypassing the interrupt debounce.
    pub fn raise_reset(&self) -> Raise {
        let raised = self.irq.trigger().raise();
        self.wake(raised);
        raised
    }

    fn wake(&self, raised: Raise) {
        if raised.wake_required() {
            self.stop.reset_task.unpark();
        } else {
            debug!(?raised, "reset trigger collapsed");
        }
    }

    pub fn shutdown(&self) {
        self.stop.request();
    }
}

/// Requests shutdown when dropped, so a panicking body still lets the scope join.
struct StopOnDrop<'a> {
    shutdown: &'a Shutdown,
    reset_task: Thread,
}

impl StopOnDrop<'_> {
    fn request(&self) {
        self.shutdown.request();
        self.reset_task.unpark();
    }
}

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.request();
    }
}

fn every(shutdown: &Shutdown, period: Millis, mut step: impl FnMut()) {
    let period = Duration::from_millis(period.as_millis().into());
    while !shutdown.is_requested() {
        step();
        thread::sleep(period);
    }
}

/// Runs every task on its own thread until `body` returns.
///
/// Tasks: entry and exit pollers, the reset handler, and the status,
/// indicator, icon and tone consumers, each on its [`Timing`] cadence.
/// `body` runs on the calling thread with a [`Controls`] handle; once it
/// returns (or panics) shutdown is requested and all tasks are joined.
pub fn run<const CAP: u16, C, E, X, D, L, M, B, R>(
    occupancy: &mut Occupancy<CAP>,
    clock: &C,
    timing: &Timing,
    inputs: Inputs<E, X>,
    outputs: Outputs<D, L, M, B>,
    body: impl FnOnce(&mut Controls<'_, CAP, C>) -> R,
) -> R
where
    C: Clock + Sync,
    E: RawInput + Send,
    X: RawInput + Send,
    D: StatusDisplay + Send,
    L: Indicator + Send,
    M: IconMatrix + Send,
    B: Buzzer + Send,
{
    let shutdown = Shutdown::new();
    let shutdown = &shutdown;
    let timing = *timing;
    let Parts {
        state,
        trigger,
        receiver,
    } = occupancy.split();

    thread::scope(|s| {
        let reset_task = s.spawn(move || {
            let mut handler = ResetHandler::new(state, receiver);
            while !shutdown.is_requested() {
                if !handler.service() {
                    thread::park();
                }
            }
        });
        let mut controls = Controls {
            state,
            clock,
            irq: ResetButtonIrq::new(trigger, timing.reset_quiet),
            stop: StopOnDrop {
                shutdown,
                reset_task: reset_task.thread().clone(),
            },
        };

        let mut entry = EntryHandler::new(state, inputs.entry, timing.input_quiet);
        s.spawn(move || {
            every(shutdown, timing.input_poll, || {
                entry.poll(clock.now());
            })
        });

        let mut exit = ExitHandler::new(state, inputs.exit, timing.input_quiet);
        s.spawn(move || {
            every(shutdown, timing.input_poll, || {
                exit.poll(clock.now());
            })
        });

        let mut status = StatusRenderer::new(state, outputs.display, timing.reset_banner);
        s.spawn(move || {
            every(shutdown, timing.status_period, || {
                status.poll(clock.now());
            })
        });

        let mut indicator = IndicatorDriver::new(state, outputs.indicator);
        s.spawn(move || {
            every(shutdown, timing.indicator_period, || {
                indicator.poll();
            })
        });

        let mut icon = IconAnimator::new(state, outputs.icon, timing.icon_lit, timing.icon_dark);
        s.spawn(move || {
            every(shutdown, timing.icon_period, || {
                icon.poll(clock.now());
            })
        });

        let mut tone = ToneDriver::new(state, outputs.buzzer);
        s.spawn(move || {
            every(shutdown, timing.tone_period, || {
                tone.poll();
            })
        });

        info!(capacity = CAP, "occupancy tasks started");
        let out = body(&mut controls);
        controls.shutdown();
        info!("occupancy tasks stopping");
        out
    })
}
