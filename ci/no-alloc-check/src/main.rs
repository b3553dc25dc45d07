//! Firmware-shaped link check: fails to build if `occupancy-guard` without
//! features pulls in `alloc`.
//!
//! ```text
//! cargo build --manifest-path ci/no-alloc-check/Cargo.toml --target thumbv7em-none-eabihf
//! ```

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use occupancy_guard::prelude::*;

struct SingleCore;
critical_section::set_impl!(SingleCore);

// SAFETY: the check binary never runs; there is nothing to mask.
unsafe impl critical_section::Impl for SingleCore {
    unsafe fn acquire() -> critical_section::RawRestoreState {}
    unsafe fn release(_: critical_section::RawRestoreState) {}
}

struct Pressed;

impl RawInput for Pressed {
    fn is_active(&mut self) -> bool {
        true
    }
}

struct Blank;

impl StatusDisplay for Blank {
    fn render_status(&mut self, _lines: &[&str], _highlight: OccupancyBand) {}
}

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    let mut occupancy = Occupancy::<DEFAULT_CAPACITY>::new();
    let parts = occupancy.split();
    let timing = Timing::DEFAULT;

    let mut entry = EntryHandler::new(parts.state, Pressed, timing.input_quiet);
    let mut exit = ExitHandler::new(parts.state, Pressed, timing.input_quiet);
    let mut reset = ResetHandler::new(parts.state, parts.receiver);
    let mut status = StatusRenderer::new(parts.state, Blank, timing.reset_banner);
    let mut tone = ToneDriver::new(parts.state, Silent);
    let mut irq = ResetButtonIrq::new(parts.trigger, timing.reset_quiet);

    let mut tick = 0u32;
    loop {
        let now = Instant::from_millis(tick);
        entry.poll(now);
        exit.poll(now);
        irq.on_edge(now, tick % 1_000 == 0);
        reset.service();
        status.poll(now);
        tone.poll();
        tick = tick.wrapping_add(1);
    }
}

#[panic_handler]
fn panic(_: &PanicInfo) -> ! {
    loop {}
}
