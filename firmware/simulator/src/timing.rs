//! Host-side stand-in for the hardware cycle counter.
//!
//! The reference board runs its core timer at 24 MHz. [`InstantCounter`]
//! emulates that tick rate from [`std::time::Instant`], so frame pacing and the
//! FPS readout behave on the desktop the way they do on the panel.

use std::time::Instant;

use progress_demo_common::CycleCounter;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Tick counter derived from the monotonic host clock.
///
/// Reads wrap at 32 bits like the hardware counter. [`CycleCounter::reset`]
/// moves the base instant to "now".
pub struct InstantCounter {
    base: Instant,
    freq_hz: u32,
}

impl InstantCounter {
    pub fn new(freq_hz: u32) -> Self {
        Self {
            base: Instant::now(),
            freq_hz,
        }
    }
}

impl CycleCounter for InstantCounter {
    fn now(&self) -> u32 {
        let ticks = self.base.elapsed().as_nanos() * u128::from(self.freq_hz) / NANOS_PER_SEC;
        ticks as u32
    }

    fn reset(&mut self) { self.base = Instant::now(); }

    #[inline]
    fn freq_hz(&self) -> u32 { self.freq_hz }
}
