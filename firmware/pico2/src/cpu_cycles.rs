//! Cortex-M33 DWT cycle counter as the demo's tick source.
//!
//! `CYCCNT` counts core clock cycles, so the tick rate is `clk_sys` (150 MHz
//! on a stock RP2350) rather than the 24 MHz of the reference board. Frame
//! pacing and the FPS readout scale with [`CycleCounter::freq_hz`], so the
//! timing stays correct at any clock.
//!
//! # Overflow Handling
//!
//! The counter is 32 bits and wraps every ~28.6 s at 150 MHz. The demo resets
//! it at the start of every animation step, so a step never spans a wrap.

use cortex_m::peripheral::{DCB, DWT};
use progress_demo_common::CycleCounter;

/// Lowest clock the counter accepts as plausible.
const MIN_FREQ_HZ: u32 = 1_000_000;

/// Owner of the DWT unit, counting core cycles.
pub struct DwtCounter {
    dwt: DWT,
    freq_hz: u32,
}

impl DwtCounter {
    /// Enable trace and the cycle counter, starting from zero.
    ///
    /// `freq_hz` is the core clock, e.g. `embassy_rp::clocks::clk_sys_freq()`.
    pub fn new(
        mut dcb: DCB,
        mut dwt: DWT,
        freq_hz: u32,
    ) -> Self {
        // DEMCR.TRCENA must be set before DWT registers respond
        dcb.enable_trace();
        dwt.set_cycle_count(0);
        dwt.enable_cycle_counter();

        Self {
            dwt,
            freq_hz: freq_hz.max(MIN_FREQ_HZ),
        }
    }
}

impl CycleCounter for DwtCounter {
    #[inline]
    fn now(&self) -> u32 { DWT::cycle_count() }

    #[inline]
    fn reset(&mut self) { self.dwt.set_cycle_count(0); }

    #[inline]
    fn freq_hz(&self) -> u32 { self.freq_hz }
}
