//! Cycle counter abstraction and busy-wait pacing.
//!
//! The demo paces itself and estimates its frame rate from a free-running
//! hardware tick counter (the PIC32 core timer, the Cortex-M DWT `CYCCNT`, or
//! an emulation of either on the host). Software only ever reads it or resets
//! it to zero.
//!
//! # Overflow Handling
//!
//! Counters are 32 bits wide and wrap. [`elapsed`] uses `wrapping_sub`, which
//! is correct for any interval shorter than one full wrap (~179 s at 24 MHz,
//! ~28.6 s at 150 MHz).

/// A monotonically increasing, resettable tick counter.
pub trait CycleCounter {
    /// Current tick count.
    fn now(&self) -> u32;

    /// Reset the count to zero.
    fn reset(&mut self);

    /// Tick rate in Hz.
    fn freq_hz(&self) -> u32;
}

impl<C: CycleCounter + ?Sized> CycleCounter for &mut C {
    #[inline]
    fn now(&self) -> u32 { (**self).now() }

    #[inline]
    fn reset(&mut self) { (**self).reset(); }

    #[inline]
    fn freq_hz(&self) -> u32 { (**self).freq_hz() }
}

/// Ticks between two counter reads, tolerant of one wrap.
#[inline]
pub const fn elapsed(
    start: u32,
    end: u32,
) -> u32 {
    end.wrapping_sub(start)
}

/// Spin until the counter reads at least `target`.
///
/// Blocks the calling core completely: there is no yielding, no timeout and no
/// cancellation. Callers reset the counter first so `target` is reached
/// before the counter wraps.
#[inline]
pub fn busy_wait_until<C>(
    counter: &C,
    target: u32,
) where
    C: CycleCounter + ?Sized,
{
    while counter.now() < target {
        core::hint::spin_loop();
    }
}
