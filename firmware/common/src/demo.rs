//! Demo sequencer.
//!
//! Drives the fixed start-up sequence and the progress-bar animation:
//!
//! ```text
//! HardwareReady -> Cleared -> Greeted -> Animating(0) -> Animating(2) -> ... -> Animating(100) -> Idle
//!                                                                                                  ^   |
//!                                                                                                  +---+
//! ```
//!
//! Hardware bring-up (clocks, pins, SPI, panel init) happens in the front-end
//! before a [`Demo`] exists. [`Demo::new`] takes ownership of the initialized
//! display, cycle counter and heartbeat pin, so a sequencer always starts in
//! [`DemoState::HardwareReady`].
//!
//! Each animation step resets the counter, redraws the bar and the FPS
//! readout, toggles the heartbeat pin and then spins until one frame interval
//! (`freq_hz / 10` ticks, 100 ms) has passed. The step that draws the 100 % bar
//! moves the sequencer to [`DemoState::Idle`], which redraws only the FPS readout, with
//! no delay, for as long as it is stepped.
//!
//! Draw and pin errors are discarded; there is nothing to recover to.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::StatefulOutputPin;

use crate::config::{
    BAR_BG,
    BAR_FG,
    BAR_HEIGHT,
    BAR_LENGTH,
    BAR_POS,
    CLEAR_COLOR,
    FILL_MAX,
    FILL_STEP,
    FPS_BG,
    FPS_FG,
    FPS_POS,
    GREETING,
    GREETING_BG,
    GREETING_FG,
    GREETING_POS,
    frame_ticks,
};
use crate::timing::{CycleCounter, busy_wait_until};
use crate::widgets::{clear_screen, draw_fps, draw_progress_bar, draw_string};

/// Where the sequencer is in the demo.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoState {
    /// Peripherals are initialized, nothing drawn yet.
    HardwareReady,
    /// Screen cleared to black.
    Cleared,
    /// Greeting drawn.
    Greeted,
    /// Next animation step will draw the bar at `fill` percent.
    Animating { fill: u16 },
    /// Animation finished; only the FPS readout is refreshed.
    Idle,
}

impl DemoState {
    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HardwareReady => "hardware-ready",
            Self::Cleared => "cleared",
            Self::Greeted => "greeted",
            Self::Animating { .. } => "animating",
            Self::Idle => "idle",
        }
    }

    /// State that follows this one.
    pub const fn next(self) -> Self {
        match self {
            Self::HardwareReady => Self::Cleared,
            Self::Cleared => Self::Greeted,
            Self::Greeted => Self::Animating { fill: 0 },
            Self::Animating { fill } if fill + FILL_STEP > FILL_MAX => Self::Idle,
            Self::Animating { fill } => Self::Animating { fill: fill + FILL_STEP },
            Self::Idle => Self::Idle,
        }
    }
}

/// The demo, owning everything it draws with and times against.
pub struct Demo<D, C, P> {
    display: D,
    counter: C,
    heartbeat: P,
    state: DemoState,
    frames: u32,
}

impl<D, C, P> Demo<D, C, P>
where
    D: DrawTarget<Color = Rgb565>,
    C: CycleCounter,
    P: StatefulOutputPin,
{
    /// Take ownership of brought-up hardware.
    pub fn new(
        display: D,
        counter: C,
        heartbeat: P,
    ) -> Self {
        Self {
            display,
            counter,
            heartbeat,
            state: DemoState::HardwareReady,
            frames: 0,
        }
    }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> DemoState { self.state }

    /// Number of animation steps and idle refreshes performed so far.
    #[inline]
    pub const fn frames(&self) -> u32 { self.frames }

    /// Borrow the display, e.g. to present it in a simulator window.
    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    /// Borrow the cycle counter.
    #[inline]
    pub const fn counter(&self) -> &C { &self.counter }

    /// Give the hardware back.
    pub fn release(self) -> (D, C, P) { (self.display, self.counter, self.heartbeat) }

    /// Perform one transition and return the new state.
    pub fn step(&mut self) -> DemoState {
        let prev = self.state;
        match prev {
            DemoState::HardwareReady => {
                clear_screen(&mut self.display, CLEAR_COLOR).ok();
            }
            DemoState::Cleared => {
                draw_string(&mut self.display, GREETING_POS, GREETING, GREETING_FG, GREETING_BG).ok();
            }
            DemoState::Greeted => {}
            DemoState::Animating { fill } => self.animation_step(fill),
            DemoState::Idle => {
                self.draw_fps();
                self.frames = self.frames.wrapping_add(1);
            }
        }

        self.state = prev.next();

        #[cfg(feature = "defmt")]
        {
            if core::mem::discriminant(&prev) != core::mem::discriminant(&self.state) {
                defmt::info!("demo: {} -> {}", prev.name(), self.state.name());
            }
        }

        self.state
    }

    /// Step forever.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn animation_step(
        &mut self,
        fill: u16,
    ) {
        self.counter.reset();
        draw_progress_bar(&mut self.display, BAR_POS, BAR_HEIGHT, fill, BAR_FG, BAR_LENGTH, BAR_BG).ok();
        self.draw_fps();
        self.heartbeat.toggle().ok();
        self.frames = self.frames.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::trace!("frame {}: fill {}%", self.frames, fill);

        busy_wait_until(&self.counter, frame_ticks(self.counter.freq_hz()));
    }

    fn draw_fps(&mut self) {
        draw_fps(&mut self.display, &self.counter, FPS_POS, FPS_FG, FPS_BG).ok();
    }
}
