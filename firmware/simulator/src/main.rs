//! Desktop simulator for the LCD progress demo.
//!
//! Runs the same [`Demo`] sequencer the firmware runs, against an
//! embedded-graphics simulator display and a cycle counter emulated from the
//! host clock.
//!
//! By default it renders headless: the demo is stepped through the whole
//! animation plus a few idle refreshes and the final frame is written to
//! `progress-demo.png`. Build with `--features window` to watch it live in an
//! SDL2 window instead.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod heartbeat;
mod timing;

use std::error::Error;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use progress_demo_common::{Demo, REFERENCE_TIMER_HZ, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::heartbeat::SimHeartbeat;
use crate::timing::InstantCounter;

/// Pixel scale of the output image or window.
const SCALE: u32 = 3;

type SimDemo = Demo<SimulatorDisplay<Rgb565>, InstantCounter, SimHeartbeat>;

fn main() -> Result<(), Box<dyn Error>> {
    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let demo = Demo::new(display, InstantCounter::new(REFERENCE_TIMER_HZ), SimHeartbeat::default());
    run(demo)
}

#[cfg(not(feature = "window"))]
fn run(mut demo: SimDemo) -> Result<(), Box<dyn Error>> {
    use progress_demo_common::DemoState;

    /// Image file written after the run.
    const OUTPUT_PATH: &str = "progress-demo.png";
    /// FPS-only refreshes performed after the animation before capturing.
    const IDLE_REFRESHES: u32 = 10;

    while demo.state() != DemoState::Idle {
        demo.step();
    }
    for _ in 0..IDLE_REFRESHES {
        demo.step();
    }

    let output_settings = OutputSettingsBuilder::new().scale(SCALE).build();
    demo.display().to_rgb_output_image(&output_settings).save_png(OUTPUT_PATH)?;

    let (_, _, heartbeat) = demo.release();
    println!("{OUTPUT_PATH}: final frame after {} heartbeat toggles", heartbeat.toggles());
    Ok(())
}

#[cfg(feature = "window")]
fn run(mut demo: SimDemo) -> Result<(), Box<dyn Error>> {
    use embedded_graphics_simulator::{SimulatorEvent, Window};

    let output_settings = OutputSettingsBuilder::new().scale(SCALE).build();
    let mut window = Window::new("LCD Progress Demo", &output_settings);

    loop {
        demo.step();
        window.update(demo.display());

        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            println!("quit after {} frames", demo.frames());
            return Ok(());
        }
    }
}
