//! Platform-agnostic core of the LCD progress demo.
//!
//! This crate contains everything shared between the desktop simulator and the
//! Pico 2 firmware:
//!
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: Screen layout, timing and text constants
//! - [`font`]: The 5x8 column-major bitmap font table
//! - [`widgets`]: Character, string, progress bar and FPS renderers
//! - [`timing`]: Cycle counter abstraction and busy-wait
//! - [`demo`]: The demo sequencer state machine
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Tests run on the host with `std`
//! enabled (via `cfg_attr`) so the standard test harness is available:
//!
//! ```bash
//! cargo test -p progress-demo-common
//! ```
//!
//! Every renderer is generic over `DrawTarget<Color = Rgb565>`, which is the
//! only way this crate touches the display.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod demo;
pub mod font;
pub mod timing;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use demo::{Demo, DemoState};
pub use timing::CycleCounter;
