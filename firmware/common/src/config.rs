//! Compile-time configuration for the demo.
//!
//! Everything the demo draws is placed by the constants in this module; there
//! is no runtime configuration. Layout constraints are checked with `const`
//! assertions so a bad edit fails the build instead of drawing off-screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;

use crate::colors::{BLACK, CYAN, GREEN, WHITE};
use crate::widgets::string_width;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7735, portrait).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 160;

/// Color used to clear the screen at start-up.
pub const CLEAR_COLOR: Rgb565 = BLACK;

// =============================================================================
// Text Layout
// =============================================================================

/// Horizontal distance between the origins of two consecutive characters
/// (5 px glyph + 1 px spacing).
pub const CHAR_ADVANCE: i32 = 6;

/// Greeting drawn once before the animation starts.
pub const GREETING: &str = "Hello world!";

/// Top-left corner of the greeting.
pub const GREETING_POS: Point = Point::new(28, 32);

pub const GREETING_FG: Rgb565 = WHITE;
pub const GREETING_BG: Rgb565 = BLACK;

// =============================================================================
// Progress Bar
// =============================================================================

/// Top-left corner of the progress bar frame.
pub const BAR_POS: Point = Point::new(28, 42);

/// Bar height in pixels. The bottom edge is drawn at `y + BAR_HEIGHT`.
pub const BAR_HEIGHT: u32 = 10;

/// Bar length in pixels. The right edge is drawn at `x + BAR_LENGTH`.
pub const BAR_LENGTH: u32 = 78;

pub const BAR_FG: Rgb565 = CYAN;
pub const BAR_BG: Rgb565 = BLACK;

/// Largest meaningful fill value; anything above is clamped.
pub const FILL_MAX: u16 = 100;

/// Fill increment per animation step.
pub const FILL_STEP: u16 = 2;

// =============================================================================
// FPS Readout
// =============================================================================

/// Label drawn in front of the FPS value.
pub const FPS_LABEL: &str = "FPS: ";

/// Top-left corner of the FPS label.
pub const FPS_POS: Point = Point::new(28, 100);

/// Offset of the value from the label origin. Lands on the label's trailing
/// space, which the value overwrites.
pub const FPS_VALUE_OFFSET: i32 = 25;

/// Divisor applied to `freq_hz / delta` to obtain the displayed value.
pub const FPS_SCALE_DIVISOR: u32 = 100_000;

pub const FPS_FG: Rgb565 = GREEN;
pub const FPS_BG: Rgb565 = BLACK;

// =============================================================================
// Timing
// =============================================================================

/// Core timer rate of the reference board (PIC32 core timer = SYSCLK / 2 at
/// 48 MHz). Used by the simulator's emulated counter.
pub const REFERENCE_TIMER_HZ: u32 = 24_000_000;

/// Each animation step lasts `freq_hz / FRAME_RATE_DIVISOR` ticks (100 ms).
pub const FRAME_RATE_DIVISOR: u32 = 10;

/// Ticks in one animation step for a counter running at `freq_hz`.
#[inline]
pub const fn frame_ticks(freq_hz: u32) -> u32 { freq_hz / FRAME_RATE_DIVISOR }

// =============================================================================
// Compile-time validation
// =============================================================================

const _: () = assert!(GREETING_POS.x + (string_width(GREETING) as i32) <= SCREEN_WIDTH as i32);
const _: () = assert!(BAR_POS.x + (BAR_LENGTH as i32) < SCREEN_WIDTH as i32);
const _: () = assert!(BAR_POS.y + (BAR_HEIGHT as i32) < SCREEN_HEIGHT as i32);
const _: () = assert!(GREETING_POS.y + 8 <= BAR_POS.y);
const _: () = assert!(FPS_POS.y + 8 <= SCREEN_HEIGHT as i32);
const _: () = assert!(FILL_MAX % FILL_STEP == 0);
const _: () = assert!(FRAME_RATE_DIVISOR > 0);
