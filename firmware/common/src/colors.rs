//! Color constants for the LCD demo.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This is the native pixel format of the ST7735 controller, so colors are
//! written to the panel without conversion. The named constants below are plain
//! aliases for raw values and carry no further meaning.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Screen clear color and text background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Greeting text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). FPS readout.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Cyan (0, 63, 31). Progress bar border and fill.
pub const CYAN: Rgb565 = Rgb565::CYAN;
