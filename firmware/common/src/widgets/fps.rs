//! Frame-rate readout.
//!
//! The estimate is taken from two cycle counter reads around the label draw,
//! so it reflects how long the `"FPS: "` label took to render, not the length
//! of a whole animation frame. The value is computed with integer division only,
//! so anything slower than 240 ticks per label reads as zero at 24 MHz:
//!
//! ```text
//! fps = (freq_hz / delta) / FPS_SCALE_DIVISOR
//! ```
//!
//! and printed with two fraction digits.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use super::text::draw_string;
use crate::config::{FPS_LABEL, FPS_SCALE_DIVISOR, FPS_VALUE_OFFSET};
use crate::timing::{CycleCounter, elapsed};

/// Formatted FPS value. Fits `u32::MAX` with two fraction digits.
pub type FpsText = String<16>;

/// Convert a tick delta into the displayed frame-rate figure.
///
/// A zero delta (counter did not advance) reports zero instead of dividing.
#[inline]
pub fn estimate_fps(
    delta: u32,
    freq_hz: u32,
) -> f32 {
    if delta == 0 {
        return 0.0;
    }
    ((freq_hz / delta) / FPS_SCALE_DIVISOR) as f32
}

/// Format `fps` as fixed-point with two digits after the decimal point.
pub fn format_fps(fps: f32) -> FpsText {
    let mut s = FpsText::new();
    let _ = write!(s, "{fps:.2}");
    s
}

/// Draw `"FPS: <value>"` at `origin` and return the displayed estimate.
///
/// The counter is read immediately before and after the label is drawn.
/// The value is drawn `FPS_VALUE_OFFSET` pixels right of the label origin.
pub fn draw_fps<D, C>(
    display: &mut D,
    counter: &C,
    origin: Point,
    fg: Rgb565,
    bg: Rgb565,
) -> Result<f32, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    C: CycleCounter + ?Sized,
{
    let start = counter.now();
    draw_string(display, origin, FPS_LABEL, fg, bg)?;
    let end = counter.now();

    let fps = estimate_fps(elapsed(start, end), counter.freq_hz());
    let text = format_fps(fps);
    draw_string(display, origin + Point::new(FPS_VALUE_OFFSET, 0), &text, fg, bg)?;
    Ok(fps)
}
