//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Paint the whole configured screen area in `color`.
///
/// Covers exactly `SCREEN_WIDTH x SCREEN_HEIGHT` from the origin regardless of
/// how large the draw target reports itself to be.
pub fn clear_screen<D>(
    display: &mut D,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)), color)
}
