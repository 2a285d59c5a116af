//! Character and string rendering with the built-in 5x8 font.
//!
//! Text is opaque: every glyph repaints its full 5x8 box, set bits in the
//! foreground color and clear bits in the background color. Nothing is clipped
//! or wrapped here; pixels that fall outside the panel are the draw target's
//! business.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::CHAR_ADVANCE;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Draw one character with its top-left corner at `origin`.
///
/// Pixels are emitted column by column, top to bottom, matching the layout of
/// the font table. Characters the font does not cover are drawn as `'?'`.
pub fn draw_char<D>(
    display: &mut D,
    origin: Point,
    ch: char,
    fg: Rgb565,
    bg: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let glyph = font::glyph(ch);
    let pixels = (0..GLYPH_WIDTH).flat_map(move |col| {
        (0..GLYPH_HEIGHT).map(move |row| {
            let color = if font::pixel(glyph, col, row) { fg } else { bg };
            Pixel(origin + Point::new(col as i32, row as i32), color)
        })
    });
    display.draw_iter(pixels)
}

/// Draw `text` left to right starting at `origin`, advancing 6 px per character.
///
/// Stops at the first NUL, so fixed-size buffers padded with `'\0'` render
/// only their contents.
pub fn draw_string<D>(
    display: &mut D,
    origin: Point,
    text: &str,
    fg: Rgb565,
    bg: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, ch) in text.chars().take_while(|&c| c != '\0').enumerate() {
        draw_char(display, origin + Point::new(CHAR_ADVANCE * i as i32, 0), ch, fg, bg)?;
    }
    Ok(())
}

/// Horizontal extent in pixels covered by [`draw_string`] for `text`.
///
/// The trailing spacing column after the last glyph is not counted. Usable in
/// `const` layout checks.
pub const fn string_width(text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut n = 0;
    let mut i = 0;
    while i < bytes.len() && bytes[i] != 0 {
        // Count chars, not UTF-8 continuation bytes
        if bytes[i] & 0xC0 != 0x80 {
            n += 1;
        }
        i += 1;
    }
    if n == 0 { 0 } else { (n - 1) * CHAR_ADVANCE as u32 + GLYPH_WIDTH }
}
