//! Framed horizontal progress bar.
//!
//! # Geometry
//!
//! For origin `(x, y)`, height `h` and length `len`:
//!
//! ```text
//!   x                 x+len
//! y +-------------------+     top edge:    row y,     cols x ..= x+len
//!   |#########          |     side edges:  cols x and x+len, rows y .. y+h
//!   |#########          |     fill:        cols x+1 .. x+1+w, rows y+1 .. y+h
//! y+h-------------------+     bottom edge: row y+h,   cols x ..= x+len
//! ```
//!
//! where `w = floor(fill / 100 * len) - 1`, saturated at zero. The unfilled
//! part of the interior is painted in the background color.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::config::FILL_MAX;

/// Clamp a fill value to `0..=100`.
///
/// The lower bound needs no check: `u16` cannot go negative.
#[inline]
pub const fn clamp_fill(fill: u16) -> u16 { if fill > FILL_MAX { FILL_MAX } else { fill } }

/// Width in pixels of the filled interior for `fill` percent of `length`.
///
/// Integer arithmetic gives the exact floor: fill 50 of 78 is 38 px, fill 100
/// of 78 is 77 px, fill 0 is 0 px.
#[inline]
pub const fn fill_width(
    fill: u16,
    length: u32,
) -> u32 {
    let filled = clamp_fill(fill) as u32 * length / FILL_MAX as u32;
    filled.saturating_sub(1)
}

/// Draw a progress bar frame with a proportionally filled interior.
///
/// `fill` above 100 is clamped. Border and fill use `fg`; the rest of the
/// interior uses `bg`.
#[allow(clippy::too_many_arguments)]
pub fn draw_progress_bar<D>(
    display: &mut D,
    origin: Point,
    height: u32,
    fill: u16,
    fg: Rgb565,
    length: u32,
    bg: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let edge = PrimitiveStyle::with_stroke(fg, 1);
    let h = height as i32;
    let len = length as i32;

    // Side edges: rows y .. y+h
    if height > 0 {
        Line::new(origin, origin + Point::new(0, h - 1))
            .into_styled(edge)
            .draw(display)?;
        Line::new(origin + Point::new(len, 0), origin + Point::new(len, h - 1))
            .into_styled(edge)
            .draw(display)?;
    }

    // Top and bottom edges: cols x ..= x+len
    Line::new(origin, origin + Point::new(len, 0))
        .into_styled(edge)
        .draw(display)?;
    Line::new(origin + Point::new(0, h), origin + Point::new(len, h))
        .into_styled(edge)
        .draw(display)?;

    // Interior
    let inner_height = height.saturating_sub(1);
    let inner_length = length.saturating_sub(1);
    let filled = fill_width(fill, length).min(inner_length);
    let inner_origin = origin + Point::new(1, 1);

    display.fill_solid(&Rectangle::new(inner_origin, Size::new(filled, inner_height)), fg)?;
    display.fill_solid(
        &Rectangle::new(
            inner_origin + Point::new(filled as i32, 0),
            Size::new(inner_length - filled, inner_height),
        ),
        bg,
    )
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{BLACK, CYAN, RED};
    use crate::test_support::FrameBuffer;

    const COLOR_A: Rgb565 = CYAN;
    const COLOR_B: Rgb565 = RED;

    fn new_display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    fn assert_border(
        display: &MockDisplay<Rgb565>,
        origin: Point,
        height: i32,
        length: i32,
        color: Rgb565,
    ) {
        for i in 0..=length {
            assert_eq!(display.get_pixel(origin + Point::new(i, 0)), Some(color), "top {i}");
            assert_eq!(display.get_pixel(origin + Point::new(i, height)), Some(color), "bottom {i}");
        }
        for j in 0..height {
            assert_eq!(display.get_pixel(origin + Point::new(0, j)), Some(color), "left {j}");
            assert_eq!(display.get_pixel(origin + Point::new(length, j)), Some(color), "right {j}");
        }
    }

    #[test]
    fn test_fill_width_bounds() {
        assert_eq!(fill_width(0, 78), 0);
        assert_eq!(fill_width(100, 78), 77);
        assert_eq!(fill_width(50, 78), 38);
        assert_eq!(fill_width(50, 20), 9);
        assert_eq!(fill_width(1, 78), 0);
    }

    #[test]
    fn test_fill_width_clamps_above_100() {
        assert_eq!(fill_width(101, 78), fill_width(100, 78));
        assert_eq!(fill_width(u16::MAX, 78), 77);
        assert_eq!(clamp_fill(250), 100);
        assert_eq!(clamp_fill(0), 0);
    }

    #[test]
    fn test_fill_width_zero_length() {
        assert_eq!(fill_width(100, 0), 0);
    }

    #[test]
    fn test_half_bar_scenario() {
        let mut display = new_display();
        let origin = Point::new(10, 10);
        draw_progress_bar(&mut display, origin, 5, 50, COLOR_A, 20, COLOR_B).unwrap();

        // Frame spans (10,10)-(30,15)
        assert_eq!(display.affected_area(), Rectangle::with_corners(Point::new(10, 10), Point::new(30, 15)));
        assert_border(&display, origin, 5, 20, COLOR_A);

        // Fill: x 11..=19, rows 11..=14
        for x in 11..=19 {
            for y in 11..=14 {
                assert_eq!(display.get_pixel(Point::new(x, y)), Some(COLOR_A), "fill ({x},{y})");
            }
        }
        // Remaining interior: x 20..=29
        for x in 20..=29 {
            for y in 11..=14 {
                assert_eq!(display.get_pixel(Point::new(x, y)), Some(COLOR_B), "empty ({x},{y})");
            }
        }
    }

    #[test]
    fn test_border_independent_of_fill() {
        for fill in [0, 1, 37, 50, 99, 100, 150] {
            let mut display = new_display();
            draw_progress_bar(&mut display, Point::new(2, 3), 6, fill, COLOR_A, 40, COLOR_B).unwrap();
            assert_border(&display, Point::new(2, 3), 6, 40, COLOR_A);
        }
    }

    #[test]
    fn test_empty_bar_interior_is_background() {
        let mut display = new_display();
        draw_progress_bar(&mut display, Point::zero(), 4, 0, COLOR_A, 10, COLOR_B).unwrap();
        for x in 1..10 {
            for y in 1..4 {
                assert_eq!(display.get_pixel(Point::new(x, y)), Some(COLOR_B));
            }
        }
    }

    #[test]
    fn test_full_bar_interior_is_foreground() {
        let mut display = new_display();
        draw_progress_bar(&mut display, Point::zero(), 4, 100, COLOR_A, 10, COLOR_B).unwrap();
        for x in 1..10 {
            for y in 1..4 {
                assert_eq!(display.get_pixel(Point::new(x, y)), Some(COLOR_A));
            }
        }
    }

    #[test]
    fn test_over_100_matches_100() {
        let mut at_100 = new_display();
        let mut at_200 = new_display();
        draw_progress_bar(&mut at_100, Point::zero(), 4, 100, COLOR_A, 30, COLOR_B).unwrap();
        draw_progress_bar(&mut at_200, Point::zero(), 4, 200, COLOR_A, 30, COLOR_B).unwrap();
        at_200.assert_eq(&at_100);
    }

    #[test]
    fn test_shrinking_bar_clears_old_fill() {
        let mut display = new_display();
        draw_progress_bar(&mut display, Point::zero(), 4, 100, COLOR_A, 20, COLOR_B).unwrap();
        draw_progress_bar(&mut display, Point::zero(), 4, 25, COLOR_A, 20, COLOR_B).unwrap();
        // 25% of 20 = 5 - 1 = 4 px filled
        assert_eq!(display.get_pixel(Point::new(4, 2)), Some(COLOR_A));
        assert_eq!(display.get_pixel(Point::new(5, 2)), Some(COLOR_B));
        assert_eq!(display.get_pixel(Point::new(19, 2)), Some(COLOR_B));
    }

    #[test]
    fn test_demo_bar_geometry() {
        let mut fb = FrameBuffer::new();
        draw_progress_bar(&mut fb, Point::new(28, 42), 10, 100, CYAN, 78, BLACK).unwrap();
        // Right edge at x + length
        assert_eq!(fb.get(106, 42), Some(CYAN));
        assert_eq!(fb.get(106, 51), Some(CYAN));
        assert_eq!(fb.get(107, 42), None);
        // Bottom edge at y + height
        assert_eq!(fb.get(28, 52), Some(CYAN));
        assert_eq!(fb.get(28, 53), None);
        // Full fill reaches the right edge: 77 px from x = 29
        assert_eq!(fb.get(105, 47), Some(CYAN));
        assert_eq!(fb.count(BLACK), 0);
    }
}
