//! Renderers for everything the demo puts on screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence and return the target's error so callers decide whether to
//! propagate or discard it.

mod fps;
mod primitives;
mod progress_bar;
mod text;

pub use fps::{FpsText, draw_fps, estimate_fps, format_fps};
pub use primitives::clear_screen;
pub use progress_bar::{clamp_fill, draw_progress_bar, fill_width};
pub use text::{draw_char, draw_string, string_width};
