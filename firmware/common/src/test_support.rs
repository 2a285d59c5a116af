//! Host-side fakes for the display, counter and heartbeat pin.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::timing::CycleCounter;

/// Counter that advances by a fixed step on every read.
pub struct SteppingCounter {
    freq_hz: u32,
    step: u32,
    value: Cell<u32>,
    reads: Cell<u32>,
    resets: u32,
}

impl SteppingCounter {
    pub fn new(
        freq_hz: u32,
        step: u32,
    ) -> Self {
        Self {
            freq_hz,
            step,
            value: Cell::new(0),
            reads: Cell::new(0),
            resets: 0,
        }
    }

    pub fn reads(&self) -> u32 { self.reads.get() }

    pub fn resets(&self) -> u32 { self.resets }
}

impl CycleCounter for SteppingCounter {
    fn now(&self) -> u32 {
        let v = self.value.get();
        self.value.set(v.wrapping_add(self.step));
        self.reads.set(self.reads.get() + 1);
        v
    }

    fn reset(&mut self) {
        self.value.set(0);
        self.resets += 1;
    }

    fn freq_hz(&self) -> u32 { self.freq_hz }
}

/// Output pin that remembers its level and counts toggles.
#[derive(Default)]
pub struct MockPin {
    high: bool,
    pub toggles: u32,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> { Ok(self.high) }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> { Ok(!self.high) }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.high = !self.high;
        self.toggles += 1;
        Ok(())
    }
}

/// Full-screen draw target that records every pixel write.
///
/// `MockDisplay` tops out at 64x64, which is too small for the demo layout.
pub struct FrameBuffer {
    pixels: Vec<Option<Rgb565>>,
    pub writes: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            writes: 0,
        }
    }

    pub fn get(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Rgb565> {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH as i32 || y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        self.pixels[y as usize * SCREEN_WIDTH as usize + x as usize]
    }

    /// Number of pixels that currently hold `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.writes += 1;
            if point.x >= 0 && point.y >= 0 && point.x < SCREEN_WIDTH as i32 && point.y < SCREEN_HEIGHT as i32 {
                self.pixels[point.y as usize * SCREEN_WIDTH as usize + point.x as usize] = Some(color);
            }
        }
        Ok(())
    }
}
