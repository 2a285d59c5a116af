//! Display driver for a 1.8" 128x160 ST7735S SPI module.
//!
//! Pin mapping:
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - CS: GPIO17
//! - DC: GPIO20
//! - RST: GPIO21
//! - Backlight: GPIO14

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, ColorOrder, Orientation};
use progress_demo_common::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bytes the interface batches per SPI transfer.
pub const SPI_BUFFER_SIZE: usize = 512;

/// Display type alias for the ST7735S panel with a reset pin.
pub type LcdDisplay<'d> = mipidsi::Display<
    SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7735s,
    Output<'d>,
>;

/// Reset and initialize the panel in portrait orientation.
///
/// Panics if the panel does not accept the init sequence; there is nothing
/// to draw on without it.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'d mut [u8],
) -> LcdDisplay<'d> {
    // Create SPI device with chip select
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let di = SpiInterface::new(spi_device, dc, buffer);

    // 128x160 red-tab modules map the full window without offset.
    // Try ColorOrder::Rgb if red and blue come out swapped.
    Builder::new(ST7735s, di)
        .reset_pin(rst)
        .display_size(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
        .orientation(Orientation::new())
        .color_order(ColorOrder::Bgr)
        .invert_colors(ColorInversion::Normal)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the ST7735S display.
///
/// The controller is specified for 15 MHz writes; most modules run reliably
/// at 16 MHz.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 16_000_000;
    config
}
