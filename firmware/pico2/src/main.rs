//! LCD Progress Demo Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Draws a greeting, animates a progress bar from 0 to 100 % and keeps an
//! FPS readout refreshed on a 128x160 ST7735S panel. The on-board LED
//! (GPIO25) toggles once per animation frame.
//!
//! All drawing and pacing lives in `progress_demo_common::Demo`; this binary
//! only brings the hardware up and hands it over.

#![no_std]
#![no_main]

mod cpu_cycles;
mod display;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use progress_demo_common::{CycleCounter, Demo};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::cpu_cycles::DwtCounter;
use crate::display::{SPI_BUFFER_SIZE, display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-progress-demo"),
    embassy_rp::binary_info::rp_program_description!(c"Progress bar and FPS demo on an ST7735S LCD"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Transfer buffer for the display interface.
static SPI_BUFFER: StaticCell<[u8; SPI_BUFFER_SIZE]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("LCD progress demo starting...");

    let p = embassy_rp::init(Default::default());

    // Core peripherals are not claimed by embassy_rp::init
    let core = cortex_m::Peripherals::take().unwrap();
    let counter = DwtCounter::new(core.DCB, core.DWT, clk_sys_freq());
    info!("DWT cycle counter initialized at {} MHz", counter.freq_hz() / 1_000_000);

    // Heartbeat LED, toggled once per animation frame
    let led = Output::new(p.PIN_25, Level::Low);

    // Initialize display pins
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);
    let _backlight = Output::new(p.PIN_14, Level::High); // Turn on backlight

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let display = init_display(spi, cs, dc, rst, SPI_BUFFER.init([0; SPI_BUFFER_SIZE]));
    info!("Display initialized!");

    Demo::new(display, counter, led).run()
}
