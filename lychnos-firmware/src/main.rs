//! Lychnos - Pixel Strip Controller Firmware
//!
//! Main firmware binary for RP2040-based pixel strip controllers.
//! Drives an addressable RGB strip from ASCII commands received over
//! a serial link and reports ambient sensor readings back.
//!
//! Named after the Greek "lychnos" meaning "lamp".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Static cell for the loaded strip PIO program (task references it forever)
static STRIP_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lychnos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the command link
    // The stock link is a 9600 baud serial bridge
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = 9600;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for command link");

    // Setup PIO0 for the strip
    // Pin assignment is board-specific (strip data: GPIO16)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let program = STRIP_PROGRAM.init(PioWs2812Program::new(&mut common));
    let strip = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, program);

    info!("PIO strip driver initialized");

    // Setup ADC for the telemetry sensors
    // Pin assignments are board-specific (photocell: GPIO26, thermistor: GPIO27)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let photo_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let therm_channel = Channel::new_pin(p.PIN_27, Pull::None);

    info!("ADC initialized");

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::strip_task(strip)).unwrap();
    spawner
        .spawn(tasks::telemetry_task(adc, photo_channel, therm_channel, tx))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
