//! Command link receive task
//!
//! Accumulates bytes from the serial link into commands and applies
//! them to the strip state.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use heapless::Vec;

use lychnos_core::config::{StripConfig, STRIP_LEN};
use lychnos_core::dispatch::Dispatcher;
use lychnos_core::pixel::Snapshot;
use lychnos_core::traits::{Diagnostic, DiagnosticSink, RenderSink};
use lychnos_protocol::{MAX_COMMAND_LEN, TERMINATOR};

use crate::channels::FRAME;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Publishes each applied snapshot for the strip task.
struct FrameSignal;

impl RenderSink<STRIP_LEN> for FrameSignal {
    fn notify(&mut self, snapshot: &Snapshot<STRIP_LEN>) {
        FRAME.signal(*snapshot);
    }
}

/// Logs rejected commands.
struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("Command rejected: {:?}", diagnostic);
    }
}

/// Link RX task - receives command bytes and dispatches complete commands
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut dispatcher = Dispatcher::new(StripConfig::default(), FrameSignal, LogDiagnostics);

    // Render the boot state before any command arrives
    FRAME.signal(dispatcher.snapshot());

    let mut command: Vec<u8, MAX_COMMAND_LEN> = Vec::new();
    let mut overflowed = false;
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        // Read available bytes
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if byte == TERMINATOR {
                        if overflowed {
                            warn!("Oversized command dropped");
                            overflowed = false;
                        } else {
                            dispatcher.on_message(&command);
                        }
                        command.clear();
                    } else if !overflowed && command.push(byte).is_err() {
                        overflowed = true;
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
