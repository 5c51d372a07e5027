//! Strip refresh task
//!
//! Waits for state changes and pushes the composed frame to the strip.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;

use lychnos_core::config::STRIP_LEN;
use lychnos_drivers::strip::compose_frame;

use crate::channels::FRAME;

/// Strip task - refreshes the strip whenever a new snapshot arrives
#[embassy_executor::task]
pub async fn strip_task(mut strip: PioWs2812<'static, PIO0, 0, STRIP_LEN>) {
    info!("Strip task started");

    loop {
        let snapshot = FRAME.wait().await;
        let frame = compose_frame(&snapshot);
        strip.write(&frame).await;
        trace!("Frame pushed, brightness {}", snapshot.brightness());
    }
}
