//! Sensor telemetry task
//!
//! Samples the photocell and thermistor once a second and reports the
//! readings back over the command link.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Duration, Ticker};
use embedded_io_async::Write;

use lychnos_drivers::sensor::{photocell, thermistor};
use lychnos_protocol::SensorReport;

/// Interval between sensor reports
const REPORT_INTERVAL: Duration = Duration::from_millis(1000);

/// Telemetry task - samples both sensors and sends reports on the link
#[embassy_executor::task]
pub async fn telemetry_task(
    mut adc: Adc<'static, Async>,
    mut photo_channel: Channel<'static>,
    mut therm_channel: Channel<'static>,
    mut tx: BufferedUartTx,
) {
    info!("Telemetry task started");

    let mut ticker = Ticker::every(REPORT_INTERVAL);

    loop {
        match adc.read(&mut photo_channel).await {
            Ok(raw) => {
                send_report(&mut tx, SensorReport::Light(photocell::light_level(raw))).await;
            }
            Err(_) => {
                warn!("Photocell ADC read error");
            }
        }

        match adc.read(&mut therm_channel).await {
            Ok(raw) => match thermistor::read_temp_x10(raw) {
                Some(temp_x10) => {
                    trace!("Temperature: {}.{}°C", temp_x10 / 10, (temp_x10 % 10).abs());
                    send_report(&mut tx, SensorReport::TemperatureX10(temp_x10)).await;
                }
                None => {
                    warn!("Thermistor fault (open/short)");
                }
            },
            Err(_) => {
                warn!("Thermistor ADC read error");
            }
        }

        ticker.next().await;
    }
}

/// Encode and send one report line
async fn send_report(tx: &mut BufferedUartTx, report: SensorReport) {
    let line = report.encode();
    if let Err(e) = tx.write_all(line.as_bytes()).await {
        warn!("Failed to send report: {:?}", e);
    }
}
