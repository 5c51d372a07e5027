//! Telemetry sensor conversions
//!
//! The controller reports two readings over the command link: ambient
//! light from a photocell divider and temperature from an NTC
//! thermistor divider. Both conversions are pure functions of one raw
//! ADC sample.

pub mod photocell;
pub mod thermistor;
