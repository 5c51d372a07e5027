//! Outbound telemetry reports.
//!
//! The controller reports two periodic sensor readings back over the
//! command link, encoded in the same register as the command grammar:
//! a one-byte kind prefix, the decimal value, and the `.` terminator.

use core::fmt::Write;

use heapless::String;

/// Widest encoded report (`T-32768.`).
pub const REPORT_LEN: usize = 8;

/// One sensor reading ready for the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorReport {
    /// Raw photocell level.
    Light(u16),
    /// Temperature in 0.1 °C units.
    TemperatureX10(i16),
}

impl SensorReport {
    /// Kind prefix on the wire.
    pub fn prefix(&self) -> u8 {
        match self {
            SensorReport::Light(_) => b'L',
            SensorReport::TemperatureX10(_) => b'T',
        }
    }

    /// Encode the report as one ASCII line, e.g. `L512.` or `T245.`.
    pub fn encode(&self) -> String<REPORT_LEN> {
        let mut line = String::new();
        // Cannot overflow: the widest report is exactly REPORT_LEN bytes.
        let _ = match self {
            SensorReport::Light(level) => write!(line, "L{}.", level),
            SensorReport::TemperatureX10(temp) => write!(line, "T{}.", temp),
        };
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_light() {
        assert_eq!(SensorReport::Light(512).encode().as_str(), "L512.");
        assert_eq!(SensorReport::Light(0).encode().as_str(), "L0.");
    }

    #[test]
    fn test_encode_temperature() {
        assert_eq!(SensorReport::TemperatureX10(245).encode().as_str(), "T245.");
        assert_eq!(SensorReport::TemperatureX10(-15).encode().as_str(), "T-15.");
    }

    #[test]
    fn test_extremes_fit_report_len() {
        assert_eq!(SensorReport::Light(u16::MAX).encode().as_str(), "L65535.");
        assert_eq!(
            SensorReport::TemperatureX10(i16::MIN).encode().as_str(),
            "T-32768."
        );
    }

    #[test]
    fn test_prefix() {
        assert_eq!(SensorReport::Light(1).prefix(), b'L');
        assert_eq!(SensorReport::TemperatureX10(1).prefix(), b'T');
    }
}
