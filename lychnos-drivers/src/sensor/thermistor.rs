//! NTC thermistor conversion for the temperature report.
//!
//! The thermistor sits in a divider against a fixed pull-up; a raw
//! ADC sample converts to resistance, then to 0.1 °C by table
//! interpolation. Readings pinned to either rail indicate an open or
//! shorted sensor.

/// Pull-up resistor in the divider (ohms).
pub const PULLUP_OHMS: u32 = 10_000;

/// 12-bit ADC full scale.
pub const ADC_MAX: u16 = 4096;

/// NTC 10K (B=3950) lookup table: (resistance_ohms, temperature_c * 10)
const TEMP_TABLE: &[(u32, i16)] = &[
    (106_000, -200), // -20°C
    (58_000, -100),  // -10°C
    (33_600, 0),     // 0°C
    (20_200, 100),   // 10°C
    (12_500, 200),   // 20°C
    (10_000, 250),   // 25°C (R0)
    (8_000, 300),    // 30°C
    (5_300, 400),    // 40°C
    (4_400, 450),    // 45°C
    (3_600, 500),    // 50°C
    (2_970, 550),    // 55°C
    (2_480, 600),    // 60°C
    (1_750, 700),    // 70°C
    (1_270, 800),    // 80°C
    (930, 900),      // 90°C
    (700, 1000),     // 100°C
];

/// Convert an ADC reading to divider resistance.
///
/// Returns `None` for readings close enough to either rail to mean
/// an open or shorted sensor.
pub fn adc_to_resistance(adc_value: u16, pullup_ohms: u32, adc_max: u16) -> Option<u32> {
    if adc_value >= adc_max - 10 || adc_value < 10 {
        return None;
    }

    // R = pullup * adc / (adc_max - adc)
    let numerator = u64::from(pullup_ohms) * u64::from(adc_value);
    let denominator = u64::from(adc_max - adc_value);

    Some((numerator / denominator) as u32)
}

/// Convert resistance to temperature in 0.1 °C units.
///
/// Returns `None` outside the table range.
pub fn resistance_to_temp_x10(resistance: u32) -> Option<i16> {
    if resistance > TEMP_TABLE[0].0 || resistance < TEMP_TABLE[TEMP_TABLE.len() - 1].0 {
        return None;
    }

    for window in TEMP_TABLE.windows(2) {
        let (r_high, t_low) = window[0];
        let (r_low, t_high) = window[1];

        if resistance <= r_high && resistance >= r_low {
            let r_range = r_high - r_low;
            let t_range = t_high - t_low;
            let r_offset = r_high - resistance;

            let temp = t_low + (i32::from(t_range) * r_offset as i32 / r_range as i32) as i16;
            return Some(temp);
        }
    }

    None
}

/// Full conversion from one ADC sample with the stock divider.
pub fn read_temp_x10(adc_value: u16) -> Option<i16> {
    adc_to_resistance(adc_value, PULLUP_OHMS, ADC_MAX).and_then(resistance_to_temp_x10)
}
