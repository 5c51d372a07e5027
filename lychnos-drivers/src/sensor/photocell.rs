//! Photocell conversion for the light report.
//!
//! The LDR sits against a fixed divider wired so that brighter
//! ambient light reads higher. The raw level goes out on the wire
//! as-is; the percentage helper is for local logging only.

/// 12-bit ADC full scale.
pub const ADC_MAX: u16 = 4096;

/// Report value for one ADC sample, saturated at full scale.
pub fn light_level(adc_value: u16) -> u16 {
    adc_value.min(ADC_MAX)
}

/// Light level as a rough percentage.
pub fn light_percent(adc_value: u16) -> u8 {
    (u32::from(light_level(adc_value)) * 100 / u32::from(ADC_MAX)) as u8
}
