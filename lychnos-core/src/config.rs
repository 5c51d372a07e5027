//! Strip configuration.

/// Number of cells on the strip driven by the stock firmware.
pub const STRIP_LEN: usize = 64;

/// Strip behavior knobs fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Global brightness at boot, before any command arrives.
    pub boot_brightness: u8,
    /// Global brightness forced by per-cell (`_`) commands.
    pub set_one_brightness: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            boot_brightness: 40,
            set_one_brightness: 40,
        }
    }
}
