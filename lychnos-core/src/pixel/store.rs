//! Apply semantics: the one place the strip state mutates.

use lychnos_protocol::{Operation, Rgb};

use crate::config::StripConfig;
use crate::pixel::{PixelState, Snapshot};

/// Apply failures. Decode failures never reach the store; the only
/// way a syntactically valid command can fail is a bad cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApplyError {
    /// SetOne index outside `0..len`. The state was left untouched.
    IndexOutOfRange { index: i32, len: usize },
}

/// Exclusive owner of the strip state.
///
/// All mutation goes through [`apply`](Self::apply); everything else
/// in the system sees snapshots.
#[derive(Debug)]
pub struct PixelStore<const N: usize> {
    state: PixelState<N>,
    set_one_brightness: u8,
}

impl<const N: usize> PixelStore<N> {
    pub fn new(config: StripConfig) -> Self {
        Self {
            state: PixelState::new(config.boot_brightness),
            set_one_brightness: config.set_one_brightness,
        }
    }

    /// Apply one decoded operation.
    ///
    /// `Ok` carries the post-mutation snapshot for the render
    /// collaborator; `Err` means nothing changed.
    pub fn apply(&mut self, op: Operation) -> Result<Snapshot<N>, ApplyError> {
        match op {
            Operation::SetAll { brightness, color } => {
                self.state.set_brightness(brightness);
                self.state.fill(color);
            }
            Operation::SetOne { index, color, .. } => {
                let cell = usize::try_from(index)
                    .ok()
                    .filter(|&i| i < N)
                    .ok_or(ApplyError::IndexOutOfRange { index, len: N })?;
                // Per-cell writes pin the global brightness to a fixed
                // level; the transmitted brightness field is accepted
                // on the wire but not applied. Matches the behavior
                // the companion app was built against.
                self.state.set_brightness(self.set_one_brightness);
                self.state.set_cell(cell, color);
            }
            Operation::ClearAll => {
                // Brightness is deliberately left alone.
                self.state.fill(Rgb::OFF);
            }
        }
        Ok(self.state.snapshot())
    }

    /// Current strip state.
    pub fn snapshot(&self) -> Snapshot<N> {
        self.state.snapshot()
    }
}
