//! In-memory strip state and its read-only snapshot.

use lychnos_protocol::Rgb;

/// The mutable strip state: one color cell per light position plus a
/// single global brightness scalar applied uniformly at render time.
///
/// The cell array length is fixed at `N` for the life of the process.
/// Mutation happens only through [`PixelStore`](super::PixelStore),
/// which validates indices before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelState<const N: usize> {
    cells: [Rgb; N],
    brightness: u8,
}

impl<const N: usize> PixelState<N> {
    /// Boot state: every cell off, brightness as configured.
    pub fn new(brightness: u8) -> Self {
        Self {
            cells: [Rgb::OFF; N],
            brightness,
        }
    }

    pub fn cells(&self) -> &[Rgb; N] {
        &self.cells
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub(crate) fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub(crate) fn fill(&mut self, color: Rgb) {
        self.cells = [color; N];
    }

    /// Caller has already validated `index < N`.
    pub(crate) fn set_cell(&mut self, index: usize, color: Rgb) {
        self.cells[index] = color;
    }

    /// Immutable point-in-time copy for the render collaborator.
    pub fn snapshot(&self) -> Snapshot<N> {
        Snapshot {
            cells: self.cells,
            brightness: self.brightness,
        }
    }
}

/// An immutable point-in-time copy of the strip state.
///
/// The render collaborator only ever sees these, never the live
/// state, so already-applied state cannot be altered after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<const N: usize> {
    cells: [Rgb; N],
    brightness: u8,
}

impl<const N: usize> Snapshot<N> {
    pub fn cells(&self) -> &[Rgb; N] {
        &self.cells
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_state() {
        let state: PixelState<4> = PixelState::new(40);
        assert_eq!(state.brightness(), 40);
        assert!(state.cells().iter().all(|&c| c == Rgb::OFF));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut state: PixelState<4> = PixelState::new(40);
        let before = state.snapshot();

        state.fill(Rgb::new(1, 2, 3));
        state.set_brightness(99);

        // The earlier snapshot is unaffected by later mutation.
        assert_eq!(before.brightness(), 40);
        assert!(before.cells().iter().all(|&c| c == Rgb::OFF));

        let after = state.snapshot();
        assert_eq!(after.brightness(), 99);
        assert!(after.cells().iter().all(|&c| c == Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_snapshot_len() {
        let state: PixelState<8> = PixelState::new(0);
        assert_eq!(state.snapshot().len(), 8);
        assert!(!state.snapshot().is_empty());
    }
}
