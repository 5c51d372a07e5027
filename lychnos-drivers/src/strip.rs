//! Strip frame composition.
//!
//! Snapshots store cell colors untouched by brightness; the global
//! scalar only lands here, when a frame is composed for the strip.

use lychnos_core::pixel::Snapshot;
use smart_leds::{brightness, RGB8};

/// Compose the wire-ready frame for a snapshot: every cell color
/// scaled by the global brightness, in strip order.
pub fn compose_frame<const N: usize>(snapshot: &Snapshot<N>) -> [RGB8; N] {
    let mut frame = [RGB8::default(); N];

    let cells = snapshot.cells().iter().map(|c| RGB8::new(c.r, c.g, c.b));
    for (slot, scaled) in frame
        .iter_mut()
        .zip(brightness(cells, snapshot.brightness()))
    {
        *slot = scaled;
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    use lychnos_core::config::StripConfig;
    use lychnos_core::pixel::PixelStore;
    use lychnos_core::{Operation, Rgb};

    const N: usize = 4;

    fn snapshot_with(brightness: u8, color: Rgb) -> Snapshot<N> {
        let mut store = PixelStore::new(StripConfig::default());
        store
            .apply(Operation::SetAll { brightness, color })
            .unwrap()
    }

    #[test]
    fn test_full_brightness_passes_colors_through() {
        let snap = snapshot_with(255, Rgb::new(10, 128, 255));
        let frame = compose_frame(&snap);
        assert!(frame.iter().all(|&c| c == RGB8::new(10, 128, 255)));
    }

    #[test]
    fn test_zero_brightness_blanks_the_frame() {
        let snap = snapshot_with(0, Rgb::new(255, 255, 255));
        let frame = compose_frame(&snap);
        assert!(frame.iter().all(|&c| c == RGB8::new(0, 0, 0)));
    }

    #[test]
    fn test_half_brightness_scales() {
        let snap = snapshot_with(127, Rgb::new(255, 128, 0));
        let frame = compose_frame(&snap);
        // smart-leds scales as v * (level + 1) / 256
        assert!(frame.iter().all(|&c| c == RGB8::new(127, 64, 0)));
    }

    #[test]
    fn test_frame_preserves_cell_order() {
        let mut store: PixelStore<N> = PixelStore::new(StripConfig {
            boot_brightness: 255,
            set_one_brightness: 255,
        });
        let snap = store
            .apply(Operation::SetOne {
                index: 2,
                brightness: 0,
                color: Rgb::new(9, 8, 7),
            })
            .unwrap();

        let frame = compose_frame(&snap);
        assert_eq!(frame[2], RGB8::new(9, 8, 7));
        assert_eq!(frame[0], RGB8::new(0, 0, 0));
    }
}
