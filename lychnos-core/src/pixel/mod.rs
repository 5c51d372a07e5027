//! Pixel strip state: cells, global brightness, snapshots, and the
//! one place any of it mutates.

mod state;
mod store;

pub use state::{PixelState, Snapshot};
pub use store::{ApplyError, PixelStore};
