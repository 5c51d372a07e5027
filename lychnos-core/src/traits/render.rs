//! Render collaborator seam.

use crate::pixel::Snapshot;

/// Receives a snapshot after every successful mutation and owns
/// turning it into an actual light-array drive signal.
///
/// Implementations get a read-only view and must not block the
/// dispatcher: hand the snapshot off and return.
pub trait RenderSink<const N: usize> {
    fn notify(&mut self, snapshot: &Snapshot<N>);
}
