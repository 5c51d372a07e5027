//! Message dispatch: decode, apply, notify.
//!
//! One inbound message at a time, processed to completion before the
//! next is accepted. The transport collaborator owns framing and
//! serializes delivery; nothing here blocks or suspends.

use lychnos_protocol::decode;

use crate::config::StripConfig;
use crate::pixel::{PixelStore, Snapshot};
use crate::traits::{Diagnostic, DiagnosticSink, RenderSink};

/// Connects the decoder, the store, and the collaborators.
///
/// Holds the only [`PixelStore`]; state can only change inside
/// [`on_message`](Self::on_message).
pub struct Dispatcher<const N: usize, R, D> {
    store: PixelStore<N>,
    render: R,
    diagnostics: D,
}

impl<const N: usize, R, D> Dispatcher<N, R, D>
where
    R: RenderSink<N>,
    D: DiagnosticSink,
{
    pub fn new(config: StripConfig, render: R, diagnostics: D) -> Self {
        Self {
            store: PixelStore::new(config),
            render,
            diagnostics,
        }
    }

    /// Entry point for one complete inbound message.
    ///
    /// Malformed messages and out-of-range indices are reported to
    /// the diagnostic sink and dropped; every successful mutation is
    /// pushed to the render sink as a snapshot.
    pub fn on_message(&mut self, raw: &[u8]) {
        let op = match decode(raw) {
            Ok(op) => op,
            Err(err) => {
                self.diagnostics.report(Diagnostic::Decode(err));
                return;
            }
        };

        match self.store.apply(op) {
            Ok(snapshot) => self.render.notify(&snapshot),
            Err(err) => self.diagnostics.report(Diagnostic::Apply(err)),
        }
    }

    /// Current strip state, for status reporting.
    pub fn snapshot(&self) -> Snapshot<N> {
        self.store.snapshot()
    }
}
