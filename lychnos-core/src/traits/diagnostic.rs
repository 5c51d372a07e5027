//! Diagnostic collaborator seam.

use lychnos_protocol::DecodeError;

use crate::pixel::ApplyError;

/// A non-fatal condition worth reporting: the message was dropped and
/// the state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Message failed to decode.
    Decode(DecodeError),
    /// Message decoded but could not be applied.
    Apply(ApplyError),
}

/// Purely observational outlet for dropped-message reasons.
///
/// Implementations must never block or fail the core.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}
