//! Collaborator seams around the core
//!
//! The transport, the light-array drive, and the diagnostic outlet
//! are external collaborators; these traits define the interface the
//! core holds them to.

pub mod diagnostic;
pub mod render;

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use render::RenderSink;
