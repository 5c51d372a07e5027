//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod link_rx;
pub mod strip;
pub mod telemetry;

pub use link_rx::link_rx_task;
pub use strip::strip_task;
pub use telemetry::telemetry_task;
