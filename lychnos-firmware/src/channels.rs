//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use lychnos_core::config::STRIP_LEN;
use lychnos_core::pixel::Snapshot;

/// Latest strip state (updated by the link task on every applied command)
///
/// The strip task consumes this and pushes the composed frame out.
pub static FRAME: Signal<CriticalSectionRawMutex, Snapshot<STRIP_LEN>> = Signal::new();
