//! Board-agnostic core logic for the Lychnos pixel controller
//!
//! Everything between the transport and the hardware drivers lives
//! here, with no dependency on either:
//!
//! - Pixel state (color cells + global brightness) and its snapshots
//! - Apply semantics for decoded operations
//! - The message dispatcher connecting decode, apply, and render
//! - Collaborator traits for the render and diagnostic sides
//!
//! The transport hands the dispatcher one complete message at a time;
//! nothing in this crate blocks, suspends, or allocates.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod pixel;
pub mod traits;

pub use lychnos_protocol::{Operation, Rgb};
