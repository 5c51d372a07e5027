//! Wire protocol for the Lychnos pixel controller
//!
//! Inbound, the controller receives short ASCII commands over a BLE
//! serial link, one message per command, conventionally terminated by
//! `.`:
//!
//! ```text
//! *BBB,RRR,GGG,BBB.     set every cell + global brightness
//! _II,BBB,RRR,GGG,BBB.  set a single cell
//! !.                    clear every cell
//! ```
//!
//! Outbound, it periodically reports sensor readings in the same
//! register (`L512.`, `T245.`).
//!
//! Decoding is deliberately lenient: numeric fields parse atoi-style
//! (a field with no leading digits yields 0) and out-of-range values
//! wrap into `u8`. Only an unknown command prefix or a wrong field
//! count rejects a message.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod telemetry;

pub use command::{decode, DecodeError, Operation, Rgb, MAX_COMMAND_LEN, TERMINATOR};
pub use telemetry::{SensorReport, REPORT_LEN};
