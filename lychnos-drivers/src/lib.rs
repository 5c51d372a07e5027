//! Hardware-facing conversion layers for the Lychnos controller
//!
//! Pure translations between core types and hardware formats, kept
//! out of the firmware crate so they stay testable on the host:
//!
//! - Strip frame composition (global brightness applied at render time)
//! - Thermistor ADC conversion for the temperature report
//! - Photocell ADC conversion for the light report

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
pub mod strip;
