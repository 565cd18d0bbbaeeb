//! Emulation of the Cromemco Dazzler video board as seen from the CPU side.
//!
//! Rendering is not done here. Register writes and video memory writes are
//! encoded into frames for an external rendering device, and the bytes that
//! device sends back (joysticks and keyboard) are decoded into the D+7A ports.

pub mod chip;
pub mod config;
pub mod dazzler;
pub mod host;

pub use chip::{Chip, CpuOutputPins};
pub use config::{Config, Interface};
pub use dazzler::Dazzler;
