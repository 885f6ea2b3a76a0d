// src/gpio/mod.rs

//! Pin driver abstraction: logical ON/OFF over a physical HIGH/LOW pin

pub mod backend;
mod driver;
mod level;

pub use backend::{open_backend, PinBackend, PinWrite, SimulatedPin};
pub use driver::PinDriver;
pub use level::{PinLevel, Polarity, RelayLevel};
