// pn533-phy/pn533phy/src/lib.rs

//! pn533phy
//!
//! Pure Rust transport layer for NXP PN532/PN533 NFC controllers attached
//! over I2C or SPI: command framing, ACK-based cancellation, and the
//! interrupt-driven receive path with its hard-fault latch.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod phy;
pub mod prelude;
pub mod protocol;
#[doc(hidden)]
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
