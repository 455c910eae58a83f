// pn533-phy/pn533phy/src/types.rs

//! Small newtypes passed across the PHY boundary.

use derive_more::{Deref, Display, From, Into};

/// Inbound frame after the status byte has been stripped and the buffer
/// trimmed to the size the frame header declares.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, Into)]
pub struct RxFrame(Vec<u8>);

impl RxFrame {
    /// Raw frame bytes, preamble included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the underlying buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Spaced hex dump, for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.0)
    }
}

/// Interrupt line number an attachment is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "irq{}", _0)]
pub struct IrqLine(u32);

impl IrqLine {
    /// Wrap a platform interrupt number.
    pub const fn new(line: u32) -> Self {
        Self(line)
    }

    /// The platform interrupt number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Outcome of one interrupt dispatch, as seen by the interrupt source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqReturn {
    /// The interrupt belonged to another device.
    None,
    /// The interrupt was consumed, whether or not anything was delivered.
    Handled,
}
