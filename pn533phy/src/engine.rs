// pn533-phy/pn533phy/src/engine.rs

//! Seams between the PHY and the protocol engine above it.

use crate::Result;
use crate::types::RxFrame;

/// The command/response engine sitting above the PHY.
///
/// The PHY holds only a weak reference to its engine and calls back into it
/// from the interrupt context, so implementations must be cheap and must
/// not block on the PHY.
pub trait UpperEngine: Send + Sync {
    /// How many bytes at the start of `raw` make up the frame. `raw` starts
    /// right after the status byte. The default understands PN533 ACK/NACK,
    /// standard and extended frames.
    fn frame_size_of(&self, raw: &[u8]) -> usize {
        crate::protocol::rx_frame_size(raw)
    }

    /// Hand a received frame, or a terminal status with no frame, to the
    /// engine. `Err(Canceled)` resolves an aborted command and
    /// `Err(RemoteIo)` reports a bus that is now permanently down.
    fn deliver_frame(&self, frame: Option<RxFrame>, status: Result<()>);
}

/// Operations the PHY offers to its engine, the Rust form of the driver's
/// ops table.
pub trait PhyOps: Send + Sync {
    /// Frame `payload` (TFI + command data) and write it to the chip.
    fn send_frame(&self, payload: &[u8]) -> Result<()>;

    /// Write the ACK frame, cancelling whatever the chip is processing.
    fn send_ack(&self) -> Result<()>;

    /// Cancel the current command and resolve it with `Canceled`.
    fn abort_cmd(&self);
}
