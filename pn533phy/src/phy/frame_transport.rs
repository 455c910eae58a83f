// pn533-phy/pn533phy/src/phy/frame_transport.rs

//! Outbound framing and the single-buffer inbound read.

use std::thread;

use log::{debug, warn};

use super::Phy;
use crate::constants::READY_BIT;
use crate::protocol::Frame;
use crate::types::RxFrame;
use crate::{Error, Result};

impl Phy {
    /// Frame `payload` (TFI + command data) and write it to the chip.
    ///
    /// Returns the latched fault without touching the bus once the
    /// attachment is hard-faulted. A write answered with `RemoteIo` is
    /// retried once after a short jittered delay, since the chip may just
    /// be waking from power-down. A short write is reported as `RemoteIo`.
    pub fn send_frame(&self, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(payload)?;
        let wire = self.config.variant.wrap(&frame);

        // A payload rejected above leaves `aborted` untouched.
        self.lock_state().begin_send()?;

        #[cfg(feature = "diagnostics")]
        log::trace!(
            "{}: tx {}",
            self.irq,
            crate::utils::bytes_to_hex_spaced(&wire)
        );

        let rc = {
            let mut bus = self.lock_bus();
            match bus.write(&wire) {
                Err(Error::RemoteIo) => {
                    let delay = self.config.retry.jittered_delay();
                    debug!(
                        "{}: write not acknowledged, retrying in {:?}",
                        self.irq, delay
                    );
                    thread::sleep(delay);
                    bus.write(&wire)
                }
                other => other,
            }
        };

        let written = rc?;
        if written != wire.len() {
            warn!(
                "{}: short write: {} of {} bytes",
                self.irq,
                written,
                wire.len()
            );
            return Err(Error::RemoteIo);
        }
        Ok(())
    }

    /// Write the ACK frame. Allowed even after a hard fault, since abort
    /// and teardown paths rely on it.
    pub fn send_ack(&self) -> Result<()> {
        let ack = self.config.variant.ack();
        self.lock_bus().write(&ack).map(|_| ())
    }

    /// Read one full buffer from the chip and return the frame it holds.
    ///
    /// Fails with `RemoteIo` on any bus error or short read, with
    /// `NotReady` when the READY bit is clear, and with `NoDevice` when the
    /// upper engine is gone.
    pub fn read_frame(&self) -> Result<RxFrame> {
        let capacity = self.config.read_capacity;
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        buf.resize(capacity, 0);

        let read = self.lock_bus().read(&mut buf);
        match read {
            Ok(n) if n == capacity => {}
            Ok(n) => {
                debug!("{}: cannot read, got {} of {} bytes", self.irq, n, capacity);
                return Err(Error::RemoteIo);
            }
            Err(e) => {
                debug!("{}: cannot read: {}", self.irq, e);
                return Err(Error::RemoteIo);
            }
        }

        match buf.first() {
            Some(status) if status & READY_BIT != 0 => {}
            _ => return Err(Error::NotReady),
        }

        let upper = self.upper.upgrade().ok_or(Error::NoDevice)?;

        buf.remove(0);
        let size = upper.frame_size_of(&buf).min(buf.len());
        buf.truncate(size);

        #[cfg(feature = "diagnostics")]
        log::trace!(
            "{}: rx {}",
            self.irq,
            crate::utils::bytes_to_hex_spaced(&buf)
        );

        Ok(RxFrame::from(buf))
    }

    /// Cancel the command in flight.
    ///
    /// `aborted` is raised before the ACK reaches the bus so the reply the
    /// chip may still send is suppressed. The ACK is best-effort; the
    /// command is resolved with `Canceled` either way.
    pub fn abort_cmd(&self) {
        self.lock_state().set_aborted();

        if let Err(e) = self.send_ack() {
            warn!("{}: ACK write failed while aborting: {}", self.irq, e);
        }

        self.deliver(None, Err(Error::Canceled));
    }
}
