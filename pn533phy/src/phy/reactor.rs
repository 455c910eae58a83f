// pn533-phy/pn533phy/src/phy/reactor.rs

//! Interrupt reactor: one bus read per falling edge, then deliver, latch
//! or drop.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use super::Phy;
use crate::Error;
use crate::types::{IrqLine, IrqReturn};

impl Phy {
    /// React to one interrupt on `irq`.
    ///
    /// The read always happens (it drains the chip) unless the attachment
    /// is hard-faulted. `aborted` is consulted only after the read has
    /// completed and before anything is delivered.
    pub fn handle_interrupt(&self, irq: IrqLine) -> IrqReturn {
        if irq != self.irq {
            debug!("{}: interrupt from foreign line {}", self.irq, irq);
            return IrqReturn::None;
        }

        if self.lock_state().hard_fault().is_some() {
            return IrqReturn::Handled;
        }

        match self.read_frame() {
            Ok(frame) => {
                let aborted = self.lock_state().aborted();
                if aborted {
                    debug!(
                        "{}: dropping {}-byte reply to aborted command",
                        self.irq,
                        frame.len()
                    );
                } else {
                    self.deliver(Some(frame), Ok(()));
                }
            }
            Err(Error::RemoteIo) => {
                let latched = self.lock_state().latch(Error::RemoteIo);
                if latched {
                    warn!("{}: bus unreliable, disabling further traffic", self.irq);
                    self.deliver(None, Err(Error::RemoteIo));
                }
            }
            Err(e) => debug!("{}: interrupt dropped: {}", self.irq, e),
        }

        IrqReturn::Handled
    }
}

/// Owns the reactor thread started by [`spawn_reactor`].
#[derive(Debug)]
pub struct ReactorHandle {
    thread: JoinHandle<()>,
}

impl ReactorHandle {
    /// Wait for the reactor to exit. It exits once every sender of its
    /// interrupt channel has been dropped and the queued events are
    /// handled; after that no further reactor run can touch the `Phy`.
    pub fn join(self) -> thread::Result<()> {
        self.thread.join()
    }

    /// True once the reactor thread has returned.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }
}

/// Run `phy`'s reactor on a dedicated thread, once per `IrqLine` received.
///
/// `irqs` is fed by whatever turns the platform's edge interrupt into a
/// message. Teardown: drop the senders, `join` the handle, then drop the
/// `Phy`.
pub fn spawn_reactor(phy: Arc<Phy>, irqs: Receiver<IrqLine>) -> io::Result<ReactorHandle> {
    let name = format!("pn533-{}", phy.irq());
    let thread = thread::Builder::new().name(name).spawn(move || {
        for irq in irqs {
            phy.handle_interrupt(irq);
        }
        debug!("{}: interrupt channel closed, reactor exiting", phy.irq());
    })?;
    Ok(ReactorHandle { thread })
}

/// Async flavour of [`spawn_reactor`]: events arrive on a tokio channel and
/// each bus read runs on the blocking pool, one at a time.
#[cfg(feature = "async")]
pub fn spawn_reactor_async(
    phy: Arc<Phy>,
    mut irqs: tokio::sync::mpsc::UnboundedReceiver<IrqLine>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(irq) = irqs.recv().await {
            let phy = Arc::clone(&phy);
            if let Err(e) = tokio::task::spawn_blocking(move || phy.handle_interrupt(irq)).await {
                warn!("interrupt handler task failed: {}", e);
            }
        }
        debug!("{}: interrupt channel closed, reactor exiting", phy.irq());
    })
}
