// pn533-phy/pn533phy/src/phy/mod.rs

//! Per-attachment PHY: owns the bus, the fault/abort state and the weak
//! link to the upper engine.

mod builder;
mod frame_transport;
mod reactor;
mod state;

use std::sync::{Mutex, MutexGuard, PoisonError, Weak};

use log::warn;

use crate::config::PhyConfig;
use crate::engine::{PhyOps, UpperEngine};
use crate::transport::Bus;
use crate::types::{IrqLine, RxFrame};
use crate::{Error, Result};

pub use builder::PhyBuilder;
#[cfg(feature = "async")]
pub use reactor::spawn_reactor_async;
pub use reactor::{ReactorHandle, spawn_reactor};

use state::LinkState;

/// One chip attachment.
///
/// Senders (`send_frame`, `send_ack`, `abort_cmd`) and the interrupt
/// reactor may run on different threads. The state lock and the bus lock
/// are never held at the same time.
pub struct Phy {
    bus: Mutex<Box<dyn Bus>>,
    state: Mutex<LinkState>,
    upper: Weak<dyn UpperEngine>,
    irq: IrqLine,
    config: PhyConfig,
}

impl Phy {
    /// Attach to `bus`. Frames read on `irq` go to `upper` while it is
    /// alive.
    pub fn new(
        bus: Box<dyn Bus>,
        upper: Weak<dyn UpperEngine>,
        irq: IrqLine,
        config: PhyConfig,
    ) -> Self {
        Self {
            bus: Mutex::new(bus),
            state: Mutex::new(LinkState::default()),
            upper,
            irq,
            config,
        }
    }

    /// Interrupt line of this attachment.
    pub fn irq(&self) -> IrqLine {
        self.irq
    }

    /// Config the attachment was built with.
    pub fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// The latched fault, if the bus has been declared unreliable.
    pub fn hard_fault(&self) -> Option<Error> {
        self.lock_state().hard_fault().cloned()
    }

    /// Whether a reply arriving now would be dropped.
    pub fn is_aborted(&self) -> bool {
        self.lock_state().aborted()
    }

    // Every critical section is a plain field update, so a poisoned lock
    // still guards consistent data.
    fn lock_state(&self) -> MutexGuard<'_, LinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_bus(&self) -> MutexGuard<'_, Box<dyn Bus>> {
        self.bus.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve the engine for the duration of one callback.
    fn deliver(&self, frame: Option<RxFrame>, status: Result<()>) {
        match self.upper.upgrade() {
            Some(upper) => upper.deliver_frame(frame, status),
            None => warn!(
                "{}: upper engine detached, dropping delivery ({:?})",
                self.irq, status
            ),
        }
    }
}

impl PhyOps for Phy {
    fn send_frame(&self, payload: &[u8]) -> Result<()> {
        Phy::send_frame(self, payload)
    }

    fn send_ack(&self) -> Result<()> {
        Phy::send_ack(self)
    }

    fn abort_cmd(&self) {
        Phy::abort_cmd(self)
    }
}

impl std::fmt::Debug for Phy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Phy")
            .field("irq", &self.irq)
            .field("config", &self.config)
            .field("state", &*self.lock_state())
            .finish_non_exhaustive()
    }
}
