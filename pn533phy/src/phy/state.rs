// pn533-phy/pn533phy/src/phy/state.rs

use crate::{Error, Result};

/// Fault/abort pair shared by senders and the interrupt reactor. Always
/// accessed as one unit under the `Phy`'s state mutex.
#[derive(Debug, Default)]
pub(crate) struct LinkState {
    /// Monotonic: once set it never changes.
    hard_fault: Option<Error>,
    aborted: bool,
}

impl LinkState {
    pub(crate) fn hard_fault(&self) -> Option<&Error> {
        self.hard_fault.as_ref()
    }

    /// Latch `err` as the permanent fault. Returns false if a fault was
    /// already latched, in which case the original one is kept.
    pub(crate) fn latch(&mut self, err: Error) -> bool {
        if self.hard_fault.is_some() {
            return false;
        }
        self.hard_fault = Some(err);
        true
    }

    pub(crate) fn aborted(&self) -> bool {
        self.aborted
    }

    pub(crate) fn set_aborted(&mut self) {
        self.aborted = true;
    }

    /// Gate for a new outbound command: fails with the latched fault, or
    /// clears `aborted` so the reply to this command will be delivered.
    pub(crate) fn begin_send(&mut self) -> Result<()> {
        if let Some(fault) = &self.hard_fault {
            return Err(fault.clone());
        }
        self.aborted = false;
        Ok(())
    }
}
