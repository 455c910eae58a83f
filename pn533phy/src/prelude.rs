// pn533-phy/pn533phy/src/prelude.rs

//! Commonly used types, for `use pn533phy::prelude::*`.

pub use crate::config::{BusVariant, PhyConfig, RetryPolicy};
pub use crate::engine::{PhyOps, UpperEngine};
pub use crate::phy::{Phy, PhyBuilder, ReactorHandle, spawn_reactor};
pub use crate::protocol::Frame;
pub use crate::transport::Bus;
pub use crate::{Error, IrqLine, IrqReturn, Result, RxFrame};

pub use crate::utils::{bytes_to_hex_spaced, parse_hex};
