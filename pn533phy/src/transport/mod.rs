// pn533-phy/pn533phy/src/transport/mod.rs

//! Bus abstraction and the scripted mock used in tests.

pub mod mock;
pub mod traits;

pub use mock::MockBus;
pub use traits::Bus;
