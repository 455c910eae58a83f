// pn533-phy/pn533phy/src/protocol/mod.rs

//! PN533 frame codec.

pub mod checksum;
pub mod frame;

pub use checksum::{dcs, lcs, lcs_ext};
pub use frame::{Frame, rx_frame_size};
