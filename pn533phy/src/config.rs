// pn533-phy/pn533phy/src/config.rs
//! Per-attachment PHY configuration

use std::time::Duration;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACK_FRAME, POWER_DOWN_RETRY_MAX_US, POWER_DOWN_RETRY_MIN_US, READ_CAPACITY, SPI_DATA_WRITE,
};

/// Which serial bus the chip hangs off.
///
/// I2C writes carry the frame as-is. SPI writes are preceded by the
/// data-write operation byte, which is why an SPI ACK is 7 bytes on the
/// wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusVariant {
    /// Frames go on the wire unchanged.
    #[default]
    I2c,
    /// Frames are preceded by the SPI data-write byte.
    Spi,
}

impl BusVariant {
    /// Prepend the variant's write prefix (if any) to an encoded frame.
    pub fn wrap(&self, frame: &[u8]) -> Vec<u8> {
        match self {
            BusVariant::I2c => frame.to_vec(),
            BusVariant::Spi => {
                let mut out = Vec::with_capacity(frame.len() + 1);
                out.push(SPI_DATA_WRITE);
                out.extend_from_slice(frame);
                out
            }
        }
    }

    /// The ACK frame as written on this bus.
    pub fn ack(&self) -> Vec<u8> {
        self.wrap(&ACK_FRAME)
    }
}

/// Delay window for the single write retry issued when the chip looks
/// powered down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryPolicy {
    /// Shortest wait before the retry.
    pub min_delay: Duration,
    /// Longest wait before the retry.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_micros(POWER_DOWN_RETRY_MIN_US),
            max_delay: Duration::from_micros(POWER_DOWN_RETRY_MAX_US),
        }
    }
}

impl RetryPolicy {
    /// No wait at all; handy for tests.
    pub const fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Pick a delay in `[min_delay, max_delay]`. An inverted window yields
    /// `min_delay`.
    pub fn jittered_delay(&self) -> Duration {
        if self.max_delay <= self.min_delay {
            return self.min_delay;
        }
        rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
    }
}

/// Settings fixed for the lifetime of one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhyConfig {
    /// Bus the chip is attached through.
    pub variant: BusVariant,
    /// Power-down retry window for `send_frame`.
    pub retry: RetryPolicy,
    /// Bytes requested by each interrupt-driven read, status byte included.
    pub read_capacity: usize,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self {
            variant: BusVariant::default(),
            retry: RetryPolicy::default(),
            read_capacity: READ_CAPACITY,
        }
    }
}
