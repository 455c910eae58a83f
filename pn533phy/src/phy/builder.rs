// pn533-phy/pn533phy/src/phy/builder.rs

use std::sync::{Arc, Weak};

use crate::config::{BusVariant, PhyConfig, RetryPolicy};
use crate::constants::MIN_FRAME_LEN;
use crate::engine::UpperEngine;
use crate::phy::Phy;
use crate::transport::Bus;
use crate::types::IrqLine;
use crate::{Error, Result};

/// Helper to construct a Phy with optional configuration.
pub struct PhyBuilder {
    bus: Option<Box<dyn Bus>>,
    upper: Option<Weak<dyn UpperEngine>>,
    irq: IrqLine,
    config: PhyConfig,
}

impl PhyBuilder {
    /// Empty builder on interrupt line 0 with the default config.
    pub fn new() -> Self {
        Self {
            bus: None,
            upper: None,
            irq: IrqLine::new(0),
            config: PhyConfig::default(),
        }
    }

    /// Provide the bus endpoint (e.g. an I2C client or a MockBus).
    pub fn with_bus(mut self, bus: Box<dyn Bus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Link the engine frames are delivered to. Only a weak reference is
    /// kept.
    pub fn with_upper<U: UpperEngine + 'static>(mut self, upper: &Arc<U>) -> Self {
        let weak: Weak<dyn UpperEngine> = Arc::downgrade(upper) as Weak<dyn UpperEngine>;
        self.upper = Some(weak);
        self
    }

    /// Same as `with_upper`, for an engine already held behind a trait
    /// object.
    pub fn with_upper_weak(mut self, upper: Weak<dyn UpperEngine>) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Interrupt line the reactor answers to.
    pub fn irq(mut self, irq: IrqLine) -> Self {
        self.irq = irq;
        self
    }

    /// I2C or SPI framing.
    pub fn variant(mut self, variant: BusVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Power-down retry window.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.config.retry = retry;
        self
    }

    /// Size of each interrupt read, status byte included.
    pub fn read_capacity(mut self, capacity: usize) -> Self {
        self.config.read_capacity = capacity;
        self
    }

    /// Replace the whole config at once.
    pub fn config(mut self, config: PhyConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Fails with `NoDevice` when the bus or the
    /// engine is missing, and with `InvalidLength` when reads could not
    /// hold even an empty frame behind the status byte.
    pub fn build(self) -> Result<Phy> {
        let bus = self.bus.ok_or(Error::NoDevice)?;
        let upper = self.upper.ok_or(Error::NoDevice)?;

        let min_capacity = MIN_FRAME_LEN + 1;
        if self.config.read_capacity < min_capacity {
            return Err(Error::InvalidLength {
                expected: min_capacity,
                actual: self.config.read_capacity,
            });
        }

        Ok(Phy::new(bus, upper, self.irq, self.config))
    }
}

impl Default for PhyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
