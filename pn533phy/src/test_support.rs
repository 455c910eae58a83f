//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the recording engine and the MockBus-backed
//! Phy setup so tests across the crate and tests/ directory share them.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{PhyConfig, RetryPolicy};
use crate::engine::UpperEngine;
use crate::phy::{Phy, PhyBuilder};
use crate::transport::MockBus;
use crate::types::{IrqLine, RxFrame};
use crate::Result;

/// Interrupt line used by `phy_with`.
#[doc(hidden)]
pub const TEST_IRQ: IrqLine = IrqLine::new(17);

/// One `deliver_frame` call.
pub type Delivery = (Option<RxFrame>, Result<()>);

#[derive(Debug, Default)]
struct Recorded {
    deliveries: Vec<Delivery>,
    frame_size_calls: usize,
}

/// UpperEngine that records everything the PHY hands it.
///
/// Frame sizing uses the crate's header-based default unless a fixed size
/// was requested.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingEngine {
    fixed_frame_size: Option<usize>,
    recorded: Mutex<Recorded>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `size` from every `frame_size_of` call.
    pub fn with_frame_size(size: usize) -> Self {
        Self {
            fixed_frame_size: Some(size),
            ..Self::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.lock().deliveries.clone()
    }

    pub fn frame_size_calls(&self) -> usize {
        self.lock().frame_size_calls
    }
}

impl UpperEngine for RecordingEngine {
    fn frame_size_of(&self, raw: &[u8]) -> usize {
        self.lock().frame_size_calls += 1;
        self.fixed_frame_size
            .unwrap_or_else(|| crate::protocol::rx_frame_size(raw))
    }

    fn deliver_frame(&self, frame: Option<RxFrame>, status: Result<()>) {
        self.lock().deliveries.push((frame, status));
    }
}

/// Build a Phy on `TEST_IRQ` over a clone of `bus`, with the retry delay
/// disabled so tests stay fast.
#[doc(hidden)]
pub fn phy_with(bus: &MockBus, engine: &Arc<RecordingEngine>) -> Phy {
    let config = PhyConfig {
        retry: RetryPolicy::immediate(),
        ..PhyConfig::default()
    };
    phy_with_config(bus, engine, config)
}

#[doc(hidden)]
pub fn phy_with_config(bus: &MockBus, engine: &Arc<RecordingEngine>, config: PhyConfig) -> Phy {
    let weak = Arc::downgrade(engine);
    Phy::new(Box::new(bus.clone()), weak, TEST_IRQ, config)
}

/// Same as `phy_with`, going through the public builder.
#[doc(hidden)]
pub fn built_phy(bus: &MockBus, engine: &Arc<RecordingEngine>) -> Result<Phy> {
    PhyBuilder::new()
        .with_bus(Box::new(bus.clone()))
        .with_upper(engine)
        .irq(TEST_IRQ)
        .retry(RetryPolicy::immediate())
        .build()
}
