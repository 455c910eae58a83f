#[path = "../common/mod.rs"]
mod common;

use pn533phy::{Error, Phy, PhyBuilder, IrqLine, BusVariant, RetryPolicy};
use pn533phy::test_support::RecordingEngine;
use pn533phy::transport::MockBus;
use std::sync::Arc;

#[test]
fn command_goes_out_as_one_frame() -> anyhow::Result<()> {
    let (_engine, bus, phy) = common::helpers::setup();
    phy.send_frame(&common::fixtures::get_firmware_version_payload())?;
    assert_eq!(bus.writes(), vec![common::fixtures::get_firmware_version_wire()]);
    Ok(())
}

#[test]
fn power_down_retry_then_success() -> anyhow::Result<()> {
    let (_engine, bus, phy) = common::helpers::setup();
    bus.push_write_result(Err(Error::RemoteIo));
    phy.send_frame(&common::fixtures::get_firmware_version_payload())?;
    assert_eq!(bus.write_count(), 2);
    Ok(())
}

#[test]
fn latched_fault_short_circuits_every_send() {
    let (engine, bus, phy) = common::helpers::setup();

    // A short read on interrupt latches the fault.
    bus.push_read(vec![0x01, 0x00]);
    phy.handle_interrupt(pn533phy::test_support::TEST_IRQ);
    assert_eq!(phy.hard_fault(), Some(Error::RemoteIo));

    bus.forbid_io();
    for _ in 0..3 {
        assert_eq!(
            phy.send_frame(&common::fixtures::get_firmware_version_payload()),
            Err(Error::RemoteIo)
        );
    }
    assert_eq!(engine.deliveries(), vec![(None, Err(Error::RemoteIo))]);
}

#[test]
fn spi_attachment_prefixes_every_write() {
    common::helpers::init_logger();
    let engine = Arc::new(RecordingEngine::new());
    let bus = MockBus::new();
    let phy: Phy = PhyBuilder::new()
        .with_bus(Box::new(bus.clone()))
        .with_upper(&engine)
        .irq(IrqLine::new(25))
        .variant(BusVariant::Spi)
        .retry(RetryPolicy::immediate())
        .build()
        .unwrap();

    phy.send_frame(&common::fixtures::get_firmware_version_payload())
        .unwrap();
    phy.send_ack().unwrap();

    let mut expected = vec![0x01];
    expected.extend_from_slice(&common::fixtures::get_firmware_version_wire());
    assert_eq!(
        bus.writes(),
        vec![expected, common::fixtures::spi_ack_wire()]
    );
}
