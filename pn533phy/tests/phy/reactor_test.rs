#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::sync::mpsc;

use pn533phy::test_support::TEST_IRQ;
use pn533phy::{Error, IrqLine, IrqReturn, RxFrame, spawn_reactor};

#[test]
fn same_bytes_delivered_only_when_not_aborted() {
    let (engine, bus, phy) = common::helpers::setup();
    let reply = common::fixtures::firmware_version_reply();

    phy.abort_cmd();
    bus.push_ready_frame(&reply);
    phy.handle_interrupt(TEST_IRQ);

    phy.send_frame(&common::fixtures::get_firmware_version_payload())
        .unwrap();
    bus.push_ready_frame(&reply);
    phy.handle_interrupt(TEST_IRQ);

    assert_eq!(
        engine.deliveries(),
        vec![
            (None, Err(Error::Canceled)),
            (Some(RxFrame::from(reply)), Ok(())),
        ]
    );
}

#[test]
fn transient_errors_are_dropped() {
    let (engine, bus, phy) = common::helpers::setup();
    bus.push_not_ready();
    bus.push_not_ready();
    assert_eq!(phy.handle_interrupt(TEST_IRQ), IrqReturn::Handled);
    assert_eq!(phy.handle_interrupt(TEST_IRQ), IrqReturn::Handled);
    assert!(engine.deliveries().is_empty());
    assert_eq!(phy.hard_fault(), None);
}

#[test]
fn short_read_latches_and_reports_exactly_once() {
    let (engine, bus, phy) = common::helpers::setup();
    bus.push_read(vec![0x01, 0x00, 0x00]);
    phy.handle_interrupt(TEST_IRQ);
    phy.handle_interrupt(TEST_IRQ);
    phy.handle_interrupt(TEST_IRQ);

    assert_eq!(bus.read_count(), 1);
    assert_eq!(engine.deliveries(), vec![(None, Err(Error::RemoteIo))]);
}

#[test]
fn foreign_line_is_ignored() {
    let (engine, bus, phy) = common::helpers::setup();
    assert_eq!(phy.handle_interrupt(IrqLine::new(3)), IrqReturn::None);
    assert_eq!(bus.read_count(), 0);
    assert!(engine.deliveries().is_empty());
}

#[test]
fn reactor_thread_quiesces_before_teardown() -> anyhow::Result<()> {
    let (engine, bus, phy) = common::helpers::setup();
    let phy = Arc::new(phy);
    let reply = common::fixtures::firmware_version_reply();
    bus.push_ready_frame(&reply);

    let (tx, rx) = mpsc::channel();
    let handle = spawn_reactor(Arc::clone(&phy), rx)?;
    tx.send(TEST_IRQ)?;
    drop(tx);
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("reactor thread panicked"))?;

    // The reactor's clone is gone; this is the last reference.
    assert_eq!(Arc::strong_count(&phy), 1);
    assert_eq!(engine.deliveries(), vec![(Some(RxFrame::from(reply)), Ok(()))]);
    Ok(())
}
