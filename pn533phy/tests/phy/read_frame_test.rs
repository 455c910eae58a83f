#[path = "../common/mod.rs"]
mod common;

use pn533phy::Error;

#[test]
fn ready_read_is_stripped_and_trimmed() {
    let (engine, bus, phy) = common::helpers::setup_with_frame_size(10);

    let body: Vec<u8> = (0x10u8..0x30).collect();
    bus.push_ready_frame(&body);

    let frame = phy.read_frame().unwrap();
    assert_eq!(frame.len(), 10);
    assert_eq!(frame.as_bytes(), &body[..10]);
    assert_eq!(engine.frame_size_calls(), 1);
    assert_eq!(bus.read_count(), 1);
}

#[test]
fn ready_bit_clear_never_sizes_or_delivers() {
    let (engine, bus, phy) = common::helpers::setup_with_frame_size(10);

    // Status byte 0x02: some bit set, but not READY.
    let mut raw = vec![0x02];
    raw.extend_from_slice(&common::fixtures::firmware_version_reply());
    raw.resize(phy.config().read_capacity, 0);
    bus.push_read(raw);

    assert_eq!(phy.read_frame(), Err(Error::NotReady));
    assert_eq!(engine.frame_size_calls(), 0);
    assert!(engine.deliveries().is_empty());
}

#[test]
fn oversized_claim_is_clamped_to_buffer() {
    let (_engine, bus, phy) = common::helpers::setup_with_frame_size(10_000);
    bus.push_ready_frame(&common::fixtures::ack_wire());
    let frame = phy.read_frame().unwrap();
    assert_eq!(frame.len(), phy.config().read_capacity - 1);
}

#[test]
fn short_read_is_remote_io() {
    let (_engine, bus, phy) = common::helpers::setup();
    bus.push_read(vec![0x01, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00]);
    assert_eq!(phy.read_frame(), Err(Error::RemoteIo));
    // read_frame alone does not latch; that is the reactor's call.
    assert_eq!(phy.hard_fault(), None);
}
