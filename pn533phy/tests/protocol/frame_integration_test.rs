#[path = "../common/mod.rs"]
mod common;

use pn533phy::protocol::{Frame, rx_frame_size};

#[test]
fn firmware_version_command_matches_wire_literal() {
    let frame = Frame::encode(&common::fixtures::get_firmware_version_payload()).unwrap();
    assert_eq!(frame, common::fixtures::get_firmware_version_wire());
}

#[test]
fn reply_decodes_and_sizes() {
    let reply = common::fixtures::firmware_version_reply();
    assert_eq!(rx_frame_size(&reply), reply.len());
    assert_eq!(
        Frame::decode(&reply).unwrap(),
        vec![0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]
    );
}

#[test]
fn ack_literal_is_recognised() {
    let ack = common::fixtures::ack_wire();
    assert!(Frame::is_ack(&ack));
    assert_eq!(rx_frame_size(&ack), 6);
    assert!(Frame::decode(&ack).is_err());
}
