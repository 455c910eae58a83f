#[path = "../common/mod.rs"]
mod common;

use pn533phy::protocol::{dcs, lcs, lcs_ext};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&common::fixtures::get_firmware_version_payload()), 0x2a);
    assert_eq!(dcs(&[]), 0x00);

    assert_eq!(lcs_ext(0x0100), 0xff);
}
