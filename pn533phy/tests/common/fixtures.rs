// fixtures.rs — commonly used payloads and wire frames

use pn533phy::protocol::Frame;

/// GetFirmwareVersion command (TFI + command code)
pub fn get_firmware_version_payload() -> Vec<u8> {
    vec![0xD4, 0x02]
}

/// GetFirmwareVersion as it goes out on I2C
pub fn get_firmware_version_wire() -> Vec<u8> {
    hex::decode("0000ff02fed4022a00").unwrap()
}

/// GetFirmwareVersion reply from a PN532 (IC=0x32, Ver=1.6, Support=0x07)
pub fn firmware_version_reply() -> Vec<u8> {
    Frame::encode(&[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]).unwrap()
}

/// InListPassiveTarget reply with no target found
pub fn empty_target_list_reply() -> Vec<u8> {
    Frame::encode(&[0xD5, 0x4B, 0x00]).unwrap()
}

pub fn ack_wire() -> Vec<u8> {
    hex::decode("0000ff00ff00").unwrap()
}

pub fn spi_ack_wire() -> Vec<u8> {
    hex::decode("010000ff00ff00").unwrap()
}
