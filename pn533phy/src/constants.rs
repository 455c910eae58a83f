// pn533-phy/pn533phy/src/constants.rs
//! Wire-level constants for PN532/PN533 host-controller framing

/// Frame preamble byte
pub const PREAMBLE: u8 = 0x00;

/// Start-of-packet code following the preamble: 0x00 0xFF
pub const START_CODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const POSTAMBLE: u8 = 0x00;

/// ACK frame: preamble, start code, ACK code (0x00 0xFF), postamble
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame sent by the chip to request a retransmission
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// SPI data-write operation byte, sent ahead of every host->chip frame
pub const SPI_DATA_WRITE: u8 = 0x01;

/// Bit 0 of the leading status byte of every bus read
pub const READY_BIT: u8 = 0x01;

/// Preamble + start code + LEN + LCS
pub const STD_FRAME_LEN: usize = 5;

/// Preamble + start code + 0xFF 0xFF + LENM + LENL + LCS
pub const EXT_FRAME_LEN: usize = 8;

/// Standard frame header including TFI and command code
pub const STD_FRAME_HEADER_LEN: usize = STD_FRAME_LEN + 2;

/// Extended frame header including TFI and command code
pub const EXT_FRAME_HEADER_LEN: usize = EXT_FRAME_LEN + 2;

/// DCS + postamble
pub const STD_FRAME_TAIL_LEN: usize = 2;

/// Largest payload a chip reply may carry
pub const STD_FRAME_MAX_PAYLOAD_LEN: usize = 263;

/// Smallest well-formed frame (empty TFI+Data)
pub const MIN_FRAME_LEN: usize = STD_FRAME_LEN + STD_FRAME_TAIL_LEN;

/// Largest TFI+Data an outbound standard frame can encode (single-byte LEN)
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Bytes requested by one interrupt-driven read: the largest frame plus the
/// leading status byte.
pub const READ_CAPACITY: usize =
    EXT_FRAME_HEADER_LEN + STD_FRAME_MAX_PAYLOAD_LEN + STD_FRAME_TAIL_LEN + 1;

/// Frame identifier for host->chip frames.
pub const TFI_HOST_TO_PN533: u8 = 0xD4;
/// Frame identifier for chip->host frames.
pub const TFI_PN533_TO_HOST: u8 = 0xD5;

/// Lower bound of the delay before retrying a write to a chip that
/// appears to be powered down.
pub const POWER_DOWN_RETRY_MIN_US: u64 = 6_000;
/// Upper bound of the same delay.
pub const POWER_DOWN_RETRY_MAX_US: u64 = 10_000;
