// pn533-phy/pn533phy/src/protocol/frame.rs

//! Standard/extended frame encoding and ACK/NACK recognition.

use crate::constants::{
    ACK_FRAME, EXT_FRAME_LEN, MAX_PAYLOAD_LEN, MIN_FRAME_LEN, NACK_FRAME, POSTAMBLE, PREAMBLE,
    START_CODE, STD_FRAME_LEN, STD_FRAME_TAIL_LEN,
};
use crate::protocol::checksum::{dcs, lcs, lcs_ext};
use crate::{Error, Result};

/// PN533 information frame helper.
///
/// Standard: [Preamble] [00 FF] [LEN] [LCS] [TFI+Data(LEN)] [DCS] [Postamble]
/// Extended: [Preamble] [00 FF] [FF FF] [LENM LENL] [LCS] [TFI+Data] [DCS] [Postamble]
///
/// Outbound frames are always standard; the chip may answer with either.
pub struct Frame;

impl Frame {
    /// Encode TFI+Data into a standard information frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(MIN_FRAME_LEN + payload.len());
        out.push(PREAMBLE);
        out.extend_from_slice(&START_CODE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Decode a standard or extended information frame and return TFI+Data.
    ///
    /// ACK/NACK frames are not information frames; check them with
    /// [`Frame::is_ack`] / [`Frame::is_nack`] first.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[0] != PREAMBLE || frame[1..3] != START_CODE {
            return Err(Error::FrameFormat("invalid start code".into()));
        }

        let (data_start, data_len) = if Self::is_extended(frame) {
            let min = EXT_FRAME_LEN + STD_FRAME_TAIL_LEN;
            if frame.len() < min {
                return Err(Error::InvalidLength {
                    expected: min,
                    actual: frame.len(),
                });
            }
            let len = u16::from_be_bytes([frame[5], frame[6]]);
            let lcs_expected = lcs_ext(len);
            if frame[7] != lcs_expected {
                return Err(Error::ChecksumMismatch {
                    expected: lcs_expected,
                    actual: frame[7],
                });
            }
            (EXT_FRAME_LEN, len as usize)
        } else {
            let len = frame[3];
            let lcs_expected = lcs(len);
            if frame[4] != lcs_expected {
                return Err(Error::ChecksumMismatch {
                    expected: lcs_expected,
                    actual: frame[4],
                });
            }
            (STD_FRAME_LEN, len as usize)
        };

        let required_len = data_start + data_len + STD_FRAME_TAIL_LEN;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let data_end = data_start + data_len;
        let data = &frame[data_start..data_end];

        let dcs_expected = dcs(data);
        if frame[data_end] != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: frame[data_end],
            });
        }

        if frame[data_end + 1] != POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(data.to_vec())
    }

    /// Frame starts with the ACK literal.
    pub fn is_ack(frame: &[u8]) -> bool {
        frame.starts_with(&ACK_FRAME)
    }

    /// Frame starts with the NACK literal.
    pub fn is_nack(frame: &[u8]) -> bool {
        frame.starts_with(&NACK_FRAME)
    }

    /// LEN = 0xFF with LCS = 0xFF marks an extended information frame.
    pub fn is_extended(frame: &[u8]) -> bool {
        frame.len() >= STD_FRAME_LEN && frame[3] == 0xFF && frame[4] == 0xFF
    }
}

/// Size of the frame at the start of `raw`, judged from its own header.
///
/// This is the default `frame_size_of` an upper engine hands to the PHY.
/// Headers too short to carry a length yield `raw.len()`; the result may
/// exceed `raw.len()` when the header claims more than was read, so callers
/// clamp before trimming.
pub fn rx_frame_size(raw: &[u8]) -> usize {
    if Frame::is_ack(raw) || Frame::is_nack(raw) {
        return ACK_FRAME.len();
    }

    if Frame::is_extended(raw) {
        if raw.len() < EXT_FRAME_LEN - 1 {
            return raw.len();
        }
        let len = u16::from_be_bytes([raw[5], raw[6]]) as usize;
        return EXT_FRAME_LEN + len + STD_FRAME_TAIL_LEN;
    }

    if raw.len() < STD_FRAME_LEN - 1 {
        return raw.len();
    }
    STD_FRAME_LEN + raw[3] as usize + STD_FRAME_TAIL_LEN
}
