// pn533-phy/pn533phy/src/error.rs

//! Error type shared by every layer of the crate.

use thiserror::Error;

/// 共通エラー型
///
/// `Clone` so a latched hard fault can be handed back to every later caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bus did not transfer the expected number of bytes, or the chip
    /// did not respond at all.
    #[error("remote i/o error")]
    RemoteIo,

    /// The READY bit was clear: the chip had nothing to report.
    #[error("device not ready")]
    NotReady,

    /// The receive buffer could not be allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// The chip sent something that is not a frame.
    #[error("bad message: {0}")]
    BadMessage(String),

    /// The pending command was cancelled with an ACK frame.
    #[error("command canceled")]
    Canceled,

    /// The bus or the upper engine is missing.
    #[error("no such device")]
    NoDevice,

    /// A length outside what the frame format or the buffer allows.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Limit or exact length required.
        expected: usize,
        /// Length actually seen.
        actual: usize,
    },

    /// LCS or DCS did not add up.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed from the received bytes.
        expected: u8,
        /// Checksum carried by the frame.
        actual: u8,
    },

    /// Preamble, start code or postamble is wrong.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Any other failure reported by the bus implementation.
    #[error("bus error: {0}")]
    Bus(String),
}

impl Error {
    /// Negative Linux errno for this error, for glue code that speaks the
    /// kernel's NFC core conventions.
    pub fn errno(&self) -> i32 {
        match self {
            Error::RemoteIo => -121,
            Error::NotReady => -16,
            Error::OutOfMemory => -12,
            Error::BadMessage(_) | Error::ChecksumMismatch { .. } | Error::FrameFormat(_) => -74,
            Error::Canceled => -2,
            Error::NoDevice => -19,
            Error::InvalidLength { .. } => -22,
            Error::Bus(_) => -5,
        }
    }

    /// Errors the interrupt path drops without telling the upper engine;
    /// the next interrupt may well succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::NotReady | Error::OutOfMemory | Error::BadMessage(_)
        )
    }
}

/// `Result` specialised to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
