// libsl500-rs/libsl500/src/error.rs

use thiserror::Error;

use crate::card::SessionState;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("no reply header within {attempts} polling attempts")]
    HeaderTimeout { attempts: usize },

    #[error("read timed out while waiting for reply bytes")]
    ReadTimeout,

    #[error("no card in range")]
    CardNotFound,

    #[error("sector {sector} block {block} is reserved and cannot be read or written")]
    ReservedBlock { sector: u8, block: u8 },

    #[error("sector {sector} block {block} is out of range")]
    OutOfRange { sector: u8, block: u8 },

    #[error("payload too large: at most {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("reader reported status {status:#04x} for command {command:#06x}")]
    ProtocolStatus { command: u16, status: u8 },

    #[error("{operation} is not allowed in session state {state:?}")]
    InvalidSessionState {
        operation: &'static str,
        state: SessionState,
    },

    #[error("unexpected reply command: expected {expected:#06x}, got {actual:#06x}")]
    UnexpectedResponse { expected: u16, actual: u16 },

    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("no transport configured")]
    TransportMissing,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl Error {
    /// True for both flavours of "the reader did not answer in time".
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HeaderTimeout { .. } | Self::ReadTimeout)
    }

    pub fn is_card_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
