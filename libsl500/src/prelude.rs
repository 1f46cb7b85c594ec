// libsl500-rs/libsl500/src/prelude.rs

pub use crate::card::{BlockAddress, CardSession, SessionState, resolve};
pub use crate::device::{Reader, ReaderBuilder, ReaderConfig};
pub use crate::protocol::{Command, CommandCode, Reply};
pub use crate::transport::Transport;
pub use crate::{
    BaudRate, BlockData, CardType, DeviceId, Error, KeyType, LedColor, RequestMode, Result,
    SerialNumber,
};

#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;

// Re-export small utilities for convenience
pub use crate::utils::{default_read_timeout, ms};
