//! Reader configuration

use crate::constants::{DEFAULT_KEY, DEFAULT_TEXT_BLOCK};
use crate::protocol::DecodeOptions;
use crate::types::{DeviceId, KeyType, RequestMode};
use crate::utils::{DEFAULT_HEADER_ATTEMPTS, DEFAULT_HEADER_POLL_INTERVAL_MS, DEFAULT_READ_TIMEOUT_MS};

/// Settings shared by every exchange a `Reader` performs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Device id written into every command frame
    pub device_id: DeviceId,
    /// Key slot used by `authenticate`
    pub key_type: KeyType,
    /// Sector key used by `authenticate`; factory cards ship with all 0xFF
    pub auth_key: [u8; 6],
    /// Mode byte sent with `request`
    pub request_mode: RequestMode,
    /// Absolute block used by the text helpers
    pub text_block: u8,
    pub header_attempts: usize,
    pub header_poll_interval_ms: u64,
    pub byte_timeout_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            device_id: DeviceId::DEFAULT,
            key_type: KeyType::KeyA,
            auth_key: DEFAULT_KEY,
            request_mode: RequestMode::Idle,
            text_block: DEFAULT_TEXT_BLOCK,
            header_attempts: DEFAULT_HEADER_ATTEMPTS,
            header_poll_interval_ms: DEFAULT_HEADER_POLL_INTERVAL_MS,
            byte_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl ReaderConfig {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            header_attempts: self.header_attempts,
            poll_interval_ms: self.header_poll_interval_ms,
            byte_timeout_ms: self.byte_timeout_ms,
        }
    }
}
