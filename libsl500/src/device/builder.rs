// libsl500-rs/libsl500/src/device/builder.rs

use crate::device::config::ReaderConfig;
use crate::device::handle::Reader;
use crate::transport::Transport;
use crate::types::{DeviceId, KeyType};
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn device_id(mut self, id: DeviceId) -> Self {
        self.config.device_id = id;
        self
    }

    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.config.key_type = key_type;
        self
    }

    pub fn auth_key(mut self, key: [u8; 6]) -> Self {
        self.config.auth_key = key;
        self
    }

    pub fn byte_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.byte_timeout_ms = timeout_ms;
        self
    }

    /// Header wait budget: `attempts` polls, `interval_ms` apart.
    pub fn header_wait(mut self, attempts: usize, interval_ms: u64) -> Self {
        self.config.header_attempts = attempts;
        self.config.header_poll_interval_ms = interval_ms;
        self
    }

    /// Consume the builder and return a Reader.
    /// Requires a transport to be provided; otherwise returns TransportMissing.
    pub fn build(self) -> Result<Reader> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::TransportMissing),
        }
    }
}
