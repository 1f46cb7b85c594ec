// libsl500-rs/libsl500/src/device/handle.rs

use crate::device::config::ReaderConfig;
use crate::protocol::{Command, CommandCode, Reply, codec};
use crate::transport::Transport;
use crate::Result;

/// Handle to one reader on an exclusively owned transport.
///
/// Every operation is a single blocking exchange (one frame out, one reply
/// in). Card session state is not kept here; it lives in the caller's
/// [`crate::card::CardSession`].
pub struct Reader {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
}

impl Reader {
    /// Create a Reader with the default configuration. Mostly used by
    /// tests that hand in a MockTransport.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ReaderConfig {
        &mut self.config
    }

    /// Send a command and return the raw decoded reply, whatever its status.
    pub fn execute(&mut self, cmd: &Command) -> Result<Reply> {
        let opts = self.config.decode_options();
        codec::exchange(&mut *self.transport, cmd, self.config.device_id, &opts)
    }

    /// Send a command and require a status 0 reply to the same command.
    pub fn execute_checked(&mut self, cmd: &Command) -> Result<Reply> {
        let reply = self.execute(cmd)?;
        reply.ensure_success(cmd.command_code())?;
        Ok(reply)
    }

    /// Execute a command that reports nothing but its status.
    pub(crate) fn execute_status(&mut self, cmd: &Command) -> Result<()> {
        self.execute_checked(cmd).map(|_| ())
    }

    pub(crate) fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    /// Drop whatever is pending on the input side, e.g. after a timeout
    /// left a partial reply behind.
    pub fn discard_input(&mut self) -> Result<()> {
        self.transport.reset()
    }

    /// Whether `reply` answers `code` with status 0.
    pub(crate) fn is_success_for(reply: &Reply, code: CommandCode) -> bool {
        reply.is_success() && reply.command_code == code.code()
    }
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
