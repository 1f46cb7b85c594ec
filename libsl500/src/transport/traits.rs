// libsl500-rs/libsl500/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial line away from protocol logic.
///
/// The protocol engine only needs to push raw bytes out and pull reply
/// bytes back in with a timeout; opening and configuring the line is left
/// to the implementation.
pub trait Transport {
    /// Send raw bytes to the reader
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive the next byte, waiting at most `timeout_ms`. Implementations
    /// return `Error::ReadTimeout` when nothing arrives in time.
    fn receive_byte(&mut self, timeout_ms: u64) -> Result<u8>;

    /// Number of bytes already waiting in the input buffer
    fn bytes_available(&mut self) -> Result<usize>;

    /// Fill `buf` completely. The default implementation falls back to
    /// `receive_byte`; buffered transports should override it.
    fn receive_exact(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.receive_byte(timeout_ms)?;
        }
        Ok(())
    }

    /// Discard any pending input
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Switch the local side of the line to a new speed. Transports without
    /// a configurable line keep the default no-op.
    fn set_baud_rate(&mut self, _bits_per_second: u32) -> Result<()> {
        Ok(())
    }
}
