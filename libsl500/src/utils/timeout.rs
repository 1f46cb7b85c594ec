//! Timeout helpers used across the crate.
//!
//! The reader answers within a few milliseconds, but a reply only counts as
//! missing after the header wait budget (attempts x poll interval) runs out.

use std::time::Duration;

/// Per-byte read timeout in milliseconds once a reply has started.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 200;

/// Number of header polling iterations before giving up on a reply.
pub const DEFAULT_HEADER_ATTEMPTS: usize = 10;

/// Longest wait for a reply byte in each header polling iteration.
pub const DEFAULT_HEADER_POLL_INTERVAL_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
