// libsl500-rs/libsl500/src/lib.rs

//! libsl500
//!
//! Pure Rust driver for SL500-family serial RFID readers (ISO14443 type A,
//! 1K sector cards): frame codec, reply decoder, block addressing and a
//! card session controller on top of a pluggable [`transport::Transport`].

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
