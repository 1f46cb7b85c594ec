// libsl500-rs/libsl500/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod decoder;
pub mod frame;
pub mod parser;
pub mod reply;

pub use checksum::{verify, xor_checksum};
pub use commands::{Command, CommandCode, reply_data_len};
pub use decoder::{DecodeOptions, decode};
pub use frame::Frame;
pub use reply::Reply;
