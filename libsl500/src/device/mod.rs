// libsl500-rs/libsl500/src/device/mod.rs

pub mod builder;
pub mod config;
mod control;
pub mod handle;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::Reader;
