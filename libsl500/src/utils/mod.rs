//! Utilities for libsl500: small, reusable helpers used across the crate.

pub mod timeout;

pub use timeout::*;
