// libsl500-rs/libsl500/src/protocol/commands/card.rs
//! Parameter encoders for the MIFARE card commands.

use crate::types::{BlockData, KeyType, RequestMode, SerialNumber};

pub fn encode_request(mode: RequestMode) -> Vec<u8> {
    vec![mode as u8]
}

pub fn encode_anticollision() -> Vec<u8> {
    Vec::new()
}

pub fn encode_select(serial: &SerialNumber) -> Vec<u8> {
    serial.as_bytes().to_vec()
}

pub fn encode_halt() -> Vec<u8> {
    Vec::new()
}

/// [key type] [block] [key(6)]
pub fn encode_authenticate(key_type: KeyType, block: u8, key: &[u8; 6]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + key.len());
    out.push(key_type as u8);
    out.push(block);
    out.extend_from_slice(key);
    out
}

pub fn encode_read(block: u8) -> Vec<u8> {
    vec![block]
}

/// [block] [data(16)]
pub fn encode_write(block: u8, data: &BlockData) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + data.as_bytes().len());
    out.push(block);
    out.extend_from_slice(data.as_bytes());
    out
}
