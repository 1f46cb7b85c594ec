// libsl500-rs/libsl500/src/protocol/commands/device.rs
//! Parameter encoders for reader-level commands (no card involved).

use crate::types::{BaudRate, CardType, DeviceId, LedColor};

/// Get-model / ping carry no parameters
pub fn encode_get_model() -> Vec<u8> {
    Vec::new()
}

/// Beep for `duration` reader time units
pub fn encode_beep(duration: u8) -> Vec<u8> {
    vec![duration]
}

pub fn encode_light(color: LedColor) -> Vec<u8> {
    vec![color as u8]
}

pub fn encode_init_type(card_type: CardType) -> Vec<u8> {
    vec![card_type as u8]
}

/// Antenna state: 0x00 off, 0x01 on
pub fn encode_antenna(on: bool) -> Vec<u8> {
    vec![u8::from(on)]
}

pub fn encode_init_com(baud: BaudRate) -> Vec<u8> {
    vec![baud as u8]
}

pub fn encode_set_device_id(id: DeviceId) -> Vec<u8> {
    id.to_le_bytes().to_vec()
}
