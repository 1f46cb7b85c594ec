// libsl500-rs/libsl500/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_SIZE, SERIAL_NUMBER_LEN};
use derive_more::{From, Into};
use std::convert::TryFrom;

/// Reader device id - Newtype Pattern (u16, 0 = default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceId(u16);

impl DeviceId {
    pub const DEFAULT: Self = Self(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// Card serial number (UID) returned by anticollision - 4 バイト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct SerialNumber([u8; SERIAL_NUMBER_LEN]);

impl SerialNumber {
    pub fn from_bytes(bytes: [u8; SERIAL_NUMBER_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SERIAL_NUMBER_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for SerialNumber {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SERIAL_NUMBER_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SERIAL_NUMBER_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    pub const EMPTY: Self = Self([0; BLOCK_SIZE]);

    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy up to 16 bytes into a block, zero filling the rest.
    pub fn from_slice_padded(data: &[u8]) -> crate::Result<Self> {
        if data.len() > BLOCK_SIZE {
            return Err(Error::PayloadTooLarge {
                max: BLOCK_SIZE,
                actual: data.len(),
            });
        }
        let mut block = [0u8; BLOCK_SIZE];
        block[..data.len()].copy_from_slice(data);
        Ok(Self(block))
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Text stored in the block: the leading run of non-zero bytes.
    /// An all-zero block yields an empty string.
    pub fn leading_text(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(BLOCK_SIZE);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Which sector key to authenticate with
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[default]
    KeyA = 0x60,
    KeyB = 0x61,
}

/// Request mode byte: idle cards only, or all cards including halted ones
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestMode {
    #[default]
    Idle = 0x26,
    All = 0x52,
}

/// Card family the reader's RF front end is configured for
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardType {
    #[default]
    TypeA = b'A',
    TypeB = b'B',
    Iso15693 = b'1',
}

/// LED state. `Both` lights red and green together.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Both = 0x03,
}

/// Line speeds understood by the init-com command
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    B4800 = 0x00,
    B9600 = 0x01,
    B14400 = 0x02,
    B19200 = 0x03,
    B28800 = 0x04,
    B38400 = 0x05,
    B57600 = 0x06,
    B115200 = 0x07,
}

impl BaudRate {
    pub fn bits_per_second(&self) -> u32 {
        match self {
            Self::B4800 => 4_800,
            Self::B9600 => 9_600,
            Self::B14400 => 14_400,
            Self::B19200 => 19_200,
            Self::B28800 => 28_800,
            Self::B38400 => 38_400,
            Self::B57600 => 57_600,
            Self::B115200 => 115_200,
        }
    }

    pub fn from_bits_per_second(bps: u32) -> Option<Self> {
        match bps {
            4_800 => Some(Self::B4800),
            9_600 => Some(Self::B9600),
            14_400 => Some(Self::B14400),
            19_200 => Some(Self::B19200),
            28_800 => Some(Self::B28800),
            38_400 => Some(Self::B38400),
            57_600 => Some(Self::B57600),
            115_200 => Some(Self::B115200),
            _ => None,
        }
    }
}
