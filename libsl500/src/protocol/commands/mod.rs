// libsl500-rs/libsl500/src/protocol/commands/mod.rs

pub mod card;
pub mod device;

pub use card::{
    encode_anticollision, encode_authenticate, encode_halt, encode_read, encode_request,
    encode_select, encode_write,
};
pub use device::{
    encode_antenna, encode_beep, encode_get_model, encode_init_com, encode_init_type,
    encode_light, encode_set_device_id,
};

use crate::protocol::Frame;
use crate::types::{
    BaudRate, BlockData, CardType, DeviceId, KeyType, LedColor, RequestMode, SerialNumber,
};

/// Command codes as they appear on the wire (little endian u16).
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    InitCom = 0x0101,
    SetDeviceId = 0x0102,
    GetModel = 0x0104,
    Beep = 0x0106,
    Light = 0x0107,
    InitType = 0x0108,
    Antenna = 0x010C,
    Request = 0x0201,
    Anticollision = 0x0202,
    Select = 0x0203,
    Halt = 0x0204,
    Authenticate = 0x0207,
    Read = 0x0208,
    Write = 0x0209,
}

impl CommandCode {
    /// Ping shares the get-model code; it just ignores the model string.
    pub const PING: Self = Self::GetModel;

    pub const fn code(self) -> u16 {
        self as u16
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        let cmd = match code {
            0x0101 => Self::InitCom,
            0x0102 => Self::SetDeviceId,
            0x0104 => Self::GetModel,
            0x0106 => Self::Beep,
            0x0107 => Self::Light,
            0x0108 => Self::InitType,
            0x010C => Self::Antenna,
            0x0201 => Self::Request,
            0x0202 => Self::Anticollision,
            0x0203 => Self::Select,
            0x0204 => Self::Halt,
            0x0207 => Self::Authenticate,
            0x0208 => Self::Read,
            0x0209 => Self::Write,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Number of data bytes in a successful reply, keyed by command code.
///
/// The reader's length field is not consulted when decoding; this table
/// alone decides how many data bytes follow the status byte.
const REPLY_DATA_LEN: [(u16, usize); 5] = [
    (CommandCode::GetModel.code(), crate::constants::MODEL_LEN),
    (CommandCode::Request.code(), 2),
    (CommandCode::Read.code(), crate::constants::BLOCK_SIZE),
    (CommandCode::Anticollision.code(), crate::constants::SERIAL_NUMBER_LEN),
    (CommandCode::Select.code(), 1),
];

/// Expected data length of a successful reply to `command`; 0 for
/// commands that only report a status.
pub fn reply_data_len(command: u16) -> usize {
    REPLY_DATA_LEN
        .iter()
        .find(|(code, _)| *code == command)
        .map(|&(_, len)| len)
        .unwrap_or(0)
}

/// High-level Command enum. Payload encoders live in
/// `protocol::commands::{device,card}`.
#[derive(Debug, Clone)]
pub enum Command {
    Ping,
    GetModel,
    Beep { duration: u8 },
    Light { color: LedColor },
    InitType { card_type: CardType },
    Antenna { on: bool },
    InitCom { baud: BaudRate },
    SetDeviceId { id: DeviceId },
    Request { mode: RequestMode },
    Anticollision,
    Select { serial: SerialNumber },
    Halt,
    Authenticate {
        key_type: KeyType,
        block: u8,
        key: [u8; 6],
    },
    Read { block: u8 },
    Write { block: u8, data: BlockData },
}

impl Command {
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::Ping => CommandCode::PING,
            Self::GetModel => CommandCode::GetModel,
            Self::Beep { .. } => CommandCode::Beep,
            Self::Light { .. } => CommandCode::Light,
            Self::InitType { .. } => CommandCode::InitType,
            Self::Antenna { .. } => CommandCode::Antenna,
            Self::InitCom { .. } => CommandCode::InitCom,
            Self::SetDeviceId { .. } => CommandCode::SetDeviceId,
            Self::Request { .. } => CommandCode::Request,
            Self::Anticollision => CommandCode::Anticollision,
            Self::Select { .. } => CommandCode::Select,
            Self::Halt => CommandCode::Halt,
            Self::Authenticate { .. } => CommandCode::Authenticate,
            Self::Read { .. } => CommandCode::Read,
            Self::Write { .. } => CommandCode::Write,
        }
    }

    /// Encode the command parameters (everything after the command code).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Ping | Self::GetModel => encode_get_model(),
            Self::Beep { duration } => encode_beep(*duration),
            Self::Light { color } => encode_light(*color),
            Self::InitType { card_type } => encode_init_type(*card_type),
            Self::Antenna { on } => encode_antenna(*on),
            Self::InitCom { baud } => encode_init_com(*baud),
            Self::SetDeviceId { id } => encode_set_device_id(*id),
            Self::Request { mode } => encode_request(*mode),
            Self::Anticollision => encode_anticollision(),
            Self::Select { serial } => encode_select(serial),
            Self::Halt => encode_halt(),
            Self::Authenticate {
                key_type,
                block,
                key,
            } => encode_authenticate(*key_type, *block, key),
            Self::Read { block } => encode_read(*block),
            Self::Write { block, data } => encode_write(*block, data),
        }
    }

    /// Wrap the command into a frame addressed to `device_id`.
    pub fn to_frame(&self, device_id: DeviceId) -> Frame {
        Frame::new(self.command_code().code(), self.encode(), device_id)
    }
}
