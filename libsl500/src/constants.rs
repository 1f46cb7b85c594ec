// libsl500-rs/libsl500/src/constants.rs
//! Common protocol constants used across the crate

/// Synchronisation header that starts every frame in both directions
pub const FRAME_HEADER: [u8; 2] = [0xAA, 0xBB];

/// Header(2) + length(2) + device id(2) + command code(2) + checksum(1)
pub const FRAME_OVERHEAD: usize = 9;

/// Bytes not counted by the length field: header(2) + length field(2)
pub const LENGTH_EXCLUDED: usize = 4;

/// Largest payload whose frame length still fits the 16-bit length field
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize - (FRAME_OVERHEAD - LENGTH_EXCLUDED);

/// Size of a MIFARE Classic data block
pub const BLOCK_SIZE: usize = 16;

/// Card serial number length returned by anticollision
pub const SERIAL_NUMBER_LEN: usize = 4;

/// Model string length returned by get-model
pub const MODEL_LEN: usize = 11;

/// MIFARE Classic 1K geometry
pub const SECTOR_COUNT: u8 = 16;
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// Index of the key/trailer block within every sector
pub const TRAILER_BLOCK: u8 = 3;

/// Factory default authentication key (transport key)
pub const DEFAULT_KEY: [u8; 6] = [0xFF; 6];

/// Absolute block used by the text helpers (sector 0, block 1)
pub const DEFAULT_TEXT_BLOCK: u8 = 1;

/// Beep duration sent by `beep()` in reader time units
pub const DEFAULT_BEEP_DURATION: u8 = 0x10;

/// Reader factory default line speed
pub const DEFAULT_BAUD_RATE: u32 = 19_200;
