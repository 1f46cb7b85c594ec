// libsl500-rs/libsl500/src/protocol/frame.rs

use crate::constants::{FRAME_HEADER, FRAME_OVERHEAD, LENGTH_EXCLUDED, MAX_PAYLOAD_LEN};
use crate::protocol::checksum::xor_checksum;
use crate::protocol::parser::{ensure_len, le_u16_at};
use crate::types::DeviceId;
use crate::{Error, Result};

/// Host-to-reader command frame.
///
/// Format: [Header(2)] [Len(2)] [DeviceId(2)] [Cmd(2)] [Payload(n)] [Checksum(1)]
/// Header: 0xAA 0xBB
/// Len: total frame size - 4, little endian
/// Checksum: XOR of DeviceId..Payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub device_id: DeviceId,
    pub command: u16,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(command: u16, payload: Vec<u8>, device_id: DeviceId) -> Self {
        Self {
            device_id,
            command,
            payload,
        }
    }

    /// Frame addressed to the default device id 0
    pub fn command(command: u16, payload: Vec<u8>) -> Self {
        Self::new(command, payload, DeviceId::DEFAULT)
    }

    /// Value of the length field for this frame
    pub fn wire_length(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len() - LENGTH_EXCLUDED
    }

    /// Encode into the full wire frame
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
                actual: self.payload.len(),
            });
        }

        let total = FRAME_OVERHEAD + self.payload.len();
        let len = ((total - LENGTH_EXCLUDED) & 0xffff) as u16;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&FRAME_HEADER);
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&self.device_id.to_le_bytes());
        out.extend_from_slice(&self.command.to_le_bytes());
        out.extend_from_slice(&self.payload);
        let checksum = xor_checksum(&out[4..]);
        out.push(checksum);
        Ok(out)
    }

    /// Parse a complete command frame, validating header, length and checksum.
    pub fn parse(frame: &[u8]) -> Result<Self> {
        ensure_len(frame, FRAME_OVERHEAD)?;

        if frame[..2] != FRAME_HEADER {
            return Err(Error::FrameFormat("invalid header".into()));
        }

        let declared = le_u16_at(frame, 2)? as usize;
        let required_len = declared + LENGTH_EXCLUDED;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let checksum_idx = frame.len() - 1;
        let expected = xor_checksum(&frame[4..checksum_idx]);
        let actual = frame[checksum_idx];
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(Self {
            device_id: DeviceId::new(le_u16_at(frame, 4)?),
            command: le_u16_at(frame, 6)?,
            payload: frame[8..checksum_idx].to_vec(),
        })
    }
}
