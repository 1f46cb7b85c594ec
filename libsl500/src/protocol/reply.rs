// libsl500-rs/libsl500/src/protocol/reply.rs

use crate::constants::FRAME_HEADER;
use crate::protocol::CommandCode;
use crate::protocol::checksum::xor_checksum;
use crate::{Error, Result};

/// Bytes counted by the reply length field besides the data:
/// device id(2) + command code(2) + status(1) + checksum(1)
const REPLY_LENGTH_OVERHEAD: usize = 6;

/// Decoded reader reply.
///
/// Wire format: [Header(2)] [Len(2)] [DeviceId(2)] [Cmd(2)] [Status(1)] [Data(n)] [Checksum(1)]
///
/// `checksum` is carried as received. The decoder does not verify it;
/// see [`Reply::checksum_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub length: u16,
    pub device_id: u16,
    pub command_code: u16,
    pub status: u8,
    pub data: Vec<u8>,
    pub checksum: u8,
}

impl Reply {
    /// Build a well-formed reply (length and checksum filled in) from
    /// device id 0.
    pub fn new(command_code: u16, status: u8, data: Vec<u8>) -> Self {
        let mut reply = Self {
            length: ((REPLY_LENGTH_OVERHEAD + data.len()) & 0xffff) as u16,
            device_id: 0,
            command_code,
            status,
            data,
            checksum: 0,
        };
        reply.checksum = reply.computed_checksum();
        reply
    }

    pub fn success(command: CommandCode, data: Vec<u8>) -> Self {
        Self::new(command.code(), 0, data)
    }

    pub fn failure(command: CommandCode, status: u8) -> Self {
        Self::new(command.code(), status, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Number of data bytes implied by the wire length field, which may
    /// disagree with what the decoder actually consumed.
    pub fn wire_data_len(&self) -> usize {
        (self.length as usize).saturating_sub(REPLY_LENGTH_OVERHEAD)
    }

    /// XOR of device id, command code, status and data.
    pub fn computed_checksum(&self) -> u8 {
        let head = [
            self.device_id.to_le_bytes(),
            self.command_code.to_le_bytes(),
        ];
        xor_checksum(head.as_flattened()) ^ self.status ^ xor_checksum(&self.data)
    }

    pub fn checksum_matches(&self) -> bool {
        self.computed_checksum() == self.checksum
    }

    /// Fail unless this reply answers `expected` with status 0.
    pub fn ensure_success(&self, expected: CommandCode) -> Result<()> {
        if self.command_code != expected.code() {
            return Err(Error::UnexpectedResponse {
                expected: expected.code(),
                actual: self.command_code,
            });
        }
        if !self.is_success() {
            return Err(Error::ProtocolStatus {
                command: self.command_code,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Encode into a reader-to-host wire frame.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(10 + self.data.len());
        out.extend_from_slice(&FRAME_HEADER);
        out.extend_from_slice(&self.length.to_le_bytes());
        out.extend_from_slice(&self.device_id.to_le_bytes());
        out.extend_from_slice(&self.command_code.to_le_bytes());
        out.push(self.status);
        out.extend_from_slice(&self.data);
        out.push(self.checksum);
        out
    }
}
