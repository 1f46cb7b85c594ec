// libsl500-rs/libsl500/src/protocol/decoder.rs

use log::{trace, warn};

use crate::constants::FRAME_HEADER;
use crate::protocol::Reply;
use crate::protocol::commands::reply_data_len;
use crate::transport::Transport;
use crate::utils::{
    DEFAULT_HEADER_ATTEMPTS, DEFAULT_HEADER_POLL_INTERVAL_MS, DEFAULT_READ_TIMEOUT_MS,
};
use crate::{Error, Result};

/// Timing parameters for reading one reply off the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Polling iterations spent looking for the header
    pub header_attempts: usize,
    /// Longest wait for the next byte in each polling iteration
    pub poll_interval_ms: u64,
    /// Timeout for each read once the header was found
    pub byte_timeout_ms: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            header_attempts: DEFAULT_HEADER_ATTEMPTS,
            poll_interval_ms: DEFAULT_HEADER_POLL_INTERVAL_MS,
            byte_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

/// Tracks the two header bytes across reads.
#[derive(Default)]
struct HeaderScan {
    after_first: bool,
    seen: usize,
}

impl HeaderScan {
    /// Feed one byte; true once 0xAA 0xBB has gone by.
    fn push(&mut self, byte: u8) -> bool {
        self.seen += 1;
        if self.after_first && byte == FRAME_HEADER[1] {
            if self.seen > FRAME_HEADER.len() {
                trace!(
                    "skipped {} bytes before reply header",
                    self.seen - FRAME_HEADER.len()
                );
            }
            return true;
        }
        self.after_first = byte == FRAME_HEADER[0];
        false
    }
}

/// Consume input until the 0xAA 0xBB header has been read.
///
/// Every iteration drains the bytes already buffered, then blocks for at
/// most the poll interval waiting for the next byte, so a reply is picked
/// up as soon as it arrives. A header split across two iterations is
/// still found.
pub fn wait_for_header(transport: &mut dyn Transport, opts: &DecodeOptions) -> Result<()> {
    let mut scan = HeaderScan::default();

    for _ in 0..opts.header_attempts {
        let pending = transport.bytes_available()?;
        for _ in 0..pending {
            let byte = transport.receive_byte(opts.byte_timeout_ms)?;
            if scan.push(byte) {
                return Ok(());
            }
        }

        match transport.receive_byte(opts.poll_interval_ms) {
            Ok(byte) => {
                if scan.push(byte) {
                    return Ok(());
                }
            }
            Err(Error::ReadTimeout) => {}
            Err(e) => return Err(e),
        }
    }

    Err(Error::HeaderTimeout {
        attempts: opts.header_attempts,
    })
}

/// Read one reply from the transport.
///
/// The number of data bytes is taken from the command-keyed table, not from
/// the length field; failed replies (status != 0) carry no data. The
/// trailing checksum is stored but not verified.
pub fn decode(transport: &mut dyn Transport, opts: &DecodeOptions) -> Result<Reply> {
    wait_for_header(transport, opts)?;

    // length(2) device id(2) command code(2) status(1)
    let mut head = [0u8; 7];
    transport.receive_exact(&mut head, opts.byte_timeout_ms)?;
    let length = u16::from_le_bytes([head[0], head[1]]);
    let device_id = u16::from_le_bytes([head[2], head[3]]);
    let command_code = u16::from_le_bytes([head[4], head[5]]);
    let status = head[6];

    let data_len = if status != 0 {
        0
    } else {
        reply_data_len(command_code)
    };
    let mut data = vec![0u8; data_len];
    transport.receive_exact(&mut data, opts.byte_timeout_ms)?;
    let checksum = transport.receive_byte(opts.byte_timeout_ms)?;

    let reply = Reply {
        length,
        device_id,
        command_code,
        status,
        data,
        checksum,
    };

    if reply.wire_data_len() != data_len {
        warn!(
            "reply {:#06x} declares {} data bytes, decoded {}",
            command_code,
            reply.wire_data_len(),
            data_len
        );
    }

    #[cfg(feature = "diagnostics")]
    if !reply.checksum_matches() {
        warn!(
            "reply {:#06x} checksum should be {:#04x} but was {:#04x}",
            command_code,
            reply.computed_checksum(),
            checksum
        );
    }

    Ok(reply)
}
