// libsl500-rs/libsl500/src/protocol/codec.rs

use log::debug;

use crate::Result;
use crate::transport::Transport;
use crate::types::DeviceId;

use super::commands::Command;
use super::decoder::{DecodeOptions, decode};
use super::reply::Reply;

/// Encode a Command into a full wire frame addressed to `device_id`.
pub fn encode_command_frame(cmd: &Command, device_id: DeviceId) -> Result<Vec<u8>> {
    cmd.to_frame(device_id).encode()
}

/// One blocking round trip: write the command frame, then read exactly one
/// reply. Nothing else may be in flight on the transport meanwhile.
pub fn exchange(
    transport: &mut dyn Transport,
    cmd: &Command,
    device_id: DeviceId,
    opts: &DecodeOptions,
) -> Result<Reply> {
    let frame = encode_command_frame(cmd, device_id)?;
    debug!("-> {:?} {}", cmd.command_code(), hex::encode(&frame));
    transport.send(&frame)?;

    let reply = decode(transport, opts)?;
    debug!(
        "<- {:#06x} status={:#04x} data={}",
        reply.command_code,
        reply.status,
        hex::encode(&reply.data)
    );
    Ok(reply)
}
