use log::debug;

use crate::card::operations::{abort_on_error, open_block};
use crate::card::{CardSession, SessionState, resolve};
use crate::device::Reader;
use crate::protocol::Command;
use crate::types::BlockData;
use crate::{Error, Result};

/// Write up to 16 bytes (zero padded) to the authenticated block.
///
/// Oversized data is rejected before the session state is even checked.
pub fn write_block(session: &mut CardSession, reader: &mut Reader, data: &[u8]) -> Result<()> {
    let data = BlockData::from_slice_padded(data)?;
    session.require("write_block", &[SessionState::Authenticated])?;
    let Some(block) = session.authenticated_block() else {
        return Err(Error::InvalidSessionState {
            operation: "write_block",
            state: session.state(),
        });
    };

    let res = reader
        .execute_checked(&Command::Write { block, data })
        .map(|_| ());
    abort_on_error(session, res)?;

    debug!("wrote block {}", block);
    Ok(())
}

/// Run a whole session against the configured text block and store `text`.
pub fn write_text(session: &mut CardSession, reader: &mut Reader, text: &str) -> Result<()> {
    let data = BlockData::from_slice_padded(text.as_bytes())?;
    let block = reader.config().text_block;
    open_block(session, reader, block)?;
    write_block(session, reader, data.as_bytes())
}

/// Run a whole session against a logical (sector, block) address.
pub fn write(
    session: &mut CardSession,
    reader: &mut Reader,
    sector: u8,
    block: u8,
    data: &[u8],
) -> Result<()> {
    let absolute = resolve(sector, block)?;
    let data = BlockData::from_slice_padded(data)?;
    open_block(session, reader, absolute)?;
    write_block(session, reader, data.as_bytes())
}
