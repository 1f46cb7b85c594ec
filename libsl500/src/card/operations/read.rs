use log::debug;

use crate::card::operations::{abort_on_error, open_block};
use crate::card::{CardSession, SessionState, resolve};
use crate::device::Reader;
use crate::protocol::Command;
use crate::types::BlockData;
use crate::Result;

/// Read the 16 bytes of the block the session is authenticated for.
pub fn read_block(session: &mut CardSession, reader: &mut Reader) -> Result<BlockData> {
    session.require("read_block", &[SessionState::Authenticated])?;
    let Some(block) = session.authenticated_block() else {
        return Err(crate::Error::InvalidSessionState {
            operation: "read_block",
            state: session.state(),
        });
    };

    let res = reader
        .execute_checked(&Command::Read { block })
        .and_then(|reply| BlockData::try_from(&reply.data[..]));
    let data = abort_on_error(session, res)?;

    debug!("block {} = {}", block, data.to_hex());
    Ok(data)
}

/// Run a whole session against the configured text block and return the
/// stored text (the leading run of non-zero bytes).
///
/// Fails with [`crate::Error::CardNotFound`] when no card answers the
/// request; nothing else is sent in that case.
pub fn read_text(session: &mut CardSession, reader: &mut Reader) -> Result<String> {
    let block = reader.config().text_block;
    open_block(session, reader, block)?;
    let data = read_block(session, reader)?;
    Ok(data.leading_text())
}

/// Run a whole session against a logical (sector, block) address.
///
/// The address is validated before anything is sent.
pub fn read(
    session: &mut CardSession,
    reader: &mut Reader,
    sector: u8,
    block: u8,
) -> Result<BlockData> {
    let absolute = resolve(sector, block)?;
    open_block(session, reader, absolute)?;
    read_block(session, reader)
}
