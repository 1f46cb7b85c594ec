use log::debug;

use crate::card::operations::abort_on_error;
use crate::card::{CardSession, SessionState};
use crate::device::Reader;
use crate::protocol::Command;
use crate::Result;

/// Authenticate an absolute block with the key type and key from the
/// reader's configuration (factory default: key A, all 0xFF).
///
/// A selected card can be re-authenticated against another block without
/// starting over.
pub fn authenticate(session: &mut CardSession, reader: &mut Reader, block: u8) -> Result<()> {
    session.require(
        "authenticate",
        &[SessionState::Selected, SessionState::Authenticated],
    )?;

    let cmd = Command::Authenticate {
        key_type: reader.config().key_type,
        block,
        key: reader.config().auth_key,
    };
    let res = reader.execute_checked(&cmd).map(|_| ());
    abort_on_error(session, res)?;

    debug!("authenticated block {}", block);
    session.mark_authenticated(block);
    Ok(())
}
