pub mod auth;
pub mod read;
pub mod select;
pub mod write;

// Re-export the operations at the operations root so callers can use
// `crate::card::operations::read_text(...)` directly.
pub use auth::authenticate;
pub use read::{read, read_block, read_text};
pub use select::{anticollision, halt, request, select};
pub use write::{write, write_block, write_text};

use crate::card::CardSession;
use crate::device::Reader;
use crate::{Error, Result};

/// A failed exchange ends the card interaction; the caller has to start
/// again from `request`.
pub(crate) fn abort_on_error<T>(session: &mut CardSession, res: Result<T>) -> Result<T> {
    if res.is_err() {
        session.reset();
    }
    res
}

/// Run request, anticollision, select and authenticate against `block`.
pub(crate) fn open_block(session: &mut CardSession, reader: &mut Reader, block: u8) -> Result<()> {
    if !request(session, reader)? {
        return Err(Error::CardNotFound);
    }
    anticollision(session, reader)?;
    select(session, reader)?;
    authenticate(session, reader, block)
}
