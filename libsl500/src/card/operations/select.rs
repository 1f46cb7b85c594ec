use log::{debug, info};

use crate::card::operations::abort_on_error;
use crate::card::{CardSession, SessionState};
use crate::device::Reader;
use crate::protocol::{Command, CommandCode};
use crate::types::SerialNumber;
use crate::{Error, Result};

/// Probe for a card in the field.
///
/// Always starts a new interaction: any previous card state is dropped.
/// Returns `Ok(false)` when the reader answers with a non-zero status.
pub fn request(session: &mut CardSession, reader: &mut Reader) -> Result<bool> {
    session.reset();
    let cmd = Command::Request {
        mode: reader.config().request_mode,
    };
    let reply = reader.execute(&cmd)?;

    if !Reader::is_success_for(&reply, CommandCode::Request) {
        debug!("request: no card (status {:#04x})", reply.status);
        return Ok(false);
    }

    let atqa = match reply.data[..] {
        [lo, hi, ..] => u16::from_le_bytes([lo, hi]),
        _ => {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: reply.data.len(),
            });
        }
    };
    session.mark_requested(atqa);
    Ok(true)
}

/// Fetch the 4-byte serial number of the requested card.
pub fn anticollision(session: &mut CardSession, reader: &mut Reader) -> Result<SerialNumber> {
    session.require("anticollision", &[SessionState::Requested])?;

    let res = reader
        .execute_checked(&Command::Anticollision)
        .and_then(|reply| SerialNumber::try_from(&reply.data[..]));
    let serial = abort_on_error(session, res)?;

    info!("card {} in field", serial.to_hex());
    session.mark_identified(serial);
    Ok(serial)
}

/// Select the identified card for the following operations.
pub fn select(session: &mut CardSession, reader: &mut Reader) -> Result<()> {
    session.require("select", &[SessionState::Identified])?;
    let Some(serial) = session.serial_number() else {
        return Err(Error::InvalidSessionState {
            operation: "select",
            state: session.state(),
        });
    };

    let res = reader.execute_checked(&Command::Select { serial });
    let reply = abort_on_error(session, res)?;

    info!("selected card {}", serial.to_hex());
    session.mark_selected(reply.data.first().copied());
    Ok(())
}

/// Put the current card to sleep and end the interaction.
pub fn halt(session: &mut CardSession, reader: &mut Reader) -> Result<()> {
    session.require(
        "halt",
        &[
            SessionState::Identified,
            SessionState::Selected,
            SessionState::Authenticated,
        ],
    )?;

    let res = reader.execute_checked(&Command::Halt).map(|_| ());
    abort_on_error(session, res)?;
    session.reset();
    Ok(())
}
