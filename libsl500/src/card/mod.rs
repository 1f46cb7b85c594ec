// libsl500-rs/libsl500/src/card/mod.rs

use crate::device::Reader;
use crate::types::{BlockData, SerialNumber};
use crate::{Error, Result};

mod address;
pub use address::{BlockAddress, resolve};

pub mod operations;

/// Where a card interaction stands. Each card command is only accepted in
/// the state its predecessor leaves behind:
/// Idle -> Requested -> Identified -> Selected -> Authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Requested,
    Identified,
    Selected,
    Authenticated,
}

/// Per-card state owned by the caller and threaded through every card
/// operation. Never persisted; a fresh `request` starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSession {
    state: SessionState,
    atqa: Option<u16>,
    serial_number: Option<SerialNumber>,
    capacity: Option<u8>,
    authenticated_block: Option<u8>,
}

impl CardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Answer-to-request bytes of the detected card (tag type)
    pub fn atqa(&self) -> Option<u16> {
        self.atqa
    }

    pub fn serial_number(&self) -> Option<SerialNumber> {
        self.serial_number
    }

    /// Capacity byte reported by select
    pub fn capacity(&self) -> Option<u8> {
        self.capacity
    }

    pub fn authenticated_block(&self) -> Option<u8> {
        self.authenticated_block
    }

    /// Forget the card and go back to Idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn require(&self, operation: &'static str, allowed: &[SessionState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(Error::InvalidSessionState {
                operation,
                state: self.state,
            })
        }
    }

    pub(crate) fn mark_requested(&mut self, atqa: u16) {
        self.reset();
        self.atqa = Some(atqa);
        self.state = SessionState::Requested;
    }

    pub(crate) fn mark_identified(&mut self, serial: SerialNumber) {
        self.serial_number = Some(serial);
        self.state = SessionState::Identified;
    }

    pub(crate) fn mark_selected(&mut self, capacity: Option<u8>) {
        self.capacity = capacity;
        self.state = SessionState::Selected;
    }

    pub(crate) fn mark_authenticated(&mut self, block: u8) {
        self.authenticated_block = Some(block);
        self.state = SessionState::Authenticated;
    }

    /// Probe for a card. `Ok(false)` when none answered.
    pub fn request(&mut self, reader: &mut Reader) -> Result<bool> {
        operations::request(self, reader)
    }

    pub fn anticollision(&mut self, reader: &mut Reader) -> Result<SerialNumber> {
        operations::anticollision(self, reader)
    }

    pub fn select(&mut self, reader: &mut Reader) -> Result<()> {
        operations::select(self, reader)
    }

    pub fn halt(&mut self, reader: &mut Reader) -> Result<()> {
        operations::halt(self, reader)
    }

    /// Authenticate an absolute block with the reader's configured key.
    pub fn authenticate(&mut self, reader: &mut Reader, block: u8) -> Result<()> {
        operations::authenticate(self, reader, block)
    }

    pub fn read_block(&mut self, reader: &mut Reader) -> Result<BlockData> {
        operations::read_block(self, reader)
    }

    pub fn write_block(&mut self, reader: &mut Reader, data: &[u8]) -> Result<()> {
        operations::write_block(self, reader, data)
    }

    /// Full session on the text block, returning the stored text.
    pub fn read_text(&mut self, reader: &mut Reader) -> Result<String> {
        operations::read_text(self, reader)
    }

    pub fn write_text(&mut self, reader: &mut Reader, text: &str) -> Result<()> {
        operations::write_text(self, reader, text)
    }

    /// Full session on a logical (sector, block) address.
    pub fn read(&mut self, reader: &mut Reader, sector: u8, block: u8) -> Result<BlockData> {
        operations::read(self, reader, sector, block)
    }

    pub fn write(&mut self, reader: &mut Reader, sector: u8, block: u8, data: &[u8]) -> Result<()> {
        operations::write(self, reader, sector, block, data)
    }
}
