// libsl500-rs/libsl500/src/card/address.rs

use crate::constants::{BLOCKS_PER_SECTOR, SECTOR_COUNT, TRAILER_BLOCK};
use crate::{Error, Result};

/// Logical (sector, block) address of a readable/writable data block on a
/// MIFARE Classic 1K card.
///
/// Sector 0 block 0 holds manufacturer data and block 3 of every sector is
/// the key trailer; neither can be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockAddress {
    sector: u8,
    block: u8,
}

impl BlockAddress {
    pub fn new(sector: u8, block: u8) -> Result<Self> {
        if sector >= SECTOR_COUNT || block >= BLOCKS_PER_SECTOR {
            return Err(Error::OutOfRange { sector, block });
        }
        if (sector == 0 && block == 0) || block == TRAILER_BLOCK {
            return Err(Error::ReservedBlock { sector, block });
        }
        Ok(Self { sector, block })
    }

    /// Inverse of [`BlockAddress::absolute`].
    pub fn from_absolute(index: u8) -> Result<Self> {
        Self::new(index / BLOCKS_PER_SECTOR, index % BLOCKS_PER_SECTOR)
    }

    pub fn sector(&self) -> u8 {
        self.sector
    }

    pub fn block(&self) -> u8 {
        self.block
    }

    /// Absolute block index in 0..64
    pub fn absolute(&self) -> u8 {
        self.sector * BLOCKS_PER_SECTOR + self.block
    }
}

/// Map (sector, block) to the card's absolute block index.
pub fn resolve(sector: u8, block: u8) -> Result<u8> {
    BlockAddress::new(sector, block).map(|addr| addr.absolute())
}
