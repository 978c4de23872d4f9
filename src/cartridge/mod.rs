//! iNES cartridge loading and the mappers backed by it.

mod nrom;
mod rom;

pub use nrom::Nrom;
pub use rom::{RomFile, CHR_BANK_LENGTH, HEADER_LENGTH, PRG_BANK_LENGTH, TRAINER_LENGTH};

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::CartridgeError;
use crate::memory::SharedMapper;

/// Parse an iNES buffer and wrap it in the mapper its header selects.
pub fn load_mapper(buffer: &[u8]) -> Result<SharedMapper, CartridgeError> {
    let rom = RomFile::parse(buffer)?;
    match rom.mapper_id() {
        0 => Ok(Rc::new(RefCell::new(Nrom::new(rom)))),
        id => Err(CartridgeError::UnsupportedMapper(id)),
    }
}
