//! Flat 16-bit address space with mapper overrides.
//!
//! The backing store is a 64 KiB RAM array plus two parallel tables that
//! map each address to an optional owning mapper, one table for peek and
//! one for poke. Accesses at addresses a mapper has claimed are forwarded
//! to it; everything else hits RAM directly, so unmapped reads return the
//! last value stored there (zero at power-on).

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::errors::MappingError;
use crate::mapper::{Access, AddressRange, Mapper, MappingKind};

/// Size of the addressable range: $0000 through $FFFF.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Mappers are shared handles so the same cartridge mapper can serve a
/// CPU-side and a PPU-side address space at once.
pub type SharedMapper = Rc<RefCell<dyn Mapper>>;

type MapperId = u8;
type HandlerTable = Box<[Option<MapperId>; MEMORY_SIZE]>;

pub struct AddressSpace {
    ram: Box<[u8; MEMORY_SIZE]>,
    mappers: Vec<SharedMapper>,
    peek_handlers: HandlerTable,
    poke_handlers: HandlerTable,
}

impl AddressSpace {
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; MEMORY_SIZE]),
            mappers: Vec::new(),
            peek_handlers: Box::new([None; MEMORY_SIZE]),
            poke_handlers: Box::new([None; MEMORY_SIZE]),
        }
    }

    /// Zero the RAM backing store. Mapper claims are unaffected.
    pub fn clear(&mut self) {
        self.ram.fill(0);
    }

    /// Read one byte, consulting the peek table first.
    pub fn peek(&self, address: u16) -> u8 {
        match self.peek_handlers[address as usize] {
            Some(id) => self.mappers[id as usize].borrow().peek(address),
            None => self.ram[address as usize],
        }
    }

    /// Read a little-endian word: low byte at `address`, high byte at
    /// `address + 1`. The high byte of $FFFF wraps to $0000.
    pub fn peek16(&self, address: u16) -> u16 {
        let low = self.peek(address) as u16;
        let high = self.peek(address.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Write one byte, consulting the poke table first. Returns the
    /// previously stored byte.
    pub fn poke(&mut self, address: u16, value: u8) -> u8 {
        match self.poke_handlers[address as usize] {
            Some(id) => self.mappers[id as usize].borrow_mut().poke(address, value),
            None => std::mem::replace(&mut self.ram[address as usize], value),
        }
    }

    /// Write a little-endian word and return the previous word. The old
    /// value is read out in full before either byte is written.
    pub fn poke16(&mut self, address: u16, value: u16) -> u16 {
        let old = self.peek16(address);
        self.poke(address, (value & 0x00FF) as u8);
        self.poke(address.wrapping_add(1), (value >> 8) as u8);
        old
    }

    /// Install the ranges `mapper` claims for `kind` into the peek and
    /// poke tables. Claiming an address already owned for the same
    /// operation is a configuration error; callers are expected to treat
    /// it as fatal and abandon the setup.
    pub fn add_mappings(
        &mut self,
        mapper: SharedMapper,
        kind: MappingKind,
    ) -> Result<(), MappingError> {
        debug_assert!(self.mappers.len() < MapperId::MAX as usize);
        let id = self.mappers.len() as MapperId;

        let declared = mapper.borrow().mappings(kind);
        install(&mut self.peek_handlers, id, &declared.peek, Access::Peek)?;
        install(&mut self.poke_handlers, id, &declared.poke, Access::Poke)?;

        debug!(
            "installed {:?} mappings: peek {:?}, poke {:?}",
            kind, declared.peek, declared.poke
        );
        self.mappers.push(mapper);
        Ok(())
    }

    /// Forward a reset to every registered mapper.
    pub fn reset_mappers(&mut self) {
        for mapper in &self.mappers {
            mapper.borrow_mut().reset();
        }
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

fn install(
    table: &mut HandlerTable,
    id: MapperId,
    ranges: &[AddressRange],
    access: Access,
) -> Result<(), MappingError> {
    for range in ranges {
        for address in range.start..=range.end {
            let slot = &mut table[address as usize];
            if slot.is_some() {
                return Err(MappingError::Conflict { address, access });
            }
            *slot = Some(id);
        }
    }
    Ok(())
}

/// True when both addresses fall in the same 256-byte page.
pub fn same_page(a: u16, b: u16) -> bool {
    (a ^ b) >> 8 == 0
}
