//! famicore: the CPU core of a NES emulator.
//!
//! Implements the 2A03, the 6502 variant inside the NES (decimal mode
//! disabled), with whole-instruction cycle accuracy good enough to
//! reproduce the nestest reference log bit for bit.
//!
//! Modules:
//! - cpu: registers, addressing, decode table, opcode kernel, trace
//!   disassembly
//! - memory: 64 KiB flat address space with mapper override tables
//! - mapper: the capability interface cartridge mappers implement
//! - cartridge: iNES (v1) loading and the NROM mapper
//! - errors: typed failures for cartridges, mappings and stepping
//!
//! The PPU, APU, controllers and the driver loop are collaborators that
//! live outside this crate; they reach the core through [`Cpu`]'s API
//! and the PPU-side mappings a cartridge mapper exposes.

pub mod cartridge;
pub mod cpu;
pub mod errors;
pub mod mapper;
pub mod memory;

#[cfg(test)]
pub mod test_utils;

pub use cartridge::{Nrom, RomFile};
pub use cpu::{Cpu, Cycles};
pub use memory::AddressSpace;
