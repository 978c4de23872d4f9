//! Error taxonomy for the emulator core.
//!
//! Cartridge and mapping failures are recoverable at the driver level
//! (the offending image or configuration is rejected). Step failures are
//! fatal to interpretation: once the CPU has fetched an opcode without
//! defined semantics, or has been halted by a jam instruction, there is
//! no well-defined way to continue.

use thiserror::Error;

use crate::mapper::Access;

/// Failures while parsing an iNES image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("buffer too short for the 16-byte iNES header")]
    MissingHeader,

    #[error("missing NES magic constant in header")]
    BadMagic,

    #[error("not enough bytes for the declared 512-byte trainer")]
    TruncatedTrainer,

    #[error("not enough bytes for the declared PRG banks")]
    TruncatedPrg,

    #[error("not enough bytes for the declared CHR banks")]
    TruncatedChr,

    #[error("unsupported mapper id: {0}")]
    UnsupportedMapper(u8),
}

/// Failures while installing mapper address claims.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("address ${address:04X} is already mapped for {access}")]
    Conflict { address: u16, access: Access },
}

/// Failures while stepping the interpreter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("invalid opcode ${opcode:02X} at ${pc:04X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    #[error("cpu is halted")]
    Halted,
}
