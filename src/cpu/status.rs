//! Processor status register.
//!
//! The packed byte is the authoritative representation: PHP/PLP and the
//! interrupt entry/exit sequences must round-trip it exactly. Bits 4 (B)
//! and 5 (U) are not persistent processor state. The stored byte always
//! carries U set and B clear; B materializes only in bytes pushed by PHP
//! or BRK, which is how software and hardware interrupts are told apart
//! on a real 6502.

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

/// What is pushing the status byte. PHP and BRK push with B set; the
/// hardware interrupt entries push with B clear.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PushOrigin {
    Php,
    Brk,
    Irq,
    Nmi,
}

impl Status {
    /// Power-on value: interrupt disable plus the always-set bit ($24).
    pub const POWER_ON: Status = Status::INTERRUPT_DISABLE.union(Status::UNUSED);

    /// The byte to push for the given origin. U is always set; B depends
    /// on whether the push is software (PHP/BRK) or hardware (IRQ/NMI).
    pub fn for_push(self, origin: PushOrigin) -> u8 {
        let with_unused = self | Status::UNUSED;
        match origin {
            PushOrigin::Php | PushOrigin::Brk => (with_unused | Status::BREAK).bits(),
            PushOrigin::Irq | PushOrigin::Nmi => (with_unused - Status::BREAK).bits(),
        }
    }

    /// Rebuild status from a popped byte (PLP/RTI): B is discarded and U
    /// forced set, so the stored byte keeps its invariant shape.
    pub fn from_pop(byte: u8) -> Status {
        (Status::from_bits_retain(byte) - Status::BREAK) | Status::UNUSED
    }

    /// Set Z and N from a result byte.
    pub fn update_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}
