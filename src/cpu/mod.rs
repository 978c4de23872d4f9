//! 2A03 CPU core: registers, interpreter loop and interrupt entry.
//!
//! The submodules split along the same seams as the silicon:
//!
//!     status.rs     - packed status byte and its push/pop discipline
//!     addressing.rs - operand resolution for the thirteen modes
//!     decode.rs     - static 256-entry opcode table
//!     exec/         - per-family instruction semantics
//!     disasm.rs     - reference-format trace lines
//!
//! One [`Cpu::step`] runs a whole instruction: fetch, decode, resolve
//! the operand, execute, then fold static plus extra cycles into the
//! running counter. There is no sub-instruction bus timing.

pub mod addressing;
mod decode;
mod disasm;
mod exec;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

use log::trace;

use crate::errors::{MappingError, StepError};
use crate::memory::{AddressSpace, SharedMapper};
use crate::mapper::MappingKind;
use status::{PushOrigin, Status};

/// Accumulated machine cycles.
pub type Cycles = u64;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The stack lives in page one, indexed by S.
pub const STACK_BASE: u16 = 0x0100;

const STACK_POINTER_POWER_ON: u8 = 0xFD;

/// Interrupt entry (and the reset it mimics) takes seven cycles.
const INTERRUPT_CYCLES: Cycles = 7;

pub struct Cpu {
    pub pc: u16,
    pub s: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: Status,
    pub total_cycles: Cycles,
    halted: bool,
    debug: bool,
    last_disassembly: Option<String>,
    memory: AddressSpace,
}

impl Cpu {
    /// Power-on state: registers cleared, S at $FD, P at $24, nothing
    /// mapped. PC stays at $0000 until [`Cpu::reset`] or the driver
    /// places it.
    pub fn new() -> Self {
        Self {
            pc: 0x0000,
            s: STACK_POINTER_POWER_ON,
            a: 0,
            x: 0,
            y: 0,
            p: Status::POWER_ON,
            total_cycles: 0,
            halted: false,
            debug: false,
            last_disassembly: None,
            memory: AddressSpace::new(),
        }
    }

    /// Restore power-on registers, reset every mapper and load PC from
    /// the reset vector. The cycle counter starts at 7, the cost of the
    /// hardware reset sequence.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.s = STACK_POINTER_POWER_ON;
        self.p = Status::POWER_ON;
        self.halted = false;
        self.last_disassembly = None;
        self.memory.reset_mappers();
        self.pc = self.memory.peek16(RESET_VECTOR);
        self.total_cycles = INTERRUPT_CYCLES;
    }

    /// Install a cartridge mapper's CPU-side claims.
    pub fn add_cartridge_mappings(&mut self, mapper: SharedMapper) -> Result<(), MappingError> {
        self.memory.add_mappings(mapper, MappingKind::Cpu)
    }

    pub fn memory(&self) -> &AddressSpace {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut AddressSpace {
        &mut self.memory
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Enable or disable trace capture ahead of each step.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// The trace line captured before the most recent step, if debug
    /// capture is enabled.
    pub fn last_disassembly(&self) -> Option<&str> {
        self.last_disassembly.as_deref()
    }

    /// Execute one instruction and return the cycles it consumed.
    ///
    /// Fails with [`StepError::Halted`] once a jam opcode has stopped
    /// the CPU and with [`StepError::InvalidOpcode`] on a fetch of an
    /// encoding without table semantics; the latter also halts, since
    /// PC can no longer be trusted.
    pub fn step(&mut self) -> Result<Cycles, StepError> {
        if self.halted {
            return Err(StepError::Halted);
        }

        if self.debug {
            let line = disasm::trace_line(self);
            trace!("{line}");
            self.last_disassembly = Some(line);
        }

        let pc = self.pc;
        let opcode = self.memory.peek(pc);
        self.pc = self.pc.wrapping_add(1);

        let Some(instruction) = decode::lookup(opcode) else {
            self.halted = true;
            return Err(StepError::InvalidOpcode { opcode, pc });
        };

        let extra = exec::execute(self, instruction);
        let cycles = instruction.static_cycles as Cycles + extra;
        self.total_cycles += cycles;
        Ok(cycles)
    }

    /// Maskable interrupt line. Ignored while I is set; otherwise enters
    /// the IRQ vector with B clear in the pushed status.
    pub fn irq(&mut self) {
        if !self.p.contains(Status::INTERRUPT_DISABLE) {
            self.interrupt(IRQ_VECTOR, PushOrigin::Irq);
        }
    }

    /// Non-maskable interrupt line; always taken.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR, PushOrigin::Nmi);
    }

    fn interrupt(&mut self, vector: u16, origin: PushOrigin) {
        let pc = self.pc;
        self.push16(pc);
        let byte = self.p.for_push(origin);
        self.push(byte);
        self.p.insert(Status::INTERRUPT_DISABLE);
        self.pc = self.memory.peek16(vector);
        self.total_cycles += INTERRUPT_CYCLES;
    }

    /// Push one byte at $0100|S, then decrement S.
    pub fn push(&mut self, value: u8) {
        self.memory.poke(STACK_BASE | self.s as u16, value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Increment S, then read the byte at $0100|S.
    pub fn pop(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        self.memory.peek(STACK_BASE | self.s as u16)
    }

    /// Push a word, high byte first, so it pops back in order.
    pub fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0x00FF) as u8);
    }

    pub fn pop16(&mut self) -> u16 {
        let low = self.pop() as u16;
        let high = self.pop() as u16;
        (high << 8) | low
    }

    pub(crate) fn halt(&mut self) {
        self.halted = true;
    }

    pub(crate) fn peek(&self, address: u16) -> u8 {
        self.memory.peek(address)
    }

    pub(crate) fn peek16(&self, address: u16) -> u16 {
        self.memory.peek16(address)
    }

    pub(crate) fn poke(&mut self, address: u16, value: u8) {
        self.memory.poke(address, value);
    }

    /// Set Z and N from a result and hand the value back, so loads and
    /// ALU writes read as one line.
    pub(crate) fn update_zn(&mut self, value: u8) -> u8 {
        self.p.update_zn(value);
        value
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
