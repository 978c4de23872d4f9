//! Documented-unofficial combo opcodes.
//!
//! Each combo resolves its effective address exactly once and feeds the
//! same address to both halves, so the second half never re-reads the
//! instruction stream. Final flags come from the second half, which is
//! the behavior the nestest reference log locks down.

use crate::cpu::addressing::AddressingMode;
use crate::cpu::exec::{arithmetic, rmw};
use crate::cpu::status::Status;
use crate::cpu::{Cpu, Cycles};

/// LAX: LDA and LDX from the same operand.
pub(crate) fn lax(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, extra) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    cpu.a = value;
    cpu.x = cpu.update_zn(value);
    extra
}

/// SAX stores A & X without touching any flag.
pub(crate) fn sax(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    cpu.poke(address, cpu.a & cpu.x);
    0
}

/// DCP: DEC memory, then CMP against the decremented value.
pub(crate) fn dcp(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let result = cpu.peek(address).wrapping_sub(1);
    cpu.poke(address, result);
    let register = cpu.a;
    arithmetic::compare(cpu, register, result);
    0
}

/// ISB: INC memory, then SBC the incremented value.
pub(crate) fn isb(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let result = cpu.peek(address).wrapping_add(1);
    cpu.poke(address, result);
    arithmetic::addition(cpu, !result);
    0
}

/// SLO: ASL memory, then ORA the shifted value.
pub(crate) fn slo(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    let result = rmw::asl_value(cpu, value);
    cpu.poke(address, result);
    cpu.a = cpu.update_zn(cpu.a | result);
    0
}

/// RLA: ROL memory, then AND the rotated value.
pub(crate) fn rla(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    let result = rmw::rol_value(cpu, value);
    cpu.poke(address, result);
    cpu.a = cpu.update_zn(cpu.a & result);
    0
}

/// SRE: LSR memory, then EOR the shifted value.
pub(crate) fn sre(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    let result = rmw::lsr_value(cpu, value);
    cpu.poke(address, result);
    cpu.a = cpu.update_zn(cpu.a ^ result);
    0
}

/// RRA: ROR memory, then ADC the rotated value. The ADC consumes the
/// carry the rotate just produced.
pub(crate) fn rra(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    let result = rmw::ror_value(cpu, value);
    cpu.poke(address, result);
    arithmetic::addition(cpu, result);
    0
}

/// AXS: X <- (A & X) - operand, compare-style carry, no borrow in.
pub(crate) fn axs(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let value = cpu.peek(address);
    let base = cpu.a & cpu.x;
    cpu.p.set(Status::CARRY, base >= value);
    cpu.x = cpu.update_zn(base.wrapping_sub(value));
    0
}
