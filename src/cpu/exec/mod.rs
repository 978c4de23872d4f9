//! Opcode semantics, grouped by family.
//!
//! Every handler resolves its own operand (through the addressing
//! evaluator) and returns the extra cycles it incurred beyond the static
//! count: page-cross penalties for read-style operand fetches and the
//! taken/page-cross penalties for branches.

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod loads;
pub(crate) mod logical;
pub(crate) mod rmw;
pub(crate) mod undocumented;

use crate::cpu::decode::{Instruction, OpKind};
use crate::cpu::status::Status;
use crate::cpu::{Cpu, Cycles};

/// Execute one decoded instruction, returning its extra cycles.
pub(crate) fn execute(cpu: &mut Cpu, instruction: &Instruction) -> Cycles {
    use OpKind::*;
    let mode = instruction.mode;
    match instruction.kind {
        Adc => arithmetic::adc(cpu, mode),
        And => logical::and(cpu, mode),
        Asl => rmw::asl(cpu, mode),
        Axs => undocumented::axs(cpu, mode),
        Bcc => branches::bcc(cpu, mode),
        Bcs => branches::bcs(cpu, mode),
        Beq => branches::beq(cpu, mode),
        Bit => logical::bit(cpu, mode),
        Bmi => branches::bmi(cpu, mode),
        Bne => branches::bne(cpu, mode),
        Bpl => branches::bpl(cpu, mode),
        Brk => control::brk(cpu),
        Bvc => branches::bvc(cpu, mode),
        Bvs => branches::bvs(cpu, mode),
        Clc => control::set_flag(cpu, Status::CARRY, false),
        Cld => control::set_flag(cpu, Status::DECIMAL, false),
        Cli => control::set_flag(cpu, Status::INTERRUPT_DISABLE, false),
        Clv => control::set_flag(cpu, Status::OVERFLOW, false),
        Cmp => arithmetic::cmp(cpu, mode),
        Cpx => arithmetic::cpx(cpu, mode),
        Cpy => arithmetic::cpy(cpu, mode),
        Dcp => undocumented::dcp(cpu, mode),
        Dec => rmw::dec(cpu, mode),
        Dex => rmw::dex(cpu),
        Dey => rmw::dey(cpu),
        Eor => logical::eor(cpu, mode),
        Inc => rmw::inc(cpu, mode),
        Inx => rmw::inx(cpu),
        Iny => rmw::iny(cpu),
        Isb => undocumented::isb(cpu, mode),
        Jmp => control::jmp(cpu, mode),
        Jsr => control::jsr(cpu, mode),
        Kil => {
            cpu.halt();
            0
        }
        Lax => undocumented::lax(cpu, mode),
        Lda => loads::lda(cpu, mode),
        Ldx => loads::ldx(cpu, mode),
        Ldy => loads::ldy(cpu, mode),
        Lsr => rmw::lsr(cpu, mode),
        Nop => control::nop(cpu, mode),
        Ora => logical::ora(cpu, mode),
        Pha => control::pha(cpu),
        Php => control::php(cpu),
        Pla => control::pla(cpu),
        Plp => control::plp(cpu),
        Rla => undocumented::rla(cpu, mode),
        Rol => rmw::rol(cpu, mode),
        Ror => rmw::ror(cpu, mode),
        Rra => undocumented::rra(cpu, mode),
        Rti => control::rti(cpu),
        Rts => control::rts(cpu),
        Sax => undocumented::sax(cpu, mode),
        Sbc => arithmetic::sbc(cpu, mode),
        Sec => control::set_flag(cpu, Status::CARRY, true),
        Sed => control::set_flag(cpu, Status::DECIMAL, true),
        Sei => control::set_flag(cpu, Status::INTERRUPT_DISABLE, true),
        Slo => undocumented::slo(cpu, mode),
        Sre => undocumented::sre(cpu, mode),
        Sta => loads::sta(cpu, mode),
        Stx => loads::stx(cpu, mode),
        Sty => loads::sty(cpu, mode),
        Tax => loads::tax(cpu),
        Tay => loads::tay(cpu),
        Tsx => loads::tsx(cpu),
        Txa => loads::txa(cpu),
        Txs => loads::txs(cpu),
        Tya => loads::tya(cpu),
    }
}
