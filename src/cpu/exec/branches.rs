//! Conditional branches.
//!
//! A branch that is not taken costs nothing beyond its static cycles.
//! Taking it adds one cycle, and landing on a different page than the
//! instruction following the branch adds a second.

use crate::cpu::addressing::AddressingMode;
use crate::cpu::status::Status;
use crate::cpu::{Cpu, Cycles};
use crate::memory::same_page;

fn branch_on(cpu: &mut Cpu, mode: AddressingMode, condition: bool) -> Cycles {
    let (target, _) = cpu.operand_address(mode);
    if !condition {
        return 0;
    }
    let extra = if same_page(cpu.pc, target) { 1 } else { 2 };
    cpu.pc = target;
    extra
}

pub(crate) fn bcc(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = !cpu.p.contains(Status::CARRY);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bcs(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = cpu.p.contains(Status::CARRY);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bne(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = !cpu.p.contains(Status::ZERO);
    branch_on(cpu, mode, condition)
}

pub(crate) fn beq(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = cpu.p.contains(Status::ZERO);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bpl(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = !cpu.p.contains(Status::NEGATIVE);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bmi(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = cpu.p.contains(Status::NEGATIVE);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bvc(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = !cpu.p.contains(Status::OVERFLOW);
    branch_on(cpu, mode, condition)
}

pub(crate) fn bvs(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let condition = cpu.p.contains(Status::OVERFLOW);
    branch_on(cpu, mode, condition)
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::cpu::Cpu;

    fn run_branch(opcode: u8, offset: u8, prepare: impl FnOnce(&mut Cpu)) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        prepare(&mut cpu);
        cpu.memory_mut().poke(0x0100, opcode);
        cpu.memory_mut().poke(0x0101, offset);
        cpu.step().expect("step");
        cpu
    }

    #[test]
    fn not_taken_costs_two_cycles() {
        let cpu = run_branch(0x90, 0x0A, |cpu| cpu.p.insert(Status::CARRY)); // BCC
        assert_eq!(cpu.pc, 0x0102);
        assert_eq!(cpu.total_cycles, 2);
    }

    #[test]
    fn taken_same_page_costs_three() {
        let cpu = run_branch(0x90, 0x0A, |cpu| cpu.p.remove(Status::CARRY)); // BCC
        assert_eq!(cpu.pc, 0x010C);
        assert_eq!(cpu.total_cycles, 3);
    }

    #[test]
    fn taken_across_a_page_costs_four() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x01FA;
        cpu.p.remove(Status::CARRY);
        cpu.memory_mut().poke(0x01FA, 0x90); // BCC +$10
        cpu.memory_mut().poke(0x01FB, 0x10);
        cpu.step().expect("step");
        assert_eq!(cpu.pc, 0x020C);
        assert_eq!(cpu.total_cycles, 4);
    }

    #[test]
    fn backward_branches_work() {
        let cpu = run_branch(0xD0, 0xFC, |cpu| cpu.p.remove(Status::ZERO)); // BNE -4
        assert_eq!(cpu.pc, 0x00FE);
        assert_eq!(cpu.total_cycles, 4); // crossed back into page $00
    }

    #[test]
    fn each_condition_selects_its_flag() {
        let cases: [(u8, Status, bool); 8] = [
            (0x90, Status::CARRY, false),    // BCC
            (0xB0, Status::CARRY, true),     // BCS
            (0xD0, Status::ZERO, false),     // BNE
            (0xF0, Status::ZERO, true),      // BEQ
            (0x10, Status::NEGATIVE, false), // BPL
            (0x30, Status::NEGATIVE, true),  // BMI
            (0x50, Status::OVERFLOW, false), // BVC
            (0x70, Status::OVERFLOW, true),  // BVS
        ];
        for (opcode, flag, branch_when_set) in cases {
            let cpu = run_branch(opcode, 0x04, |cpu| cpu.p.set(flag, branch_when_set));
            assert_eq!(cpu.pc, 0x0106, "taken {opcode:#04X}");

            let cpu = run_branch(opcode, 0x04, |cpu| cpu.p.set(flag, !branch_when_set));
            assert_eq!(cpu.pc, 0x0102, "not taken {opcode:#04X}");
        }
    }
}
