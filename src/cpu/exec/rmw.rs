//! Shifts, rotates and increments/decrements.
//!
//! The shift and rotate helpers come in value form so the undocumented
//! combo opcodes can reuse them on an already-resolved address. Memory
//! forms never pay a page-cross penalty; their static cycle counts
//! assume the worst case.

use crate::cpu::addressing::AddressingMode;
use crate::cpu::status::Status;
use crate::cpu::{Cpu, Cycles};

pub(crate) fn asl_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.update_zn(value << 1)
}

pub(crate) fn lsr_value(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.update_zn(value >> 1)
}

pub(crate) fn rol_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.update_zn((value << 1) | carry_in)
}

pub(crate) fn ror_value(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.update_zn((value >> 1) | (carry_in << 7))
}

fn shift(cpu: &mut Cpu, mode: AddressingMode, op: fn(&mut Cpu, u8) -> u8) -> Cycles {
    if mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.a = op(cpu, value);
    } else {
        let (address, _) = cpu.operand_address(mode);
        let value = cpu.peek(address);
        let result = op(cpu, value);
        cpu.poke(address, result);
    }
    0
}

pub(crate) fn asl(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    shift(cpu, mode, asl_value)
}

pub(crate) fn lsr(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    shift(cpu, mode, lsr_value)
}

pub(crate) fn rol(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    shift(cpu, mode, rol_value)
}

pub(crate) fn ror(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    shift(cpu, mode, ror_value)
}

pub(crate) fn inc(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let result = cpu.peek(address).wrapping_add(1);
    cpu.update_zn(result);
    cpu.poke(address, result);
    0
}

pub(crate) fn dec(cpu: &mut Cpu, mode: AddressingMode) -> Cycles {
    let (address, _) = cpu.operand_address(mode);
    let result = cpu.peek(address).wrapping_sub(1);
    cpu.update_zn(result);
    cpu.poke(address, result);
    0
}

pub(crate) fn inx(cpu: &mut Cpu) -> Cycles {
    cpu.x = cpu.update_zn(cpu.x.wrapping_add(1));
    0
}

pub(crate) fn iny(cpu: &mut Cpu) -> Cycles {
    cpu.y = cpu.update_zn(cpu.y.wrapping_add(1));
    0
}

pub(crate) fn dex(cpu: &mut Cpu) -> Cycles {
    cpu.x = cpu.update_zn(cpu.x.wrapping_sub(1));
    0
}

pub(crate) fn dey(cpu: &mut Cpu) -> Cycles {
    cpu.y = cpu.update_zn(cpu.y.wrapping_sub(1));
    0
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::cpu::test_support::{run_absolute, run_implicit, TEST_ABSOLUTE_ADDRESS};

    #[test]
    fn inc_wraps_and_flags() {
        for (value, result, zero, negative) in [
            (0x0Fu8, 0x10u8, false, false),
            (0xFF, 0x00, true, false),
            (0x7F, 0x80, false, true),
        ] {
            let cpu = run_absolute(0xEE, value, |_| {});
            assert_eq!(cpu.memory().peek(TEST_ABSOLUTE_ADDRESS), result);
            assert_eq!(cpu.p.contains(Status::ZERO), zero);
            assert_eq!(cpu.p.contains(Status::NEGATIVE), negative);
            assert_eq!(cpu.total_cycles, 6);
        }
    }

    #[test]
    fn dec_wraps_and_flags() {
        for (value, result, zero, negative) in [
            (0x01u8, 0x00u8, true, false),
            (0x00, 0xFF, false, true),
            (0x80, 0x7F, false, false),
        ] {
            let cpu = run_absolute(0xCE, value, |_| {});
            assert_eq!(cpu.memory().peek(TEST_ABSOLUTE_ADDRESS), result);
            assert_eq!(cpu.p.contains(Status::ZERO), zero);
            assert_eq!(cpu.p.contains(Status::NEGATIVE), negative);
        }
    }

    #[test]
    fn register_inc_dec() {
        let cpu = run_implicit(0xE8, |cpu| cpu.x = 0xFF); // INX
        assert_eq!(cpu.x, 0x00);
        assert!(cpu.p.contains(Status::ZERO));

        let cpu = run_implicit(0x88, |cpu| cpu.y = 0x00); // DEY
        assert_eq!(cpu.y, 0xFF);
        assert!(cpu.p.contains(Status::NEGATIVE));
    }

    #[test]
    fn asl_shifts_into_carry() {
        let cpu = run_implicit(0x0A, |cpu| cpu.a = 0x81);
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.p.contains(Status::CARRY));
        assert!(!cpu.p.contains(Status::NEGATIVE));
    }

    #[test]
    fn lsr_shifts_out_of_carry() {
        let cpu = run_implicit(0x4A, |cpu| cpu.a = 0x01);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.p.contains(Status::CARRY));
        assert!(cpu.p.contains(Status::ZERO));
    }

    #[test]
    fn asl_after_lsr_zeroes_bit0_and_keeps_the_rest() {
        for value in [0x00u8, 0x01, 0x55, 0xAA, 0xFF] {
            let shifted = run_implicit(0x4A, |cpu| cpu.a = value); // LSR A
            assert_eq!(shifted.p.contains(Status::CARRY), value & 0x01 != 0);
            let restored = run_implicit(0x0A, |cpu| {
                cpu.a = shifted.a;
                cpu.p = shifted.p;
            }); // ASL A
            assert_eq!(restored.a, value & 0xFE);
        }
    }

    #[test]
    fn rol_then_ror_restores_the_value() {
        for value in [0x00u8, 0x01, 0x42, 0x80, 0xFF] {
            for carry in [false, true] {
                let rolled = run_implicit(0x2A, |cpu| {
                    cpu.a = value;
                    cpu.p.set(Status::CARRY, carry);
                });
                let restored = run_implicit(0x6A, |cpu| {
                    cpu.a = rolled.a;
                    cpu.p = rolled.p;
                });
                assert_eq!(restored.a, value, "value {value:#04X} carry {carry}");
                assert_eq!(restored.p.contains(Status::CARRY), carry);
            }
        }
    }

    #[test]
    fn ror_negative_follows_the_old_carry() {
        let cpu = run_implicit(0x6A, |cpu| {
            cpu.a = 0x00;
            cpu.p.insert(Status::CARRY);
        });
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.p.contains(Status::NEGATIVE));
        assert!(!cpu.p.contains(Status::CARRY));
    }

    #[test]
    fn memory_rmw_writes_back() {
        let cpu = run_absolute(0x0E, 0x40, |_| {}); // ASL abs
        assert_eq!(cpu.memory().peek(TEST_ABSOLUTE_ADDRESS), 0x80);
        assert!(cpu.p.contains(Status::NEGATIVE));
        assert_eq!(cpu.total_cycles, 6);
    }
}
