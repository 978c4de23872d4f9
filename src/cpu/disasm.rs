//! Trace-line disassembly.
//!
//! Formats the instruction at PC together with the register file in the
//! reference-log layout used for golden-trace comparison:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0,  0 CYC:7
//! ```
//!
//! Unofficial encodings get a `*` ahead of the mnemonic. Operand
//! rendering annotates memory forms with the value at the effective
//! address; every read goes through `peek`, which is side-effect free
//! for the mappers in this crate, and PC is never advanced. The PPU
//! columns are zero-filled because there is no PPU here; a driver that
//! has one substitutes its own scanline/dot values.

use crate::cpu::addressing::AddressingMode;
use crate::cpu::decode::{self, OpKind};
use crate::cpu::Cpu;

/// Render the trace line for the instruction at the current PC.
pub(crate) fn trace_line(cpu: &Cpu) -> String {
    let pc = cpu.pc;
    let opcode = cpu.peek(pc);

    let (bytes, star, assembly) = match decode::lookup(opcode) {
        Some(instruction) => {
            let length = instruction.mode.operand_length();
            let mut bytes = format!("{opcode:02X}");
            for i in 1..=length {
                bytes.push_str(&format!(" {:02X}", cpu.peek(pc.wrapping_add(i))));
            }
            let operand = format_operand(cpu, instruction.mode, instruction.kind);
            let assembly = if operand.is_empty() {
                instruction.mnemonic.to_string()
            } else {
                format!("{} {}", instruction.mnemonic, operand)
            };
            let star = if instruction.unofficial { '*' } else { ' ' };
            (bytes, star, assembly)
        }
        None => (format!("{opcode:02X}"), ' ', "???".to_string()),
    };

    format!(
        "{pc:04X}  {bytes:<8} {star}{assembly:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PPU:{:>3},{:>3} CYC:{}",
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.p.bits(),
        cpu.s,
        0,
        0,
        cpu.total_cycles,
    )
}

fn format_operand(cpu: &Cpu, mode: AddressingMode, kind: OpKind) -> String {
    use AddressingMode::*;

    let pc = cpu.pc;
    let byte = cpu.peek(pc.wrapping_add(1));
    let word = || {
        let low = cpu.peek(pc.wrapping_add(1)) as u16;
        let high = cpu.peek(pc.wrapping_add(2)) as u16;
        (high << 8) | low
    };
    // Zero-page pointer with the usual wrap on its high byte.
    let zp_pointer = |base: u8| {
        let low = cpu.peek(base as u16) as u16;
        let high = cpu.peek(base.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    };

    match mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${byte:02X}"),
        ZeroPage => format!("${byte:02X} = {:02X}", cpu.peek(byte as u16)),
        ZeroPageX => {
            let effective = byte.wrapping_add(cpu.x);
            format!(
                "${byte:02X},X @ {effective:02X} = {:02X}",
                cpu.peek(effective as u16)
            )
        }
        ZeroPageY => {
            let effective = byte.wrapping_add(cpu.y);
            format!(
                "${byte:02X},Y @ {effective:02X} = {:02X}",
                cpu.peek(effective as u16)
            )
        }
        Relative => {
            let target = pc.wrapping_add(2).wrapping_add(byte as i8 as u16);
            format!("${target:04X}")
        }
        Absolute => {
            let address = word();
            // Jumps name their target; data forms show the operand byte.
            if matches!(kind, OpKind::Jmp | OpKind::Jsr) {
                format!("${address:04X}")
            } else {
                format!("${address:04X} = {:02X}", cpu.peek(address))
            }
        }
        AbsoluteX => {
            let base = word();
            let effective = base.wrapping_add(cpu.x as u16);
            format!("${base:04X},X @ {effective:04X} = {:02X}", cpu.peek(effective))
        }
        AbsoluteY => {
            let base = word();
            let effective = base.wrapping_add(cpu.y as u16);
            format!("${base:04X},Y @ {effective:04X} = {:02X}", cpu.peek(effective))
        }
        Indirect => {
            let pointer = word();
            let wrapped = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
            let low = cpu.peek(pointer) as u16;
            let high = cpu.peek(wrapped) as u16;
            format!("(${pointer:04X}) = {:04X}", (high << 8) | low)
        }
        IndirectX => {
            let indexed = byte.wrapping_add(cpu.x);
            let address = zp_pointer(indexed);
            format!(
                "(${byte:02X},X) @ {indexed:02X} = {address:04X} = {:02X}",
                cpu.peek(address)
            )
        }
        IndirectY => {
            let base = zp_pointer(byte);
            let effective = base.wrapping_add(cpu.y as u16);
            format!(
                "(${byte:02X}),Y = {base:04X} @ {effective:04X} = {:02X}",
                cpu.peek(effective)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_jump_line() {
        let mut cpu = Cpu::new();
        cpu.pc = 0xC000;
        cpu.total_cycles = 7;
        cpu.memory_mut().poke(0xC000, 0x4C);
        cpu.memory_mut().poke16(0xC001, 0xC5F5);

        assert_eq!(
            trace_line(&cpu),
            "C000  4C F5 C5  JMP $C5F5                       \
             A:00 X:00 Y:00 P:24 SP:FD PPU:  0,  0 CYC:7"
        );
    }

    #[test]
    fn formats_an_immediate_line() {
        let mut cpu = Cpu::new();
        cpu.pc = 0xC5F7;
        cpu.total_cycles = 10;
        cpu.memory_mut().poke(0xC5F7, 0xA9); // LDA #$00
        cpu.memory_mut().poke(0xC5F8, 0x00);

        assert_eq!(
            trace_line(&cpu),
            "C5F7  A9 00     LDA #$00                        \
             A:00 X:00 Y:00 P:24 SP:FD PPU:  0,  0 CYC:10"
        );
    }

    #[test]
    fn marks_unofficial_encodings_with_a_star() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        cpu.memory_mut().poke(0x0100, 0x04); // unofficial NOP $12
        cpu.memory_mut().poke(0x0101, 0x12);

        let line = trace_line(&cpu);
        assert!(line.starts_with("0100  04 12    *NOP $12 = 00"), "{line}");
    }

    #[test]
    fn zero_page_and_indexed_annotations() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        cpu.x = 0x01;
        cpu.memory_mut().poke(0x0100, 0xB5); // LDA $40,X
        cpu.memory_mut().poke(0x0101, 0x40);
        cpu.memory_mut().poke(0x0041, 0x5A);

        let line = trace_line(&cpu);
        assert!(line.contains("LDA $40,X @ 41 = 5A"), "{line}");
    }

    #[test]
    fn indirect_forms_show_the_resolution_chain() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        cpu.y = 0x10;
        cpu.memory_mut().poke(0x0100, 0xB1); // LDA ($89),Y
        cpu.memory_mut().poke(0x0101, 0x89);
        cpu.memory_mut().poke16(0x0089, 0x0300);
        cpu.memory_mut().poke(0x0310, 0x77);

        let line = trace_line(&cpu);
        assert!(line.contains("LDA ($89),Y = 0300 @ 0310 = 77"), "{line}");
    }

    #[test]
    fn relative_operand_names_the_target() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        cpu.memory_mut().poke(0x0100, 0x90); // BCC +$0A
        cpu.memory_mut().poke(0x0101, 0x0A);

        let line = trace_line(&cpu);
        assert!(line.contains("BCC $010C"), "{line}");
    }

    #[test]
    fn trace_p_column_keeps_break_clear() {
        let mut cpu = Cpu::new();
        cpu.pc = 0x0100;
        cpu.memory_mut().poke(0x0100, 0xEA);
        let line = trace_line(&cpu);
        assert!(line.contains("P:24"), "{line}");
    }
}
