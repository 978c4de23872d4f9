//! Opcode decode table.
//!
//! A 256-entry static table maps each opcode byte to its mnemonic,
//! semantic kind, addressing mode and static cycle count. The table is
//! built in a const initializer whose registration helper panics on a
//! doubly-assigned opcode, so a duplicate registration fails the build
//! rather than surfacing at runtime.
//!
//! Static cycles are the whole-instruction baseline; page-cross and
//! branch penalties are added by the handlers. Store-style entries
//! already carry the worst-case count, which is why stores never pay a
//! page-cross penalty.
//!
//! Entries left unregistered are the unstable encodings (ANC, ALR, ARR,
//! XAA, AHX, TAS, SHY, SHX, LXA, LAS). Their hardware behavior is not
//! dependable and nestest never executes them; fetching one fails the
//! step with an invalid-opcode error.

use crate::cpu::addressing::AddressingMode;

/// Semantic families the interpreter dispatches on. One kind may cover
/// several encodings (modes) of the same mnemonic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OpKind {
    Adc,
    And,
    Asl,
    Axs,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dcp,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Isb,
    Jmp,
    Jsr,
    Kil,
    Lax,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rla,
    Rol,
    Ror,
    Rra,
    Rti,
    Rts,
    Sax,
    Sbc,
    Sec,
    Sed,
    Sei,
    Slo,
    Sre,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Instruction {
    pub mnemonic: &'static str,
    pub kind: OpKind,
    pub mode: AddressingMode,
    pub static_cycles: u8,
    pub unofficial: bool,
}

type Table = [Option<Instruction>; 256];

/// Look up the decode entry for an opcode byte.
pub(crate) fn lookup(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTIONS[opcode as usize].as_ref()
}

/// Register every variant of one mnemonic. Panics during const
/// evaluation if an opcode byte is claimed twice.
const fn register(
    mut table: Table,
    mnemonic: &'static str,
    kind: OpKind,
    unofficial: bool,
    variants: &[(u8, AddressingMode, u8)],
) -> Table {
    let mut i = 0;
    while i < variants.len() {
        let (opcode, mode, static_cycles) = variants[i];
        assert!(
            table[opcode as usize].is_none(),
            "duplicate opcode registration"
        );
        table[opcode as usize] = Some(Instruction {
            mnemonic,
            kind,
            mode,
            static_cycles,
            unofficial,
        });
        i += 1;
    }
    table
}

static INSTRUCTIONS: Table = build_table();

#[rustfmt::skip]
const fn build_table() -> Table {
    use AddressingMode::*;
    use OpKind::*;

    const NONE: Option<Instruction> = None;
    let mut t = [NONE; 256];

    // Official opcodes.
    t = register(t, "ADC", Adc, false, &[
        (0x69, Immediate, 2), (0x65, ZeroPage, 3), (0x75, ZeroPageX, 4), (0x6D, Absolute, 4),
        (0x7D, AbsoluteX, 4), (0x79, AbsoluteY, 4), (0x61, IndirectX, 6), (0x71, IndirectY, 5),
    ]);
    t = register(t, "AND", And, false, &[
        (0x29, Immediate, 2), (0x25, ZeroPage, 3), (0x35, ZeroPageX, 4), (0x2D, Absolute, 4),
        (0x3D, AbsoluteX, 4), (0x39, AbsoluteY, 4), (0x21, IndirectX, 6), (0x31, IndirectY, 5),
    ]);
    t = register(t, "ASL", Asl, false, &[
        (0x0A, Accumulator, 2), (0x06, ZeroPage, 5), (0x16, ZeroPageX, 6),
        (0x0E, Absolute, 6), (0x1E, AbsoluteX, 7),
    ]);
    t = register(t, "BCC", Bcc, false, &[(0x90, Relative, 2)]);
    t = register(t, "BCS", Bcs, false, &[(0xB0, Relative, 2)]);
    t = register(t, "BEQ", Beq, false, &[(0xF0, Relative, 2)]);
    t = register(t, "BIT", Bit, false, &[(0x24, ZeroPage, 3), (0x2C, Absolute, 4)]);
    t = register(t, "BMI", Bmi, false, &[(0x30, Relative, 2)]);
    t = register(t, "BNE", Bne, false, &[(0xD0, Relative, 2)]);
    t = register(t, "BPL", Bpl, false, &[(0x10, Relative, 2)]);
    t = register(t, "BRK", Brk, false, &[(0x00, Implicit, 7)]);
    t = register(t, "BVC", Bvc, false, &[(0x50, Relative, 2)]);
    t = register(t, "BVS", Bvs, false, &[(0x70, Relative, 2)]);
    t = register(t, "CLC", Clc, false, &[(0x18, Implicit, 2)]);
    t = register(t, "CLD", Cld, false, &[(0xD8, Implicit, 2)]);
    t = register(t, "CLI", Cli, false, &[(0x58, Implicit, 2)]);
    t = register(t, "CLV", Clv, false, &[(0xB8, Implicit, 2)]);
    t = register(t, "CMP", Cmp, false, &[
        (0xC9, Immediate, 2), (0xC5, ZeroPage, 3), (0xD5, ZeroPageX, 4), (0xCD, Absolute, 4),
        (0xDD, AbsoluteX, 4), (0xD9, AbsoluteY, 4), (0xC1, IndirectX, 6), (0xD1, IndirectY, 5),
    ]);
    t = register(t, "CPX", Cpx, false, &[
        (0xE0, Immediate, 2), (0xE4, ZeroPage, 3), (0xEC, Absolute, 4),
    ]);
    t = register(t, "CPY", Cpy, false, &[
        (0xC0, Immediate, 2), (0xC4, ZeroPage, 3), (0xCC, Absolute, 4),
    ]);
    t = register(t, "DEC", Dec, false, &[
        (0xC6, ZeroPage, 5), (0xD6, ZeroPageX, 6), (0xCE, Absolute, 6), (0xDE, AbsoluteX, 7),
    ]);
    t = register(t, "DEX", Dex, false, &[(0xCA, Implicit, 2)]);
    t = register(t, "DEY", Dey, false, &[(0x88, Implicit, 2)]);
    t = register(t, "EOR", Eor, false, &[
        (0x49, Immediate, 2), (0x45, ZeroPage, 3), (0x55, ZeroPageX, 4), (0x4D, Absolute, 4),
        (0x5D, AbsoluteX, 4), (0x59, AbsoluteY, 4), (0x41, IndirectX, 6), (0x51, IndirectY, 5),
    ]);
    t = register(t, "INC", Inc, false, &[
        (0xE6, ZeroPage, 5), (0xF6, ZeroPageX, 6), (0xEE, Absolute, 6), (0xFE, AbsoluteX, 7),
    ]);
    t = register(t, "INX", Inx, false, &[(0xE8, Implicit, 2)]);
    t = register(t, "INY", Iny, false, &[(0xC8, Implicit, 2)]);
    t = register(t, "JMP", Jmp, false, &[(0x4C, Absolute, 3), (0x6C, Indirect, 5)]);
    t = register(t, "JSR", Jsr, false, &[(0x20, Absolute, 6)]);
    t = register(t, "LDA", Lda, false, &[
        (0xA9, Immediate, 2), (0xA5, ZeroPage, 3), (0xB5, ZeroPageX, 4), (0xAD, Absolute, 4),
        (0xBD, AbsoluteX, 4), (0xB9, AbsoluteY, 4), (0xA1, IndirectX, 6), (0xB1, IndirectY, 5),
    ]);
    t = register(t, "LDX", Ldx, false, &[
        (0xA2, Immediate, 2), (0xA6, ZeroPage, 3), (0xB6, ZeroPageY, 4),
        (0xAE, Absolute, 4), (0xBE, AbsoluteY, 4),
    ]);
    t = register(t, "LDY", Ldy, false, &[
        (0xA0, Immediate, 2), (0xA4, ZeroPage, 3), (0xB4, ZeroPageX, 4),
        (0xAC, Absolute, 4), (0xBC, AbsoluteX, 4),
    ]);
    t = register(t, "LSR", Lsr, false, &[
        (0x4A, Accumulator, 2), (0x46, ZeroPage, 5), (0x56, ZeroPageX, 6),
        (0x4E, Absolute, 6), (0x5E, AbsoluteX, 7),
    ]);
    t = register(t, "NOP", Nop, false, &[(0xEA, Implicit, 2)]);
    t = register(t, "ORA", Ora, false, &[
        (0x09, Immediate, 2), (0x05, ZeroPage, 3), (0x15, ZeroPageX, 4), (0x0D, Absolute, 4),
        (0x1D, AbsoluteX, 4), (0x19, AbsoluteY, 4), (0x01, IndirectX, 6), (0x11, IndirectY, 5),
    ]);
    t = register(t, "PHA", Pha, false, &[(0x48, Implicit, 3)]);
    t = register(t, "PHP", Php, false, &[(0x08, Implicit, 3)]);
    t = register(t, "PLA", Pla, false, &[(0x68, Implicit, 4)]);
    t = register(t, "PLP", Plp, false, &[(0x28, Implicit, 4)]);
    t = register(t, "ROL", Rol, false, &[
        (0x2A, Accumulator, 2), (0x26, ZeroPage, 5), (0x36, ZeroPageX, 6),
        (0x2E, Absolute, 6), (0x3E, AbsoluteX, 7),
    ]);
    t = register(t, "ROR", Ror, false, &[
        (0x6A, Accumulator, 2), (0x66, ZeroPage, 5), (0x76, ZeroPageX, 6),
        (0x6E, Absolute, 6), (0x7E, AbsoluteX, 7),
    ]);
    t = register(t, "RTI", Rti, false, &[(0x40, Implicit, 6)]);
    t = register(t, "RTS", Rts, false, &[(0x60, Implicit, 6)]);
    t = register(t, "SBC", Sbc, false, &[
        (0xE9, Immediate, 2), (0xE5, ZeroPage, 3), (0xF5, ZeroPageX, 4), (0xED, Absolute, 4),
        (0xFD, AbsoluteX, 4), (0xF9, AbsoluteY, 4), (0xE1, IndirectX, 6), (0xF1, IndirectY, 5),
    ]);
    t = register(t, "SEC", Sec, false, &[(0x38, Implicit, 2)]);
    t = register(t, "SED", Sed, false, &[(0xF8, Implicit, 2)]);
    t = register(t, "SEI", Sei, false, &[(0x78, Implicit, 2)]);
    t = register(t, "STA", Sta, false, &[
        (0x85, ZeroPage, 3), (0x95, ZeroPageX, 4), (0x8D, Absolute, 4), (0x9D, AbsoluteX, 5),
        (0x99, AbsoluteY, 5), (0x81, IndirectX, 6), (0x91, IndirectY, 6),
    ]);
    t = register(t, "STX", Stx, false, &[
        (0x86, ZeroPage, 3), (0x96, ZeroPageY, 4), (0x8E, Absolute, 4),
    ]);
    t = register(t, "STY", Sty, false, &[
        (0x84, ZeroPage, 3), (0x94, ZeroPageX, 4), (0x8C, Absolute, 4),
    ]);
    t = register(t, "TAX", Tax, false, &[(0xAA, Implicit, 2)]);
    t = register(t, "TAY", Tay, false, &[(0xA8, Implicit, 2)]);
    t = register(t, "TSX", Tsx, false, &[(0xBA, Implicit, 2)]);
    t = register(t, "TXA", Txa, false, &[(0x8A, Implicit, 2)]);
    t = register(t, "TXS", Txs, false, &[(0x9A, Implicit, 2)]);
    t = register(t, "TYA", Tya, false, &[(0x98, Implicit, 2)]);

    // Documented-unofficial opcodes. nestest exercises every family
    // below, so the cycle counts are nailed down by its reference log.
    t = register(t, "NOP", Nop, true, &[
        (0x1A, Implicit, 2), (0x3A, Implicit, 2), (0x5A, Implicit, 2),
        (0x7A, Implicit, 2), (0xDA, Implicit, 2), (0xFA, Implicit, 2),
        (0x80, Immediate, 2), (0x82, Immediate, 2), (0x89, Immediate, 2),
        (0xC2, Immediate, 2), (0xE2, Immediate, 2),
        (0x04, ZeroPage, 3), (0x44, ZeroPage, 3), (0x64, ZeroPage, 3),
        (0x14, ZeroPageX, 4), (0x34, ZeroPageX, 4), (0x54, ZeroPageX, 4),
        (0x74, ZeroPageX, 4), (0xD4, ZeroPageX, 4), (0xF4, ZeroPageX, 4),
        (0x0C, Absolute, 4),
        (0x1C, AbsoluteX, 4), (0x3C, AbsoluteX, 4), (0x5C, AbsoluteX, 4),
        (0x7C, AbsoluteX, 4), (0xDC, AbsoluteX, 4), (0xFC, AbsoluteX, 4),
    ]);
    t = register(t, "LAX", Lax, true, &[
        (0xA7, ZeroPage, 3), (0xB7, ZeroPageY, 4), (0xAF, Absolute, 4),
        (0xBF, AbsoluteY, 4), (0xA3, IndirectX, 6), (0xB3, IndirectY, 5),
    ]);
    t = register(t, "SAX", Sax, true, &[
        (0x87, ZeroPage, 3), (0x97, ZeroPageY, 4), (0x8F, Absolute, 4), (0x83, IndirectX, 6),
    ]);
    t = register(t, "SBC", Sbc, true, &[(0xEB, Immediate, 2)]);
    t = register(t, "DCP", Dcp, true, &[
        (0xC7, ZeroPage, 5), (0xD7, ZeroPageX, 6), (0xCF, Absolute, 6), (0xDF, AbsoluteX, 7),
        (0xDB, AbsoluteY, 7), (0xC3, IndirectX, 8), (0xD3, IndirectY, 8),
    ]);
    t = register(t, "ISB", Isb, true, &[
        (0xE7, ZeroPage, 5), (0xF7, ZeroPageX, 6), (0xEF, Absolute, 6), (0xFF, AbsoluteX, 7),
        (0xFB, AbsoluteY, 7), (0xE3, IndirectX, 8), (0xF3, IndirectY, 8),
    ]);
    t = register(t, "SLO", Slo, true, &[
        (0x07, ZeroPage, 5), (0x17, ZeroPageX, 6), (0x0F, Absolute, 6), (0x1F, AbsoluteX, 7),
        (0x1B, AbsoluteY, 7), (0x03, IndirectX, 8), (0x13, IndirectY, 8),
    ]);
    t = register(t, "RLA", Rla, true, &[
        (0x27, ZeroPage, 5), (0x37, ZeroPageX, 6), (0x2F, Absolute, 6), (0x3F, AbsoluteX, 7),
        (0x3B, AbsoluteY, 7), (0x23, IndirectX, 8), (0x33, IndirectY, 8),
    ]);
    t = register(t, "SRE", Sre, true, &[
        (0x47, ZeroPage, 5), (0x57, ZeroPageX, 6), (0x4F, Absolute, 6), (0x5F, AbsoluteX, 7),
        (0x5B, AbsoluteY, 7), (0x43, IndirectX, 8), (0x53, IndirectY, 8),
    ]);
    t = register(t, "RRA", Rra, true, &[
        (0x67, ZeroPage, 5), (0x77, ZeroPageX, 6), (0x6F, Absolute, 6), (0x7F, AbsoluteX, 7),
        (0x7B, AbsoluteY, 7), (0x63, IndirectX, 8), (0x73, IndirectY, 8),
    ]);
    t = register(t, "AXS", Axs, true, &[(0xCB, Immediate, 2)]);

    // Jam opcodes: the CPU stops and the cycle counter does not move.
    t = register(t, "KIL", Kil, true, &[
        (0x02, Implicit, 0), (0x12, Implicit, 0), (0x22, Implicit, 0), (0x32, Implicit, 0),
        (0x42, Implicit, 0), (0x52, Implicit, 0), (0x62, Implicit, 0), (0x72, Implicit, 0),
        (0x92, Implicit, 0), (0xB2, Implicit, 0), (0xD2, Implicit, 0), (0xF2, Implicit, 0),
    ]);

    t
}
