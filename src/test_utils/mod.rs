//! Shared test helpers for building minimal iNES (v1) images.
//!
//! The builders cover just what the test suite needs: raw header control
//! for the loader tests and a program-plus-vectors NROM image for tests
//! that boot the CPU through the reset vector.

#![allow(dead_code)]

use crate::cartridge::{HEADER_LENGTH, PRG_BANK_LENGTH};

/// Build an iNES (v1) image with the given geometry and flag bytes.
///
/// PRG banks are filled with 0xAA and CHR banks with 0xCC so tests can
/// overwrite individual bytes and still recognize untouched regions.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        HEADER_LENGTH + trainer.map_or(0, |t| t.len()) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.extend_from_slice(&[0u8; 8]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }

    bytes.extend(std::iter::repeat(0xAA).take(prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat(0xCC).take(chr_8k * 8 * 1024));

    bytes
}

/// Build a single-bank NROM image containing `prg` at the start of PRG
/// and the NMI/RESET/IRQ vectors at the end of the bank. All vectors
/// default to $8000, the start of the bank.
pub fn build_nrom_with_prg(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> Vec<u8> {
    assert!(
        prg.len() <= PRG_BANK_LENGTH,
        "program must fit within a 16 KiB PRG bank"
    );

    let mut image = build_ines(1, 0, 0, 0, None);
    let prg_start = HEADER_LENGTH;
    image[prg_start..prg_start + PRG_BANK_LENGTH].fill(0);
    image[prg_start..prg_start + prg.len()].copy_from_slice(prg);

    let (nmi, reset, irq) = vectors.unwrap_or((0x8000, 0x8000, 0x8000));
    write_le_u16(&mut image, prg_start + 0x3FFA, nmi);
    write_le_u16(&mut image, prg_start + 0x3FFC, reset);
    write_le_u16(&mut image, prg_start + 0x3FFE, irq);

    image
}

fn write_le_u16(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset] = (value & 0x00FF) as u8;
    buffer[offset + 1] = (value >> 8) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_header() {
        let image = build_ines(2, 1, 0x01, 0x40, None);
        assert_eq!(&image[0..4], b"NES\x1A");
        assert_eq!(image[4], 2);
        assert_eq!(image[5], 1);
        assert_eq!(image[6], 0x01);
        assert_eq!(image[7], 0x40);
        assert_eq!(image.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn places_vectors_at_end_of_bank() {
        let image = build_nrom_with_prg(&[0xEA], Some((0x8123, 0x8456, 0x8ABC)));
        assert_eq!(image[16 + 0x3FFA], 0x23);
        assert_eq!(image[16 + 0x3FFB], 0x81);
        assert_eq!(image[16 + 0x3FFC], 0x56);
        assert_eq!(image[16 + 0x3FFD], 0x84);
        assert_eq!(image[16 + 0x3FFE], 0xBC);
        assert_eq!(image[16 + 0x3FFF], 0x8A);
    }
}
