//! # Opcode Decode Table
//!
//! This module contains the complete 256-entry decode table that serves as
//! the single source of truth for instruction dispatch. Each entry maps an
//! opcode byte to a `(Mnemonic, AddressingMode)` pair.
//!
//! The table covers the 150 documented opcode assignments of the
//! instruction set; every other byte decodes as NOP in implicit mode, so
//! the interpreter consumes one byte and performs no work for it.

use crate::addressing::AddressingMode;

/// Instruction mnemonic.
///
/// One variant per documented 6502 instruction. Unassigned opcode bytes
/// decode as `Nop`, so dispatch never encounters an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Force break
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry flag
    Clc,
    /// Clear decimal flag
    Cld,
    /// Clear interrupt disable flag
    Cli,
    /// Clear overflow flag
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X register
    Cpx,
    /// Compare Y register
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X register
    Dex,
    /// Decrement Y register
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X register
    Inx,
    /// Increment Y register
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry flag
    Sec,
    /// Set decimal flag
    Sed,
    /// Set interrupt disable flag
    Sei,
    /// Store accumulator
    Sta,
    /// Store X register
    Stx,
    /// Store Y register
    Sty,
    /// Transfer accumulator to X
    Tax,
    /// Transfer accumulator to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to accumulator
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to accumulator
    Tya,
}

/// Decode entry for a single opcode byte.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata { mnemonic, mode }
}

use self::Mnemonic::{
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli, Clv, Cmp,
    Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha,
    Php, Pla, Plp, Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa,
    Txs, Tya,
};

use crate::addressing::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};

/// Complete 256-entry decode table indexed by opcode byte value.
///
/// Index into the array with the opcode byte to retrieve its mnemonic and
/// addressing mode. Bytes the instruction set leaves unassigned decode as
/// `(Nop, Implicit)`.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.mode, AddressingMode::Implicit);
///
/// // 0x02 has no documented assignment
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, Mnemonic::Nop);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op(Brk, Implicit), // 0x00
    op(Ora, IndirectX), // 0x01
    op(Nop, Implicit), // 0x02 (unassigned)
    op(Nop, Implicit), // 0x03 (unassigned)
    op(Nop, Implicit), // 0x04 (unassigned)
    op(Ora, ZeroPage), // 0x05
    op(Asl, ZeroPage), // 0x06
    op(Nop, Implicit), // 0x07 (unassigned)
    op(Php, Implicit), // 0x08
    op(Ora, Immediate), // 0x09
    op(Asl, Accumulator), // 0x0A
    op(Nop, Implicit), // 0x0B (unassigned)
    op(Nop, Implicit), // 0x0C (unassigned)
    op(Ora, Absolute), // 0x0D
    op(Asl, Absolute), // 0x0E
    op(Nop, Implicit), // 0x0F (unassigned)
    op(Bpl, Relative), // 0x10
    op(Ora, IndirectY), // 0x11
    op(Nop, Implicit), // 0x12 (unassigned)
    op(Nop, Implicit), // 0x13 (unassigned)
    op(Nop, Implicit), // 0x14 (unassigned)
    op(Ora, ZeroPageX), // 0x15
    op(Asl, ZeroPageX), // 0x16
    op(Nop, Implicit), // 0x17 (unassigned)
    op(Clc, Implicit), // 0x18
    op(Ora, AbsoluteY), // 0x19
    op(Nop, Implicit), // 0x1A (unassigned)
    op(Nop, Implicit), // 0x1B (unassigned)
    op(Nop, Implicit), // 0x1C (unassigned)
    op(Ora, AbsoluteX), // 0x1D
    op(Asl, AbsoluteX), // 0x1E
    op(Nop, Implicit), // 0x1F (unassigned)
    op(Jsr, Absolute), // 0x20
    op(And, IndirectX), // 0x21
    op(Nop, Implicit), // 0x22 (unassigned)
    op(Nop, Implicit), // 0x23 (unassigned)
    op(Bit, ZeroPage), // 0x24
    op(And, ZeroPage), // 0x25
    op(Rol, ZeroPage), // 0x26
    op(Nop, Implicit), // 0x27 (unassigned)
    op(Plp, Implicit), // 0x28
    op(And, Immediate), // 0x29
    op(Rol, Accumulator), // 0x2A
    op(Nop, Implicit), // 0x2B (unassigned)
    op(Bit, Absolute), // 0x2C
    op(And, Absolute), // 0x2D
    op(Rol, Absolute), // 0x2E
    op(Nop, Implicit), // 0x2F (unassigned)
    op(Bmi, Relative), // 0x30
    op(And, IndirectY), // 0x31
    op(Nop, Implicit), // 0x32 (unassigned)
    op(Nop, Implicit), // 0x33 (unassigned)
    op(Nop, Implicit), // 0x34 (unassigned)
    op(And, ZeroPageX), // 0x35
    op(Rol, ZeroPageX), // 0x36
    op(Nop, Implicit), // 0x37 (unassigned)
    op(Sec, Implicit), // 0x38
    op(And, AbsoluteY), // 0x39
    op(Nop, Implicit), // 0x3A (unassigned)
    op(Nop, Implicit), // 0x3B (unassigned)
    op(Nop, Implicit), // 0x3C (unassigned)
    op(And, AbsoluteX), // 0x3D
    op(Rol, AbsoluteX), // 0x3E
    op(Nop, Implicit), // 0x3F (unassigned)
    op(Rti, Implicit), // 0x40
    op(Eor, IndirectX), // 0x41
    op(Nop, Implicit), // 0x42 (unassigned)
    op(Nop, Implicit), // 0x43 (unassigned)
    op(Nop, Implicit), // 0x44 (unassigned)
    op(Eor, ZeroPage), // 0x45
    op(Lsr, ZeroPage), // 0x46
    op(Nop, Implicit), // 0x47 (unassigned)
    op(Pha, Implicit), // 0x48
    op(Eor, Immediate), // 0x49
    op(Lsr, Accumulator), // 0x4A
    op(Nop, Implicit), // 0x4B (unassigned)
    op(Jmp, Absolute), // 0x4C
    op(Eor, Absolute), // 0x4D
    op(Lsr, Absolute), // 0x4E
    op(Nop, Implicit), // 0x4F (unassigned)
    op(Bvc, Relative), // 0x50
    op(Eor, IndirectY), // 0x51
    op(Nop, Implicit), // 0x52 (unassigned)
    op(Nop, Implicit), // 0x53 (unassigned)
    op(Nop, Implicit), // 0x54 (unassigned)
    op(Eor, ZeroPageX), // 0x55
    op(Lsr, ZeroPageX), // 0x56
    op(Nop, Implicit), // 0x57 (unassigned)
    op(Cli, Implicit), // 0x58
    op(Eor, AbsoluteY), // 0x59
    op(Nop, Implicit), // 0x5A (unassigned)
    op(Nop, Implicit), // 0x5B (unassigned)
    op(Nop, Implicit), // 0x5C (unassigned)
    op(Eor, AbsoluteX), // 0x5D
    op(Lsr, AbsoluteX), // 0x5E
    op(Nop, Implicit), // 0x5F (unassigned)
    op(Rts, Implicit), // 0x60
    op(Adc, IndirectX), // 0x61
    op(Nop, Implicit), // 0x62 (unassigned)
    op(Nop, Implicit), // 0x63 (unassigned)
    op(Nop, Implicit), // 0x64 (unassigned)
    op(Adc, ZeroPage), // 0x65
    op(Ror, ZeroPage), // 0x66
    op(Nop, Implicit), // 0x67 (unassigned)
    op(Pla, Implicit), // 0x68
    op(Adc, Immediate), // 0x69
    op(Ror, Accumulator), // 0x6A
    op(Nop, Implicit), // 0x6B (unassigned)
    op(Jmp, Indirect), // 0x6C
    op(Adc, Absolute), // 0x6D
    op(Ror, Absolute), // 0x6E
    op(Nop, Implicit), // 0x6F (unassigned)
    op(Bvs, Relative), // 0x70
    op(Adc, IndirectY), // 0x71
    op(Nop, Implicit), // 0x72 (unassigned)
    op(Nop, Implicit), // 0x73 (unassigned)
    op(Nop, Implicit), // 0x74 (unassigned)
    op(Adc, ZeroPageX), // 0x75
    op(Ror, ZeroPageX), // 0x76
    op(Nop, Implicit), // 0x77 (unassigned)
    op(Sei, Implicit), // 0x78
    op(Adc, AbsoluteY), // 0x79
    op(Nop, Implicit), // 0x7A (unassigned)
    op(Nop, Implicit), // 0x7B (unassigned)
    op(Nop, Implicit), // 0x7C (unassigned)
    op(Adc, AbsoluteX), // 0x7D
    op(Ror, AbsoluteX), // 0x7E
    op(Nop, Implicit), // 0x7F (unassigned)
    op(Nop, Implicit), // 0x80 (unassigned)
    op(Sta, IndirectX), // 0x81
    op(Nop, Implicit), // 0x82 (unassigned)
    op(Nop, Implicit), // 0x83 (unassigned)
    op(Sty, ZeroPage), // 0x84
    op(Sta, ZeroPage), // 0x85
    op(Stx, ZeroPage), // 0x86
    op(Nop, Implicit), // 0x87 (unassigned)
    op(Dey, Implicit), // 0x88
    op(Nop, Implicit), // 0x89 (unassigned)
    op(Txa, Implicit), // 0x8A
    op(Nop, Implicit), // 0x8B (unassigned)
    op(Sty, Absolute), // 0x8C
    op(Sta, Absolute), // 0x8D
    op(Stx, Absolute), // 0x8E
    op(Nop, Implicit), // 0x8F (unassigned)
    op(Bcc, Relative), // 0x90
    op(Sta, IndirectY), // 0x91
    op(Nop, Implicit), // 0x92 (unassigned)
    op(Nop, Implicit), // 0x93 (unassigned)
    op(Sty, ZeroPageX), // 0x94
    op(Sta, ZeroPageX), // 0x95
    op(Stx, ZeroPageY), // 0x96
    op(Nop, Implicit), // 0x97 (unassigned)
    op(Tya, Implicit), // 0x98
    op(Sta, AbsoluteY), // 0x99
    op(Txs, Implicit), // 0x9A
    op(Nop, Implicit), // 0x9B (unassigned)
    op(Nop, Implicit), // 0x9C (unassigned)
    op(Sta, AbsoluteX), // 0x9D
    op(Nop, Implicit), // 0x9E (unassigned)
    op(Nop, Implicit), // 0x9F (unassigned)
    op(Ldy, Immediate), // 0xA0
    op(Lda, IndirectX), // 0xA1
    op(Ldx, Immediate), // 0xA2
    op(Nop, Implicit), // 0xA3 (unassigned)
    op(Ldy, ZeroPage), // 0xA4
    op(Lda, ZeroPage), // 0xA5
    op(Ldx, ZeroPage), // 0xA6
    op(Nop, Implicit), // 0xA7 (unassigned)
    op(Tay, Implicit), // 0xA8
    op(Lda, Immediate), // 0xA9
    op(Tax, Implicit), // 0xAA
    op(Nop, Implicit), // 0xAB (unassigned)
    op(Ldy, Absolute), // 0xAC
    op(Lda, Absolute), // 0xAD
    op(Ldx, Absolute), // 0xAE
    op(Nop, Implicit), // 0xAF (unassigned)
    op(Bcs, Relative), // 0xB0
    op(Lda, IndirectY), // 0xB1
    op(Nop, Implicit), // 0xB2 (unassigned)
    op(Nop, Implicit), // 0xB3 (unassigned)
    op(Ldy, ZeroPageX), // 0xB4
    op(Lda, ZeroPageX), // 0xB5
    op(Ldx, ZeroPageY), // 0xB6
    op(Nop, Implicit), // 0xB7 (unassigned)
    op(Clv, Implicit), // 0xB8
    op(Lda, AbsoluteY), // 0xB9
    op(Tsx, Implicit), // 0xBA
    op(Nop, Implicit), // 0xBB (unassigned)
    op(Ldy, AbsoluteX), // 0xBC
    op(Lda, AbsoluteX), // 0xBD
    op(Ldx, AbsoluteY), // 0xBE
    op(Nop, Implicit), // 0xBF (unassigned)
    op(Cpy, Immediate), // 0xC0
    op(Cmp, IndirectX), // 0xC1
    op(Nop, Implicit), // 0xC2 (unassigned)
    op(Nop, Implicit), // 0xC3 (unassigned)
    op(Cpy, ZeroPage), // 0xC4
    op(Cmp, ZeroPage), // 0xC5
    op(Dec, ZeroPage), // 0xC6
    op(Nop, Implicit), // 0xC7 (unassigned)
    op(Iny, Implicit), // 0xC8
    op(Cmp, Immediate), // 0xC9
    op(Dex, Implicit), // 0xCA
    op(Nop, Implicit), // 0xCB (unassigned)
    op(Cpy, Absolute), // 0xCC
    op(Cmp, Absolute), // 0xCD
    op(Dec, Absolute), // 0xCE
    op(Nop, Implicit), // 0xCF (unassigned)
    op(Bne, Relative), // 0xD0
    op(Cmp, IndirectY), // 0xD1
    op(Nop, Implicit), // 0xD2 (unassigned)
    op(Nop, Implicit), // 0xD3 (unassigned)
    op(Nop, Implicit), // 0xD4 (unassigned)
    op(Cmp, ZeroPageX), // 0xD5
    op(Dec, ZeroPageX), // 0xD6
    op(Nop, Implicit), // 0xD7 (unassigned)
    op(Cld, Implicit), // 0xD8
    op(Cmp, AbsoluteY), // 0xD9
    op(Nop, Implicit), // 0xDA (unassigned)
    op(Nop, Implicit), // 0xDB (unassigned)
    op(Nop, Implicit), // 0xDC (unassigned)
    op(Cmp, AbsoluteX), // 0xDD
    op(Nop, Implicit), // 0xDE (unassigned)
    op(Nop, Implicit), // 0xDF (unassigned)
    op(Cpx, Immediate), // 0xE0
    op(Sbc, IndirectX), // 0xE1
    op(Nop, Implicit), // 0xE2 (unassigned)
    op(Nop, Implicit), // 0xE3 (unassigned)
    op(Cpx, ZeroPage), // 0xE4
    op(Sbc, ZeroPage), // 0xE5
    op(Inc, ZeroPage), // 0xE6
    op(Nop, Implicit), // 0xE7 (unassigned)
    op(Inx, Implicit), // 0xE8
    op(Sbc, Immediate), // 0xE9
    op(Nop, Implicit), // 0xEA
    op(Nop, Implicit), // 0xEB (unassigned)
    op(Cpx, Absolute), // 0xEC
    op(Sbc, Absolute), // 0xED
    op(Inc, Absolute), // 0xEE
    op(Nop, Implicit), // 0xEF (unassigned)
    op(Beq, Relative), // 0xF0
    op(Sbc, IndirectY), // 0xF1
    op(Nop, Implicit), // 0xF2 (unassigned)
    op(Nop, Implicit), // 0xF3 (unassigned)
    op(Nop, Implicit), // 0xF4 (unassigned)
    op(Sbc, ZeroPageX), // 0xF5
    op(Inc, ZeroPageX), // 0xF6
    op(Nop, Implicit), // 0xF7 (unassigned)
    op(Sed, Implicit), // 0xF8
    op(Sbc, AbsoluteY), // 0xF9
    op(Nop, Implicit), // 0xFA (unassigned)
    op(Nop, Implicit), // 0xFB (unassigned)
    op(Nop, Implicit), // 0xFC (unassigned)
    op(Sbc, AbsoluteX), // 0xFD
    op(Inc, AbsoluteX), // 0xFE
    op(Nop, Implicit), // 0xFF (unassigned)
];
