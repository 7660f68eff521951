//! Instruction field extraction.
//!
//! Pure bit masking; every 32-bit word decodes in all three formats and the
//! caller picks the one the opcode calls for.

use super::instruction::{InstI, InstJ, InstR};

const OPCODE_SHIFT: u32 = 26;
const RS_SHIFT: u32 = 21;
const RT_SHIFT: u32 = 16;
const RD_SHIFT: u32 = 11;
const SA_SHIFT: u32 = 6;

const OPCODE_MASK: u32 = 0x3f;
const REG_MASK: u32 = 0x1f;
const FUNCT_MASK: u32 = 0x3f;
const IMM_MASK: u32 = 0xffff;
const TARGET_MASK: u32 = 0x03ff_ffff;

/// Extracts the primary opcode, bits 31:26.
#[inline]
pub fn get_opcode(word: u32) -> u8 {
    ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extracts the secondary dispatch field, bits 5:0.
#[inline]
pub fn get_funct(word: u32) -> u8 {
    (word & FUNCT_MASK) as u8
}

/// Decodes an R-type instruction.
pub fn decode_r(word: u32) -> InstR {
    InstR {
        opcode: get_opcode(word),
        rs: ((word >> RS_SHIFT) & REG_MASK) as u8,
        rt: ((word >> RT_SHIFT) & REG_MASK) as u8,
        rd: ((word >> RD_SHIFT) & REG_MASK) as u8,
        sa: ((word >> SA_SHIFT) & REG_MASK) as u8,
        funct: get_funct(word),
    }
}

/// Decodes an I-type instruction.
pub fn decode_i(word: u32) -> InstI {
    InstI {
        opcode: get_opcode(word),
        rs: ((word >> RS_SHIFT) & REG_MASK) as u8,
        rt: ((word >> RT_SHIFT) & REG_MASK) as u8,
        immediate: (word & IMM_MASK) as u16,
    }
}

/// Decodes a J-type instruction.
pub fn decode_j(word: u32) -> InstJ {
    InstJ {
        opcode: get_opcode(word),
        address: word & TARGET_MASK,
    }
}
