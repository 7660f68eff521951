//! Instruction disassembly for pipeline traces.
//!
//! Only the instructions the execution unit implements get operand
//! rendering; anything else prints as its mnemonic followed by the raw word.

use super::decoder::{decode_i, decode_r, get_opcode};
use super::opcodes::{funct, mnemonic, OP_LB, OP_LH, OP_LW, OP_SPECIAL};

/// Renders `word` in assembler syntax, e.g. `sll r3, r2, 3`.
pub fn disassemble(word: u32) -> String {
    if word == 0 {
        return "nop".to_string();
    }

    let name = mnemonic(word).to_ascii_lowercase();
    match get_opcode(word) {
        OP_SPECIAL => {
            let r = decode_r(word);
            match r.funct {
                funct::SLL | funct::SRL | funct::SRA => {
                    format!("{} r{}, r{}, {}", name, r.rd, r.rt, r.sa)
                }
                funct::SLLV
                | funct::SRLV
                | funct::SRAV
                | funct::DSLLV
                | funct::DSRLV
                | funct::DSRAV => format!("{} r{}, r{}, r{}", name, r.rd, r.rt, r.rs),
                funct::JR | funct::MTHI | funct::MTLO => format!("{} r{}", name, r.rs),
                funct::JALR => format!("{} r{}, r{}", name, r.rd, r.rs),
                funct::MFHI | funct::MFLO => format!("{} r{}", name, r.rd),
                funct::MULT..=funct::DDIVU => format!("{} r{}, r{}", name, r.rs, r.rt),
                funct::ADD..=funct::NOR | funct::SLT | funct::SLTU => {
                    format!("{} r{}, r{}, r{}", name, r.rd, r.rs, r.rt)
                }
                _ => format!("{} {:#010x}", name, word),
            }
        }
        OP_LB | OP_LH | OP_LW => {
            let i = decode_i(word);
            let offset = i.immediate as i16;
            if offset < 0 {
                format!("{} r{}, -{:#x}(r{})", name, i.rt, offset.unsigned_abs(), i.rs)
            } else {
                format!("{} r{}, {:#x}(r{})", name, i.rt, offset, i.rs)
            }
        }
        _ => format!("{} {:#010x}", name, word),
    }
}
