//! Unit tests for instruction decoding, opcode naming and disassembly.

use vr4300_emulator::isa::decoder::{decode_i, decode_j, decode_r, get_funct, get_opcode};
use vr4300_emulator::isa::disasm::disassemble;
use vr4300_emulator::isa::instruction::{InstI, InstJ, InstR};
use vr4300_emulator::isa::opcodes::{mnemonic, secondary, RESERVED};

/// Tests decoding the all-zero word in every format.
#[test]
fn test_decode_zero_word() {
    assert_eq!(decode_r(0), InstR::default());
    assert_eq!(decode_i(0), InstI::default());
    assert_eq!(decode_j(0), InstJ::default());
}

/// Tests decoding the all-ones word in every format.
#[test]
fn test_decode_all_ones() {
    let word = 0xFFFF_FFFF;
    assert_eq!(
        decode_r(word),
        InstR {
            opcode: 0x3F,
            rs: 0x1F,
            rt: 0x1F,
            rd: 0x1F,
            sa: 0x1F,
            funct: 0x3F,
        }
    );
    assert_eq!(
        decode_i(word),
        InstI {
            opcode: 0x3F,
            rs: 0x1F,
            rt: 0x1F,
            immediate: 0xFFFF,
        }
    );
    assert_eq!(
        decode_j(word),
        InstJ {
            opcode: 0x3F,
            address: 0x03FF_FFFF,
        }
    );
}

/// Tests field extraction for an SLL r3, r2, 3 encoding.
#[test]
fn test_decode_sll_fields() {
    let r = decode_r(0x0002_18C0);
    assert_eq!(r.opcode, 0);
    assert_eq!(r.rs, 0);
    assert_eq!(r.rt, 2);
    assert_eq!(r.rd, 3);
    assert_eq!(r.sa, 3);
    assert_eq!(r.funct, 0);
}

/// Tests field extraction for LW r3, 0x100(r1).
#[test]
fn test_decode_lw_fields() {
    let word = 0x8C23_0100;
    assert_eq!(get_opcode(word), 0x23);
    let i = decode_i(word);
    assert_eq!(i.rs, 1);
    assert_eq!(i.rt, 3);
    assert_eq!(i.immediate, 0x100);
    assert_eq!(i.imm_sext(), 0x100);
}

/// Tests sign extension of a negative immediate.
#[test]
fn test_imm_sext_negative() {
    let i = decode_i(0x8C23_FFFC);
    assert_eq!(i.imm_sext(), 0xFFFF_FFFF_FFFF_FFFC);
}

/// Tests that the funct field is the low six bits.
#[test]
fn test_get_funct() {
    assert_eq!(get_funct(0x0022_1825), 0x25);
    assert_eq!(get_funct(0xFFFF_FFC0), 0);
}

/// Tests mnemonic lookup across the primary, SPECIAL and REGIMM tables.
#[test]
fn test_mnemonic_tables() {
    assert_eq!(mnemonic(0x0000_0000), "SLL");
    assert_eq!(mnemonic(0x0022_1825), "OR");
    assert_eq!(mnemonic(0x0080_0008), "JR");
    assert_eq!(mnemonic(0x8C23_0100), "LW");
    assert_eq!(mnemonic(0x0C00_0000), "JAL");
    assert_eq!(mnemonic(0x0411_0000), "BGEZAL");
    assert_eq!(mnemonic(0x4C00_0000), RESERVED);
    assert_eq!(mnemonic(0x0000_0001), RESERVED);
}

/// Tests the secondary dispatch key per primary opcode.
#[test]
fn test_secondary_key() {
    assert_eq!(secondary(0x0022_1825), 0x25);
    assert_eq!(secondary(0x0411_0000), 0x11);
    assert_eq!(secondary(0x8C23_0125), 0);
}

/// Tests disassembly of implemented instructions.
#[test]
fn test_disassemble_implemented() {
    assert_eq!(disassemble(0), "nop");
    assert_eq!(disassemble(0x0002_18C0), "sll r3, r2, 3");
    assert_eq!(disassemble(0x0022_1825), "or r3, r1, r2");
    assert_eq!(disassemble(0x0080_0008), "jr r4");
    assert_eq!(disassemble(0x0020_0011), "mthi r1");
    assert_eq!(disassemble(0x8C23_0100), "lw r3, 0x100(r1)");
    assert_eq!(disassemble(0x8C23_FFFC), "lw r3, -0x4(r1)");
}

/// Tests that unimplemented encodings fall back to mnemonic and raw word.
#[test]
fn test_disassemble_unimplemented() {
    assert_eq!(disassemble(0x0800_0040), "j 0x08000040");
    assert_eq!(disassemble(0xAC23_0100), "sw 0xac230100");
}
