//! VR4300 opcode tables.
//!
//! Primary opcodes select the instruction directly, except `SPECIAL` (which
//! dispatches on the funct field) and `REGIMM` (which dispatches on rt).

use super::decoder::{decode_i, get_funct, get_opcode};

pub const OP_SPECIAL: u8 = 0x00;
pub const OP_REGIMM: u8 = 0x01;
pub const OP_LB: u8 = 0x20;
pub const OP_LH: u8 = 0x21;
pub const OP_LW: u8 = 0x23;

/// SPECIAL function codes.
pub mod funct {
    pub const SLL: u8 = 0x00;
    pub const SRL: u8 = 0x02;
    pub const SRA: u8 = 0x03;
    pub const SLLV: u8 = 0x04;
    pub const SRLV: u8 = 0x06;
    pub const SRAV: u8 = 0x07;
    pub const JR: u8 = 0x08;
    pub const JALR: u8 = 0x09;
    pub const MFHI: u8 = 0x10;
    pub const MTHI: u8 = 0x11;
    pub const MFLO: u8 = 0x12;
    pub const MTLO: u8 = 0x13;
    pub const DSLLV: u8 = 0x14;
    pub const DSRLV: u8 = 0x16;
    pub const DSRAV: u8 = 0x17;
    pub const MULT: u8 = 0x18;
    pub const MULTU: u8 = 0x19;
    pub const DIV: u8 = 0x1a;
    pub const DIVU: u8 = 0x1b;
    pub const DMULT: u8 = 0x1c;
    pub const DMULTU: u8 = 0x1d;
    pub const DDIV: u8 = 0x1e;
    pub const DDIVU: u8 = 0x1f;
    pub const ADD: u8 = 0x20;
    pub const ADDU: u8 = 0x21;
    pub const SUB: u8 = 0x22;
    pub const SUBU: u8 = 0x23;
    pub const AND: u8 = 0x24;
    pub const OR: u8 = 0x25;
    pub const XOR: u8 = 0x26;
    pub const NOR: u8 = 0x27;
    pub const SLT: u8 = 0x2a;
    pub const SLTU: u8 = 0x2b;
}

/// Returned for encodings the VR4300 does not define.
pub const RESERVED: &str = "RESERVED";

const PRIMARY: [&str; 64] = [
    "SPECIAL", "REGIMM", "J", "JAL", "BEQ", "BNE", "BLEZ", "BGTZ", //
    "ADDI", "ADDIU", "SLTI", "SLTIU", "ANDI", "ORI", "XORI", "LUI", //
    "COP0", "COP1", "COP2", RESERVED, "BEQL", "BNEL", "BLEZL", "BGTZL", //
    "DADDI", "DADDIU", "LDL", "LDR", RESERVED, RESERVED, RESERVED, RESERVED, //
    "LB", "LH", "LWL", "LW", "LBU", "LHU", "LWR", "LWU", //
    "SB", "SH", "SWL", "SW", "SDL", "SDR", "SWR", "CACHE", //
    "LL", "LWC1", "LWC2", RESERVED, "LLD", "LDC1", "LDC2", "LD", //
    "SC", "SWC1", "SWC2", RESERVED, "SCD", "SDC1", "SDC2", "SD", //
];

const SPECIAL: [&str; 64] = [
    "SLL", RESERVED, "SRL", "SRA", "SLLV", RESERVED, "SRLV", "SRAV", //
    "JR", "JALR", RESERVED, RESERVED, "SYSCALL", "BREAK", RESERVED, "SYNC", //
    "MFHI", "MTHI", "MFLO", "MTLO", "DSLLV", RESERVED, "DSRLV", "DSRAV", //
    "MULT", "MULTU", "DIV", "DIVU", "DMULT", "DMULTU", "DDIV", "DDIVU", //
    "ADD", "ADDU", "SUB", "SUBU", "AND", "OR", "XOR", "NOR", //
    RESERVED, RESERVED, "SLT", "SLTU", "DADD", "DADDU", "DSUB", "DSUBU", //
    "TGE", "TGEU", "TLT", "TLTU", "TEQ", RESERVED, "TNE", RESERVED, //
    "DSLL", RESERVED, "DSRL", "DSRA", "DSLL32", RESERVED, "DSRL32", "DSRA32", //
];

const REGIMM: [&str; 32] = [
    "BLTZ", "BGEZ", "BLTZL", "BGEZL", RESERVED, RESERVED, RESERVED, RESERVED, //
    "TGEI", "TGEIU", "TLTI", "TLTIU", "TEQI", RESERVED, "TNEI", RESERVED, //
    "BLTZAL", "BGEZAL", "BLTZALL", "BGEZALL", RESERVED, RESERVED, RESERVED, RESERVED, //
    RESERVED, RESERVED, RESERVED, RESERVED, RESERVED, RESERVED, RESERVED, RESERVED, //
];

/// Returns the secondary dispatch key of `word`: funct for SPECIAL, rt for
/// REGIMM and 0 for every other primary opcode.
pub fn secondary(word: u32) -> u8 {
    match get_opcode(word) {
        OP_SPECIAL => get_funct(word),
        OP_REGIMM => decode_i(word).rt,
        _ => 0,
    }
}

/// Returns the mnemonic of any instruction word.
///
/// # Examples
///
/// ```
/// use vr4300_emulator::isa::opcodes::mnemonic;
///
/// assert_eq!(mnemonic(0x0002_18c0), "SLL");
/// assert_eq!(mnemonic(0x0800_0000), "J");
/// ```
pub fn mnemonic(word: u32) -> &'static str {
    match get_opcode(word) {
        OP_SPECIAL => SPECIAL[get_funct(word) as usize],
        OP_REGIMM => REGIMM[decode_i(word).rt as usize],
        op => PRIMARY[op as usize],
    }
}
