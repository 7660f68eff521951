//! Integer Execution Unit.
//!
//! One handler per implemented instruction. Handlers read their sources from
//! the register file but never write it: a handler returns the value to
//! commit at write-back, plus an optional side effect that the execute stage
//! applies at once. Side effects cover what a single latched result cannot
//! express: the PC write of a jump, and the HI/LO pair written by multiply
//! and divide. Those are the only register writes that happen outside the
//! write-back stage.
//!
//! 32-bit operations compute on the low word of their operands and store the
//! result sign-extended to 64 bits.

use crate::common::{CpuError, Result};
use crate::core::arch::RegisterFile;
use crate::core::pipeline::{Dest, ExecResult, FetchedWord, Op};
use crate::isa::decoder::{decode_i, decode_r, get_opcode};
use crate::isa::instruction::{InstI, InstR};
use crate::isa::opcodes::{self, funct, mnemonic, secondary};

/// Shift amount mask for 32-bit variable shifts.
const SHAMT_MASK_32: u64 = 0x1f;

/// Shift amount mask for doubleword variable shifts.
const SHAMT_MASK_64: u64 = 0x3f;

/// Byte distance from a jump to the instruction after its delay slot.
const LINK_OFFSET: u64 = 8;

/// Effect applied by the execute stage instead of at write-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Redirect the program counter; the delay slot is already in flight.
    Jump(u64),
    /// Write HI and LO together.
    HiLo { hi: u64, lo: u64 },
}

/// Outcome of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Operation that ran.
    pub op: Op,
    /// Value to carry to write-back, if any.
    pub result: Option<ExecResult>,
    /// Immediate effect, if any.
    pub effect: Option<SideEffect>,
}

impl Execution {
    fn commit(result: ExecResult) -> Self {
        Self {
            op: result.op,
            result: Some(result),
            effect: None,
        }
    }

    fn effect(op: Op, effect: SideEffect) -> Self {
        Self {
            op,
            result: None,
            effect: Some(effect),
        }
    }
}

#[inline]
fn sext32(v: u32) -> u64 {
    v as i32 as i64 as u64
}

/// Integer execution unit.
pub struct Alu;

impl Alu {
    /// Decodes and executes one fetched instruction word.
    ///
    /// # Errors
    ///
    /// * `UnimplementedOpcode` for any encoding without a handler.
    /// * `OverflowTrap` when `ADD`/`SUB` overflow.
    /// * `DivideByZero` for a zero divisor.
    pub fn execute(regs: &RegisterFile, fetched: FetchedWord) -> Result<Execution> {
        let FetchedWord { pc, word } = fetched;

        match get_opcode(word) {
            opcodes::OP_SPECIAL => {
                let r = decode_r(word);
                match r.funct {
                    funct::SLL => Ok(sll(regs, &r, pc)),
                    funct::SRL => Ok(srl(regs, &r, pc)),
                    funct::SRA => Ok(sra(regs, &r, pc)),
                    funct::SLLV => Ok(sllv(regs, &r, pc)),
                    funct::SRLV => Ok(srlv(regs, &r, pc)),
                    funct::SRAV => Ok(srav(regs, &r, pc)),
                    funct::JR => Ok(jr(regs, &r)),
                    funct::JALR => Ok(jalr(regs, &r, pc)),
                    funct::MFHI => Ok(mfhi(regs, &r, pc)),
                    funct::MTHI => Ok(mthi(regs, &r, pc)),
                    funct::MFLO => Ok(mflo(regs, &r, pc)),
                    funct::MTLO => Ok(mtlo(regs, &r, pc)),
                    funct::DSLLV => Ok(dsllv(regs, &r, pc)),
                    funct::DSRLV => Ok(dsrlv(regs, &r, pc)),
                    funct::DSRAV => Ok(dsrav(regs, &r, pc)),
                    funct::MULT => Ok(mult(regs, &r)),
                    funct::MULTU => Ok(multu(regs, &r)),
                    funct::DIV => div(regs, &r, pc),
                    funct::DIVU => divu(regs, &r, pc),
                    funct::DMULT => Ok(dmult(regs, &r)),
                    funct::DMULTU => Ok(dmultu(regs, &r)),
                    funct::DDIV => ddiv(regs, &r, pc),
                    funct::DDIVU => ddivu(regs, &r, pc),
                    funct::ADD => add(regs, &r, pc),
                    funct::ADDU => Ok(addu(regs, &r, pc)),
                    funct::SUB => sub(regs, &r, pc),
                    funct::SUBU => Ok(subu(regs, &r, pc)),
                    funct::AND => Ok(and(regs, &r, pc)),
                    funct::OR => Ok(or(regs, &r, pc)),
                    funct::XOR => Ok(xor(regs, &r, pc)),
                    funct::NOR => Ok(nor(regs, &r, pc)),
                    funct::SLT => Ok(slt(regs, &r, pc)),
                    funct::SLTU => Ok(sltu(regs, &r, pc)),
                    _ => unimplemented(word, pc),
                }
            }
            opcodes::OP_LB => Ok(load(Op::Lb, regs, &decode_i(word), pc)),
            opcodes::OP_LH => Ok(load(Op::Lh, regs, &decode_i(word), pc)),
            opcodes::OP_LW => Ok(load(Op::Lw, regs, &decode_i(word), pc)),
            _ => unimplemented(word, pc),
        }
    }
}

fn unimplemented(word: u32, pc: u64) -> Result<Execution> {
    Err(CpuError::UnimplementedOpcode {
        name: mnemonic(word),
        opcode: get_opcode(word),
        funct: secondary(word),
        word,
        pc,
    })
}

/// Hook for the integer overflow exception, which is not modelled yet.
fn trap_integer_overflow(op: Op, pc: u64) -> Result<Execution> {
    Err(CpuError::OverflowTrap {
        name: op.name(),
        pc,
    })
}

fn divide_by_zero(op: Op, pc: u64) -> Result<Execution> {
    Err(CpuError::DivideByZero {
        name: op.name(),
        pc,
    })
}

fn rs(regs: &RegisterFile, inst: &InstR) -> u64 {
    regs.read_gpr(inst.rs as usize)
}

fn rt(regs: &RegisterFile, inst: &InstR) -> u64 {
    regs.read_gpr(inst.rt as usize)
}

fn to_rd(op: Op, inst: &InstR, value: u64, pc: u64) -> Execution {
    Execution::commit(ExecResult::gpr(op, inst.rd, value, pc))
}

// SLL rd, rt, sa
fn sll(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let val = sext32((rt(regs, inst) as u32) << inst.sa);
    to_rd(Op::Sll, inst, val, pc)
}

// SRL rd, rt, sa
fn srl(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let val = sext32((rt(regs, inst) as u32) >> inst.sa);
    to_rd(Op::Srl, inst, val, pc)
}

// SRA rd, rt, sa
fn sra(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let val = ((rt(regs, inst) as i32) >> inst.sa) as i64 as u64;
    to_rd(Op::Sra, inst, val, pc)
}

// SLLV rd, rt, rs
fn sllv(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_32) as u32;
    let val = sext32((rt(regs, inst) as u32) << sh);
    to_rd(Op::Sllv, inst, val, pc)
}

// SRLV rd, rt, rs
fn srlv(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_32) as u32;
    let val = sext32((rt(regs, inst) as u32) >> sh);
    to_rd(Op::Srlv, inst, val, pc)
}

// SRAV rd, rt, rs
fn srav(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_32) as u32;
    let val = ((rt(regs, inst) as i32) >> sh) as i64 as u64;
    to_rd(Op::Srav, inst, val, pc)
}

// JR rs
fn jr(regs: &RegisterFile, inst: &InstR) -> Execution {
    Execution::effect(Op::Jr, SideEffect::Jump(rs(regs, inst)))
}

// JALR rd, rs
// The link address skips the delay slot.
fn jalr(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let link = pc.wrapping_add(LINK_OFFSET);
    Execution {
        op: Op::Jalr,
        result: Some(ExecResult::gpr(Op::Jalr, inst.rd, link, pc)),
        effect: Some(SideEffect::Jump(rs(regs, inst))),
    }
}

// MFHI rd
fn mfhi(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::Mfhi, inst, regs.hi, pc)
}

// MTHI rs
fn mthi(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    Execution::commit(ExecResult {
        op: Op::Mthi,
        dest: Dest::Hi,
        value: rs(regs, inst),
        pc,
    })
}

// MFLO rd
fn mflo(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::Mflo, inst, regs.lo, pc)
}

// MTLO rs
fn mtlo(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    Execution::commit(ExecResult {
        op: Op::Mtlo,
        dest: Dest::Lo,
        value: rs(regs, inst),
        pc,
    })
}

// DSLLV rd, rt, rs
fn dsllv(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_64) as u32;
    to_rd(Op::Dsllv, inst, rt(regs, inst) << sh, pc)
}

// DSRLV rd, rt, rs
fn dsrlv(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_64) as u32;
    to_rd(Op::Dsrlv, inst, rt(regs, inst) >> sh, pc)
}

// DSRAV rd, rt, rs
fn dsrav(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sh = (rs(regs, inst) & SHAMT_MASK_64) as u32;
    to_rd(Op::Dsrav, inst, ((rt(regs, inst) as i64) >> sh) as u64, pc)
}

// MULT rs, rt
fn mult(regs: &RegisterFile, inst: &InstR) -> Execution {
    let a = rs(regs, inst) as i32 as i64;
    let b = rt(regs, inst) as i32 as i64;
    let prod = a.wrapping_mul(b) as u64;
    Execution::effect(
        Op::Mult,
        SideEffect::HiLo {
            hi: sext32((prod >> 32) as u32),
            lo: sext32(prod as u32),
        },
    )
}

// MULTU rs, rt
fn multu(regs: &RegisterFile, inst: &InstR) -> Execution {
    let a = rs(regs, inst) as u32 as u64;
    let b = rt(regs, inst) as u32 as u64;
    let prod = a * b;
    Execution::effect(
        Op::Multu,
        SideEffect::HiLo {
            hi: sext32((prod >> 32) as u32),
            lo: sext32(prod as u32),
        },
    )
}

// DIV rs, rt
// Quotient goes to LO and remainder to HI, matching VR4300 hardware.
fn div(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let n = rs(regs, inst) as i32;
    let d = rt(regs, inst) as i32;
    if d == 0 {
        return divide_by_zero(Op::Div, pc);
    }
    Ok(Execution::effect(
        Op::Div,
        SideEffect::HiLo {
            hi: n.wrapping_rem(d) as i64 as u64,
            lo: n.wrapping_div(d) as i64 as u64,
        },
    ))
}

// DIVU rs, rt
fn divu(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let n = rs(regs, inst) as u32;
    let d = rt(regs, inst) as u32;
    if d == 0 {
        return divide_by_zero(Op::Divu, pc);
    }
    Ok(Execution::effect(
        Op::Divu,
        SideEffect::HiLo {
            hi: sext32(n % d),
            lo: sext32(n / d),
        },
    ))
}

// DMULT rs, rt
// Full 128-bit signed product.
fn dmult(regs: &RegisterFile, inst: &InstR) -> Execution {
    let a = rs(regs, inst) as i64 as i128;
    let b = rt(regs, inst) as i64 as i128;
    let prod = a.wrapping_mul(b);
    Execution::effect(
        Op::Dmult,
        SideEffect::HiLo {
            hi: (prod >> 64) as u64,
            lo: prod as u64,
        },
    )
}

// DMULTU rs, rt
fn dmultu(regs: &RegisterFile, inst: &InstR) -> Execution {
    let a = rs(regs, inst) as u128;
    let b = rt(regs, inst) as u128;
    let prod = a * b;
    Execution::effect(
        Op::Dmultu,
        SideEffect::HiLo {
            hi: (prod >> 64) as u64,
            lo: prod as u64,
        },
    )
}

// DDIV rs, rt
fn ddiv(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let n = rs(regs, inst) as i64;
    let d = rt(regs, inst) as i64;
    if d == 0 {
        return divide_by_zero(Op::Ddiv, pc);
    }
    Ok(Execution::effect(
        Op::Ddiv,
        SideEffect::HiLo {
            hi: n.wrapping_rem(d) as u64,
            lo: n.wrapping_div(d) as u64,
        },
    ))
}

// DDIVU rs, rt
fn ddivu(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let n = rs(regs, inst);
    let d = rt(regs, inst);
    if d == 0 {
        return divide_by_zero(Op::Ddivu, pc);
    }
    Ok(Execution::effect(
        Op::Ddivu,
        SideEffect::HiLo { hi: n % d, lo: n / d },
    ))
}

// ADD rd, rs, rt
fn add(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let a = rs(regs, inst) as i32;
    let b = rt(regs, inst) as i32;
    match a.checked_add(b) {
        Some(sum) => Ok(to_rd(Op::Add, inst, sum as i64 as u64, pc)),
        None => trap_integer_overflow(Op::Add, pc),
    }
}

// ADDU rd, rs, rt
fn addu(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let sum = (rs(regs, inst) as u32).wrapping_add(rt(regs, inst) as u32);
    to_rd(Op::Addu, inst, sext32(sum), pc)
}

// SUB rd, rs, rt
fn sub(regs: &RegisterFile, inst: &InstR, pc: u64) -> Result<Execution> {
    let a = rs(regs, inst) as i32;
    let b = rt(regs, inst) as i32;
    match a.checked_sub(b) {
        Some(diff) => Ok(to_rd(Op::Sub, inst, diff as i64 as u64, pc)),
        None => trap_integer_overflow(Op::Sub, pc),
    }
}

// SUBU rd, rs, rt
fn subu(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let diff = (rs(regs, inst) as u32).wrapping_sub(rt(regs, inst) as u32);
    to_rd(Op::Subu, inst, sext32(diff), pc)
}

fn and(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::And, inst, rs(regs, inst) & rt(regs, inst), pc)
}

fn or(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::Or, inst, rs(regs, inst) | rt(regs, inst), pc)
}

fn xor(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::Xor, inst, rs(regs, inst) ^ rt(regs, inst), pc)
}

fn nor(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    to_rd(Op::Nor, inst, !(rs(regs, inst) | rt(regs, inst)), pc)
}

// SLT rd, rs, rt
fn slt(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let set = (rs(regs, inst) as i64) < (rt(regs, inst) as i64);
    to_rd(Op::Slt, inst, set as u64, pc)
}

// SLTU rd, rs, rt
fn sltu(regs: &RegisterFile, inst: &InstR, pc: u64) -> Execution {
    let set = rs(regs, inst) < rt(regs, inst);
    to_rd(Op::Sltu, inst, set as u64, pc)
}

// LB/LH/LW rt, offset(base)
// Only the effective address is computed here; DC performs the access.
fn load(op: Op, regs: &RegisterFile, inst: &InstI, pc: u64) -> Execution {
    let base = regs.read_gpr(inst.rs as usize);
    let addr = base.wrapping_add(inst.imm_sext());
    Execution::commit(ExecResult::gpr(op, inst.rt, addr, pc))
}
