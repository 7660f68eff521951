//! Execution tags carried through the back half of the pipeline.
//!
//! An execution result records which operation produced it, because the
//! data-cache stage treats loads differently from arithmetic, and where the
//! write-back stage must commit it.

/// Operations implemented by the execution unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Shift left logical (32-bit).
    Sll,
    /// Shift right logical (32-bit).
    Srl,
    /// Shift right arithmetic (32-bit).
    Sra,
    /// Shift left logical variable (32-bit).
    Sllv,
    /// Shift right logical variable (32-bit).
    Srlv,
    /// Shift right arithmetic variable (32-bit).
    Srav,
    /// Jump register.
    Jr,
    /// Jump and link register.
    Jalr,
    /// Move from HI.
    Mfhi,
    /// Move to HI.
    Mthi,
    /// Move from LO.
    Mflo,
    /// Move to LO.
    Mtlo,
    /// Doubleword shift left logical variable.
    Dsllv,
    /// Doubleword shift right logical variable.
    Dsrlv,
    /// Doubleword shift right arithmetic variable.
    Dsrav,
    /// Multiply word (signed).
    Mult,
    /// Multiply word (unsigned).
    Multu,
    /// Divide word (signed).
    Div,
    /// Divide word (unsigned).
    Divu,
    /// Doubleword multiply (signed).
    Dmult,
    /// Doubleword multiply (unsigned).
    Dmultu,
    /// Doubleword divide (signed).
    Ddiv,
    /// Doubleword divide (unsigned).
    Ddivu,
    /// Add word, trapping on overflow.
    Add,
    /// Add word without overflow trap.
    Addu,
    /// Subtract word, trapping on overflow.
    Sub,
    /// Subtract word without overflow trap.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than (signed).
    Slt,
    /// Set on less than (unsigned).
    Sltu,
    /// Load byte (sign-extended).
    Lb,
    /// Load half-word (sign-extended).
    Lh,
    /// Load word (sign-extended).
    Lw,
}

/// Coarse instruction classes used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    Alu,
    Shift,
    Load,
    Jump,
    MulDiv,
    HiLo,
}

impl Op {
    /// Assembler mnemonic.
    pub fn name(self) -> &'static str {
        match self {
            Op::Sll => "SLL",
            Op::Srl => "SRL",
            Op::Sra => "SRA",
            Op::Sllv => "SLLV",
            Op::Srlv => "SRLV",
            Op::Srav => "SRAV",
            Op::Jr => "JR",
            Op::Jalr => "JALR",
            Op::Mfhi => "MFHI",
            Op::Mthi => "MTHI",
            Op::Mflo => "MFLO",
            Op::Mtlo => "MTLO",
            Op::Dsllv => "DSLLV",
            Op::Dsrlv => "DSRLV",
            Op::Dsrav => "DSRAV",
            Op::Mult => "MULT",
            Op::Multu => "MULTU",
            Op::Div => "DIV",
            Op::Divu => "DIVU",
            Op::Dmult => "DMULT",
            Op::Dmultu => "DMULTU",
            Op::Ddiv => "DDIV",
            Op::Ddivu => "DDIVU",
            Op::Add => "ADD",
            Op::Addu => "ADDU",
            Op::Sub => "SUB",
            Op::Subu => "SUBU",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Xor => "XOR",
            Op::Nor => "NOR",
            Op::Slt => "SLT",
            Op::Sltu => "SLTU",
            Op::Lb => "LB",
            Op::Lh => "LH",
            Op::Lw => "LW",
        }
    }

    /// Whether the data-cache stage must read memory for this operation.
    pub fn is_load(self) -> bool {
        matches!(self, Op::Lb | Op::Lh | Op::Lw)
    }

    /// Statistics class of the operation.
    pub fn class(self) -> OpClass {
        match self {
            Op::Sll
            | Op::Srl
            | Op::Sra
            | Op::Sllv
            | Op::Srlv
            | Op::Srav
            | Op::Dsllv
            | Op::Dsrlv
            | Op::Dsrav => OpClass::Shift,
            Op::Jr | Op::Jalr => OpClass::Jump,
            Op::Mfhi | Op::Mthi | Op::Mflo | Op::Mtlo => OpClass::HiLo,
            Op::Mult
            | Op::Multu
            | Op::Div
            | Op::Divu
            | Op::Dmult
            | Op::Dmultu
            | Op::Ddiv
            | Op::Ddivu => OpClass::MulDiv,
            Op::Lb | Op::Lh | Op::Lw => OpClass::Load,
            _ => OpClass::Alu,
        }
    }
}

/// Where the write-back stage commits a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dest {
    /// General-purpose register by index.
    Gpr(usize),
    /// The HI register.
    Hi,
    /// The LO register.
    Lo,
    /// Nothing to commit.
    None,
}
