//! CPU Error Taxonomy.
//!
//! Every condition that halts the core is represented here. None of them is
//! recoverable: the simulation is deterministic, so the embedding code is
//! expected to stop and report the diagnostic.

use thiserror::Error;

/// Fatal conditions raised while stepping the CPU.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpuError {
    /// The execute stage met an instruction that has no handler yet.
    #[error(
        "unimplemented opcode {name} (opcode={opcode:#04x}, funct={funct:#04x}, inst={word:#010x}) at pc={pc:#x}"
    )]
    UnimplementedOpcode {
        /// Mnemonic of the instruction, or `"RESERVED"` for unassigned encodings.
        name: &'static str,
        /// Primary opcode field, bits 31:26.
        opcode: u8,
        /// Secondary dispatch field: funct for SPECIAL, rt for REGIMM, 0 otherwise.
        funct: u8,
        /// Raw instruction word.
        word: u32,
        /// Address the instruction was fetched from.
        pc: u64,
    },

    /// A trapping arithmetic instruction overflowed; the exception is not modelled.
    #[error("integer overflow trap in {name} at pc={pc:#x}: not implemented")]
    OverflowTrap {
        /// Mnemonic of the overflowing instruction.
        name: &'static str,
        /// Address of the overflowing instruction.
        pc: u64,
    },

    /// Integer division with a zero divisor.
    #[error("integer divide by zero in {name} at pc={pc:#x}")]
    DivideByZero {
        /// Mnemonic of the divide instruction.
        name: &'static str,
        /// Address of the divide instruction.
        pc: u64,
    },
}

/// Result type for operations that can halt the CPU.
pub type Result<T, E = CpuError> = std::result::Result<T, E>;
