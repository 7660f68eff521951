//! Decoded instruction formats.
//!
//! ```text
//! R-type | opcode | rs | rt | rd | sa | funct |
//!        |   6    |  5 |  5 |  5 |  5 |   6   |
//! I-type | opcode | rs | rt |     immediate    |
//!        |   6    |  5 |  5 |        16        |
//! J-type | opcode |          address           |
//!        |   6    |             26             |
//! ```

/// Register-type instruction fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstR {
    /// Bits 31:26.
    pub opcode: u8,
    /// Bits 25:21.
    pub rs: u8,
    /// Bits 20:16.
    pub rt: u8,
    /// Bits 15:11.
    pub rd: u8,
    /// Bits 10:6.
    pub sa: u8,
    /// Bits 5:0.
    pub funct: u8,
}

/// Immediate-type instruction fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstI {
    /// Bits 31:26.
    pub opcode: u8,
    /// Bits 25:21.
    pub rs: u8,
    /// Bits 20:16.
    pub rt: u8,
    /// Bits 15:0.
    pub immediate: u16,
}

impl InstI {
    /// Immediate sign-extended to 64 bits.
    pub fn imm_sext(&self) -> u64 {
        self.immediate as i16 as i64 as u64
    }
}

/// Jump-type instruction fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstJ {
    /// Bits 31:26.
    pub opcode: u8,
    /// Bits 25:0.
    pub address: u32,
}
