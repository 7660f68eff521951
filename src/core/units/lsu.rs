//! Load/Store Unit (LSU) Helpers.
//!
//! Performs the sized bus read for a load and sign-extends the loaded value
//! to 64 bits, as the data-cache stage requires.

use crate::common::Endianness;
use crate::core::pipeline::Op;
use crate::soc::Bus;

/// Load/Store Unit.
pub struct Lsu;

impl Lsu {
    /// Reads the operand of load `op` at `addr` and sign-extends it.
    ///
    /// The effective address is truncated to the 32-bit physical bus.
    /// The data-cache stage only calls this for `Op::is_load` operations;
    /// any other `op` reads nothing and yields `addr` unchanged.
    pub fn load<B: Bus + ?Sized>(bus: &mut B, endian: Endianness, op: Op, addr: u64) -> u64 {
        let paddr = addr as u32;
        match op {
            Op::Lb => bus.read_byte(endian, paddr) as i8 as i64 as u64,
            Op::Lh => bus.read_half_word(endian, paddr) as i16 as i64 as u64,
            Op::Lw => bus.read_word(endian, paddr) as i32 as i64 as u64,
            _ => addr,
        }
    }
}
