//! Pipeline latch contents.
//!
//! Each latch between two stages is an `Option`: `None` until the producing
//! stage fills it, then taken by the consuming stage on the following cycle.
//!
//! | Latch | Producer | Consumer | Payload |
//! |---|---|---|---|
//! | `ic_latch` | IC | RF | fetch address |
//! | `rf_latch` | RF | EX | [`FetchedWord`] |
//! | `ex_latch` | EX | DC | [`ExecResult`] |
//! | `dc_latch` | DC | WB | [`ExecResult`] |

use super::signals::{Dest, Op};

/// An instruction word together with the address it was fetched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchedWord {
    /// Fetch address.
    pub pc: u64,
    /// Raw instruction word.
    pub word: u32,
}

/// Result of one executed instruction, on its way to write-back.
///
/// For loads, `value` holds the effective address until the data-cache stage
/// replaces it with the loaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecResult {
    /// Operation that produced the result.
    pub op: Op,
    /// Commit target.
    pub dest: Dest,
    /// 64-bit payload.
    pub value: u64,
    /// Address of the producing instruction.
    pub pc: u64,
}

impl ExecResult {
    /// Result destined for general-purpose register `idx`.
    pub fn gpr(op: Op, idx: u8, value: u64, pc: u64) -> Self {
        Self {
            op,
            dest: Dest::Gpr(idx as usize),
            value,
            pc,
        }
    }
}
