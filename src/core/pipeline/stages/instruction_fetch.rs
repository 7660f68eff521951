use tracing::trace;

use crate::core::pipeline::Pipeline;

/// Size of one instruction word in bytes.
pub const INST_BYTES: u64 = 4;

/// IC: latches the program counter for RF and advances it.
pub fn ic_stage(pipe: &mut Pipeline, pc: &mut u64) {
    if pipe.trace {
        trace!("IC  pc={:#x}", *pc);
    }
    pipe.ic_latch = Some(*pc);
    *pc = pc.wrapping_add(INST_BYTES);
}
