use tracing::trace;

use crate::core::arch::RegisterFile;
use crate::core::pipeline::{Dest, Pipeline};

/// WB: commits the data-cache latch, if any, and clears it.
pub fn wb_stage(pipe: &mut Pipeline, regs: &mut RegisterFile) {
    let Some(wb) = pipe.dc_latch.take() else {
        return;
    };

    if pipe.trace {
        trace!(
            "WB  pc={:#x} {} {:?} <= {:#x}",
            wb.pc,
            wb.op.name(),
            wb.dest,
            wb.value
        );
    }

    match wb.dest {
        Dest::Gpr(idx) => regs.write_gpr(idx, wb.value),
        Dest::Hi => regs.hi = wb.value,
        Dest::Lo => regs.lo = wb.value,
        Dest::None => return,
    }
    pipe.stats.writebacks += 1;
}
