use tracing::trace;

use crate::common::Result;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::{OpClass, Pipeline};
use crate::core::units::alu::{Alu, Execution, SideEffect};
use crate::isa::disasm::disassemble;

/// EX: executes the fetched word and latches its result.
///
/// Register sources are read here, with no forwarding from the DC/WB
/// latches. Jumps and HI/LO pair writes take effect immediately in this
/// stage; everything else waits for write-back.
pub fn ex_stage(pipe: &mut Pipeline, regs: &mut RegisterFile) -> Result<()> {
    let Some(fetched) = pipe.rf_latch.take() else {
        return Ok(());
    };

    if pipe.trace {
        trace!("EX  pc={:#x} {}", fetched.pc, disassemble(fetched.word));
    }

    let Execution { op, result, effect } = Alu::execute(regs, fetched)?;

    match effect {
        Some(SideEffect::Jump(target)) => regs.pc = target,
        Some(SideEffect::HiLo { hi, lo }) => {
            regs.hi = hi;
            regs.lo = lo;
        }
        None => {}
    }

    let stats = &mut pipe.stats;
    stats.instructions_executed += 1;
    match op.class() {
        OpClass::Alu => stats.inst_alu += 1,
        OpClass::Shift => stats.inst_shift += 1,
        OpClass::Load => stats.inst_load += 1,
        OpClass::Jump => stats.inst_jump += 1,
        OpClass::MulDiv => stats.inst_muldiv += 1,
        OpClass::HiLo => stats.inst_hilo += 1,
    }

    pipe.ex_latch = result;
    Ok(())
}
