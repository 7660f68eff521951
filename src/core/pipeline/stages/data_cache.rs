use tracing::trace;

use crate::common::Endianness;
use crate::core::pipeline::{ExecResult, Pipeline};
use crate::core::units::lsu::Lsu;
use crate::soc::Bus;

/// DC: turns a load's effective address into the loaded value; every other
/// result passes through unchanged.
pub fn dc_stage<B: Bus + ?Sized>(pipe: &mut Pipeline, endian: Endianness, bus: &mut B) {
    let Some(ex) = pipe.ex_latch.take() else {
        return;
    };

    let out = if ex.op.is_load() {
        let data = Lsu::load(bus, endian, ex.op, ex.value);
        if pipe.trace {
            trace!(
                "DC  pc={:#x} {} addr={:#x} data={:#x}",
                ex.pc,
                ex.op.name(),
                ex.value,
                data
            );
        }
        ExecResult { value: data, ..ex }
    } else {
        if pipe.trace {
            trace!("DC  pc={:#x}", ex.pc);
        }
        ex
    };

    pipe.dc_latch = Some(out);
}
