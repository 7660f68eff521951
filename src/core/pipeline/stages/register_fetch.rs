use tracing::trace;

use crate::common::Endianness;
use crate::core::pipeline::{FetchedWord, Pipeline};
use crate::soc::Bus;

/// RF: reads the instruction word at the address latched by IC.
///
/// Only the word is fetched here; source registers are read by EX. No
/// read-after-write hazard detection is done, so an instruction can observe
/// a register before an older instruction's write-back.
pub fn rf_stage<B: Bus + ?Sized>(pipe: &mut Pipeline, endian: Endianness, bus: &mut B) {
    let Some(pc) = pipe.ic_latch.take() else {
        return;
    };

    let word = bus.read_word(endian, pc as u32);
    if pipe.trace {
        trace!("RF  pc={:#x} inst={:#010x}", pc, word);
    }
    pipe.rf_latch = Some(FetchedWord { pc, word });
}
