//! Shared helpers for the integration tests.

#![allow(dead_code)]

use vr4300_emulator::core::Cpu;
use vr4300_emulator::sim::loader::{load_into, words_to_image};
use vr4300_emulator::soc::Memory;

/// RAM size used by the test machines.
pub const TEST_RAM_SIZE: usize = 0x1000;

/// Builds a CPU over a small RAM holding `words` at address 0.
pub fn cpu_with_program(words: &[u32]) -> Cpu<Memory> {
    let mut ram = Memory::new(TEST_RAM_SIZE);
    load_into(&mut ram, &words_to_image(words), 0);
    Cpu::new(ram)
}

/// Steps `cpu` `n` times, panicking on any fatal error.
pub fn step_n(cpu: &mut Cpu<Memory>, n: usize) {
    for i in 0..n {
        if let Err(e) = cpu.step() {
            panic!("step {} failed: {}", i + 1, e);
        }
    }
}
