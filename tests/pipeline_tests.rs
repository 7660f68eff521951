//! Cycle-level tests of the five-stage pipeline.

mod common;

use common::{cpu_with_program, step_n};
use vr4300_emulator::core::arch::RegisterFile;
use vr4300_emulator::core::pipeline::stages::wb_stage;
use vr4300_emulator::core::pipeline::{Dest, ExecResult, FetchedWord, Op, Pipeline};

/// SLL r3, r2, 3
const SLL_R3_R2_3: u32 = 0x0002_18C0;

/// Tests that latches fill one stage per cycle.
#[test]
fn test_pipeline_latch_progression() {
    let mut cpu = cpu_with_program(&[SLL_R3_R2_3]);
    cpu.regs.write_gpr(2, 0x2);

    step_n(&mut cpu, 1);
    assert_eq!(cpu.pipeline.ic_latch, Some(0));
    assert!(cpu.pipeline.rf_latch.is_none());
    assert_eq!(cpu.regs.pc, 4);

    step_n(&mut cpu, 1);
    assert_eq!(
        cpu.pipeline.rf_latch,
        Some(FetchedWord { pc: 0, word: SLL_R3_R2_3 })
    );
    assert_eq!(cpu.pipeline.ic_latch, Some(4));

    step_n(&mut cpu, 1);
    let ex = cpu.pipeline.ex_latch.expect("EX latch filled");
    assert_eq!(ex.op, Op::Sll);
    assert_eq!(ex.dest, Dest::Gpr(3));
    assert_eq!(ex.value, 0x10);
    assert_eq!(cpu.regs.read_gpr(3), 0);

    step_n(&mut cpu, 1);
    assert!(cpu.pipeline.dc_latch.is_some());
    assert_eq!(cpu.regs.read_gpr(3), 0);

    step_n(&mut cpu, 1);
    assert_eq!(cpu.regs.read_gpr(3), 0x10);
}

/// Tests that write-back commits once and clears the data-cache latch.
#[test]
fn test_pipeline_wb_clears_latch() {
    let mut pipe = Pipeline::new();
    let mut regs = RegisterFile::new();
    pipe.dc_latch = Some(ExecResult::gpr(Op::Or, 5, 0x99, 0));

    wb_stage(&mut pipe, &mut regs);
    assert_eq!(regs.read_gpr(5), 0x99);
    assert!(pipe.dc_latch.is_none());
    assert_eq!(pipe.stats.writebacks, 1);

    regs.write_gpr(5, 1);
    wb_stage(&mut pipe, &mut regs);
    assert_eq!(regs.read_gpr(5), 1);
    assert_eq!(pipe.stats.writebacks, 1);
}

/// Tests that an instruction does not see an older result before its write-back.
#[test]
fn test_pipeline_no_forwarding() {
    // SLL r3, r2, 3 ; OR r4, r3, r0
    let mut cpu = cpu_with_program(&[SLL_R3_R2_3, 0x0060_2025]);
    cpu.regs.write_gpr(2, 0x2);
    step_n(&mut cpu, 6);
    assert_eq!(cpu.regs.read_gpr(3), 0x10);
    assert_eq!(cpu.regs.read_gpr(4), 0);
}

/// Tests that a pipeline built from scratch is empty.
#[test]
fn test_pipeline_new_is_empty() {
    let pipe = Pipeline::new();
    assert!(pipe.is_empty());
    assert_eq!(pipe.stats.cycles, 0);
}

/// Tests flushing every latch.
#[test]
fn test_pipeline_flush() {
    let mut cpu = cpu_with_program(&[SLL_R3_R2_3]);
    step_n(&mut cpu, 4);
    assert!(!cpu.pipeline.is_empty());
    cpu.pipeline.flush();
    assert!(cpu.pipeline.is_empty());
}

/// Tests that a fatal error surfaces from the cycle that executes the word.
#[test]
fn test_pipeline_error_cycle() {
    // ADDIU r1, r0, 5
    let mut cpu = cpu_with_program(&[0x2401_0005]);
    assert!(cpu.step().is_ok());
    assert!(cpu.step().is_ok());
    assert!(cpu.step().is_err());
    assert_eq!(cpu.stats().cycles, 3);
}

/// Tests the per-class statistics counters.
#[test]
fn test_pipeline_stats() {
    // SLL r3, r2, 3 ; OR r3, r1, r2 ; MTHI r1
    let mut cpu = cpu_with_program(&[SLL_R3_R2_3, 0x0022_1825, 0x0020_0011]);
    step_n(&mut cpu, 7);

    let stats = cpu.stats();
    assert_eq!(stats.cycles, 7);
    // Five words reach EX: the three above plus two NOPs.
    assert_eq!(stats.instructions_executed, 5);
    assert_eq!(stats.inst_shift, 3);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_hilo, 1);
    // SLL, OR, MTHI
    assert_eq!(stats.writebacks, 3);
}
