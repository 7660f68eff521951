//! Unit tests for the architectural register files.

use vr4300_emulator::core::arch::cp0::{self, Cp0};
use vr4300_emulator::core::arch::fpr::Fpr;
use vr4300_emulator::core::arch::gpr::Gpr;
use vr4300_emulator::core::arch::RegisterFile;

/// Tests that r0 reads as zero even after a write.
#[test]
fn test_gpr_zero_hardwired() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

/// Tests ordinary GPR reads and writes.
#[test]
fn test_gpr_read_write() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x1234);
    gpr.write(31, u64::MAX);
    assert_eq!(gpr.read(1), 0x1234);
    assert_eq!(gpr.read(31), u64::MAX);
    assert_eq!(gpr.read(2), 0);
}

/// Tests that a GPR write past r31 is rejected rather than aliasing r1.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "register index 33 out of range")]
fn test_gpr_index_out_of_range_write() {
    let mut gpr = Gpr::new();
    gpr.write(33, 7);
}

/// Tests that a GPR read past r31 is rejected.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "register index 32 out of range")]
fn test_gpr_index_out_of_range_read() {
    let gpr = Gpr::new();
    gpr.read(32);
}

/// Tests that FPR and CP0 indices are range-checked as well.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_fpr_index_out_of_range() {
    let mut fpr = Fpr::new();
    fpr.write(40, 1.0);
}

/// Tests the CP0 range check.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_cp0_index_out_of_range() {
    let c = Cp0::new();
    c.read(32);
}

/// Tests the array snapshot of the GPR file.
#[test]
fn test_gpr_to_array() {
    let mut gpr = Gpr::new();
    gpr.write(5, 55);
    let arr = gpr.to_array();
    assert_eq!(arr[0], 0);
    assert_eq!(arr[5], 55);
}

/// Tests FPR storage, including raw bit access.
#[test]
fn test_fpr_read_write() {
    let mut fpr = Fpr::new();
    fpr.write(0, 1.5);
    assert_eq!(fpr.read(0), 1.5);

    fpr.write_bits(3, 0x4000_0000_0000_0000);
    assert_eq!(fpr.read(3), 2.0);
    assert_eq!(fpr.read_bits(0), 1.5f64.to_bits());
}

/// Tests CP0 storage through the named register indices.
#[test]
fn test_cp0_read_write() {
    let mut c = Cp0::new();
    c.write(cp0::STATUS, 0x3400_0000);
    c.write(cp0::EPC, 0x8000_0180);
    assert_eq!(c.read(cp0::STATUS), 0x3400_0000);
    assert_eq!(c.read(cp0::EPC), 0x8000_0180);
    assert_eq!(c.read(cp0::CAUSE), 0);
}

/// Tests that a new register file is fully cleared.
#[test]
fn test_register_file_reset_state() {
    let regs = RegisterFile::new();
    assert_eq!(regs.pc, 0);
    assert_eq!(regs.hi, 0);
    assert_eq!(regs.lo, 0);
    assert!(!regs.ll_bit);
    assert_eq!(regs.fcr0, 0);
    assert_eq!(regs.fcr31, 0);
    assert!(regs.gpr_array().iter().all(|&r| r == 0));
}

/// Tests the register file accessors.
#[test]
fn test_register_file_accessors() {
    let mut regs = RegisterFile::new();
    regs.write_gpr(0, 99);
    regs.write_gpr(4, 0x10);
    regs.write_fpr(2, -0.5);
    regs.write_cp0(cp0::COUNT, 42);

    assert_eq!(regs.read_gpr(0), 0);
    assert_eq!(regs.read_gpr(4), 0x10);
    assert_eq!(regs.read_fpr(2), -0.5);
    assert_eq!(regs.read_cp0(cp0::COUNT), 42);
}
