//! MIPS-III instruction set definitions for the VR4300.
//!
//! Instruction words come in three encodings (R, I and J type) selected by
//! the primary opcode. This module extracts their fields, names every
//! encoding and renders implemented instructions as text for tracing.

/// Textual rendering of instruction words.
pub mod disasm;

/// Bit-field extraction for the R, I and J encodings.
pub mod decoder;

/// Decoded instruction field records.
pub mod instruction;

/// Primary opcode, SPECIAL funct and REGIMM rt constants.
pub mod opcodes;
