//! Bus Contract.
//!
//! The CPU core never owns memory or devices. It reaches them through this
//! trait, which models the VR4300 SysAD interface: sized reads and writes at
//! a 32-bit physical address, each tagged with the byte order the core is
//! running in. Bus-level failures (unmapped addresses, device errors) are the
//! implementor's concern; every access completes before the call returns.

use crate::common::Endianness;

/// Memory-access capability consumed by the pipeline.
pub trait Bus {
    /// Writes a byte.
    fn write_byte(&mut self, endian: Endianness, addr: u32, val: u8);

    /// Writes a half-word (16-bit).
    fn write_half_word(&mut self, endian: Endianness, addr: u32, val: u16);

    /// Writes a word (32-bit).
    fn write_word(&mut self, endian: Endianness, addr: u32, val: u32);

    /// Writes a double-word (64-bit).
    fn write_double_word(&mut self, endian: Endianness, addr: u32, val: u64);

    /// Reads a byte.
    fn read_byte(&mut self, endian: Endianness, addr: u32) -> u8;

    /// Reads a half-word (16-bit).
    fn read_half_word(&mut self, endian: Endianness, addr: u32) -> u16;

    /// Reads a word (32-bit).
    fn read_word(&mut self, endian: Endianness, addr: u32) -> u32;

    /// Reads a double-word (64-bit).
    fn read_double_word(&mut self, endian: Endianness, addr: u32) -> u64;

    /// Writes a slice of bytes starting at `addr`.
    ///
    /// Default implementation iterates and writes bytes individually.
    fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write_byte(Endianness::Big, addr.wrapping_add(i as u32), *byte);
        }
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn write_byte(&mut self, endian: Endianness, addr: u32, val: u8) {
        (**self).write_byte(endian, addr, val)
    }

    fn write_half_word(&mut self, endian: Endianness, addr: u32, val: u16) {
        (**self).write_half_word(endian, addr, val)
    }

    fn write_word(&mut self, endian: Endianness, addr: u32, val: u32) {
        (**self).write_word(endian, addr, val)
    }

    fn write_double_word(&mut self, endian: Endianness, addr: u32, val: u64) {
        (**self).write_double_word(endian, addr, val)
    }

    fn read_byte(&mut self, endian: Endianness, addr: u32) -> u8 {
        (**self).read_byte(endian, addr)
    }

    fn read_half_word(&mut self, endian: Endianness, addr: u32) -> u16 {
        (**self).read_half_word(endian, addr)
    }

    fn read_word(&mut self, endian: Endianness, addr: u32) -> u32 {
        (**self).read_word(endian, addr)
    }

    fn read_double_word(&mut self, endian: Endianness, addr: u32) -> u64 {
        (**self).read_double_word(endian, addr)
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        (**self).write_bytes(addr, data)
    }
}
