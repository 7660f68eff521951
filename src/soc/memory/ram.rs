//! Flat RAM.
//!
//! A contiguous byte array mapped at physical address 0, sized like RDRAM.
//! Accesses honour the requested byte order. Accesses that fall outside the
//! array behave like an open bus: reads return zero and writes are dropped,
//! with a warning logged for each.

use tracing::warn;

use crate::common::{AccessWidth, Endianness};
use crate::soc::traits::Bus;

/// Default RAM size: 4 MiB base RDRAM plus the 4 MiB expansion pak.
pub const DEFAULT_RAM_SIZE: usize = 0x80_0000;

/// Byte-addressed RAM starting at address 0.
#[derive(Clone, Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(DEFAULT_RAM_SIZE)
    }
}

impl Memory {
    /// Creates a zero-filled RAM of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Size of the RAM in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Raw view of the RAM contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copies `data` into RAM at `addr`, truncating whatever does not fit.
    ///
    /// # Returns
    ///
    /// The number of bytes actually written.
    pub fn load(&mut self, addr: u32, data: &[u8]) -> usize {
        let start = addr as usize;
        if start >= self.data.len() {
            warn!("load outside RAM dropped: addr={:#010x}", addr);
            return 0;
        }
        let len = data.len().min(self.data.len() - start);
        if len < data.len() {
            warn!(
                "load truncated at end of RAM: addr={:#010x} dropped={}",
                addr,
                data.len() - len
            );
        }
        self.data[start..start + len].copy_from_slice(&data[..len]);
        len
    }

    fn range(&self, addr: u32, width: AccessWidth) -> Option<std::ops::Range<usize>> {
        let start = addr as usize;
        let end = start.checked_add(width.bytes())?;
        (end <= self.data.len()).then_some(start..end)
    }

    fn read_bytes<const N: usize>(&self, addr: u32, width: AccessWidth) -> [u8; N] {
        let mut out = [0u8; N];
        match self.range(addr, width) {
            Some(r) => out.copy_from_slice(&self.data[r]),
            None => warn!(
                "read outside RAM returns open bus: addr={:#010x} width={:?}",
                addr, width
            ),
        }
        out
    }

    fn store_bytes(&mut self, addr: u32, width: AccessWidth, bytes: &[u8]) {
        match self.range(addr, width) {
            Some(r) => self.data[r].copy_from_slice(bytes),
            None => warn!(
                "write outside RAM dropped: addr={:#010x} width={:?}",
                addr, width
            ),
        }
    }
}

impl Bus for Memory {
    fn write_byte(&mut self, _endian: Endianness, addr: u32, val: u8) {
        self.store_bytes(addr, AccessWidth::Byte, &[val]);
    }

    fn write_half_word(&mut self, endian: Endianness, addr: u32, val: u16) {
        let bytes = match endian {
            Endianness::Big => val.to_be_bytes(),
            Endianness::Little => val.to_le_bytes(),
        };
        self.store_bytes(addr, AccessWidth::Half, &bytes);
    }

    fn write_word(&mut self, endian: Endianness, addr: u32, val: u32) {
        let bytes = match endian {
            Endianness::Big => val.to_be_bytes(),
            Endianness::Little => val.to_le_bytes(),
        };
        self.store_bytes(addr, AccessWidth::Word, &bytes);
    }

    fn write_double_word(&mut self, endian: Endianness, addr: u32, val: u64) {
        let bytes = match endian {
            Endianness::Big => val.to_be_bytes(),
            Endianness::Little => val.to_le_bytes(),
        };
        self.store_bytes(addr, AccessWidth::Double, &bytes);
    }

    fn read_byte(&mut self, _endian: Endianness, addr: u32) -> u8 {
        self.read_bytes::<1>(addr, AccessWidth::Byte)[0]
    }

    fn read_half_word(&mut self, endian: Endianness, addr: u32) -> u16 {
        let bytes = self.read_bytes::<2>(addr, AccessWidth::Half);
        match endian {
            Endianness::Big => u16::from_be_bytes(bytes),
            Endianness::Little => u16::from_le_bytes(bytes),
        }
    }

    fn read_word(&mut self, endian: Endianness, addr: u32) -> u32 {
        let bytes = self.read_bytes::<4>(addr, AccessWidth::Word);
        match endian {
            Endianness::Big => u32::from_be_bytes(bytes),
            Endianness::Little => u32::from_le_bytes(bytes),
        }
    }

    fn read_double_word(&mut self, endian: Endianness, addr: u32) -> u64 {
        let bytes = self.read_bytes::<8>(addr, AccessWidth::Double);
        match endian {
            Endianness::Big => u64::from_be_bytes(bytes),
            Endianness::Little => u64::from_le_bytes(bytes),
        }
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        self.load(addr, data);
    }
}
