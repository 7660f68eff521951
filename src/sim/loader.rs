//! Binary Loader.
//!
//! Loads raw code images (big-endian instruction words, no header) from disk
//! and places them on a bus.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::soc::Bus;

/// Reads a binary file from disk.
pub fn load_binary(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Copies `data` onto `bus` starting at `addr`.
pub fn load_into<B: Bus + ?Sized>(bus: &mut B, data: &[u8], addr: u32) {
    info!("[Loader] Writing {} bytes to {:#x}", data.len(), addr);
    bus.write_bytes(addr, data);
}

/// Serializes instruction words as a big-endian byte image.
pub fn words_to_image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
