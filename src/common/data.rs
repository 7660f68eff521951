//! Bus Access Types.
//!
//! This module defines how a memory access is described when it crosses the
//! boundary between the CPU core and the bus: the byte order the core wants
//! the bus to use, and the width of the transfer.

use serde::{Deserialize, Serialize};

/// Byte order requested for a bus transfer.
///
/// The VR4300 can run in either order, but the console boots and runs
/// big-endian. The core currently always requests `Big`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most significant byte at the lowest address.
    #[default]
    Big,

    /// Least significant byte at the lowest address.
    Little,
}

/// Width of a single bus transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
    /// 64-bit access.
    Double,
}

impl AccessWidth {
    /// Number of bytes moved by an access of this width.
    pub fn bytes(self) -> usize {
        match self {
            AccessWidth::Byte => 1,
            AccessWidth::Half => 2,
            AccessWidth::Word => 4,
            AccessWidth::Double => 8,
        }
    }
}
