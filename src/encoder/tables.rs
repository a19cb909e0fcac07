/// Block structure of a version 4-M symbol (ISO/IEC 18004 Table 9)
use crate::models::{ECLevel, MODULE_COUNT};

/// One Reed-Solomon block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Data codewords in the block
    pub data_count: usize,
    /// Data plus error correction codewords
    pub total_count: usize,
}

impl EcBlockInfo {
    /// Error correction codewords in the block
    pub const fn ecc_count(&self) -> usize {
        self.total_count - self.data_count
    }
}

/// Error correction level of every symbol
pub const EC_LEVEL: ECLevel = ECLevel::M;

/// Version 4-M uses two identical blocks
pub const BLOCKS: [EcBlockInfo; 2] = [
    EcBlockInfo {
        data_count: 32,
        total_count: 50,
    },
    EcBlockInfo {
        data_count: 32,
        total_count: 50,
    },
];

/// Error correction codewords per block
pub const ECC_PER_BLOCK: usize = 18;

/// Data codewords across all blocks
pub const DATA_CODEWORDS: usize = 64;

/// Data plus error correction codewords across all blocks
pub const TOTAL_CODEWORDS: usize = 100;

/// Data capacity in bits
pub const DATA_BITS: usize = DATA_CODEWORDS * 8;

/// Byte-mode mode indicator
pub const MODE_BYTE: u32 = 0b0100;

/// Width of the mode indicator
pub const MODE_BITS: usize = 4;

/// Width of the byte-mode character count for versions 1-9
pub const COUNT_BITS: usize = 8;

/// Largest payload that fits alongside mode and count indicators
pub const MAX_DATA_BYTES: usize = (DATA_BITS - MODE_BITS - COUNT_BITS) / 8;

/// Pad codewords appended after the terminator, alternating
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Alignment pattern center coordinates for version 4
pub const ALIGNMENT_POSITIONS: [usize; 2] = [6, MODULE_COUNT - 7];
