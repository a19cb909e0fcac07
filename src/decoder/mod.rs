//! Symbol read-back
//!
//! Reads an encoded module matrix back into its payload, for verifying
//! printed output before it goes to the badge printer:
//! - Format information with BCH(15,5) nearest-word decoding
//! - Unmasking and zig-zag bitstream extraction
//! - Reed-Solomon syndrome checks and byte-mode payload parsing

/// BCH decoding for format info
pub mod bch;
/// Codeword extraction from the matrix
pub mod bitstream;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// De-interleaving and byte-mode payload parsing
pub mod payload;
/// Reed-Solomon syndrome checks
pub mod reed_solomon;
/// Mask removal
pub mod unmask;

pub use format::FormatInfo;
pub use payload::{read_matrix, read_symbol, read_text};
