//! QR code encoding modules
//!
//! The pipeline, leaf first:
//! - UTF-8 byte encoding and bit packing
//! - GF(256) and polynomial arithmetic for Reed-Solomon codewords
//! - Function pattern placement and zig-zag data mapping
//! - Mask penalty scoring and mask selection

/// Append-only bit stream
pub mod bit_buffer;
/// Data + error correction codeword assembly
pub mod codewords;
/// BCH-protected format information
pub mod format;
/// Finder, timing, alignment, format and dark module placement
pub mod function_patterns;
/// GF(256) exp/log tables
pub mod gf256;
/// Mask penalty rules
pub mod penalty;
/// Zig-zag data placement
pub mod placement;
/// Polynomials over GF(256)
pub mod polynomial;
/// Orchestrates encoding and mask selection
pub mod qr_encoder;
/// Version 4-M constants
pub mod tables;
/// UTF-8 byte encoding
pub mod utf8;
