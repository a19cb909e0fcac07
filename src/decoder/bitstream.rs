/// Codeword extraction from an unmasked symbol
use crate::encoder::placement::zigzag_order;
use crate::encoder::tables::TOTAL_CODEWORDS;
use crate::models::BitMatrix;

/// Reads data modules in placement order and packs them MSB first
pub struct BitstreamExtractor;

impl BitstreamExtractor {
    /// Extract the interleaved codeword sequence; remainder bits are dropped
    pub fn extract(matrix: &BitMatrix, function: &BitMatrix) -> Vec<u8> {
        let bits = Self::extract_bits(matrix, function);
        bits.chunks_exact(8)
            .take(TOTAL_CODEWORDS)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
            .collect()
    }

    /// Raw data module values, remainder bits included
    pub fn extract_bits(matrix: &BitMatrix, function: &BitMatrix) -> Vec<bool> {
        zigzag_order(matrix.width())
            .filter(|&(row, col)| !function.get(col, row))
            .map(|(row, col)| matrix.get(col, row))
            .collect()
    }
}
