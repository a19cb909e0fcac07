/// Format information extraction from a symbol matrix
use crate::decoder::bch::BchDecoder;
use crate::encoder::format::format_positions;
use crate::error::QrError;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC), stored twice around the finders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Read both copies and return the first that decodes
    pub fn extract(matrix: &BitMatrix) -> Result<Self, QrError> {
        for (copy, positions) in format_positions(matrix.width()).iter().enumerate() {
            let word = Self::read_word(matrix, positions);
            match BchDecoder::decode_format(word) {
                Some((ec_bits, mask_id)) => {
                    tracing::trace!(copy, word, "decoded format information");
                    return Ok(Self {
                        ec_level: ECLevel::from_format_bits(ec_bits),
                        mask_pattern: MaskPattern::from_bits(mask_id),
                    });
                }
                None => tracing::debug!(copy, word, "format copy unreadable"),
            }
        }
        Err(QrError::FormatInfoUnreadable)
    }

    fn read_word(matrix: &BitMatrix, positions: &[(usize, usize); 15]) -> u16 {
        positions
            .iter()
            .enumerate()
            .filter(|&(_, &(row, col))| matrix.get(col, row))
            .fold(0u16, |word, (i, _)| word | (1 << i))
    }
}
