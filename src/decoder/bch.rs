/// BCH(15,5) decoding for format information
use crate::encoder::format::format_bits;
use crate::models::{ECLevel, MaskPattern};

/// Largest number of bit errors a format word may carry and still decode
pub const MAX_FORMAT_ERRORS: u32 = 3;

/// Nearest-codeword decoder for 15-bit format words
pub struct BchDecoder;

impl BchDecoder {
    /// Decode a 15-bit format word (mask already applied) into
    /// `(ec_level bits, mask id)`.
    ///
    /// The word is matched against all 32 valid format words; the nearest one
    /// wins when it lies within [`MAX_FORMAT_ERRORS`] bits.
    pub fn decode_format(format: u16) -> Option<(u8, u8)> {
        let (data, distance) = (0u8..32)
            .map(|data| {
                let codeword = Self::codeword(data);
                (data, (codeword ^ format).count_ones())
            })
            .min_by_key(|&(_, distance)| distance)?;

        if distance > MAX_FORMAT_ERRORS {
            return None;
        }
        Some(((data >> 3) & 0x03, data & 0x07))
    }

    /// Number of bit errors separating `format` from the nearest valid word
    pub fn distance(format: u16) -> u32 {
        (0u8..32)
            .map(|data| (Self::codeword(data) ^ format).count_ones())
            .min()
            .unwrap_or(15)
    }

    fn codeword(data: u8) -> u16 {
        format_bits(
            ECLevel::from_format_bits(data >> 3),
            MaskPattern::from_bits(data),
        )
    }
}
