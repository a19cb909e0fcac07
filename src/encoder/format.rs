/// Format information: EC level + mask id protected by BCH(15,5)
use crate::models::{ECLevel, MaskPattern};

/// BCH generator x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;

/// XOR mask that keeps format information from being all zero
pub const FORMAT_MASK: u32 = 0b101_0100_0001_0010;

fn bch_degree(mut value: u32) -> u32 {
    let mut degree = 0;
    while value != 0 {
        degree += 1;
        value >>= 1;
    }
    degree
}

/// 15-bit format word for `ec_level` and `mask`
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.id() as u32;
    let mut remainder = data << 10;
    while bch_degree(remainder) >= bch_degree(FORMAT_GENERATOR) {
        remainder ^= FORMAT_GENERATOR << (bch_degree(remainder) - bch_degree(FORMAT_GENERATOR));
    }
    (((data << 10) | remainder) ^ FORMAT_MASK) as u16
}

/// Matrix coordinates `(row, col)` of format bit `i` (LSB first) in both copies.
///
/// The first copy runs down column 8 (top-left then bottom-left finder), the
/// second along row 8 (top-right then top-left finder).
pub fn format_positions(size: usize) -> [[(usize, usize); 15]; 2] {
    let mut column_copy = [(0, 0); 15];
    let mut row_copy = [(0, 0); 15];
    for i in 0..15 {
        column_copy[i] = if i < 6 {
            (i, 8)
        } else if i < 8 {
            (i + 1, 8)
        } else {
            (size - 15 + i, 8)
        };
        row_copy[i] = if i < 8 {
            (8, size - 1 - i)
        } else if i < 9 {
            (8, 15 - i)
        } else {
            (8, 14 - i)
        };
    }
    [column_copy, row_copy]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_known_values() {
        // ISO 18004 Table C.1, level M
        let expected = [
            0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0,
        ];
        for (mask, &want) in MaskPattern::ALL.iter().zip(expected.iter()) {
            assert_eq!(format_bits(ECLevel::M, *mask), want, "mask {:?}", mask);
        }
    }

    #[test]
    fn test_format_bits_other_levels() {
        assert_eq!(format_bits(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
        assert_eq!(format_bits(ECLevel::H, MaskPattern::Pattern0), 0x1689);
        assert_eq!(format_bits(ECLevel::Q, MaskPattern::Pattern0), 0x355F);
    }

    #[test]
    fn test_positions_follow_iso_layout() {
        // ISO/IEC 18004 Figure 25 for a 33x33 symbol
        let [column_copy, row_copy] = format_positions(33);
        assert_eq!(&column_copy[..6], &[(0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8)]);
        assert_eq!(column_copy[6], (7, 8));
        assert_eq!(column_copy[7], (8, 8));
        assert_eq!(column_copy[8], (26, 8));
        assert_eq!(column_copy[14], (32, 8));
        assert_eq!(row_copy[0], (8, 32));
        assert_eq!(row_copy[7], (8, 25));
        assert_eq!(row_copy[8], (8, 7));
        assert_eq!(row_copy[9], (8, 5));
        assert_eq!(row_copy[14], (8, 0));
    }

    #[test]
    fn test_positions_are_distinct() {
        let [a, b] = format_positions(33);
        let mut all: Vec<_> = a.iter().chain(b.iter()).copied().collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 30);
        assert!(!all.contains(&(6, 8)));
        assert!(!all.contains(&(8, 6)));
        assert!(!all.contains(&(25, 8)));
    }
}
