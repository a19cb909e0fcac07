/// Data and error correction codeword assembly
use super::bit_buffer::BitBuffer;
use super::polynomial::Polynomial;
use super::tables::{
    BLOCKS, COUNT_BITS, DATA_BITS, DATA_CODEWORDS, ECC_PER_BLOCK, MAX_DATA_BYTES, MODE_BITS,
    MODE_BYTE, PAD_BYTES, TOTAL_CODEWORDS,
};

/// Build the final interleaved codeword sequence for `data`.
///
/// `data` must already be cut to [`MAX_DATA_BYTES`].
pub fn build(data: &[u8]) -> Vec<u8> {
    let data_codewords = encode_data(data);
    let generator = Polynomial::rs_generator(ECC_PER_BLOCK);

    let mut data_blocks = Vec::with_capacity(BLOCKS.len());
    let mut ecc_blocks = Vec::with_capacity(BLOCKS.len());
    let mut offset = 0;
    for block in &BLOCKS {
        let slice = &data_codewords[offset..offset + block.data_count];
        offset += block.data_count;
        ecc_blocks.push(ecc_for_block(slice, &generator, block.ecc_count()));
        data_blocks.push(slice);
    }

    let codewords = interleave(&data_blocks, &ecc_blocks);
    tracing::trace!(
        payload_bytes = data.len(),
        codewords = codewords.len(),
        "built codewords"
    );
    codewords
}

/// Byte-mode bitstream padded to exactly [`DATA_CODEWORDS`] bytes
pub fn encode_data(data: &[u8]) -> Vec<u8> {
    debug_assert!(data.len() <= MAX_DATA_BYTES);
    let mut bits = BitBuffer::new();

    bits.put(MODE_BYTE, MODE_BITS);
    bits.put(data.len() as u32, COUNT_BITS);
    for &byte in data {
        bits.put(byte as u32, 8);
    }

    // Terminator only when it fits
    if bits.len_in_bits() + 4 <= DATA_BITS {
        bits.put(0, 4);
    }

    while bits.len_in_bits() % 8 != 0 {
        bits.put_bit(false);
    }

    let mut codewords = bits.into_bytes();
    let missing = DATA_CODEWORDS.saturating_sub(codewords.len());
    codewords.extend(PAD_BYTES.iter().cycle().take(missing));
    codewords
}

/// Reed-Solomon remainder of `block * x^ecc_count` modulo `generator`.
///
/// Always exactly `ecc_count` bytes; a remainder whose leading terms vanished
/// is left-padded with zeros.
pub fn ecc_for_block(block: &[u8], generator: &Polynomial, ecc_count: usize) -> Vec<u8> {
    let remainder = Polynomial::new(block, ecc_count).rem(generator);
    let coefficients = remainder.coefficients();
    let mut ecc = vec![0u8; ecc_count];
    let skip = coefficients.len().saturating_sub(ecc_count);
    let kept = &coefficients[skip..];
    ecc[ecc_count - kept.len()..].copy_from_slice(kept);
    ecc
}

/// Column-wise interleave of data blocks, then of error correction blocks
pub fn interleave(data_blocks: &[&[u8]], ecc_blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut result = Vec::with_capacity(TOTAL_CODEWORDS);

    let max_data = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..max_data {
        for block in data_blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }

    let max_ecc = ecc_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..max_ecc {
        for block in ecc_blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::gf256::Gf256;

    fn evaluate(codeword: &[u8], x: u8) -> u8 {
        codeword.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
    }

    #[test]
    fn test_data_encoding_hi() {
        let codewords = encode_data(b"Hi");
        assert_eq!(codewords.len(), DATA_CODEWORDS);
        assert_eq!(&codewords[..4], &[0x40, 0x24, 0x86, 0x90]);
        assert_eq!(&codewords[4..8], &[0xEC, 0x11, 0xEC, 0x11]);
    }

    #[test]
    fn test_empty_payload() {
        let codewords = encode_data(b"");
        // mode + zero count + terminator = 16 bits
        assert_eq!(&codewords[..3], &[0x40, 0x00, 0xEC]);
    }

    #[test]
    fn test_full_payload_has_terminator_and_no_pad() {
        let data = [b'A'; MAX_DATA_BYTES];
        let codewords = encode_data(&data);
        assert_eq!(codewords.len(), DATA_CODEWORDS);
        // 508 data bits + 4-bit terminator fill the capacity exactly
        assert_eq!(codewords[63] & 0x0F, 0);
        assert!(!codewords.ends_with(&[0xEC]));
    }

    #[test]
    fn test_blocks_are_valid_rs_codewords() {
        let data_codewords = encode_data(b"Maria Fernanda Oliveira");
        let generator = Polynomial::rs_generator(ECC_PER_BLOCK);
        for block in data_codewords.chunks(32) {
            let mut codeword = block.to_vec();
            codeword.extend(ecc_for_block(block, &generator, ECC_PER_BLOCK));
            for i in 0..ECC_PER_BLOCK {
                assert_eq!(evaluate(&codeword, Gf256::exp(i)), 0);
            }
        }
    }

    #[test]
    fn test_ecc_left_pads_short_remainder() {
        // An all-zero block has a zero remainder
        let generator = Polynomial::rs_generator(ECC_PER_BLOCK);
        assert_eq!(ecc_for_block(&[0u8; 32], &generator, ECC_PER_BLOCK), vec![0; ECC_PER_BLOCK]);
    }

    #[test]
    fn test_interleave_order() {
        let a = [1u8, 2, 3];
        let b = [4u8, 5, 6];
        let out = interleave(&[&a, &b], &[vec![7, 8], vec![9, 10]]);
        assert_eq!(out, vec![1, 4, 2, 5, 3, 6, 7, 9, 8, 10]);
    }

    #[test]
    fn test_build_length_and_prefix() {
        let codewords = build(b"Hi");
        assert_eq!(codewords.len(), TOTAL_CODEWORDS);
        // First data codeword of each block
        assert_eq!(codewords[0], 0x40);
        assert_eq!(codewords[1], encode_data(b"Hi")[32]);
    }
}
