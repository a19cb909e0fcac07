/// Full read-back of a clean symbol matrix into its byte payload
use crate::decoder::bitstream::BitstreamExtractor;
use crate::decoder::format::FormatInfo;
use crate::decoder::reed_solomon::syndromes_are_zero;
use crate::decoder::unmask::unmask;
use crate::encoder::function_patterns::function_mask;
use crate::encoder::tables::{BLOCKS, COUNT_BITS, DATA_BITS, ECC_PER_BLOCK, MODE_BITS, MODE_BYTE};
use crate::error::QrError;
use crate::models::{BitMatrix, MODULE_COUNT, QrSymbol};

/// Recover the payload bytes from an encoded symbol
pub fn read_symbol(symbol: &QrSymbol) -> Result<Vec<u8>, QrError> {
    read_matrix(&symbol.modules)
}

/// Recover the payload bytes from a 33x33 module matrix.
///
/// Performs detection only: any Reed-Solomon block with a non-zero syndrome
/// is rejected rather than corrected.
pub fn read_matrix(matrix: &BitMatrix) -> Result<Vec<u8>, QrError> {
    if matrix.width() != MODULE_COUNT || matrix.height() != MODULE_COUNT {
        return Err(QrError::DimensionMismatch {
            expected: MODULE_COUNT,
            width: matrix.width(),
            height: matrix.height(),
        });
    }

    let format = FormatInfo::extract(matrix)?;
    let function = function_mask();
    let mut unmasked = matrix.clone();
    unmask(&mut unmasked, format.mask_pattern, &function);

    let codewords = BitstreamExtractor::extract(&unmasked, &function);
    let data = deinterleave_and_check(&codewords)?;
    decode_payload(&data)
}

/// Split interleaved codewords into blocks, check each, and return the data codewords
pub fn deinterleave_and_check(codewords: &[u8]) -> Result<Vec<u8>, QrError> {
    let mut blocks: Vec<Vec<u8>> = BLOCKS
        .iter()
        .map(|info| Vec::with_capacity(info.total_count))
        .collect();
    let mut stream = codewords.iter().copied();

    let max_data = BLOCKS.iter().map(|info| info.data_count).max().unwrap_or(0);
    for i in 0..max_data {
        for (block, info) in blocks.iter_mut().zip(BLOCKS.iter()) {
            if i < info.data_count {
                block.push(stream.next().ok_or(QrError::PayloadOverrun)?);
            }
        }
    }
    for _ in 0..ECC_PER_BLOCK {
        for block in blocks.iter_mut() {
            block.push(stream.next().ok_or(QrError::PayloadOverrun)?);
        }
    }

    let mut data = Vec::with_capacity(BLOCKS.iter().map(|info| info.data_count).sum());
    for (index, (block, info)) in blocks.iter().zip(BLOCKS.iter()).enumerate() {
        if !syndromes_are_zero(block, info.ecc_count()) {
            return Err(QrError::ReedSolomonMismatch { block: index });
        }
        data.extend_from_slice(&block[..info.data_count]);
    }
    Ok(data)
}

/// Parse a single byte-mode segment from the data codewords
pub fn decode_payload(data: &[u8]) -> Result<Vec<u8>, QrError> {
    let header_bits = MODE_BITS + COUNT_BITS;
    let (&first, &second) = match data {
        [first, second, ..] => (first, second),
        _ => return Err(QrError::PayloadOverrun),
    };

    let mode = first >> 4;
    if mode as u32 != MODE_BYTE {
        return Err(QrError::UnsupportedMode(mode));
    }
    let count = (((first & 0x0F) << 4) | (second >> 4)) as usize;
    if header_bits + count * 8 > DATA_BITS.min(data.len() * 8) {
        return Err(QrError::PayloadOverrun);
    }

    // Bytes sit on a half-byte offset after the 12-bit header
    Ok((0..count)
        .map(|i| (data[i + 1] << 4) | (data[i + 2] >> 4))
        .collect())
}

/// Recover the payload as text, replacing invalid UTF-8 sequences
pub fn read_text(symbol: &QrSymbol) -> Result<String, QrError> {
    read_symbol(symbol).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
