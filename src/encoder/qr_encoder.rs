/// Main QR encoder that orchestrates the encoding pipeline
use super::codewords;
use super::function_patterns::place_function_patterns;
use super::penalty;
use super::placement::place_data_bits;
use super::tables::MAX_DATA_BYTES;
use super::utf8;
use crate::config;
use crate::models::{BitMatrix, MODULE_COUNT, MaskPattern, QrSymbol};
use rayon::prelude::*;

/// One fully built mask candidate
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
    /// Finished module matrix
    pub matrix: BitMatrix,
    /// Total penalty score
    pub penalty: f64,
}

/// Version 4-M encoder front end
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `text` into a version 4-M symbol.
    ///
    /// Input longer than [`MAX_DATA_BYTES`] UTF-8 bytes is cut and flagged
    /// through [`QrSymbol::truncated`].
    pub fn encode(text: &str) -> QrSymbol {
        Self::encode_bytes(&utf8::encode(text))
    }

    /// Encode a raw byte payload
    pub fn encode_bytes(bytes: &[u8]) -> QrSymbol {
        let truncated = bytes.len() > MAX_DATA_BYTES;
        let payload = if truncated {
            tracing::warn!(
                bytes = bytes.len(),
                capacity = MAX_DATA_BYTES,
                "payload truncated to symbol capacity"
            );
            &bytes[..MAX_DATA_BYTES]
        } else {
            bytes
        };

        let codewords = codewords::build(payload);
        let mut candidates = Self::candidates(&codewords, config::parallel_masks());
        let best = candidates.swap_remove(Self::best_index(&candidates));

        tracing::debug!(
            mask = best.mask_pattern.id(),
            penalty = best.penalty,
            truncated,
            "selected mask"
        );

        QrSymbol {
            module_count: MODULE_COUNT,
            modules: best.matrix,
            truncated,
            mask_pattern: best.mask_pattern,
            penalty: best.penalty,
        }
    }

    /// Build and score all eight mask candidates, in mask id order
    pub fn candidates(codewords: &[u8], parallel: bool) -> Vec<MaskCandidate> {
        if parallel {
            MaskPattern::ALL
                .par_iter()
                .map(|&mask| Self::build_candidate(codewords, mask))
                .collect()
        } else {
            MaskPattern::ALL
                .iter()
                .map(|&mask| Self::build_candidate(codewords, mask))
                .collect()
        }
    }

    /// Place patterns and data for a single mask, then score the result
    pub fn build_candidate(codewords: &[u8], mask: MaskPattern) -> MaskCandidate {
        let mut grid = place_function_patterns(mask);
        place_data_bits(&mut grid, codewords, mask);
        let matrix = grid.resolve();
        let penalty = penalty::score(&matrix);
        tracing::debug!(mask = mask.id(), penalty, "scored mask candidate");
        MaskCandidate {
            mask_pattern: mask,
            matrix,
            penalty,
        }
    }

    /// Index of the lowest penalty; the earlier mask wins an exact tie
    fn best_index(candidates: &[MaskCandidate]) -> usize {
        let mut best = 0;
        for (i, candidate) in candidates.iter().enumerate().skip(1) {
            if candidate.penalty < candidates[best].penalty {
                best = i;
            }
        }
        best
    }
}
