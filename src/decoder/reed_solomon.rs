/// Reed-Solomon syndrome check for QR blocks
/// A valid block is a multiple of the generator, so it vanishes at alpha^0..alpha^(ec-1)
use crate::encoder::gf256::Gf256;

/// Syndromes `S_i = c(alpha^i)` for `i in 0..ec_count`; `block[0]` is the highest degree
pub fn syndromes(block: &[u8], ec_count: usize) -> Vec<u8> {
    (0..ec_count)
        .map(|i| {
            let x = Gf256::exp(i);
            block
                .iter()
                .fold(0u8, |acc, &coefficient| Gf256::mul(acc, x) ^ coefficient)
        })
        .collect()
}

/// True when `block` (data followed by EC codewords) carries no detectable error
pub fn syndromes_are_zero(block: &[u8], ec_count: usize) -> bool {
    syndromes(block, ec_count).iter().all(|&s| s == 0)
}
