/// Codeword placement in the zig-zag module order
use crate::models::{MaskPattern, ModuleGrid};

/// Visit every `(row, col)` in placement order: 2-column strips from the
/// right edge, skipping the vertical timing column, alternating upward and
/// downward sweeps, right column before left within a row.
pub fn zigzag_order(size: usize) -> impl Iterator<Item = (usize, usize)> {
    let mut strips = Vec::with_capacity(size / 2);
    let mut col = size as isize - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
        }
        strips.push(col as usize);
        col -= 2;
    }

    strips.into_iter().enumerate().flat_map(move |(strip, right)| {
        let upward = strip % 2 == 0;
        (0..size).flat_map(move |step| {
            let row = if upward { size - 1 - step } else { step };
            [(row, right), (row, right - 1)]
        })
    })
}

/// Fill every unset module with the codeword bits, XORed with `mask`.
///
/// Bits are taken MSB first; cells beyond the last codeword get 0 before
/// masking.
pub fn place_data_bits(grid: &mut ModuleGrid, codewords: &[u8], mask: MaskPattern) {
    let mut bit_index = 0usize;
    for (row, col) in zigzag_order(grid.size()) {
        if grid.is_set(row, col) {
            continue;
        }
        let byte_index = bit_index / 8;
        let bit = codewords
            .get(byte_index)
            .is_some_and(|byte| (byte >> (7 - bit_index % 8)) & 1 == 1);
        grid.set(row, col, bit ^ mask.is_masked(row, col));
        bit_index += 1;
    }
}
