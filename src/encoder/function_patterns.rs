/// Fixed structural patterns of a version 4 symbol
///
/// Finder, separator, timing, alignment, format information and the dark
/// module. Everything left unset afterwards is a data module.
use super::format::{format_bits, format_positions};
use super::tables::{ALIGNMENT_POSITIONS, EC_LEVEL};
use crate::models::{BitMatrix, MODULE_COUNT, MaskPattern, ModuleGrid};

/// Fresh grid with every function pattern placed for `mask`
pub fn place_function_patterns(mask: MaskPattern) -> ModuleGrid {
    let mut grid = ModuleGrid::new(MODULE_COUNT);
    let size = grid.size();

    place_finder_pattern(&mut grid, 0, 0);
    place_finder_pattern(&mut grid, 0, size - 7);
    place_finder_pattern(&mut grid, size - 7, 0);
    place_alignment_patterns(&mut grid);
    place_timing_patterns(&mut grid);
    place_format_info(&mut grid, mask);

    grid
}

/// Function-module mask: set = function module, clear = data module
pub fn function_mask() -> BitMatrix {
    let grid = place_function_patterns(MaskPattern::Pattern0);
    let size = grid.size();
    let mut mask = BitMatrix::new(size, size);
    for row in 0..size {
        for col in 0..size {
            if grid.is_set(row, col) {
                mask.set(col, row, true);
            }
        }
    }
    mask
}

/// 7x7 finder with top-left corner at (row, col), plus its light separator.
///
/// ```text
/// #######
/// #.....#
/// #.###.#
/// #.###.#
/// #.###.#
/// #.....#
/// #######
/// ```
fn place_finder_pattern(grid: &mut ModuleGrid, row: usize, col: usize) {
    let size = grid.size() as isize;
    for dr in -1..=7isize {
        let r = row as isize + dr;
        if r < 0 || r >= size {
            continue;
        }
        for dc in -1..=7isize {
            let c = col as isize + dc;
            if c < 0 || c >= size {
                continue;
            }
            let on_ring = ((0..=6).contains(&dr) && (dc == 0 || dc == 6))
                || ((0..=6).contains(&dc) && (dr == 0 || dr == 6));
            let in_core = (2..=4).contains(&dr) && (2..=4).contains(&dc);
            grid.set(r as usize, c as usize, on_ring || in_core);
        }
    }
}

fn place_alignment_patterns(grid: &mut ModuleGrid) {
    for &row in &ALIGNMENT_POSITIONS {
        for &col in &ALIGNMENT_POSITIONS {
            // Centers inside a finder are skipped
            if grid.is_set(row, col) {
                continue;
            }
            for dr in 0..5 {
                for dc in 0..5 {
                    let dark = dr == 0 || dr == 4 || dc == 0 || dc == 4 || (dr == 2 && dc == 2);
                    grid.set(row + dr - 2, col + dc - 2, dark);
                }
            }
        }
    }
}

fn place_timing_patterns(grid: &mut ModuleGrid) {
    let size = grid.size();
    for i in 8..size - 8 {
        if !grid.is_set(i, 6) {
            grid.set(i, 6, i % 2 == 0);
        }
        if !grid.is_set(6, i) {
            grid.set(6, i, i % 2 == 0);
        }
    }
}

/// Both format information copies and the dark module
fn place_format_info(grid: &mut ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    let bits = format_bits(EC_LEVEL, mask);
    for copy in format_positions(size) {
        for (i, &(row, col)) in copy.iter().enumerate() {
            grid.set(row, col, (bits >> i) & 1 == 1);
        }
    }
    grid.set(size - 8, 8, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;

    #[test]
    fn test_finder_corners() {
        let grid = place_function_patterns(MaskPattern::Pattern0);
        let size = grid.size();
        for &(row, col) in &[(0, 0), (0, size - 7), (size - 7, 0)] {
            for i in 0..7 {
                assert_eq!(grid.get(row, col + i), Module::Dark);
                assert_eq!(grid.get(row + 6, col + i), Module::Dark);
                assert_eq!(grid.get(row + i, col), Module::Dark);
                assert_eq!(grid.get(row + i, col + 6), Module::Dark);
            }
            assert_eq!(grid.get(row + 1, col + 1), Module::Light);
            assert_eq!(grid.get(row + 3, col + 3), Module::Dark);
        }
        // Separators
        assert_eq!(grid.get(7, 0), Module::Light);
        assert_eq!(grid.get(0, 7), Module::Light);
        assert_eq!(grid.get(7, size - 8), Module::Light);
        assert_eq!(grid.get(size - 8, 7), Module::Light);
        // Bottom-right corner stays free
        assert!(!grid.is_set(size - 1, size - 1));
    }

    #[test]
    fn test_timing_alternates() {
        let grid = place_function_patterns(MaskPattern::Pattern0);
        for i in 8..=24 {
            let expected = Module::from_dark(i % 2 == 0);
            assert_eq!(grid.get(6, i), expected);
            assert_eq!(grid.get(i, 6), expected);
        }
    }

    #[test]
    fn test_single_alignment_pattern() {
        let grid = place_function_patterns(MaskPattern::Pattern0);
        assert_eq!(grid.get(26, 26), Module::Dark);
        assert_eq!(grid.get(25, 26), Module::Light);
        assert_eq!(grid.get(24, 24), Module::Dark);
        assert_eq!(grid.get(28, 28), Module::Dark);
        assert_eq!(grid.get(27, 27), Module::Light);
        // No alignment pattern drawn near the other finder corners
        assert!(!grid.is_set(4, 24));
    }

    #[test]
    fn test_dark_module_and_format() {
        let grid = place_function_patterns(MaskPattern::Pattern3);
        assert_eq!(grid.get(25, 8), Module::Dark);
        let bits = format_bits(EC_LEVEL, MaskPattern::Pattern3);
        assert_eq!(grid.get(0, 8), Module::from_dark(bits & 1 == 1));
        assert_eq!(grid.get(8, 0), Module::from_dark((bits >> 14) & 1 == 1));
    }

    #[test]
    fn test_data_module_count() {
        // Version 4 carries 100 codewords plus 7 remainder bits
        let mask = function_mask();
        let size = mask.width();
        let data = (0..size * size)
            .filter(|&i| !mask.get(i % size, i / size))
            .count();
        assert_eq!(data, 100 * 8 + 7);
    }
}
