/// Unmask a symbol by applying its mask pattern again
use crate::models::{BitMatrix, MaskPattern};

/// XOR every data module with `mask_pattern`; `function` marks modules to leave alone
pub fn unmask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, function: &BitMatrix) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !function.get(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}
