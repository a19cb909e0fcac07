/// Mask penalty scoring (ISO/IEC 18004 section 7.8.3)
///
/// Four rules, lower is better:
/// 1. Runs of >= 5 same-colored modules: 3 + (length - 5)
/// 2. Uniform 2x2 blocks: 3 each
/// 3. 1:1:3:1:1 finder look-alikes with 4 light modules on a side: 40 each
/// 4. Dark/light imbalance: |100 * dark / total - 50| / 5 * 10
use crate::models::BitMatrix;

const RUN_BASE: u32 = 3;
const BLOCK_PENALTY: u32 = 3;
const FINDER_PENALTY: u32 = 40;
const FINDER_CORE: [bool; 7] = [true, false, true, true, true, false, true];
const QUIET_RUN: isize = 4;

/// Total penalty of a fully resolved matrix
pub fn score(matrix: &BitMatrix) -> f64 {
    (run_penalty(matrix) + block_penalty(matrix) + finder_penalty(matrix)) as f64
        + balance_penalty(matrix)
}

/// Rule 1 over all rows and columns
pub fn run_penalty(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut penalty = 0;
    for i in 0..size {
        penalty += line_run_penalty((0..size).map(|x| matrix.get(x, i)));
        penalty += line_run_penalty((0..size).map(|y| matrix.get(i, y)));
    }
    penalty
}

fn line_run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut penalty = 0;
    let mut run_color = None;
    let mut run_len = 0u32;
    for module in line {
        if Some(module) == run_color {
            run_len += 1;
        } else {
            penalty += run_score(run_len);
            run_color = Some(module);
            run_len = 1;
        }
    }
    penalty + run_score(run_len)
}

fn run_score(run_len: u32) -> u32 {
    if run_len >= 5 {
        RUN_BASE + (run_len - 5)
    } else {
        0
    }
}

/// Rule 2
pub fn block_penalty(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut penalty = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

/// Rule 3, rows and columns scored independently.
///
/// Modules outside the symbol count as light (quiet zone).
pub fn finder_penalty(matrix: &BitMatrix) -> u32 {
    let size = matrix.width() as isize;
    let at = |x: isize, y: isize| -> bool {
        x >= 0 && y >= 0 && x < size && y < size && matrix.get(x as usize, y as usize)
    };

    let mut penalty = 0;
    for line in 0..size {
        for start in 0..=size - FINDER_CORE.len() as isize {
            if finder_like(|k| at(start + k, line)) {
                penalty += FINDER_PENALTY;
            }
            if finder_like(|k| at(line, start + k)) {
                penalty += FINDER_PENALTY;
            }
        }
    }
    penalty
}

/// `module(k)` reads position `k` relative to the start of a 7-module core
fn finder_like(module: impl Fn(isize) -> bool) -> bool {
    let core = FINDER_CORE.len() as isize;
    let core_matches = FINDER_CORE
        .iter()
        .enumerate()
        .all(|(k, &dark)| module(k as isize) == dark);
    if !core_matches {
        return false;
    }
    let light_before = (1..=QUIET_RUN).all(|k| !module(-k));
    let light_after = (0..QUIET_RUN).all(|k| !module(core + k));
    light_before || light_after
}

/// Rule 4
pub fn balance_penalty(matrix: &BitMatrix) -> f64 {
    let total = (matrix.width() * matrix.height()) as f64;
    if total == 0.0 {
        return 0.0;
    }
    let dark_percent = 100.0 * matrix.count_ones() as f64 / total;
    (dark_percent - 50.0).abs() / 5.0 * 10.0
}
