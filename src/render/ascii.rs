/// Terminal rendering with half-block characters, two module rows per line
use crate::models::QrSymbol;

/// Render dark modules as ink, with `quiet_zone` light modules around
pub fn to_ascii(symbol: &QrSymbol, quiet_zone: usize) -> String {
    let n = symbol.module_count;
    let side = n + 2 * quiet_zone;
    let dark_at = |row: usize, col: usize| -> bool {
        row >= quiet_zone
            && col >= quiet_zone
            && row - quiet_zone < n
            && col - quiet_zone < n
            && symbol.is_dark(row - quiet_zone, col - quiet_zone)
    };

    let mut out = String::with_capacity((side + 1) * side.div_ceil(2) * 3);
    for row in (0..side).step_by(2) {
        for col in 0..side {
            let ch = match (dark_at(row, col), dark_at(row + 1, col)) {
                (true, true) => '\u{2588}',
                (true, false) => '\u{2580}',
                (false, true) => '\u{2584}',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
