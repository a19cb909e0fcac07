/// Vector path serialization of a module matrix
use crate::models::BitMatrix;
use std::fmt::Write as _;

/// SVG path data with one unit square per dark module, row-major.
///
/// Coordinates are in module units, so the path fits a viewBox of
/// `0 0 N N` for an `N`x`N` matrix.
pub fn to_path(modules: &BitMatrix) -> String {
    let mut path = String::with_capacity(modules.count_ones() * 14);
    for row in 0..modules.height() {
        for col in 0..modules.width() {
            if modules.get(col, row) {
                // Writing into a String cannot fail
                let _ = write!(path, "M{},{}h1v1h-1z", col, row);
            }
        }
    }
    path
}
