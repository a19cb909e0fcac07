//! Core data structures

/// Bit matrix and construction grid
pub mod matrix;
/// Symbol, EC level and mask types
pub mod qr_code;

pub use matrix::{BitMatrix, Module, ModuleGrid};
pub use qr_code::{ECLevel, MODULE_COUNT, MaskPattern, QrSymbol, VERSION};
