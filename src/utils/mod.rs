//! Utilities shared by the encoder front ends
//!
//! - Symbol cache (reuse of finished symbols for repeated text)

/// Symbol cache
pub mod cache;

pub use cache::{CacheStats, SymbolCache};
