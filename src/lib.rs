//! badge_qr - offline QR code generation for event badges
//!
//! Encodes short UTF-8 strings (attendee names, ticket ids) into a fixed
//! QR Code Version 4, error correction level M symbol, and serializes it as
//! SVG path data, standalone SVG, PNG or terminal art. No network access and
//! no image input: everything runs from the text alone.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Symbol read-back (format info, unmasking, Reed-Solomon checks)
pub mod decoder;
/// QR code encoding modules (bit packing, Reed-Solomon, placement, masking)
pub mod encoder;
/// Crate error type
pub mod error;
/// Core data structures (QrSymbol, BitMatrix, MaskPattern, etc.)
pub mod models;
/// Output formats (path, SVG, PNG, ASCII)
pub mod render;
/// Symbol cache
pub mod utils;

pub use decoder::{read_symbol, read_text};
pub use encoder::tables::MAX_DATA_BYTES;
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, MODULE_COUNT, MaskPattern, QrSymbol, VERSION};
pub use render::{RasterOptions, SvgOptions, save_png, to_ascii, to_image, to_path, to_svg};

use encoder::qr_encoder::QrEncoder;
use rayon::prelude::*;
use utils::cache::SymbolCache;

/// Encode `text` into a 33x33 version 4-M symbol
///
/// # Arguments
/// * `text` - Badge text; only the first [`MAX_DATA_BYTES`] UTF-8 bytes fit
///
/// # Returns
/// The symbol with the lowest-penalty mask. Never fails: over-long input is
/// cut to capacity and flagged via [`QrSymbol::truncated`].
pub fn encode(text: &str) -> QrSymbol {
    QrEncoder::encode(text)
}

/// Encode UTF-16 code units, combining surrogate pairs.
///
/// Lone surrogates are written as their 3-byte generalized UTF-8 form
/// rather than replaced.
pub fn encode_utf16(units: &[u16]) -> QrSymbol {
    QrEncoder::encode_bytes(&encoder::utf8::encode_utf16(units))
}

/// Encode a batch of strings in parallel, preserving input order
pub fn encode_batch<S>(texts: &[S]) -> Vec<QrSymbol>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(count = texts.len(), "encoding batch");
    texts.par_iter().map(|text| encode(text.as_ref())).collect()
}

/// Reusable encoder with optional symbol caching
///
/// Use this when a run encodes the same text repeatedly:
/// ```
/// let mut encoder = badge_qr::Encoder::with_cache();
/// let first = encoder.encode("Ada Lovelace");
/// let again = encoder.encode("Ada Lovelace");
/// assert_eq!(first, again);
/// ```
pub struct Encoder {
    /// Optional cache of finished symbols
    cache: Option<SymbolCache>,
}

impl Encoder {
    /// Create an encoder without caching
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Create an encoder with symbol caching enabled
    pub fn with_cache() -> Self {
        Self {
            cache: Some(SymbolCache::new()),
        }
    }

    /// Create an encoder caching at most `max_entries` symbols
    pub fn with_cache_capacity(max_entries: usize) -> Self {
        Self {
            cache: Some(SymbolCache::with_capacity(max_entries)),
        }
    }

    /// Encode `text`, reusing a cached symbol when available
    pub fn encode(&mut self, text: &str) -> QrSymbol {
        match &mut self.cache {
            Some(cache) => cache.get_or_insert_with(text.as_bytes(), || encode(text)),
            None => encode(text),
        }
    }

    /// Cache counters, if caching is enabled
    pub fn cache_stats(&self) -> Option<utils::CacheStats> {
        self.cache.as_ref().map(|cache| *cache.stats())
    }

    /// Clear the internal cache
    pub fn clear_cache(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
