//! Error type shared by the encoder, read-back and renderers.

use thiserror::Error;

/// Errors produced by this crate.
///
/// Encoding itself never fails; these surface from GF(256) table lookups
/// outside their domain, from reading a symbol back, and from writing images.
#[derive(Debug, Error)]
pub enum QrError {
    /// `log` is undefined for zero in GF(256)
    #[error("GF(256) logarithm is undefined for {0}")]
    InvalidLogarithmInput(u8),

    /// Neither format information copy decoded within three bit errors
    #[error("format information could not be decoded")]
    FormatInfoUnreadable,

    /// A Reed-Solomon block failed its syndrome check
    #[error("Reed-Solomon check failed for block {block}")]
    ReedSolomonMismatch {
        /// Block index in interleaving order
        block: usize,
    },

    /// Payload uses a mode indicator other than byte mode
    #[error("unsupported mode indicator {0:#06b}")]
    UnsupportedMode(u8),

    /// Character count runs past the data codewords
    #[error("payload length exceeds data capacity")]
    PayloadOverrun,

    /// Symbol dimensions do not match a version 4 symbol
    #[error("expected a {expected}x{expected} matrix, got {width}x{height}")]
    DimensionMismatch {
        /// Required side length
        expected: usize,
        /// Actual width
        width: usize,
        /// Actual height
        height: usize,
    },

    /// Image encoding failure
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// File system failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
