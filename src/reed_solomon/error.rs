//! Error types for Reed-Solomon encoding and decoding

use crate::galois::GaloisError;
use thiserror::Error;

/// Errors that can occur while building a codec or decoding a codeword
///
/// Decoding never returns a partial correction: any of these means the received word was
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsError {
    /// Check symbol count outside what the field's generator table covers
    #[error("Invalid check symbol count {requested}: {field} supports 1 to {max}")]
    InvalidCheckSymbols {
        field: &'static str,
        requested: u32,
        max: u32,
    },

    /// Position mask names symbols outside the codeword
    #[error("Position mask {mask:#b} reaches beyond the {block_symbols}-symbol block")]
    InvalidPositions { mask: u16, block_symbols: u32 },

    /// More erasures declared than there are check symbols
    #[error(
        "Cannot decode: {erasures} erasures exceed the {check_symbols} check symbols (Singleton bound)"
    )]
    BeyondSingletonBound { erasures: u32, check_symbols: u32 },

    /// Error locator degree leaves no room for the declared erasures
    #[error("Cannot decode: {errors} errors with {erasures} erasures exceed {check_symbols} check symbols")]
    TooManyErrors {
        errors: u32,
        erasures: u32,
        check_symbols: u32,
    },

    /// Root search found a different number of error positions than the locator's degree
    #[error("Uncorrectable error pattern: locator degree {expected} but {found} roots found")]
    RootCountMismatch { expected: u32, found: u32 },

    /// Field arithmetic failed, e.g. a zero locator derivative at an errata position
    #[error("Galois field error: {0}")]
    Galois(#[from] GaloisError),
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
