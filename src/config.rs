//! Configuration for encode/decode operations

use crate::galois::{GaloisField, Gf16, Gf8};
use crate::poly::{self, Packed};
use crate::reed_solomon::{ReedSolomon, RsResult};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors parsing configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field name not recognised
    #[error("Unknown field {0:?}, expected gf8 or gf16")]
    UnknownField(String),
}

/// Field selected at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FieldKind {
    /// GF(2^3), 3-bit symbols, 7-symbol codewords
    #[default]
    Gf8,
    /// GF(2^4), 4-bit symbols, 15-symbol codewords
    Gf16,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Gf8 => Gf8::NAME,
            FieldKind::Gf16 => Gf16::NAME,
        }
    }

    pub fn symbol_bits(self) -> u32 {
        match self {
            FieldKind::Gf8 => Gf8::SYMBOL_BITS,
            FieldKind::Gf16 => Gf16::SYMBOL_BITS,
        }
    }

    pub fn block_symbols(self) -> u32 {
        match self {
            FieldKind::Gf8 => Gf8::BLOCK_SYMBOLS,
            FieldKind::Gf16 => Gf16::BLOCK_SYMBOLS,
        }
    }

    pub fn max_check_symbols(self) -> u32 {
        match self {
            FieldKind::Gf8 => Gf8::MAX_CHECK_SYMBOLS,
            FieldKind::Gf16 => Gf16::MAX_CHECK_SYMBOLS,
        }
    }

    /// Full codeword size in bits
    pub fn codeword_bits(self) -> u32 {
        self.block_symbols() * self.symbol_bits()
    }

    /// Render a packed polynomial one digit per symbol
    pub fn format(self, p: Packed) -> String {
        match self {
            FieldKind::Gf8 => poly::format_symbols::<Gf8>(p),
            FieldKind::Gf16 => poly::format_symbols::<Gf16>(p),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gf8" | "8" | "gf(8)" => Ok(FieldKind::Gf8),
            "gf16" | "16" | "gf(16)" => Ok(FieldKind::Gf16),
            _ => Err(ConfigError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration shared by the encode and decode commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Field the codewords are built over
    pub field: FieldKind,
    /// Check symbols per codeword
    pub check_symbols: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            field: FieldKind::Gf8,
            check_symbols: 4,
        }
    }
}

impl CodecConfig {
    pub fn new(field: FieldKind, check_symbols: u32) -> Self {
        Self {
            field,
            check_symbols,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let defaults = Self::default();
        let field = matches
            .get_one::<FieldKind>("field")
            .copied()
            .unwrap_or(defaults.field);
        let check_symbols = matches
            .get_one::<u32>("check")
            .copied()
            .unwrap_or(defaults.check_symbols);

        Self::new(field, check_symbols)
    }

    /// Check that the field has a generator for the requested check symbol count
    pub fn validate(&self) -> RsResult<()> {
        match self.field {
            FieldKind::Gf8 => ReedSolomon::<Gf8>::new(self.check_symbols).map(|_| ()),
            FieldKind::Gf16 => ReedSolomon::<Gf16>::new(self.check_symbols).map(|_| ()),
        }
    }

    /// Message symbols that fit next to the check symbols
    pub fn message_symbols(&self) -> u32 {
        self.field
            .block_symbols()
            .saturating_sub(self.check_symbols)
    }
}
