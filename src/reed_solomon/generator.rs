//! Reed-Solomon generator polynomials
//!
//! `g_k(x) = (x - 2^1)(x - 2^2)...(x - 2^k)`, first consecutive root 2^1. Each field gets one
//! table indexed by check symbol count, built once on first use. Index 0 holds the constant
//! polynomial 1 so the table can be indexed directly by `k`.

use crate::galois::{GaloisField, Gf16, Gf8};
use crate::poly::{self, Packed};
use std::sync::OnceLock;

/// Generator polynomials for every supported check symbol count of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorTable {
    polys: Vec<Packed>,
}

impl GeneratorTable {
    /// Build `g_0..=g_{MAX_CHECK_SYMBOLS}` for the field
    pub fn new<F: GaloisField>() -> Self {
        let bits = F::SYMBOL_BITS;
        let mut g: Packed = 1;
        let mut polys = Vec::with_capacity(F::MAX_CHECK_SYMBOLS as usize + 1);
        polys.push(g);

        for i in 1..=F::MAX_CHECK_SYMBOLS {
            // g * (x + 2^i): the root term scales, the x term shifts up one slot
            g = poly::scale::<F>(g, F::exp(i)) ^ (g << bits);
            polys.push(g);
        }

        Self { polys }
    }

    /// Generator for `check_symbols` check symbols, if the table has one
    #[inline]
    pub fn get(&self, check_symbols: u32) -> Option<Packed> {
        self.polys.get(check_symbols as usize).copied()
    }

    /// Largest check symbol count covered
    pub fn max_check_symbols(&self) -> u32 {
        self.polys.len() as u32 - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = Packed> + '_ {
        self.polys.iter().copied()
    }
}

/// A field that Reed-Solomon codewords can be built over
pub trait RsField: GaloisField {
    /// Shared generator polynomial table
    fn generators() -> &'static GeneratorTable;
}

impl RsField for Gf8 {
    fn generators() -> &'static GeneratorTable {
        static GENERATORS: OnceLock<GeneratorTable> = OnceLock::new();
        GENERATORS.get_or_init(GeneratorTable::new::<Self>)
    }
}

impl RsField for Gf16 {
    fn generators() -> &'static GeneratorTable {
        static GENERATORS: OnceLock<GeneratorTable> = OnceLock::new();
        GENERATORS.get_or_init(GeneratorTable::new::<Self>)
    }
}
