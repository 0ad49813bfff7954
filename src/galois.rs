//! Galois Field GF(2^3) and GF(2^4) arithmetic for small-symbol Reed-Solomon
//!
//! ## Primitive Polynomials
//!
//! - **GF(8)**: 0b1011 (x³ + x + 1)
//! - **GF(16)**: 0b10011 (x⁴ + x + 1)
//!
//! In both fields the element 2 (the polynomial x) is primitive, so the exponent and
//! logarithm tables are generated by repeated doubling starting from 1.
//!
//! ## Tables
//!
//! The exponent table holds the multiplicative group twice (`2 * MAX` entries) so that
//! `exp[log a + log b]` and `exp[log a - log b + MAX]` never need a modulo or a negative
//! index. `log[0]` is undefined and stored as [`LOG_ZERO`]; the public API never hands that
//! value out.
//!
//! Tables are built once per field on first use and are read-only afterwards, so any number
//! of threads can share them without locking.

use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Placeholder stored in `log[0]`, which has no discrete logarithm
pub const LOG_ZERO: u8 = 0xFF;

/// Errors produced by field arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GaloisError {
    /// Division by (or inversion of) the additive identity
    #[error("Division by zero in Galois field")]
    DivisionByZero,
}

/// Exponent and logarithm lookup tables for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisTable {
    exp: Vec<u8>,
    log: Vec<u8>,
    limit: usize,
}

impl GaloisTable {
    /// Build the tables for a field with `bits`-wide symbols reduced by `prime`
    pub fn new(bits: u32, prime: u8) -> Self {
        let count = 1usize << bits;
        let limit = count - 1;
        let mut table = GaloisTable {
            exp: vec![0; 2 * limit],
            log: vec![LOG_ZERO; count],
            limit,
        };
        table.build_tables(bits, prime);
        table
    }

    fn build_tables(&mut self, bits: u32, prime: u8) {
        let mut b = 1u8;

        for l in 0..self.limit {
            self.log[b as usize] = l as u8;
            self.exp[l] = b;
            self.exp[l + self.limit] = b;

            b = mul_by_2(b, bits, prime);
        }
    }

    /// Order of the multiplicative group (2^m - 1)
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Raw exponent table, including the duplicated second period
    pub fn exp_table(&self) -> &[u8] {
        &self.exp
    }

    /// Raw logarithm table; entry 0 is [`LOG_ZERO`]
    pub fn log_table(&self) -> &[u8] {
        &self.log
    }

    /// 2^power, for `power` anywhere in the duplicated table range
    #[inline]
    pub fn exp(&self, power: usize) -> u8 {
        self.exp[power % self.exp.len()]
    }

    #[inline]
    pub fn log(&self, x: u8) -> Option<u8> {
        if x == 0 {
            None
        } else {
            Some(self.log[x as usize])
        }
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    #[inline]
    pub fn div(&self, a: u8, b: u8) -> Result<u8, GaloisError> {
        if b == 0 {
            return Err(GaloisError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        // +limit keeps the index non-negative
        let index = self.log[a as usize] as usize + self.limit - self.log[b as usize] as usize;
        Ok(self.exp[index])
    }

    #[inline]
    pub fn pow(&self, x: u8, power: u32) -> u8 {
        if x == 0 {
            return if power == 0 { 1 } else { 0 };
        }

        let log_x = self.log[x as usize] as usize;
        self.exp[(log_x * power as usize) % self.exp.len()]
    }

    #[inline]
    pub fn inverse(&self, x: u8) -> Result<u8, GaloisError> {
        if x == 0 {
            return Err(GaloisError::DivisionByZero);
        }

        Ok(self.exp[self.limit - self.log[x as usize] as usize])
    }
}

/// Multiply a field element by 2 without any table lookup
///
/// Shift left one bit and, if the result left the field, reduce by the primitive
/// polynomial. Only used to bootstrap the tables.
#[inline]
pub const fn mul_by_2(x: u8, bits: u32, prime: u8) -> u8 {
    let doubled = (x as u16) << 1;
    if doubled > (1u16 << bits) - 1 {
        (doubled ^ prime as u16) as u8
    } else {
        doubled as u8
    }
}

/// A small binary extension field with packed-polynomial support
///
/// Implementors only describe the field; all arithmetic comes from the provided methods,
/// which read the shared lookup tables returned by [`GaloisField::table`].
pub trait GaloisField:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Bits per symbol (m)
    const SYMBOL_BITS: u32;

    /// Primitive polynomial including the x^m term
    ///
    /// The packed polynomial reduction assumes every other term has degree at most 1.
    const PRIME: u8;

    /// Human readable name, e.g. `GF(8)`
    const NAME: &'static str;

    /// Largest element value, also the multiplicative group order
    const MAX: u8 = ((1u16 << Self::SYMBOL_BITS) - 1) as u8;

    /// Entries in the exponent table
    const EXP_ENTRIES: usize = 2 * Self::MAX as usize;

    /// Codeword length in symbols for the BCH-view code over this field
    const BLOCK_SYMBOLS: u32 = Self::MAX as u32;

    /// Most check symbols a codeword can carry while keeping one message symbol
    const MAX_CHECK_SYMBOLS: u32 = Self::MAX as u32 - 1;

    /// Shared lookup tables for this field
    fn table() -> &'static GaloisTable;

    #[inline]
    fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn mul(a: u8, b: u8) -> u8 {
        Self::table().mul(a, b)
    }

    #[inline]
    fn div(a: u8, b: u8) -> Result<u8, GaloisError> {
        Self::table().div(a, b)
    }

    #[inline]
    fn pow(x: u8, power: u32) -> u8 {
        Self::table().pow(x, power)
    }

    #[inline]
    fn inverse(x: u8) -> Result<u8, GaloisError> {
        Self::table().inverse(x)
    }

    /// 2^power, the primitive element raised to `power`
    #[inline]
    fn exp(power: u32) -> u8 {
        Self::table().exp(power as usize)
    }

    #[inline]
    fn log(x: u8) -> Option<u8> {
        Self::table().log(x)
    }

    /// Table-free doubling used to generate the tables
    #[inline]
    fn mul_by_2(x: u8) -> u8 {
        mul_by_2(x, Self::SYMBOL_BITS, Self::PRIME)
    }
}

/// GF(2^3) with primitive polynomial x³ + x + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Gf8;

impl GaloisField for Gf8 {
    const SYMBOL_BITS: u32 = 3;
    const PRIME: u8 = 0b1011;
    const NAME: &'static str = "GF(8)";

    fn table() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(|| GaloisTable::new(Self::SYMBOL_BITS, Self::PRIME))
    }
}

/// GF(2^4) with primitive polynomial x⁴ + x + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Gf16;

impl GaloisField for Gf16 {
    const SYMBOL_BITS: u32 = 4;
    const PRIME: u8 = 0b10011;
    const NAME: &'static str = "GF(16)";

    fn table() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(|| GaloisTable::new(Self::SYMBOL_BITS, Self::PRIME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf8_tables() {
        let table = Gf8::table();
        assert_eq!(
            table.exp_table(),
            &[1, 2, 4, 3, 6, 7, 5, 1, 2, 4, 3, 6, 7, 5]
        );
        assert_eq!(table.log_table(), &[LOG_ZERO, 0, 1, 3, 2, 6, 4, 5]);
    }

    #[test]
    fn test_gf16_tables() {
        let table = Gf16::table();
        assert_eq!(
            &table.exp_table()[..15],
            &[0x1, 0x2, 0x4, 0x8, 0x3, 0x6, 0xC, 0xB, 0x5, 0xA, 0x7, 0xE, 0xF, 0xD, 0x9]
        );
        assert_eq!(&table.exp_table()[..15], &table.exp_table()[15..]);
        assert_eq!(
            table.log_table(),
            &[LOG_ZERO, 0x0, 0x1, 0x4, 0x2, 0x8, 0x5, 0xA, 0x3, 0xE, 0x9, 0x7, 0x6, 0xD, 0xB, 0xC]
        );
    }

    #[test]
    fn test_mul_by_2_walks_group() {
        let mut x = 1u8;
        for i in 0..Gf16::MAX as u32 {
            assert_eq!(x, Gf16::exp(i));
            x = Gf16::mul_by_2(x);
        }
        assert_eq!(x, 1, "group order should be 15");
    }

    #[test]
    fn test_gf8_basic_ops() {
        assert_eq!(Gf8::add(5, 3), 6);
        assert_eq!(Gf8::sub(5, 3), Gf8::add(5, 3));
        assert_eq!(Gf8::mul(0, 5), 0);
        assert_eq!(Gf8::mul(1, 5), 5);
        // x^2 * x = x^3 = x + 1
        assert_eq!(Gf8::mul(4, 2), 3);
        assert_eq!(Gf8::mul(7, 5), 6);
    }

    #[test]
    fn test_division() {
        assert_eq!(Gf8::div(3, 0), Err(GaloisError::DivisionByZero));
        assert_eq!(Gf8::div(0, 3), Ok(0));
        for a in 1..=Gf8::MAX {
            for b in 1..=Gf8::MAX {
                let quotient = Gf8::div(a, b).unwrap();
                assert_eq!(Gf8::mul(quotient, b), a, "Failed for a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Gf16::inverse(0), Err(GaloisError::DivisionByZero));
        for x in 1..=Gf16::MAX {
            let inv = Gf16::inverse(x).unwrap();
            assert_eq!(Gf16::mul(x, inv), 1, "Failed for x = {}", x);
        }
    }

    #[test]
    fn test_power() {
        assert_eq!(Gf8::pow(0, 0), 1);
        assert_eq!(Gf8::pow(0, 3), 0);
        assert_eq!(Gf8::pow(2, 3), 3);
        for x in 1..=Gf8::MAX {
            assert_eq!(Gf8::pow(x, 0), 1);
            assert_eq!(Gf8::pow(x, 2), Gf8::mul(x, x));
            // Fermat: x^(q-1) = 1
            assert_eq!(Gf8::pow(x, Gf8::MAX as u32), 1);
        }
    }

    #[test]
    fn test_log() {
        assert_eq!(Gf8::log(0), None);
        assert_eq!(Gf8::log(1), Some(0));
        assert_eq!(Gf16::log(9), Some(14));
    }
}
