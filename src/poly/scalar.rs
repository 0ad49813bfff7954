//! Per-coefficient polynomial operations
//!
//! Baseline implementations that unpack each coefficient and go through the field's lookup
//! tables one term at a time. They share the packed layout of the parent module and must
//! agree with the word-parallel versions bit for bit on every input that fits; the packed
//! versions are the ones the codec uses.

use super::{coefficient, max_terms, Packed};
use crate::galois::GaloisField;

/// Multiply every coefficient of `p` by `x`, one term at a time
pub fn scale<F: GaloisField>(p: Packed, x: u8) -> Packed {
    let bits = F::SYMBOL_BITS;
    (0..max_terms::<F>()).fold(0, |acc, degree| {
        let product = F::mul(coefficient::<F>(p, degree), x) as Packed;
        acc | (product << (degree * bits))
    })
}

/// Schoolbook product of two packed polynomials, truncated to [`max_terms`] terms
pub fn mul<F: GaloisField>(p: Packed, q: Packed) -> Packed {
    let bits = F::SYMBOL_BITS;
    let terms = max_terms::<F>();
    let mut product = vec![0u8; terms as usize];

    for i in 0..terms {
        let a = coefficient::<F>(p, i);
        if a == 0 {
            continue;
        }
        for j in 0..terms - i {
            product[(i + j) as usize] ^= F::mul(a, coefficient::<F>(q, j));
        }
    }

    product
        .iter()
        .enumerate()
        .fold(0, |acc, (degree, &c)| {
            acc | ((c as Packed) << (degree as u32 * bits))
        })
}

/// Evaluate the lowest `p_size` bits of `p` at `x` by summing `c_i * x^i`
pub fn eval<F: GaloisField>(p: Packed, p_size: u32, x: u8) -> u8 {
    (0..p_size / F::SYMBOL_BITS).fold(0, |acc, degree| {
        acc ^ F::mul(coefficient::<F>(p, degree), F::pow(x, degree))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::{Gf16, Gf8};
    use crate::poly;

    #[test]
    fn test_scalar_scale_vectors() {
        assert_eq!(scale::<Gf8>(0o137, 3), 0o352);
        assert_eq!(scale::<Gf16>(0x1234, 1), 0x1234);
        assert_eq!(scale::<Gf16>(0x1234, 0), 0);
    }

    #[test]
    fn test_scalar_mul_vectors() {
        assert_eq!(mul::<Gf8>(0o137, 0o35), 0o3066);
        assert_eq!(mul::<Gf16>(0x1234, 0x56), 0x5_C3DB);
    }

    #[test]
    fn test_scalar_eval_matches_horner() {
        for x in 0..=Gf8::MAX {
            assert_eq!(
                eval::<Gf8>(0o17131, 15, x),
                poly::eval::<Gf8>(0o17131, 15, x),
                "Failed for x = {}",
                x
            );
        }
    }

    #[test]
    fn test_packed_scale_matches_scalar_exhaustive_gf8() {
        // every 4-term polynomial against every scalar
        for p in 0..(1 << 12) as Packed {
            for x in 0..=Gf8::MAX {
                assert_eq!(
                    poly::scale::<Gf8>(p, x),
                    scale::<Gf8>(p, x),
                    "Failed for p = {:o}, x = {}",
                    p,
                    x
                );
            }
        }
    }

    #[test]
    fn test_packed_scale_matches_scalar_full_width() {
        // every slot filled, spill from the top slot included
        let p = poly::from_coefficients::<Gf8>(&[7; 20]);
        let q = poly::from_coefficients::<Gf16>(&[0xF; 15]);
        for x in 0..=Gf16::MAX {
            assert_eq!(poly::scale::<Gf16>(q, x), scale::<Gf16>(q, x));
            if x <= Gf8::MAX {
                assert_eq!(poly::scale::<Gf8>(p, x), scale::<Gf8>(p, x));
            }
        }
    }

    #[test]
    fn test_packed_mul_matches_scalar_gf16() {
        for p in [0x1u64, 0x21, 0xF0F, 0x9ABC, 0x1_2345, 0xFFFF_FFFF] {
            for q in [0x0u64, 0x1, 0x13, 0xFED, 0x8_0001, 0xFFFF] {
                assert_eq!(
                    poly::mul::<Gf16>(p, q),
                    mul::<Gf16>(p, q),
                    "Failed for p = {:x}, q = {:x}",
                    p,
                    q
                );
            }
        }
    }
}
