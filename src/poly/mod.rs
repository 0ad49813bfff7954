//! Packed polynomial arithmetic over GF(8) and GF(16)
//!
//! A polynomial is stored in a single [`Packed`] word with one coefficient per fixed-width
//! slot, lowest degree in the least significant slot. GF(8) uses 3-bit slots (so `0o123` is
//! `x² + 2x + 3`) and GF(16) uses 4-bit slots (`0x123` is the same polynomial).
//!
//! ## Word-Parallel Arithmetic
//!
//! Scaling by a field element is done on every coefficient at once: the word is shifted by
//! 0..m bits for each set bit of the scalar and the partial products are XORed together.
//! A shifted partial product spills up to `m - 1` bits into the slot above its own; those
//! bits are masked out and folded back down using the shape of the primitive polynomial
//! (x^m = x + 1 for both supported fields).
//!
//! The per-coefficient implementations in [`scalar`] compute the same results through the
//! lookup tables and are kept as the reference the packed versions are tested against.

pub mod scalar;

use crate::galois::GaloisField;
use std::marker::PhantomData;

/// Container for a packed polynomial
pub type Packed = u64;

/// Bit width of [`Packed`]
pub const PACKED_BITS: u32 = Packed::BITS;

/// Slot widths never exceed GF(16)'s 4 bits
const MAX_SYMBOL_BITS: usize = 4;

/// One bit at the bottom of every slot
const fn slot_lsb_mask(bits: u32) -> Packed {
    let mut mask = 0;
    let mut shift = 0;
    while shift < PACKED_BITS {
        mask |= 1 << shift;
        shift += bits;
    }
    mask
}

/// Every bit of every odd-degree slot
const fn odd_slot_mask(bits: u32) -> Packed {
    let full = (1 << bits) - 1;
    let mut mask = 0;
    let mut shift = bits;
    while shift < PACKED_BITS {
        mask |= full << shift;
        shift += 2 * bits;
    }
    mask
}

/// Masks selecting the spill of a partial product shifted by 0..m bits
const fn spill_masks(bits: u32) -> [Packed; MAX_SYMBOL_BITS] {
    let lsb = slot_lsb_mask(bits);
    let mut masks = [0; MAX_SYMBOL_BITS];
    let mut shift = 1;
    while shift < bits as usize {
        masks[shift] = lsb.wrapping_mul((1 << shift) - 1);
        shift += 1;
    }
    masks
}

/// Slot layout constants for a field
struct Layout<F>(PhantomData<F>);

impl<F: GaloisField> Layout<F> {
    const BITS: u32 = F::SYMBOL_BITS;
    const SYMBOL_MASK: Packed = F::MAX as Packed;
    const ODD: Packed = odd_slot_mask(F::SYMBOL_BITS);
    const SPILL: [Packed; MAX_SYMBOL_BITS] = spill_masks(F::SYMBOL_BITS);
    // A term survives reduction only if its spill still fits in the container
    const MAX_TERMS: u32 = (PACKED_BITS - (F::SYMBOL_BITS - 1)) / F::SYMBOL_BITS;
}

/// Number of terms a packed polynomial over `F` can hold
#[inline]
pub fn max_terms<F: GaloisField>() -> u32 {
    Layout::<F>::MAX_TERMS
}

/// Coefficient of x^degree
#[inline]
pub fn coefficient<F: GaloisField>(p: Packed, degree: u32) -> u8 {
    let shift = degree * Layout::<F>::BITS;
    if shift >= PACKED_BITS {
        return 0;
    }
    ((p >> shift) & Layout::<F>::SYMBOL_MASK) as u8
}

/// Pack coefficients given lowest degree first
pub fn from_coefficients<F: GaloisField>(coefficients: &[u8]) -> Packed {
    coefficients
        .iter()
        .rev()
        .fold(0, |p, &c| (p << Layout::<F>::BITS) | (c & F::MAX) as Packed)
}

/// Unpack the first `terms` coefficients, lowest degree first
pub fn coefficients<F: GaloisField>(p: Packed, terms: u32) -> Vec<u8> {
    (0..terms).map(|degree| coefficient::<F>(p, degree)).collect()
}

/// Mask covering the lowest `bits` bits
#[inline]
pub fn low_bits(bits: u32) -> Packed {
    if bits >= PACKED_BITS {
        Packed::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Fold spilled bits back into their slots
///
/// A spill bit sitting `t` bits into the slot above stands for x^(m+t) of the slot below.
/// Each low term x^j of the primitive polynomial contributes that bit shifted down by
/// `m - j`.
#[inline]
fn reduce<F: GaloisField>(p: Packed, overflow: Packed) -> Packed {
    let mut reduced = p;
    let mut tail = F::PRIME & F::MAX;
    let mut degree = 0;
    while tail != 0 {
        if tail & 1 != 0 {
            reduced ^= overflow >> (Layout::<F>::BITS - degree);
        }
        tail >>= 1;
        degree += 1;
    }
    reduced
}

/// Combine partial products, partials[b] being the product shifted left by `b` bits
#[inline]
fn fold<F: GaloisField>(partials: &[Packed; MAX_SYMBOL_BITS]) -> Packed {
    let mut acc = partials[0];
    let mut overflow = 0;
    for bit in 1..Layout::<F>::BITS as usize {
        let spill = Layout::<F>::SPILL[bit];
        overflow ^= partials[bit] & spill;
        acc ^= partials[bit] & !spill;
    }
    reduce::<F>(acc, overflow)
}

/// Multiply every coefficient of `p` by the scalar `x`
#[inline]
pub fn scale<F: GaloisField>(p: Packed, x: u8) -> Packed {
    let mut partials = [0; MAX_SYMBOL_BITS];
    let mut shifted = p;
    for (bit, partial) in partials
        .iter_mut()
        .enumerate()
        .take(Layout::<F>::BITS as usize)
    {
        if x & (1 << bit) != 0 {
            *partial = shifted;
        }
        shifted <<= 1;
    }
    fold::<F>(&partials)
}

/// Multiply two packed polynomials
///
/// Every nonzero term of `q` contributes a copy of `p` shifted into place, with the same
/// spill handling as [`scale`]. Product terms of degree [`max_terms`] or above are lost, so
/// callers needing the full product must keep `order(p) + order(q) < max_terms`. Keep the
/// shorter operand in `q`; the work grows with its length.
pub fn mul<F: GaloisField>(p: Packed, q: Packed) -> Packed {
    let bits = Layout::<F>::BITS;
    let mut partials = [0; MAX_SYMBOL_BITS];
    let mut rest = q;
    let mut offset = 0;
    while rest != 0 {
        let term = (rest & Layout::<F>::SYMBOL_MASK) as u8;
        for (bit, partial) in partials.iter_mut().enumerate().take(bits as usize) {
            if term & (1 << bit) != 0 {
                *partial ^= p.checked_shl(offset + bit as u32).unwrap_or(0);
            }
        }
        rest >>= bits;
        offset += bits;
    }
    fold::<F>(&partials)
}

/// Multiply by a `q` whose constant term is known to be 1
///
/// `p * q = p + x * (p * (q / x))`, which saves a full pass for the constant term and
/// gives the product one more term of headroom.
#[inline]
pub fn mul_q0_monic<F: GaloisField>(p: Packed, q: Packed) -> Packed {
    let bits = Layout::<F>::BITS;
    p ^ (mul::<F>(p, q >> bits) << bits)
}

/// Remainder of `p(x) * x^deg(q)` divided by the monic `q(x)`
///
/// Sizes are in bits (a multiple of the symbol width) and must cover each operand's
/// highest nonzero term. The dividend is first aligned to sit above the divisor, which is
/// exactly the systematic encoding step, so the result has at most `deg(q)` terms.
pub fn modulo<F: GaloisField>(p: Packed, p_size: u32, q: Packed, q_size: u32) -> Packed {
    let bits = Layout::<F>::BITS;
    if p_size < bits || q_size < bits {
        return 0;
    }
    let p_top = p_size - bits;
    let q_top = q_size - bits;
    debug_assert!(p_top + q_top + 2 * bits - 1 <= PACKED_BITS);

    let mut remainder = p << q_top;
    let mut divisor = q << p_top;
    for i in (q_top..=p_top + q_top).rev().step_by(bits as usize) {
        let lead = ((remainder >> i) & Layout::<F>::SYMBOL_MASK) as u8;
        remainder ^= scale::<F>(divisor, lead);
        divisor >>= bits;
    }

    remainder
}

/// Evaluate `p` at `x` with Horner's method, reading the `p_size` lowest bits of `p`
pub fn eval<F: GaloisField>(p: Packed, p_size: u32, x: u8) -> u8 {
    let bits = Layout::<F>::BITS;
    let table = F::table();
    let terms = p_size / bits;
    (0..terms).rev().fold(0, |y, degree| {
        table.mul(y, x) ^ coefficient::<F>(p, degree)
    })
}

/// Formal derivative in characteristic 2
///
/// Even-degree terms vanish (their coefficient doubles to zero) and odd-degree terms drop
/// one degree.
#[inline]
pub fn formal_derivative<F: GaloisField>(p: Packed) -> Packed {
    (p & Layout::<F>::ODD) >> Layout::<F>::BITS
}

/// Degree of the highest nonzero term, `None` for the zero polynomial
#[inline]
pub fn order<F: GaloisField>(p: Packed) -> Option<u32> {
    match size::<F>(p) {
        0 => None,
        bits => Some(bits / Layout::<F>::BITS - 1),
    }
}

/// Size in bits up to and including the highest nonzero term
#[inline]
pub fn size<F: GaloisField>(p: Packed) -> u32 {
    let bits = Layout::<F>::BITS;
    let used = PACKED_BITS - p.leading_zeros();
    used.div_ceil(bits) * bits
}

/// Format with one digit per coefficient: octal for 3-bit slots, hex for 4-bit slots
pub fn format_symbols<F: GaloisField>(p: Packed) -> String {
    match Layout::<F>::BITS {
        3 => format!("{p:#o}"),
        4 => format!("{p:#x}"),
        _ => format!("{p:#b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::{Gf16, Gf8};

    #[test]
    fn test_layout_masks() {
        assert_eq!(Layout::<Gf8>::ODD & 0o7777777777, 0o7070707070);
        assert_eq!(Layout::<Gf16>::ODD, 0xF0F0_F0F0_F0F0_F0F0);
        assert_eq!(Layout::<Gf8>::SPILL[1] & 0o77777777777, 0o11111111111);
        assert_eq!(Layout::<Gf16>::SPILL[3], 0x7777_7777_7777_7777);
        assert_eq!(max_terms::<Gf8>(), 20);
        assert_eq!(max_terms::<Gf16>(), 15);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale::<Gf8>(0o137, 3), 0o352);
        assert_eq!(scale::<Gf8>(0o137, 0), 0);
        assert_eq!(scale::<Gf8>(0o137, 1), 0o137);
        assert_eq!(scale::<Gf16>(0xFED_CBA9_8765_4321, 0xB), 0x386_D92C_74F1_AE5B);
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul::<Gf8>(0o137, 0o35), 0o3066);
        assert_eq!(mul::<Gf8>(0o137, 1), 0o137);
        assert_eq!(mul::<Gf8>(0o137, 0), 0);
        assert_eq!(mul::<Gf16>(0x1234, 0x56), 0x5_C3DB);
    }

    #[test]
    fn test_mul_q0_monic_matches_mul() {
        // (1 + 3x + 2x^2) has a unit constant term
        assert_eq!(mul_q0_monic::<Gf8>(0o36, 0o231), mul::<Gf8>(0o36, 0o231));
        assert_eq!(mul_q0_monic::<Gf8>(0o36, 0o231), 0o6226);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo::<Gf8>(0o1117, 12, 0o132, 9), 0o35);
        // an oversized dividend size only adds leading zero terms
        assert_eq!(modulo::<Gf8>(0o1117, 15, 0o132, 9), 0o35);
        assert_eq!(modulo::<Gf8>(0o123, 9, 0o13123, 15), 0o13);
    }

    #[test]
    fn test_eval() {
        assert_eq!(eval::<Gf8>(0o17131, 15, 1), 5);
        assert_eq!(eval::<Gf8>(0o17131, 15, 0), 1);
        assert_eq!(eval::<Gf8>(0o17131, 0, 3), 0);
        // 1 + x at x = 1 is a root
        assert_eq!(eval::<Gf16>(0x11, 8, 1), 0);
    }

    #[test]
    fn test_formal_derivative() {
        assert_eq!(formal_derivative::<Gf8>(0o621), 0o2);
        assert_eq!(formal_derivative::<Gf8>(0o7654321), 0o60402);
        assert_eq!(formal_derivative::<Gf16>(0x4321), 0x402);
    }

    #[test]
    fn test_order_and_size() {
        assert_eq!(order::<Gf8>(0), None);
        assert_eq!(size::<Gf8>(0), 0);
        assert_eq!(order::<Gf8>(1), Some(0));
        assert_eq!(order::<Gf8>(0o621), Some(2));
        assert_eq!(size::<Gf8>(0o621), 9);
        assert_eq!(size::<Gf8>(0o100), 9);
        assert_eq!(order::<Gf16>(0x1_0000), Some(4));
        assert_eq!(size::<Gf16>(0x8), 4);
    }

    #[test]
    fn test_coefficient_helpers() {
        let p = from_coefficients::<Gf8>(&[3, 2, 1]);
        assert_eq!(p, 0o123);
        assert_eq!(coefficients::<Gf8>(p, 4), vec![3, 2, 1, 0]);
        assert_eq!(coefficient::<Gf16>(0xABC, 2), 0xA);
        assert_eq!(coefficient::<Gf16>(0xABC, 16), 0);
    }
}
