//! Exhaustive checks of GF(8) and GF(16) arithmetic
//!
//! Both fields are small enough to test every pair of elements.

use gfpack::galois::{GaloisError, GaloisField};
use gfpack::{Gf16, Gf8};

/// Multiply by shift-and-reduce, independent of the lookup tables
fn carryless_mul<F: GaloisField>(a: u8, b: u8) -> u8 {
    let mut product = 0;
    let mut a = a;
    for bit in 0..F::SYMBOL_BITS {
        if b & (1 << bit) != 0 {
            product ^= a;
        }
        a = F::mul_by_2(a);
    }
    product
}

fn check_field<F: GaloisField>() {
    for a in 0..=F::MAX {
        for b in 0..=F::MAX {
            let product = F::mul(a, b);
            assert_eq!(product, carryless_mul::<F>(a, b), "{} {a} * {b}", F::NAME);
            assert!(product <= F::MAX);

            if b == 0 {
                assert_eq!(F::div(a, b), Err(GaloisError::DivisionByZero));
            } else {
                assert_eq!(F::div(product, b), Ok(a), "{} {product} / {b}", F::NAME);
            }
        }
    }
}

#[test]
fn test_gf8_exhaustive() {
    check_field::<Gf8>();
}

#[test]
fn test_gf16_exhaustive() {
    check_field::<Gf16>();
}

#[test]
fn test_exp_log_are_inverse() {
    for x in 1..=Gf16::MAX {
        let power = Gf16::log(x).unwrap();
        assert_eq!(Gf16::exp(power as u32), x);
    }
    for power in 0..Gf8::MAX as u32 {
        assert_eq!(Gf8::log(Gf8::exp(power)), Some(power as u8));
    }
    assert_eq!(Gf8::log(0), None);
}

#[test]
fn test_two_is_primitive() {
    // 2 generates the whole multiplicative group
    let mut seen = vec![false; Gf16::MAX as usize + 1];
    for power in 0..Gf16::MAX as u32 {
        seen[Gf16::exp(power) as usize] = true;
    }
    assert!(seen[1..].iter().all(|&s| s));
    assert_eq!(Gf16::exp(Gf16::MAX as u32), 1);
}

#[test]
fn test_inverse() {
    for x in 1..=Gf8::MAX {
        assert_eq!(Gf8::mul(x, Gf8::inverse(x).unwrap()), 1);
    }
    assert_eq!(Gf16::inverse(0), Err(GaloisError::DivisionByZero));
}
