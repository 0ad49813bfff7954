//! Reed-Solomon errors-and-erasures decoding
//!
//! ## Pipeline
//!
//! ```text
//! erasure count check ─→ syndromes ─→ erasure locator ─→ Forney syndromes
//!        │                   │ (all zero: done)
//!        ↓                   ↓
//!  BeyondSingletonBound   Berlekamp-Massey ─→ capacity check ─→ root search
//!                                                  │                 │
//!                                           TooManyErrors    RootCountMismatch
//!                                                                    ↓
//!                              combined errata locator/evaluator ─→ Forney ─→ XOR
//! ```
//!
//! Every stage is a pure function of its inputs and is public so the intermediate
//! polynomials can be inspected and tested on their own.
//!
//! ## Conventions
//!
//! Syndrome `S_j` is the received word evaluated at `2^j`, `j = 1..=k`, stored in slot
//! `j - 1`. Symbol position `i` (bit `i` of a [`PositionMask`], slot `i` of the codeword) has
//! locator `X_i = 2^i`, and locator polynomials are built as products of `(1 + X_i x)`, so
//! their constant term is always 1 and their roots are the inverses `2^-i`.

use super::encoder::generator_for;
use super::error::{RsError, RsResult};
use super::generator::RsField;
use crate::galois::GaloisField;
use crate::poly::{self, Packed};
use log::{debug, trace};

/// One bit per codeword symbol, bit 0 being the lowest (check) slot
pub type PositionMask = u16;

/// Outcome of a successful decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Corrected codeword
    pub codeword: Packed,
    /// Positions declared as erasures by the caller
    pub erasures: PositionMask,
    /// Positions the decoder located as errors
    pub errors: PositionMask,
}

impl Decoded {
    /// Every position whose value was solved for
    pub fn errata(&self) -> PositionMask {
        self.erasures | self.errors
    }
}

/// Mask with one bit for every symbol of a full codeword
#[inline]
pub fn block_mask<F: GaloisField>() -> PositionMask {
    ((1u32 << F::BLOCK_SYMBOLS) - 1) as PositionMask
}

/// Evaluate the received word at `2^k, ..., 2^1`, packing `S_j` into slot `j - 1`
pub fn syndromes<F: GaloisField>(
    received: Packed,
    received_bits: u32,
    check_symbols: u32,
) -> Packed {
    let bits = F::SYMBOL_BITS;
    (1..=check_symbols).rev().fold(0, |synd, j| {
        (synd << bits) | poly::eval::<F>(received, received_bits, F::exp(j)) as Packed
    })
}

/// `Π (1 + 2^i x)` over every erased position `i`
///
/// Multiplying by a binomial with unit constant term is a scale of the running product by
/// `2^i`, shifted up one slot and added back in.
pub fn erasure_locator<F: GaloisField>(erasures: PositionMask) -> Packed {
    let bits = F::SYMBOL_BITS;
    (0..F::BLOCK_SYMBOLS)
        .filter(|&i| erasures & (1 << i) != 0)
        .fold(1, |locator, i| {
            locator ^ (poly::scale::<F>(locator, F::exp(i)) << bits)
        })
}

/// `syndromes * locator mod x^k`
///
/// With the erasure locator this yields the Forney syndromes, with the full errata locator
/// the errata evaluator. `locator` must have a constant term of 1.
pub fn errata_evaluator<F: GaloisField>(
    syndromes: Packed,
    check_symbols: u32,
    locator: Packed,
) -> Packed {
    let product = poly::mul_q0_monic::<F>(syndromes, locator);
    product & poly::low_bits(check_symbols * F::SYMBOL_BITS)
}

/// Berlekamp-Massey over the first `count` terms of `syndromes`
///
/// Tracks the current locator `C(x)`, the locator `B(x)` from before the last length
/// change, the length `L`, the discrepancy `b` at that change and the steps `m` since. The
/// length changes when `2L <= n`.
pub fn error_locator<F: GaloisField>(syndromes: Packed, count: u32) -> RsResult<Packed> {
    let bits = F::SYMBOL_BITS;
    let mut locator: Packed = 1;
    let mut previous: Packed = 1;
    let mut length = 0u32;
    let mut last_discrepancy = 1u8;
    let mut delay = 1u32;

    for n in 0..count {
        let mut discrepancy = poly::coefficient::<F>(syndromes, n);
        for i in 1..=length {
            discrepancy ^= F::mul(
                poly::coefficient::<F>(locator, i),
                poly::coefficient::<F>(syndromes, n - i),
            );
        }

        if discrepancy != 0 {
            let snapshot = locator;
            let factor = F::div(discrepancy, last_discrepancy)?;
            locator ^= poly::scale::<F>(previous, factor) << (delay * bits);

            if 2 * length <= n {
                previous = snapshot;
                length = n + 1 - length;
                last_discrepancy = discrepancy;
                delay = 0;
            }
        }
        delay += 1;
    }

    Ok(locator)
}

/// Positions among `candidates` whose inverse locator `2^-i` is a root of `locator`
pub fn error_positions<F: GaloisField>(
    locator: Packed,
    candidates: PositionMask,
) -> PositionMask {
    let size = F::BLOCK_SYMBOLS * F::SYMBOL_BITS;
    (0..F::BLOCK_SYMBOLS)
        .filter(|&i| candidates & (1 << i) != 0)
        .filter(|&i| poly::eval::<F>(locator, size, F::exp(F::MAX as u32 - i)) == 0)
        .fold(0, |found, i| found | (1 << i))
}

/// Forney's algorithm: `e_i = Ω(X_i^-1) / Λ'(X_i^-1)` for every position in `positions`
///
/// The first consecutive root is 2^1, so the usual `X_i^(1-c)` factor is 1.
pub fn errata_magnitudes<F: GaloisField>(
    evaluator: Packed,
    check_symbols: u32,
    locator: Packed,
    positions: PositionMask,
) -> RsResult<Packed> {
    let bits = F::SYMBOL_BITS;
    let size = check_symbols * bits;
    let derivative = poly::formal_derivative::<F>(locator);

    let mut magnitudes = 0;
    for i in (0..F::BLOCK_SYMBOLS).filter(|&i| positions & (1 << i) != 0) {
        let root = F::exp(F::MAX as u32 - i);
        let numerator = poly::eval::<F>(evaluator, size, root);
        let denominator = poly::eval::<F>(derivative, size, root);
        magnitudes |= (F::div(numerator, denominator)? as Packed) << (i * bits);
    }

    Ok(magnitudes)
}

/// Decode with an already validated check symbol count
pub(crate) fn decode_with<F: RsField>(
    received: Packed,
    received_bits: u32,
    check_symbols: u32,
    erasures: PositionMask,
    transmitted: PositionMask,
) -> RsResult<Decoded> {
    let bits = F::SYMBOL_BITS;
    if erasures & !block_mask::<F>() != 0 {
        return Err(RsError::InvalidPositions {
            mask: erasures,
            block_symbols: F::BLOCK_SYMBOLS,
        });
    }

    let erasure_count = erasures.count_ones();
    if erasure_count > check_symbols {
        debug!("{} erasures with {} check symbols", erasure_count, check_symbols);
        return Err(RsError::BeyondSingletonBound {
            erasures: erasure_count,
            check_symbols,
        });
    }

    let synd = syndromes::<F>(received, received_bits, check_symbols);
    trace!("{} syndromes: {:#o}", F::NAME, synd);
    if synd == 0 {
        debug!("All syndromes zero, codeword intact");
        return Ok(Decoded {
            codeword: received,
            erasures,
            errors: 0,
        });
    }

    let mut locator: Packed = 1;
    let mut evaluator = synd;
    if erasures != 0 {
        locator = erasure_locator::<F>(erasures);
        evaluator = errata_evaluator::<F>(synd, check_symbols, locator);
        trace!(
            "Erasure locator: {:#o}, Forney syndromes: {:#o}",
            locator,
            evaluator
        );
    }

    let mut errors = 0;
    // With every check symbol spent on erasures there is nothing left to locate errors
    if erasure_count < check_symbols {
        let remaining = check_symbols - erasure_count;
        let forney_tail = evaluator >> (erasure_count * bits);
        let error_loc = error_locator::<F>(forney_tail, remaining)?;
        let error_count = poly::order::<F>(error_loc).unwrap_or(0);
        trace!("Error locator: {:#o} (degree {})", error_loc, error_count);

        if 2 * error_count > remaining {
            debug!(
                "Error locator degree {} exceeds capacity of {} remaining syndromes",
                error_count, remaining
            );
            return Err(RsError::TooManyErrors {
                errors: error_count,
                erasures: erasure_count,
                check_symbols,
            });
        }

        let candidates = transmitted & block_mask::<F>() & !erasures;
        errors = error_positions::<F>(error_loc, candidates);
        let found = errors.count_ones();
        if found != error_count {
            debug!(
                "Root search found {} of {} error positions ({:#b})",
                found, error_count, errors
            );
            return Err(RsError::RootCountMismatch {
                expected: error_count,
                found,
            });
        }

        locator = poly::mul::<F>(locator, error_loc);
        evaluator = errata_evaluator::<F>(evaluator, check_symbols, error_loc);
    }

    let errata = erasures | errors;
    let magnitudes = errata_magnitudes::<F>(evaluator, check_symbols, locator, errata)?;
    debug!(
        "Corrected {} erasures and {} errors",
        erasure_count,
        errors.count_ones()
    );

    Ok(Decoded {
        codeword: received ^ magnitudes,
        erasures,
        errors,
    })
}

/// Decode and report which positions were corrected
///
/// `received_bits` is the size of `received` in bits, `erasures` marks symbols known to be
/// bad, and `transmitted` marks the symbols that were actually sent; untransmitted padding
/// is never reported as an error position.
pub fn decode_detailed<F: RsField>(
    received: Packed,
    received_bits: u32,
    check_symbols: u32,
    erasures: PositionMask,
    transmitted: PositionMask,
) -> RsResult<Decoded> {
    generator_for::<F>(check_symbols)?;
    decode_with::<F>(received, received_bits, check_symbols, erasures, transmitted)
}

/// Decode `received`, returning the corrected codeword
pub fn decode<F: RsField>(
    received: Packed,
    received_bits: u32,
    check_symbols: u32,
    erasures: PositionMask,
    transmitted: PositionMask,
) -> RsResult<Packed> {
    decode_detailed::<F>(received, received_bits, check_symbols, erasures, transmitted)
        .map(|decoded| decoded.codeword)
}
