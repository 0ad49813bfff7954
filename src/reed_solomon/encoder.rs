//! Systematic Reed-Solomon encoding
//!
//! The message occupies the high slots of the codeword and the check symbols the low slots,
//! so `codeword = message * x^k + (message * x^k mod g_k)`.

use super::error::{RsError, RsResult};
use super::generator::RsField;
use crate::poly::{self, Packed};

/// Look up `g_k`, rejecting counts the generator table does not cover
pub(crate) fn generator_for<F: RsField>(check_symbols: u32) -> RsResult<Packed> {
    let invalid = RsError::InvalidCheckSymbols {
        field: F::NAME,
        requested: check_symbols,
        max: F::MAX_CHECK_SYMBOLS,
    };
    if check_symbols == 0 {
        return Err(invalid);
    }
    F::generators().get(check_symbols).ok_or(invalid)
}

/// Mask of the message symbols that fit alongside `check_symbols` check symbols
#[inline]
pub fn message_mask<F: RsField>(check_symbols: u32) -> Packed {
    let bits = F::SYMBOL_BITS;
    poly::low_bits(F::BLOCK_SYMBOLS.saturating_sub(check_symbols) * bits)
}

/// Encode with a known generator; `message` is truncated to the message slots
pub(crate) fn encode_with<F: RsField>(
    message: Packed,
    generator: Packed,
    check_symbols: u32,
) -> Packed {
    let check_size = check_symbols * F::SYMBOL_BITS;
    let message = message & message_mask::<F>(check_symbols);
    let message_size = poly::size::<F>(message);

    let generator_size = check_size + F::SYMBOL_BITS;
    let checks = poly::modulo::<F>(message, message_size, generator, generator_size);
    (message << check_size) | checks
}

/// Encode `message` into a codeword carrying `check_symbols` check symbols
///
/// Bits of `message` beyond the `BLOCK_SYMBOLS - check_symbols` message slots are dropped.
/// The result is divisible by `g_k`.
pub fn encode<F: RsField>(message: Packed, check_symbols: u32) -> RsResult<Packed> {
    let generator = generator_for::<F>(check_symbols)?;
    Ok(encode_with::<F>(message, generator, check_symbols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::{Gf16, Gf8};

    #[test]
    fn test_encode_reference_vector() {
        assert_eq!(encode::<Gf8>(0o123, 4), Ok(0o1230013));
    }

    #[test]
    fn test_encode_truncates_message() {
        // only 3 message slots remain next to 4 check symbols
        assert_eq!(encode::<Gf8>(0o7123, 4), encode::<Gf8>(0o123, 4));
        assert_eq!(message_mask::<Gf8>(4), 0o777);
        assert_eq!(message_mask::<Gf16>(4), 0xFFF_FFFF_FFFF);
    }

    #[test]
    fn test_encode_zero_message() {
        assert_eq!(encode::<Gf8>(0, 3), Ok(0));
    }

    #[test]
    fn test_encode_repetition_codes() {
        // k = MAX - 1 leaves one message symbol and g is all ones
        assert_eq!(encode::<Gf8>(1, 6), Ok(0o1111111));
        assert_eq!(encode::<Gf8>(0o7777777, 6), Ok(0o7777777));
        assert_eq!(encode::<Gf16>(7, 14), Ok(0x777_7777_7777_7777));
    }

    #[test]
    fn test_encode_gf16() {
        assert_eq!(encode::<Gf16>(0x123_4567_89AB, 4), Ok(0x123_4567_89AB_BAE6));
        assert_eq!(encode::<Gf16>(0xABC, 6), Ok(0xA_BC68_EB45));
    }

    #[test]
    fn test_encode_rejects_bad_check_counts() {
        assert!(matches!(
            encode::<Gf8>(1, 0),
            Err(RsError::InvalidCheckSymbols { requested: 0, .. })
        ));
        assert!(matches!(
            encode::<Gf8>(1, 7),
            Err(RsError::InvalidCheckSymbols { max: 6, .. })
        ));
        assert!(encode::<Gf16>(1, 14).is_ok());
        assert!(encode::<Gf16>(1, 15).is_err());
    }
}
