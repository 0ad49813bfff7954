//! Reed-Solomon codec handle with a fixed check symbol count

use super::decoder::{block_mask, decode_with, Decoded, PositionMask};
use super::encoder::{encode_with, generator_for, message_mask};
use super::error::RsResult;
use super::generator::RsField;
use crate::poly::Packed;
use std::marker::PhantomData;

/// Systematic Reed-Solomon code over `F` with `k` check symbols
///
/// Holds no state beyond the check symbol count and its generator, so one instance can be
/// shared freely and every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReedSolomon<F: RsField> {
    check_symbols: u32,
    generator: Packed,
    _field: PhantomData<F>,
}

impl<F: RsField> ReedSolomon<F> {
    /// Create a codec, validating `1 <= check_symbols <= F::MAX_CHECK_SYMBOLS`
    pub fn new(check_symbols: u32) -> RsResult<Self> {
        let generator = generator_for::<F>(check_symbols)?;
        Ok(Self {
            check_symbols,
            generator,
            _field: PhantomData,
        })
    }

    #[inline]
    pub fn check_symbols(&self) -> u32 {
        self.check_symbols
    }

    /// Message symbols per codeword
    #[inline]
    pub fn message_symbols(&self) -> u32 {
        F::BLOCK_SYMBOLS - self.check_symbols
    }

    /// Size of a full codeword in bits
    #[inline]
    pub fn codeword_bits(&self) -> u32 {
        F::BLOCK_SYMBOLS * F::SYMBOL_BITS
    }

    /// Mask of the message bits accepted by [`encode`](Self::encode)
    #[inline]
    pub fn message_mask(&self) -> Packed {
        message_mask::<F>(self.check_symbols)
    }

    /// Generator polynomial `g_k`
    #[inline]
    pub fn generator(&self) -> Packed {
        self.generator
    }

    /// Position mask covering every symbol of the codeword
    #[inline]
    pub fn all_positions(&self) -> PositionMask {
        block_mask::<F>()
    }

    /// Encode `message`, dropping bits beyond the message slots
    pub fn encode(&self, message: Packed) -> Packed {
        encode_with::<F>(message, self.generator, self.check_symbols)
    }

    /// Decode a full-size received codeword
    pub fn decode(
        &self,
        received: Packed,
        erasures: PositionMask,
        transmitted: PositionMask,
    ) -> RsResult<Packed> {
        self.decode_detailed(received, erasures, transmitted)
            .map(|decoded| decoded.codeword)
    }

    /// Decode a full-size received codeword and report the corrected positions
    pub fn decode_detailed(
        &self,
        received: Packed,
        erasures: PositionMask,
        transmitted: PositionMask,
    ) -> RsResult<Decoded> {
        decode_with::<F>(
            received,
            self.codeword_bits(),
            self.check_symbols,
            erasures,
            transmitted,
        )
    }
}
