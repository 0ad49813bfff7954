//! Reed-Solomon Error Correction Module
//!
//! BCH-view, systematic Reed-Solomon codes over GF(8) and GF(16) whose codewords fit in one
//! packed word: 7 symbols of 3 bits or 15 symbols of 4 bits. The generator's first
//! consecutive root is 2^1.
//!
//! Erasures (known positions) and errors (unknown positions) can be mixed freely as long as
//! `erasures + 2 * errors <= check symbols`.

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod generator;

pub use codec::ReedSolomon;
pub use decoder::{decode, decode_detailed, Decoded, PositionMask};
pub use encoder::encode;
pub use error::{RsError, RsResult};
pub use generator::{GeneratorTable, RsField};
