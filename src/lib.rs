//! Reed-Solomon forward error correction over GF(8) and GF(16) with packed polynomials
//!
//! Every polynomial, message and codeword lives in a single `u64`, one coefficient per 3-bit
//! (GF(8)) or 4-bit (GF(16)) slot. Scaling and multiplication work on all coefficients of a
//! word at once; see [`poly`] for the layout.
//!
//! ```
//! use gfpack::{Gf8, ReedSolomon};
//!
//! let rs = ReedSolomon::<Gf8>::new(4).unwrap();
//! let codeword = rs.encode(0o123);
//! assert_eq!(codeword, 0o1230013);
//!
//! // two symbols damaged, no erasure hints
//! let corrected = rs.decode(0o30013, 0, rs.all_positions()).unwrap();
//! assert_eq!(corrected, codeword);
//! ```

pub mod args;
pub mod config;
pub mod galois;
pub mod poly;
pub mod reed_solomon;
pub mod tables;

pub use args::parse_args;
pub use config::{CodecConfig, FieldKind};
pub use galois::{GaloisError, GaloisField, Gf16, Gf8};
pub use poly::Packed;
pub use reed_solomon::{
    decode, decode_detailed, encode, Decoded, PositionMask, ReedSolomon, RsError, RsField,
    RsResult,
};
