//! Forward error correction over binary cyclic codes.
//!
//! The crate is built around an immutable [`FieldContext`](ecc::FieldContext)
//! holding GF(2^m) log, antilog and inverse tables. BCH and Hamming coders
//! share a context through an `Arc` and expose hard-decision algebraic
//! decoding as well as Chase soft-decision decoding from LLR input.

pub mod ecc;
pub mod error;

pub use ecc::{
    BchCoder, BlockCode, DecodeOptions, DecodeResult, FieldContext, HammingCoder, Received,
};
pub use error::{Error, Result};
