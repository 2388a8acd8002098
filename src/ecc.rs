//! Error correction code implementations.
//!
//! This module provides binary cyclic codes built on a shared Galois field
//! context:
//! - GF(2^m) arithmetic tables ([`FieldContext`])
//! - BCH codes with Berlekamp-Massey and Chien search decoding ([`BchCoder`])
//! - Hamming codes with syndrome table decoding ([`HammingCoder`])
//! - Chase soft-decision decoding for any [`BlockCode`]
//!
//! # Error Correction Algorithms
//!
//! Hard-decision decoding computes syndromes of the received word, solves the
//! key equation for the error locator, finds its roots and flips the located
//! bits. Every correction is verified by recomputing the syndromes.
//!
//! Soft-decision decoding takes log-likelihood ratios (positive means bit 0),
//! tries bit-flip patterns over the least reliable positions, and keeps the
//! valid codeword that best correlates with the LLRs.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use cyclic_fec::ecc::{BchCoder, BlockCode, DecodeOptions, FieldContext, Received};
//!
//! let field = Arc::new(FieldContext::new(4).unwrap());
//! let bch = BchCoder::new(15, 7, 2, field).unwrap();
//!
//! let message = [1, 0, 1, 1, 0, 0, 1];
//! let mut word = bch.encode(&message).unwrap();
//! word[2] ^= 1;
//! word[9] ^= 1;
//!
//! let result = bch.decode(Received::Bits(&word), &DecodeOptions::hard()).unwrap();
//! assert!(result.success());
//! assert_eq!(result.message, message);
//! assert_eq!(result.errors_corrected, 2);
//! ```

use crate::error::Result;

/// Common interface of the binary block codes in this module
pub trait BlockCode {
    /// Codeword length (n)
    fn code_length(&self) -> usize;

    /// Message length (k)
    fn data_length(&self) -> usize;

    /// Encode exactly `k` message bits into an `n`-bit codeword
    fn encode(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Algebraic hard-decision correction of one `n`-bit word.
    ///
    /// Returns an error whose [`is_decode_failure`](crate::Error::is_decode_failure)
    /// is true when the word cannot be corrected. A returned correction is
    /// always a verified codeword.
    fn correct(&self, word: &[u8]) -> Result<Correction>;

    /// Message bits of a codeword (systematic codes keep them first)
    fn extract_message(&self, codeword: &[u8]) -> Vec<u8> {
        codeword[..self.data_length().min(codeword.len())].to_vec()
    }

    /// Decode a received word, hard or soft, according to `options`
    fn decode(&self, received: Received<'_>, options: &DecodeOptions) -> Result<DecodeResult> {
        decode::decode_block(self, received, options)
    }
}

/// GF(2^m) context and arithmetic
pub mod field;
pub use field::{default_primitive_poly, Element, FieldContext};

/// Cyclic code parameters and systematic encoding
pub mod cyclic;
pub use cyclic::{CodeParameters, CyclicEncoder};

/// Syndrome calculation
pub mod syndrome;
pub use syndrome::{compute_syndromes, SyndromeVector};

/// Berlekamp-Massey key equation solver
pub mod berlekamp_massey;
pub use berlekamp_massey::{berlekamp_massey, ErrorLocator};

/// Chien search
pub mod chien;
pub use chien::chien_search;

/// Decode options and results
pub mod decode;
pub use decode::{Correction, DecodeOptions, DecodeResult, Received};

/// Chase soft-decision decoding
pub mod chase;
pub use chase::{chase_decode, ChaseCandidate, ChaseConfig, TestPatterns, MAX_TEST_POSITIONS};

/// BCH codes
pub mod bch;
pub use bch::{create_bch_15_7_2, create_bch_31_16_3, create_bch_63_45_3, BchCoder};

/// Hamming codes
pub mod hamming;
pub use hamming::{create_hamming_7_4, create_hamming_8_4, HammingCoder};

/// LLR utilities
pub mod llr;

/// Bit packing helpers
pub mod bits;
pub use bits::{pack_bits, unpack_bits};
