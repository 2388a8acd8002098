//! BCH (Bose-Chaudhuri-Hocquenghem) error correction code implementation.
//!
//! BCH codes are a class of cyclic error-correcting codes constructed using polynomials over
//! finite fields. Named after their inventors Raj Bose, Dwijendra Kumar Chaudhuri, and Alexis
//! Hocquenghem, they are powerful codes that can detect and correct multiple random errors.
//!
//! BCH codes can be designed to correct a specific number of bit errors per block of data,
//! making them valuable in applications such as:
//!
//! - Digital storage systems (hard drives, SSDs)
//! - Telecommunications
//! - Memory systems (RAM, NAND Flash)
//! - Digital television (DVB, ATSC)
//!
//! This implementation provides:
//! - Narrow-sense binary BCH codes over any supported GF(2^m), including shortened codes
//! - Systematic encoding by generator polynomial division
//! - Hard-decision decoding: syndromes, Berlekamp-Massey, Chien search, residual check
//! - Chase soft-decision decoding through [`BlockCode::decode`]

use crate::ecc::berlekamp_massey::berlekamp_massey;
use crate::ecc::chien::chien_search;
use crate::ecc::cyclic::{CodeParameters, CyclicEncoder};
use crate::ecc::decode::Correction;
use crate::ecc::field::FieldContext;
use crate::ecc::syndrome::{compute_syndromes, SyndromeVector};
use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use log::debug;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Binary BCH code sharing a field context
#[derive(Debug, Clone)]
pub struct BchCoder {
    /// Field the code roots live in
    field: Arc<FieldContext>,
    /// Systematic encoder holding n, k, t and g(x)
    encoder: CyclicEncoder,
}

impl BchCoder {
    /// Create an (n, k, t) BCH code over `field`.
    ///
    /// # Arguments
    ///
    /// * `n` - Code length, `2^m - 1` for a primitive code or less when shortened
    /// * `k` - Data length, must equal `n - deg g(x)`
    /// * `t` - Error correction capability
    /// * `field` - Shared GF(2^m) context
    ///
    /// # Returns
    ///
    /// A new `BchCoder` instance or [`Error::InvalidCodeParameters`]
    pub fn new(n: usize, k: usize, t: usize, field: Arc<FieldContext>) -> Result<Self> {
        let params = CodeParameters::bch(&field, n, k, t)?;
        debug!("created BCH({}, {}, {}) over {}", n, k, t, field);

        Ok(BchCoder {
            field,
            encoder: CyclicEncoder::new(params),
        })
    }

    /// Create a primitive (n, k, t) BCH code with its own field context.
    ///
    /// The field exponent is derived from `n = 2^m - 1` and the default
    /// primitive polynomial is used.
    pub fn from_length(n: usize, k: usize, t: usize) -> Result<Self> {
        if n < 3 || !(n + 1).is_power_of_two() {
            return Err(Error::InvalidCodeParameters(format!(
                "code length must be 2^m - 1 for some m >= 2, got {}",
                n
            )));
        }

        let m = (n + 1).trailing_zeros();
        let field = FieldContext::new(m).map_err(|err| match err {
            Error::InvalidFieldParameter(msg) => Error::InvalidCodeParameters(msg),
            other => other,
        })?;

        Self::new(n, k, t, Arc::new(field))
    }

    /// Get the error correction capability (t)
    pub fn error_correction_capability(&self) -> usize {
        self.encoder.params().t
    }

    /// Code parameters, including the generator polynomial
    pub fn params(&self) -> &CodeParameters {
        self.encoder.params()
    }

    /// Shared field context
    pub fn field(&self) -> &Arc<FieldContext> {
        &self.field
    }

    /// Syndromes `S_1 .. S_2t` of a received word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputLength`] unless `word.len() == n`.
    pub fn syndromes(&self, word: &[u8]) -> Result<SyndromeVector> {
        self.check_length(word)?;
        Ok(compute_syndromes(&self.field, word, 2 * self.error_correction_capability()))
    }

    fn check_length(&self, word: &[u8]) -> Result<()> {
        let n = self.code_length();
        if word.len() != n {
            return Err(Error::InvalidInputLength {
                expected: n,
                actual: word.len(),
            });
        }
        Ok(())
    }
}

impl BlockCode for BchCoder {
    fn code_length(&self) -> usize {
        self.encoder.params().n
    }

    fn data_length(&self) -> usize {
        self.encoder.params().k
    }

    fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.encoder.encode(message)
    }

    fn correct(&self, word: &[u8]) -> Result<Correction> {
        let syndromes = self.syndromes(word)?;
        let mut codeword: Vec<u8> = word.iter().map(|&b| u8::from(b != 0)).collect();

        if syndromes.is_zero() {
            return Ok(Correction {
                codeword,
                positions: Vec::new(),
            });
        }

        let t = self.error_correction_capability();
        let locator = berlekamp_massey(&self.field, &syndromes, t)?;
        let positions = chien_search(&self.field, &locator, codeword.len())?;

        for &pos in &positions {
            codeword[pos] ^= 1;
        }

        if !compute_syndromes(&self.field, &codeword, 2 * t).is_zero() {
            return Err(Error::ResidualSyndrome);
        }

        Ok(Correction {
            codeword,
            positions,
        })
    }
}

impl Display for BchCoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let params = self.encoder.params();
        write!(
            f,
            "BCH({},{},{}) over GF(2^{})",
            params.n,
            params.k,
            params.t,
            self.field.m()
        )
    }
}

/// Create a standard (15,7,2) BCH code used in many applications
pub fn create_bch_15_7_2() -> Result<BchCoder> {
    BchCoder::from_length(15, 7, 2)
}

/// Create a standard (31,16,3) BCH code used in many applications
pub fn create_bch_31_16_3() -> Result<BchCoder> {
    BchCoder::from_length(31, 16, 3)
}

/// Create a standard (63,45,3) BCH code
pub fn create_bch_63_45_3() -> Result<BchCoder> {
    BchCoder::from_length(63, 45, 3)
}
