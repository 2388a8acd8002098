//! Decode contract shared by every block code.
//!
//! A received word is either hard bits or LLRs ([`Received`]). Decoding is
//! configured with [`DecodeOptions`] and produces a [`DecodeResult`].
//!
//! Invalid input or configuration is returned as `Err`. An uncorrectable word
//! is not an error of the call: it yields `Ok` with `success() == false` and
//! the typed reason in [`DecodeResult::failure`].

use crate::ecc::bits::hamming_distance;
use crate::ecc::chase::{chase_decode, ChaseConfig};
use crate::ecc::llr::{check_finite, hard_decision};
use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use log::{debug, warn};

/// Default number of least-reliable positions tested by the Chase decoder
pub const DEFAULT_TEST_POSITIONS: usize = 4;

/// Channel observation of one codeword
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Received<'a> {
    /// Hard decisions, one bit per element (nonzero is 1)
    Bits(&'a [u8]),
    /// Log-likelihood ratios, positive meaning bit 0
    Llr(&'a [f64]),
}

impl Received<'_> {
    /// Number of observed positions
    pub fn len(&self) -> usize {
        match self {
            Received::Bits(bits) => bits.len(),
            Received::Llr(llrs) => llrs.len(),
        }
    }

    /// True if nothing was observed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the observation carries reliability information
    pub fn is_llr(&self) -> bool {
        matches!(self, Received::Llr(_))
    }

    /// Hard-decision word, one bit per element
    pub fn hard_bits(&self) -> Vec<u8> {
        match self {
            Received::Bits(bits) => bits.iter().map(|&b| u8::from(b != 0)).collect(),
            Received::Llr(llrs) => hard_decision(llrs),
        }
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    soft_decision: bool,
    test_positions: usize,
    max_test_patterns: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            soft_decision: false,
            test_positions: DEFAULT_TEST_POSITIONS,
            max_test_patterns: None,
        }
    }
}

impl DecodeOptions {
    /// Algebraic hard-decision decoding
    pub fn hard() -> Self {
        Self::default()
    }

    /// Chase soft-decision decoding over the `test_positions` least reliable bits
    pub fn soft(test_positions: usize) -> Self {
        DecodeOptions {
            soft_decision: true,
            test_positions,
            max_test_patterns: None,
        }
    }

    /// Cap the number of Chase test patterns tried
    pub fn with_max_test_patterns(mut self, max_test_patterns: usize) -> Self {
        self.max_test_patterns = Some(max_test_patterns);
        self
    }

    /// Change the number of least reliable positions tested
    pub fn with_test_positions(mut self, test_positions: usize) -> Self {
        self.test_positions = test_positions;
        self
    }

    /// Whether Chase decoding is requested
    pub fn soft_decision(&self) -> bool {
        self.soft_decision
    }

    /// Number of least reliable positions (p)
    pub fn test_positions(&self) -> usize {
        self.test_positions
    }

    /// Cap on the number of test patterns, if any
    pub fn max_test_patterns(&self) -> Option<usize> {
        self.max_test_patterns
    }
}

/// Outcome of a successful hard-decision correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Corrected codeword
    pub codeword: Vec<u8>,
    /// Flipped bit positions, ascending
    pub positions: Vec<usize>,
}

impl Correction {
    /// Number of corrected bits
    pub fn errors_corrected(&self) -> usize {
        self.positions.len()
    }
}

/// Result of decoding one received word
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResult {
    /// Decoded message bits (uncorrected systematic bits on failure)
    pub message: Vec<u8>,
    /// Decoded codeword (hard-decision word on failure)
    pub codeword: Vec<u8>,
    /// Bits changed relative to the hard-decision word
    pub errors_corrected: usize,
    /// Correlation of the chosen codeword with the LLRs (soft decoding only)
    pub score: Option<f64>,
    /// Why decoding failed, `None` on success
    pub failure: Option<Error>,
}

impl DecodeResult {
    fn decoded(
        code: &(impl BlockCode + ?Sized),
        codeword: Vec<u8>,
        errors: usize,
        score: Option<f64>,
    ) -> Self {
        DecodeResult {
            message: code.extract_message(&codeword),
            codeword,
            errors_corrected: errors,
            score,
            failure: None,
        }
    }

    fn failed(code: &(impl BlockCode + ?Sized), word: Vec<u8>, failure: Error) -> Self {
        DecodeResult {
            message: code.extract_message(&word),
            codeword: word,
            errors_corrected: 0,
            score: None,
            failure: Some(failure),
        }
    }

    /// True if a valid codeword was found
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Convert into the message, or the decode failure
    pub fn into_message(self) -> Result<Vec<u8>> {
        match self.failure {
            None => Ok(self.message),
            Some(err) => Err(err),
        }
    }
}

/// Decode one received word with `code`.
///
/// Soft decoding requires LLR input; hard bits requested with
/// `soft_decision` fall back to algebraic decoding.
///
/// # Errors
///
/// Returns [`Error::InvalidInputLength`] for a word of the wrong length,
/// [`Error::NonFiniteLlr`] for NaN or infinite LLRs and
/// [`Error::InvalidSearchBudget`] for an invalid Chase configuration on LLR
/// input.
pub fn decode_block<C: BlockCode + ?Sized>(
    code: &C,
    received: Received<'_>,
    options: &DecodeOptions,
) -> Result<DecodeResult> {
    let n = code.code_length();
    if received.len() != n {
        return Err(Error::InvalidInputLength {
            expected: n,
            actual: received.len(),
        });
    }

    if let Received::Llr(llrs) = received {
        check_finite(llrs)?;
    }

    if options.soft_decision() {
        match received {
            Received::Llr(llrs) => {
                let config =
                    ChaseConfig::new(options.test_positions(), options.max_test_patterns(), n)?;
                return match chase_decode(code, llrs, &config) {
                    Ok(candidate) => Ok(DecodeResult::decoded(
                        code,
                        candidate.codeword,
                        candidate.errors_corrected,
                        Some(candidate.score),
                    )),
                    Err(err) if err.is_decode_failure() => {
                        debug!("soft decode failed: {}", err);
                        Ok(DecodeResult::failed(code, hard_decision(llrs), err))
                    }
                    Err(err) => Err(err),
                };
            }
            Received::Bits(_) => {
                warn!("soft decision requested for hard-bit input, using algebraic decoding");
            }
        }
    }

    let word = received.hard_bits();
    match code.correct(&word) {
        Ok(correction) => {
            let errors = hamming_distance(&correction.codeword, &word);
            Ok(DecodeResult::decoded(code, correction.codeword, errors, None))
        }
        Err(err) if err.is_decode_failure() => {
            debug!("hard decode failed: {}", err);
            Ok(DecodeResult::failed(code, word, err))
        }
        Err(err) => Err(err),
    }
}
