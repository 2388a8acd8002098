//! Error types shared by every coder in the crate.
//!
//! Construction errors (bad field or code parameters, bad search budgets) are
//! returned to the caller directly. Decode failures such as
//! [`Error::RootCountMismatch`] are expected outcomes on a noisy channel; the
//! decoders report them inside a [`DecodeResult`](crate::ecc::DecodeResult)
//! rather than treating them as exceptional.

use thiserror::Error;

/// Result type for field, coding and decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by field construction, encoding and decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Field exponent outside the supported range or polynomial not primitive
    #[error("invalid field parameter: {0}")]
    InvalidFieldParameter(String),

    /// `n`, `k` and `t` are inconsistent with each other or with the field
    #[error("invalid code parameters: {0}")]
    InvalidCodeParameters(String),

    /// Message or received word has the wrong number of elements
    #[error("invalid input length: expected {expected}, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// LLR input holds a NaN or infinite value
    #[error("non-finite LLR at position {position}")]
    NonFiniteLlr { position: usize },

    /// Inversion or division by the zero element
    #[error("division by zero in GF(2^m)")]
    DivisionByZero,

    /// Berlekamp-Massey produced a locator longer than the code can correct
    #[error("key equation unsolvable: locator length {length} exceeds t = {capability}")]
    KeyEquationUnsolvable { length: usize, capability: usize },

    /// Chien search found a different number of roots than the locator degree
    #[error("root count mismatch: locator degree {degree}, found {found} roots")]
    RootCountMismatch { degree: usize, found: usize },

    /// No Chase test pattern led to a valid codeword
    #[error("no valid candidate among {patterns} test patterns")]
    NoValidCandidate { patterns: usize },

    /// Chase search configuration outside the allowed bounds
    #[error("invalid search budget: {0}")]
    InvalidSearchBudget(String),

    /// Corrected word still has a nonzero syndrome
    #[error("residual syndrome is nonzero after correction")]
    ResidualSyndrome,

    /// Extended Hamming code saw an even number (at least two) of bit errors
    #[error("double bit error detected")]
    DoubleErrorDetected,
}

impl Error {
    /// Returns true for errors that describe an uncorrectable received word
    /// rather than a misuse of the API.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Error::KeyEquationUnsolvable { .. }
                | Error::RootCountMismatch { .. }
                | Error::NoValidCandidate { .. }
                | Error::ResidualSyndrome
                | Error::DoubleErrorDetected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_classification() {
        assert!(Error::ResidualSyndrome.is_decode_failure());
        assert!(Error::RootCountMismatch { degree: 2, found: 1 }.is_decode_failure());
        assert!(Error::NoValidCandidate { patterns: 8 }.is_decode_failure());
        assert!(!Error::DivisionByZero.is_decode_failure());
        assert!(!Error::InvalidInputLength {
            expected: 7,
            actual: 6
        }
        .is_decode_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidInputLength {
            expected: 15,
            actual: 14,
        };
        assert_eq!(err.to_string(), "invalid input length: expected 15, got 14");
        assert_eq!(
            Error::NonFiniteLlr { position: 3 }.to_string(),
            "non-finite LLR at position 3"
        );
        assert!(!Error::NonFiniteLlr { position: 3 }.is_decode_failure());

        let err = Error::KeyEquationUnsolvable {
            length: 3,
            capability: 2,
        };
        assert_eq!(
            err.to_string(),
            "key equation unsolvable: locator length 3 exceeds t = 2"
        );
    }
}
