//! Syndrome calculation for binary BCH codes.
//!
//! `S_i = r(alpha^i)` for `i = 1..=2t`, evaluated with Horner's rule in
//! codeword order (bit 0 is the coefficient of `x^(n-1)`).
//!
//! An all-zero syndrome vector means the word is a codeword. It does not mean
//! the word is the transmitted one: an error pattern that is itself a nonzero
//! codeword is undetectable by any algebraic decoder.

use crate::ecc::field::{Element, FieldContext};

/// Syndromes `S_1 .. S_2t` of a received word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndromeVector(Vec<Element>);

impl SyndromeVector {
    /// Wrap precomputed syndromes, `values[0]` being `S_1`
    pub fn from_values(values: Vec<Element>) -> Self {
        SyndromeVector(values)
    }

    /// True when every syndrome is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&s| s == 0)
    }

    /// Syndrome values, `S_1` first
    pub fn values(&self) -> &[Element] {
        &self.0
    }

    /// Number of syndromes (2t)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no syndromes were computed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate a binary word at `alpha^1 .. alpha^num_roots`.
///
/// Nonzero input elements are treated as 1 bits.
pub fn compute_syndromes(field: &FieldContext, word: &[u8], num_roots: usize) -> SyndromeVector {
    let values = (1..=num_roots)
        .map(|i| evaluate_binary_poly(field, word, field.exp(i)))
        .collect();
    SyndromeVector(values)
}

/// Evaluate a GF(2) polynomial (highest degree first) at `x` using Horner's rule
pub fn evaluate_binary_poly(field: &FieldContext, poly: &[u8], x: Element) -> Element {
    poly.iter().fold(0, |acc, &bit| {
        let shifted = field.multiply(acc, x);
        if bit != 0 {
            field.add(shifted, 1)
        } else {
            shifted
        }
    })
}
