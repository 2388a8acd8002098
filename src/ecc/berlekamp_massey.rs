//! Berlekamp-Massey solver for the key equation.
//!
//! Given syndromes `S_1 .. S_2t`, finds the shortest linear feedback shift
//! register `Lambda(x) = 1 + Lambda_1 x + ... + Lambda_L x^L` that generates
//! the syndrome sequence. For up to `t` errors at positions with locators
//! `X_j = alpha^(e_j)`, `Lambda(x) = prod (1 - X_j x)` and `L` is the number of
//! errors.

use crate::ecc::field::{Element, FieldContext};
use crate::ecc::syndrome::SyndromeVector;
use crate::error::{Error, Result};

/// Error-locator polynomial, lowest degree first (`coefficients[0] == 1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    coefficients: Vec<Element>,
}

impl ErrorLocator {
    /// Build a locator from coefficients, lowest degree first.
    ///
    /// Trailing zero coefficients are dropped.
    pub fn new(mut coefficients: Vec<Element>) -> Self {
        while coefficients.len() > 1 && coefficients.last() == Some(&0) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(1);
        }
        ErrorLocator { coefficients }
    }

    /// Coefficients, lowest degree first
    pub fn coefficients(&self) -> &[Element] {
        &self.coefficients
    }

    /// Degree of the polynomial, the estimated number of errors
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate at `x` with Horner's rule
    pub fn evaluate(&self, field: &FieldContext, x: Element) -> Element {
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| field.add(field.multiply(acc, x), c))
    }
}

/// Run Berlekamp-Massey over the syndromes of a code correcting `t` errors.
///
/// # Errors
///
/// Returns [`Error::KeyEquationUnsolvable`] if the shortest register is
/// longer than `t`, or if the register length and the degree of the
/// resulting polynomial disagree. Both mean more than `t` errors occurred.
pub fn berlekamp_massey(
    field: &FieldContext,
    syndromes: &SyndromeVector,
    t: usize,
) -> Result<ErrorLocator> {
    let s = syndromes.values();

    // Current locator C(x), previous locator B(x) from the last length change
    let mut c: Vec<Element> = vec![1];
    let mut b: Vec<Element> = vec![1];
    let mut length = 0usize;
    let mut shift = 1usize;
    let mut prev_discrepancy: Element = 1;

    for step in 0..s.len() {
        let mut discrepancy = s[step];
        for i in 1..=length.min(c.len() - 1) {
            discrepancy = field.add(discrepancy, field.multiply(c[i], s[step - i]));
        }

        if discrepancy == 0 {
            shift += 1;
            continue;
        }

        let scale = field.divide(discrepancy, prev_discrepancy)?;
        let previous = c.clone();

        // C(x) -= (d / b) x^shift B(x)
        if c.len() < b.len() + shift {
            c.resize(b.len() + shift, 0);
        }
        for (i, &bi) in b.iter().enumerate() {
            c[i + shift] = field.add(c[i + shift], field.multiply(scale, bi));
        }

        if 2 * length <= step {
            length = step + 1 - length;
            b = previous;
            prev_discrepancy = discrepancy;
            shift = 1;
        } else {
            shift += 1;
        }
    }

    if length > t {
        return Err(Error::KeyEquationUnsolvable {
            length,
            capability: t,
        });
    }

    let locator = ErrorLocator::new(c);
    if locator.degree() != length {
        return Err(Error::KeyEquationUnsolvable {
            length,
            capability: t,
        });
    }

    Ok(locator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::syndrome::compute_syndromes;

    fn error_word(n: usize, positions: &[usize]) -> Vec<u8> {
        let mut word = vec![0u8; n];
        for &p in positions {
            word[p] ^= 1;
        }
        word
    }

    #[test]
    fn test_no_errors() {
        let gf = FieldContext::new(4).unwrap();
        let syndromes = SyndromeVector::from_values(vec![0; 4]);
        let locator = berlekamp_massey(&gf, &syndromes, 2).unwrap();
        assert_eq!(locator.coefficients(), &[1]);
        assert_eq!(locator.degree(), 0);
    }

    #[test]
    fn test_single_error_locator() {
        let gf = FieldContext::new(4).unwrap();
        // Bit 10 of a length-15 word is x^4
        let syndromes = compute_syndromes(&gf, &error_word(15, &[10]), 4);
        let locator = berlekamp_massey(&gf, &syndromes, 2).unwrap();
        assert_eq!(locator.degree(), 1);
        assert_eq!(locator.coefficients(), &[1, gf.exp(4)]);
    }

    #[test]
    fn test_two_error_locator_roots() {
        let gf = FieldContext::new(4).unwrap();
        // Bits 1 and 8 are x^13 and x^6
        let syndromes = compute_syndromes(&gf, &error_word(15, &[1, 8]), 4);
        let locator = berlekamp_massey(&gf, &syndromes, 2).unwrap();
        assert_eq!(locator.degree(), 2);

        // Roots are the inverses of the error locators
        let r1 = gf.inverse(gf.exp(13)).unwrap();
        let r2 = gf.inverse(gf.exp(6)).unwrap();
        assert_eq!(locator.evaluate(&gf, r1), 0);
        assert_eq!(locator.evaluate(&gf, r2), 0);
    }

    #[test]
    fn test_three_errors_exceed_capability() {
        let gf = FieldContext::new(4).unwrap();
        // x^0 + x^1 + x^4 makes S_1 = 0 while S_3 != 0
        let syndromes = compute_syndromes(&gf, &error_word(15, &[14, 13, 10]), 4);
        assert_eq!(
            berlekamp_massey(&gf, &syndromes, 2),
            Err(Error::KeyEquationUnsolvable {
                length: 3,
                capability: 2
            })
        );
    }

    #[test]
    fn test_three_error_locator_in_larger_code() {
        let gf = FieldContext::new(5).unwrap();
        let syndromes = compute_syndromes(&gf, &error_word(31, &[0, 9, 30]), 6);
        let locator = berlekamp_massey(&gf, &syndromes, 3).unwrap();
        assert_eq!(locator.degree(), 3);
        for degree in [30usize, 21, 0] {
            let root = gf.inverse(gf.exp(degree)).unwrap();
            assert_eq!(locator.evaluate(&gf, root), 0);
        }
    }

    #[test]
    fn test_locator_trims_trailing_zeros() {
        let locator = ErrorLocator::new(vec![1, 3, 0, 0]);
        assert_eq!(locator.degree(), 1);
        assert_eq!(ErrorLocator::new(Vec::new()).coefficients(), &[1]);
    }
}
