//! Chien search over the error-locator polynomial.
//!
//! Every nonzero field element `alpha^j` is tried as a root. Instead of
//! evaluating the polynomial from scratch, term `i` is kept in a register and
//! multiplied by `alpha^i` at each step, so one step costs `deg Lambda`
//! multiplications.
//!
//! A root `alpha^j` is the inverse of an error locator `alpha^e`, where `e` is
//! the degree of the erroneous coefficient. With bit 0 holding `x^(n-1)`, the
//! bit index is `n - 1 - e`.

use crate::ecc::berlekamp_massey::ErrorLocator;
use crate::ecc::field::FieldContext;
use crate::error::{Error, Result};

/// Find the bit positions named by `locator` in a word of length `n`.
///
/// Positions are returned in ascending order.
///
/// # Errors
///
/// Returns [`Error::RootCountMismatch`] if the number of roots that map to a
/// position inside the word differs from the locator degree. The caller must
/// treat this as an uncorrectable word and not apply a partial correction.
pub fn chien_search(field: &FieldContext, locator: &ErrorLocator, n: usize) -> Result<Vec<usize>> {
    let degree = locator.degree();
    if degree == 0 {
        return Ok(Vec::new());
    }

    let group_order = field.group_order();
    let mut registers = locator.coefficients().to_vec();
    let mut positions = Vec::with_capacity(degree);

    for j in 0..group_order {
        let sum = registers.iter().fold(0, |acc, &r| field.add(acc, r));
        if sum == 0 {
            let exponent = (group_order - j) % group_order;
            if exponent < n {
                positions.push(n - 1 - exponent);
            }
        }

        for (i, register) in registers.iter_mut().enumerate().skip(1) {
            *register = field.multiply(*register, field.exp(i));
        }
    }

    if positions.len() != degree {
        return Err(Error::RootCountMismatch {
            degree,
            found: positions.len(),
        });
    }

    positions.sort_unstable();
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::berlekamp_massey::berlekamp_massey;
    use crate::ecc::syndrome::compute_syndromes;

    fn locate(field: &FieldContext, n: usize, t: usize, positions: &[usize]) -> Result<Vec<usize>> {
        let mut word = vec![0u8; n];
        for &p in positions {
            word[p] ^= 1;
        }
        let syndromes = compute_syndromes(field, &word, 2 * t);
        let locator = berlekamp_massey(field, &syndromes, t)?;
        chien_search(field, &locator, n)
    }

    #[test]
    fn test_no_roots_for_trivial_locator() {
        let gf = FieldContext::new(4).unwrap();
        let locator = ErrorLocator::new(vec![1]);
        assert_eq!(chien_search(&gf, &locator, 15).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_finds_error_positions() {
        let gf = FieldContext::new(4).unwrap();
        assert_eq!(locate(&gf, 15, 2, &[0]).unwrap(), vec![0]);
        assert_eq!(locate(&gf, 15, 2, &[14]).unwrap(), vec![14]);
        assert_eq!(locate(&gf, 15, 2, &[8, 1]).unwrap(), vec![1, 8]);

        let gf = FieldContext::new(6).unwrap();
        assert_eq!(locate(&gf, 63, 3, &[5, 40, 62]).unwrap(), vec![5, 40, 62]);
    }

    #[test]
    fn test_all_single_and_double_errors_gf16() {
        let gf = FieldContext::new(4).unwrap();
        for a in 0..15 {
            assert_eq!(locate(&gf, 15, 2, &[a]).unwrap(), vec![a]);
            for b in a + 1..15 {
                assert_eq!(locate(&gf, 15, 2, &[a, b]).unwrap(), vec![a, b]);
            }
        }
    }

    #[test]
    fn test_locator_without_roots() {
        let gf = FieldContext::new(4).unwrap();
        // 1 + alpha x + x^2 has no roots: Tr(alpha^-2) = 1
        let locator = ErrorLocator::new(vec![1, 2, 1]);
        assert!((0..15).all(|j| locator.evaluate(&gf, gf.exp(j)) != 0));
        assert_eq!(
            chien_search(&gf, &locator, 15),
            Err(Error::RootCountMismatch {
                degree: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_roots_outside_shortened_word_are_rejected() {
        let gf = FieldContext::new(4).unwrap();
        // Locator for a single error at degree 13, but the word only has 10 bits
        let locator = ErrorLocator::new(vec![1, gf.exp(13)]);
        assert_eq!(
            chien_search(&gf, &locator, 10),
            Err(Error::RootCountMismatch {
                degree: 1,
                found: 0
            })
        );
        assert_eq!(chien_search(&gf, &locator, 15).unwrap(), vec![1]);
    }
}
