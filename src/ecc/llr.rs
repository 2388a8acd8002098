//! Log-likelihood ratio helpers.
//!
//! Convention used throughout the crate: `LLR = ln(P(b = 0) / P(b = 1))`, so a
//! non-negative LLR decides bit 0 and a negative LLR decides bit 1. This is the
//! BPSK mapping bit 0 -> +1.0, bit 1 -> -1.0. The magnitude is the confidence.

use crate::error::{Error, Result};

/// Hard decision for a single LLR
#[inline]
pub fn hard_bit(llr: f64) -> u8 {
    u8::from(llr < 0.0)
}

/// Hard decisions for a sequence of LLRs
pub fn hard_decision(llrs: &[f64]) -> Vec<u8> {
    llrs.iter().map(|&l| hard_bit(l)).collect()
}

/// Bipolar symbol for a bit: 0 -> +1.0, 1 -> -1.0
#[inline]
pub fn bipolar(bit: u8) -> f64 {
    if bit == 0 {
        1.0
    } else {
        -1.0
    }
}

/// LLRs of equal confidence for hard bits
pub fn bits_to_llr(bits: &[u8], magnitude: f64) -> Vec<f64> {
    bits.iter().map(|&b| bipolar(b) * magnitude.abs()).collect()
}

/// Positions sorted by ascending reliability `|LLR|`, ties broken by index.
///
/// NaN magnitudes sort after every finite value.
pub fn reliability_order(llrs: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..llrs.len()).collect();
    order.sort_by(|&a, &b| llrs[a].abs().total_cmp(&llrs[b].abs()).then(a.cmp(&b)));
    order
}

/// Reject LLR sequences holding NaN or infinite values.
///
/// # Errors
///
/// Returns [`Error::NonFiniteLlr`] with the first offending position.
pub fn check_finite(llrs: &[f64]) -> Result<()> {
    match llrs.iter().position(|l| !l.is_finite()) {
        Some(position) => Err(Error::NonFiniteLlr { position }),
        None => Ok(()),
    }
}

/// Correlation between the bipolar form of `bits` and `llrs`.
///
/// Equals the sum of `|LLR|` over positions where `bits` agrees with the hard
/// decision minus the sum where it disagrees. Higher is more likely.
pub fn correlation(bits: &[u8], llrs: &[f64]) -> f64 {
    bits.iter()
        .zip(llrs)
        .map(|(&b, &l)| bipolar(b) * l)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hard_decision() {
        let llrs = [1.5, -2.0, 0.001, -0.001, 5.0, -5.0, 0.0];
        assert_eq!(hard_decision(&llrs), vec![0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_bits_to_llr_round_trip() {
        let bits = [0, 1, 1, 0];
        let llrs = bits_to_llr(&bits, -2.5);
        assert_eq!(llrs, vec![2.5, -2.5, -2.5, 2.5]);
        assert_eq!(hard_decision(&llrs), bits.to_vec());
    }

    #[test]
    fn test_reliability_order_is_stable() {
        let llrs = [3.0, -0.5, 0.5, -1.0, 0.1];
        assert_eq!(reliability_order(&llrs), vec![4, 1, 2, 3, 0]);
    }

    #[test]
    fn test_reliability_order_with_nan() {
        let llrs = [f64::NAN, -0.5, 2.0, f64::NAN, 0.25];
        assert_eq!(reliability_order(&llrs), vec![4, 1, 2, 0, 3]);
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(&[1.0, -2.0, 0.0]).is_ok());
        assert_eq!(
            check_finite(&[1.0, f64::INFINITY, f64::NAN]),
            Err(Error::NonFiniteLlr { position: 1 })
        );
    }

    #[test]
    fn test_correlation() {
        let llrs = [2.0, -1.0, 0.5, -0.25];
        // Hard decision agrees everywhere: sum of magnitudes
        assert_relative_eq!(correlation(&hard_decision(&llrs), &llrs), 3.75);
        // Flip the two least reliable positions
        assert_relative_eq!(correlation(&[0, 1, 1, 0], &llrs), 3.75 - 2.0 * 0.75);
    }
}
