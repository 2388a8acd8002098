//! Chase soft-decision decoding.
//!
//! The hard decision of the LLRs is perturbed at the `p` least reliable
//! positions. Each perturbation (test pattern) is passed to the algebraic
//! decoder of the underlying code, and among the patterns that yield a valid
//! codeword the one with the highest correlation to the LLRs wins.
//!
//! Patterns are enumerated by increasing weight, then lexicographically over
//! reliability ranks (rank 0 is the least reliable position). Ties in
//! correlation go to the earlier pattern, which is the lower-weight one, then
//! the lower index. The search therefore is deterministic and the cap on the
//! number of patterns is a plain prefix of the enumeration.

use crate::ecc::bits::hamming_distance;
use crate::ecc::llr::{check_finite, correlation, hard_decision, reliability_order};
use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use log::trace;

/// Largest number of least reliable positions the Chase search may test
pub const MAX_TEST_POSITIONS: usize = 16;

/// Validated Chase search budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseConfig {
    test_positions: usize,
    max_patterns: Option<usize>,
}

impl ChaseConfig {
    /// Validate a search budget for codewords of length `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSearchBudget`] unless
    /// `1 <= test_positions <= min(MAX_TEST_POSITIONS, n)` and the pattern
    /// cap, if given, is positive.
    pub fn new(test_positions: usize, max_patterns: Option<usize>, n: usize) -> Result<Self> {
        let limit = MAX_TEST_POSITIONS.min(n);
        if test_positions == 0 || test_positions > limit {
            return Err(Error::InvalidSearchBudget(format!(
                "number of test positions must be between 1 and {}, got {}",
                limit, test_positions
            )));
        }

        if max_patterns == Some(0) {
            return Err(Error::InvalidSearchBudget(
                "test pattern cap must be positive".to_string(),
            ));
        }

        Ok(ChaseConfig {
            test_positions,
            max_patterns,
        })
    }

    /// Number of least reliable positions (p)
    pub fn test_positions(&self) -> usize {
        self.test_positions
    }

    /// Number of patterns the search will try: `min(2^p, cap)`
    pub fn pattern_budget(&self) -> usize {
        let all = 1usize << self.test_positions;
        self.max_patterns.map_or(all, |cap| cap.min(all))
    }
}

/// Enumerates subsets of `0..p` by increasing size, each size in
/// lexicographic order
#[derive(Debug, Clone)]
pub struct TestPatterns {
    positions: usize,
    current: Option<Vec<usize>>,
}

impl TestPatterns {
    /// All `2^positions` patterns, starting with the empty one
    pub fn new(positions: usize) -> Self {
        TestPatterns {
            positions,
            current: Some(Vec::new()),
        }
    }

    fn advance(&self, combo: &[usize]) -> Option<Vec<usize>> {
        let p = self.positions;
        let w = combo.len();

        // Rightmost element that can still move right
        if let Some(i) = (0..w).rev().find(|&i| combo[i] < p - w + i) {
            let mut next = combo.to_vec();
            next[i] += 1;
            for j in i + 1..w {
                next[j] = next[j - 1] + 1;
            }
            return Some(next);
        }

        if w < p {
            Some((0..=w).collect())
        } else {
            None
        }
    }
}

impl Iterator for TestPatterns {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let combo = self.current.take()?;
        self.current = self.advance(&combo);
        Some(combo)
    }
}

/// Best codeword found by the Chase search
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseCandidate {
    /// Valid codeword
    pub codeword: Vec<u8>,
    /// Index of the winning pattern in the enumeration order
    pub pattern_index: usize,
    /// Positions flipped by the winning pattern, by reliability rank
    pub pattern: Vec<usize>,
    /// Correlation between the codeword and the LLRs
    pub score: f64,
    /// Hamming distance between the codeword and the hard decision
    pub errors_corrected: usize,
    /// Number of patterns tried
    pub patterns_tried: usize,
}

/// Run the Chase search for `code` over `llrs`.
///
/// # Errors
///
/// Returns [`Error::InvalidInputLength`] if `llrs` does not have the code
/// length, [`Error::InvalidSearchBudget`] if `config` tests more positions
/// than the code has, [`Error::NonFiniteLlr`] for NaN or infinite LLRs and
/// [`Error::NoValidCandidate`] if no pattern decodes. Any other error raised
/// by the algebraic decoder is forwarded.
pub fn chase_decode<C: BlockCode + ?Sized>(
    code: &C,
    llrs: &[f64],
    config: &ChaseConfig,
) -> Result<ChaseCandidate> {
    if llrs.len() != code.code_length() {
        return Err(Error::InvalidInputLength {
            expected: code.code_length(),
            actual: llrs.len(),
        });
    }

    let n = code.code_length();
    if config.test_positions() > n {
        return Err(Error::InvalidSearchBudget(format!(
            "{} test positions exceed code length {}",
            config.test_positions(),
            n
        )));
    }
    check_finite(llrs)?;

    let hard = hard_decision(llrs);
    let order = reliability_order(llrs);
    let least_reliable = &order[..config.test_positions()];
    let budget = config.pattern_budget();

    let mut best: Option<ChaseCandidate> = None;
    let mut tried = 0;

    for (index, pattern) in TestPatterns::new(config.test_positions()).enumerate() {
        if tried >= budget {
            break;
        }
        tried += 1;

        let mut test_word = hard.clone();
        for &rank in &pattern {
            test_word[least_reliable[rank]] ^= 1;
        }

        let correction = match code.correct(&test_word) {
            Ok(correction) => correction,
            Err(err) if err.is_decode_failure() => {
                trace!("chase pattern {} {:?}: {}", index, pattern, err);
                continue;
            }
            Err(err) => return Err(err),
        };

        let score = correlation(&correction.codeword, llrs);
        trace!("chase pattern {} {:?}: score {}", index, pattern, score);

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(ChaseCandidate {
                errors_corrected: hamming_distance(&correction.codeword, &hard),
                codeword: correction.codeword,
                pattern_index: index,
                pattern,
                score,
                patterns_tried: 0,
            });
        }
    }

    match best {
        Some(mut candidate) => {
            candidate.patterns_tried = tried;
            Ok(candidate)
        }
        None => Err(Error::NoValidCandidate { patterns: tried }),
    }
}
