//! Cyclic code parameters and systematic encoding.
//!
//! The generator polynomial of a binary BCH code is the least common multiple
//! of the minimal polynomials of `alpha^1 .. alpha^2t`. Since conjugate roots
//! share a minimal polynomial, it is enough to multiply one minimal polynomial
//! per cyclotomic coset.
//!
//! Polynomials over GF(2) are stored as `Vec<u8>` of 0/1 coefficients with the
//! highest-degree coefficient first, which matches the codeword bit order:
//! bit 0 of a codeword is the coefficient of `x^(n-1)`.

use crate::ecc::field::{Element, FieldContext};
use crate::error::{Error, Result};

/// Parameters of a binary cyclic code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParameters {
    /// Codeword length
    pub n: usize,
    /// Message length
    pub k: usize,
    /// Number of correctable errors
    pub t: usize,
    /// Generator polynomial over GF(2), highest degree first
    pub generator: Vec<u8>,
}

impl CodeParameters {
    /// Derive the parameters of a (possibly shortened) binary BCH code.
    ///
    /// # Arguments
    ///
    /// * `field` - Field whose primitive element defines the code roots
    /// * `n` - Codeword length, at most Q - 1
    /// * `k` - Message length, must equal `n - deg g(x)`
    /// * `t` - Designed error correction capability
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodeParameters`] if the parameters do not
    /// describe a BCH code over `field`.
    pub fn bch(field: &FieldContext, n: usize, k: usize, t: usize) -> Result<Self> {
        let max_n = field.group_order();
        if n == 0 || n > max_n {
            return Err(Error::InvalidCodeParameters(format!(
                "code length must be between 1 and {} for GF(2^{}), got {}",
                max_n,
                field.m(),
                n
            )));
        }

        if t == 0 {
            return Err(Error::InvalidCodeParameters(
                "error correction capability must be positive".to_string(),
            ));
        }

        if k == 0 || k >= n || n - k < 2 * t {
            return Err(Error::InvalidCodeParameters(format!(
                "({}, {}) cannot correct {} errors: need 0 < k and n - k >= 2t",
                n, k, t
            )));
        }

        let generator = bch_generator(field, t)?;
        let degree = generator.len() - 1;
        if degree >= n || n - degree != k {
            return Err(Error::InvalidCodeParameters(format!(
                "generator for t = {} has degree {}, so n = {} gives k = {}, not {}",
                t,
                degree,
                n,
                n.saturating_sub(degree),
                k
            )));
        }

        Ok(CodeParameters { n, k, t, generator })
    }

    /// Number of parity bits, `n - k`
    pub fn parity_length(&self) -> usize {
        self.n - self.k
    }

    /// Code rate `k / n`
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }
}

/// Cyclotomic coset of `i` modulo `modulus` under multiplication by 2
pub fn cyclotomic_coset(i: usize, modulus: usize) -> Vec<usize> {
    let mut coset = Vec::new();
    let mut x = i % modulus;

    while !coset.contains(&x) {
        coset.push(x);
        x = (2 * x) % modulus;
    }

    coset
}

/// Minimal polynomial of `alpha^i` over GF(2), highest degree first.
///
/// # Errors
///
/// Returns [`Error::InvalidFieldParameter`] if the product of the conjugate
/// factors has a coefficient outside GF(2), which cannot happen for a valid
/// field context.
pub fn minimal_polynomial(field: &FieldContext, i: usize) -> Result<Vec<u8>> {
    // Coefficients over GF(2^m), lowest degree first while multiplying
    let mut poly: Vec<Element> = vec![1];

    for root_log in cyclotomic_coset(i, field.group_order()) {
        let root = field.exp(root_log);
        let mut next = vec![0; poly.len() + 1];
        for (j, &c) in poly.iter().enumerate() {
            // (x + root) * c x^j
            next[j + 1] ^= c;
            next[j] ^= field.multiply(c, root);
        }
        poly = next;
    }

    poly.iter()
        .rev()
        .map(|&c| match c {
            0 | 1 => Ok(c as u8),
            _ => Err(Error::InvalidFieldParameter(format!(
                "minimal polynomial of alpha^{} has a coefficient outside GF(2)",
                i
            ))),
        })
        .collect()
}

/// Generator polynomial of the narrow-sense binary BCH code correcting `t`
/// errors, highest degree first.
pub fn bch_generator(field: &FieldContext, t: usize) -> Result<Vec<u8>> {
    let modulus = field.group_order();
    let mut covered = vec![false; modulus];
    let mut generator = vec![1u8];

    for i in 1..=2 * t {
        let i = i % modulus;
        if covered[i] {
            continue;
        }
        for j in cyclotomic_coset(i, modulus) {
            covered[j] = true;
        }
        let min_poly = minimal_polynomial(field, i)?;
        generator = binary_poly_multiply(&generator, &min_poly);
    }

    Ok(generator)
}

/// Multiply two polynomials over GF(2)
pub fn binary_poly_multiply(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] ^= bj;
        }
    }

    result
}

/// Remainder of `message * x^(deg g)` divided by `generator` over GF(2).
///
/// The returned parity has exactly `deg g` bits, highest degree first.
pub fn parity_bits(message: &[u8], generator: &[u8]) -> Vec<u8> {
    let g_len = generator.len();
    let parity_len = g_len.saturating_sub(1);

    let mut remainder = vec![0u8; message.len() + parity_len];
    for (slot, &bit) in remainder.iter_mut().zip(message) {
        *slot = u8::from(bit != 0);
    }

    for i in 0..message.len() {
        if remainder[i] == 0 {
            continue;
        }
        for (j, &g) in generator.iter().enumerate() {
            remainder[i + j] ^= g;
        }
    }

    remainder.split_off(message.len())
}

/// Systematic encoder for a binary cyclic code
#[derive(Debug, Clone)]
pub struct CyclicEncoder {
    params: CodeParameters,
}

impl CyclicEncoder {
    /// Create an encoder for the given code parameters
    pub fn new(params: CodeParameters) -> Self {
        CyclicEncoder { params }
    }

    /// Code parameters
    pub fn params(&self) -> &CodeParameters {
        &self.params
    }

    /// Encode `k` message bits into a systematic `[message | parity]` codeword.
    ///
    /// Any nonzero input element is treated as a 1 bit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputLength`] unless `message.len() == k`.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        if message.len() != self.params.k {
            return Err(Error::InvalidInputLength {
                expected: self.params.k,
                actual: message.len(),
            });
        }

        let mut codeword = Vec::with_capacity(self.params.n);
        codeword.extend(message.iter().map(|&b| u8::from(b != 0)));
        codeword.extend(parity_bits(message, &self.params.generator));

        Ok(codeword)
    }

    /// Check whether `word` is divisible by the generator polynomial
    pub fn is_codeword(&self, word: &[u8]) -> bool {
        if word.len() != self.params.n {
            return false;
        }
        let k = self.params.k;
        let parity = parity_bits(&word[..k], &self.params.generator);
        word[k..]
            .iter()
            .zip(&parity)
            .all(|(&w, &p)| u8::from(w != 0) == p)
    }
}
