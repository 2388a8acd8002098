//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in
//! 1950. They correct any single-bit error. The extended variant adds an overall parity bit and
//! also detects (without correcting) double-bit errors.
//!
//! A Hamming code of length `2^m - 1` is the BCH code with `t = 1` over GF(2^m): column `i` of its
//! parity-check matrix is the field element `alpha^(n-1-i)`. This makes encoding a sum of columns
//! and decoding a single table lookup from syndrome to bit position, with no key equation to solve.
//!
//! This implementation provides:
//! - Systematic `[message | parity]` encoding via the parity-check matrix
//! - Decoding with single-bit error correction by syndrome table lookup
//! - Support for extended Hamming codes with additional parity bit
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::ecc::decode::Correction;
use crate::ecc::field::{Element, FieldContext};
use crate::ecc::BlockCode;
use crate::error::{Error, Result};
use log::debug;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Hamming code over a shared field context
#[derive(Debug, Clone)]
pub struct HammingCoder {
    /// Field defining the parity-check columns
    field: Arc<FieldContext>,
    /// Length without the extension bit (2^m - 1)
    base_length: usize,
    /// Number of data bits per block
    data_bits: usize,
    /// Whether to use extended Hamming code with additional parity bit
    extended: bool,
    /// Parity-check column of each base position
    columns: Vec<Element>,
    /// Syndrome to bit position
    positions: Vec<Option<usize>>,
}

impl HammingCoder {
    /// Creates a `(2^m - 1, 2^m - 1 - m)` Hamming code over `field`
    pub fn new(field: Arc<FieldContext>) -> Self {
        Self::with_extension(field, false)
    }

    /// Creates a `(2^m, 2^m - 1 - m)` extended Hamming code over `field`
    pub fn extended(field: Arc<FieldContext>) -> Self {
        Self::with_extension(field, true)
    }

    /// Creates a Hamming code, optionally extended with an overall parity bit
    pub fn with_extension(field: Arc<FieldContext>, extended: bool) -> Self {
        let base_length = field.group_order();
        let data_bits = base_length - field.m() as usize;

        let columns: Vec<Element> = (0..base_length)
            .map(|i| field.exp(base_length - 1 - i))
            .collect();

        let mut positions = vec![None; field.order()];
        for (i, &column) in columns.iter().enumerate() {
            positions[column as usize] = Some(i);
        }

        debug!(
            "created {}Hamming({}, {}) over {}",
            if extended { "extended " } else { "" },
            base_length + usize::from(extended),
            data_bits,
            field
        );

        HammingCoder {
            field,
            base_length,
            data_bits,
            extended,
            columns,
            positions,
        }
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Result<Self> {
        Ok(Self::new(Arc::new(FieldContext::new(3)?)))
    }

    /// Creates an extended (8,4) Hamming code
    pub fn extended_8_4() -> Result<Self> {
        Ok(Self::extended(Arc::new(FieldContext::new(3)?)))
    }

    /// Whether the code carries the overall parity bit
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Number of parity bits, including the overall parity bit if extended
    pub fn parity_bits(&self) -> usize {
        self.code_length() - self.data_bits
    }

    /// Shared field context
    pub fn field(&self) -> &Arc<FieldContext> {
        &self.field
    }

    /// Parity-check matrix H of the base code as `m` rows of `n` bits.
    ///
    /// Row `r` holds bit `m - 1 - r` of every column, so the last `m`
    /// columns form an identity matrix.
    pub fn parity_check_matrix(&self) -> Vec<Vec<u8>> {
        let m = self.field.m() as usize;
        (0..m)
            .map(|r| {
                let bit = m - 1 - r;
                self.columns
                    .iter()
                    .map(|&c| ((c >> bit) & 1) as u8)
                    .collect()
            })
            .collect()
    }

    /// Syndrome of the base part of a word, `H * word` as a field element
    pub fn syndrome(&self, word: &[u8]) -> Element {
        word.iter()
            .zip(&self.columns)
            .filter(|&(&bit, _)| bit != 0)
            .fold(0, |acc, (_, &column)| self.field.add(acc, column))
    }

    fn overall_parity(word: &[u8]) -> u8 {
        word.iter().fold(0, |acc, &b| acc ^ u8::from(b != 0))
    }

    fn check_length(&self, len: usize, expected: usize) -> Result<()> {
        if len != expected {
            return Err(Error::InvalidInputLength {
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}

impl BlockCode for HammingCoder {
    fn code_length(&self) -> usize {
        self.base_length + usize::from(self.extended)
    }

    fn data_length(&self) -> usize {
        self.data_bits
    }

    fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.check_length(message.len(), self.data_bits)?;

        let m = self.field.m() as usize;
        let mut codeword = Vec::with_capacity(self.code_length());
        codeword.extend(message.iter().map(|&b| u8::from(b != 0)));

        // Parity columns are the unit vectors alpha^(m-1) .. alpha^0
        let s = self.syndrome(&codeword);
        codeword.extend((0..m).map(|j| ((s >> (m - 1 - j)) & 1) as u8));

        if self.extended {
            let parity = Self::overall_parity(&codeword);
            codeword.push(parity);
        }

        Ok(codeword)
    }

    fn correct(&self, word: &[u8]) -> Result<Correction> {
        self.check_length(word.len(), self.code_length())?;

        let mut codeword: Vec<u8> = word.iter().map(|&b| u8::from(b != 0)).collect();
        let syndrome = self.syndrome(&codeword[..self.base_length]);
        let parity_error = self.extended && Self::overall_parity(&codeword) != 0;

        let position = match (syndrome, self.extended, parity_error) {
            (0, _, false) => None,
            // Only the overall parity bit is wrong
            (0, true, true) => Some(self.base_length),
            // Nonzero syndrome with even overall parity: two errors
            (_, true, false) => return Err(Error::DoubleErrorDetected),
            (s, _, _) => match self.positions[s as usize] {
                Some(pos) => Some(pos),
                None => return Err(Error::ResidualSyndrome),
            },
        };

        if let Some(pos) = position {
            codeword[pos] ^= 1;
        }

        let residual_parity = self.extended && Self::overall_parity(&codeword) != 0;
        if self.syndrome(&codeword[..self.base_length]) != 0 || residual_parity {
            return Err(Error::ResidualSyndrome);
        }

        Ok(Correction {
            codeword,
            positions: position.into_iter().collect(),
        })
    }
}

impl Display for HammingCoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}Hamming({},{}) over GF(2^{})",
            if self.extended { "Extended " } else { "" },
            self.code_length(),
            self.data_bits,
            self.field.m()
        )
    }
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> Result<HammingCoder> {
    HammingCoder::standard_7_4()
}

/// Creates an extended (8,4) Hamming code
pub fn create_hamming_8_4() -> Result<HammingCoder> {
    HammingCoder::extended_8_4()
}
