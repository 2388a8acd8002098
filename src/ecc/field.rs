//! Galois field GF(2^m) context and table-driven arithmetic.
//!
//! A [`FieldContext`] owns the log, antilog and inverse tables of one field
//! configuration. The tables are built once from the field exponent `m` and a
//! primitive polynomial, and are never written afterwards, so a single context
//! can be wrapped in an `Arc` and shared by any number of coders and threads.
//!
//! Field elements are represented by their polynomial-basis bit pattern
//! (`alpha^0 = 1`, `alpha^1 = 2`, ...), stored in an [`Element`].
//!
//! # Examples
//!
//! ```rust
//! use cyclic_fec::ecc::FieldContext;
//!
//! let gf16 = FieldContext::new(4).unwrap();
//! let a = 7;
//! let a_inv = gf16.inverse(a).unwrap();
//! assert_eq!(gf16.multiply(a, a_inv), 1);
//! assert_eq!(gf16.add(a, a), 0);
//! ```

use crate::error::{Error, Result};
use log::debug;
use std::fmt::{Display, Formatter};

/// Field element in polynomial-basis representation
pub type Element = u16;

/// Smallest supported field exponent
pub const MIN_FIELD_EXPONENT: u32 = 2;

/// Largest supported field exponent (tables hold 2^16 entries)
pub const MAX_FIELD_EXPONENT: u32 = 16;

/// Standard primitive polynomials, indexed by `m - MIN_FIELD_EXPONENT`.
const DEFAULT_PRIMITIVE_POLYS: [u32; 15] = [
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

/// Returns the default primitive polynomial for GF(2^m), if `m` is supported.
pub fn default_primitive_poly(m: u32) -> Option<u32> {
    if (MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT).contains(&m) {
        Some(DEFAULT_PRIMITIVE_POLYS[(m - MIN_FIELD_EXPONENT) as usize])
    } else {
        None
    }
}

/// Immutable GF(2^m) configuration with precomputed arithmetic tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    /// Field exponent m
    m: u32,
    /// Field order Q = 2^m
    order: usize,
    /// Primitive polynomial as a bitmask (bit m set)
    primitive_poly: u32,
    /// log_table[x] = i such that alpha^i = x; log_table[0] holds Q - 1
    log_table: Vec<u16>,
    /// anti_log_table[i] = alpha^i for i in 0..Q-1; the last slot wraps to 1
    anti_log_table: Vec<Element>,
    /// inv_table[x] = x^-1; inv_table[0] is 0 and never handed out
    inv_table: Vec<Element>,
}

impl FieldContext {
    /// Create GF(2^m) using the standard primitive polynomial for `m`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldParameter`] if `m` is outside `2..=16`.
    pub fn new(m: u32) -> Result<Self> {
        let poly = default_primitive_poly(m).ok_or_else(|| {
            Error::InvalidFieldParameter(format!(
                "field exponent must be between {} and {}, got {}",
                MIN_FIELD_EXPONENT, MAX_FIELD_EXPONENT, m
            ))
        })?;
        Self::with_polynomial(m, poly)
    }

    /// Create GF(2^m) from an explicit primitive polynomial.
    ///
    /// # Arguments
    ///
    /// * `m` - Field exponent, the field has 2^m elements
    /// * `primitive_poly` - Polynomial bitmask with bit `m` as the leading term
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldParameter`] if `m` is out of range, the
    /// polynomial does not have degree `m`, or it is not primitive.
    pub fn with_polynomial(m: u32, primitive_poly: u32) -> Result<Self> {
        if !(MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT).contains(&m) {
            return Err(Error::InvalidFieldParameter(format!(
                "field exponent must be between {} and {}, got {}",
                MIN_FIELD_EXPONENT, MAX_FIELD_EXPONENT, m
            )));
        }

        if primitive_poly >> m != 1 {
            return Err(Error::InvalidFieldParameter(format!(
                "polynomial {:#x} does not have degree {}",
                primitive_poly, m
            )));
        }

        let order = 1usize << m;
        let (log_table, anti_log_table) = Self::generate_tables(m, order, primitive_poly)?;

        let group_order = order - 1;
        let mut inv_table = vec![0; order];
        for x in 1..order {
            let inv_log = (group_order - log_table[x] as usize) % group_order;
            inv_table[x] = anti_log_table[inv_log];
        }

        debug!(
            "built GF(2^{}) tables with primitive polynomial {:#x}",
            m, primitive_poly
        );

        Ok(FieldContext {
            m,
            order,
            primitive_poly,
            log_table,
            anti_log_table,
            inv_table,
        })
    }

    /// Walk the powers of alpha, filling the log and antilog tables.
    ///
    /// A repeated element, a zero element, or failing to return to 1 after
    /// Q - 1 steps means the polynomial is not primitive.
    fn generate_tables(
        m: u32,
        order: usize,
        primitive_poly: u32,
    ) -> Result<(Vec<u16>, Vec<Element>)> {
        let group_order = order - 1;
        let mut log_table = vec![0u16; order];
        let mut anti_log_table = vec![0 as Element; order];
        let mut seen = vec![false; order];

        let mut x: usize = 1;
        for i in 0..group_order {
            if x == 0 || seen[x] {
                return Err(Error::InvalidFieldParameter(format!(
                    "polynomial {:#x} is not primitive for GF(2^{})",
                    primitive_poly, m
                )));
            }
            seen[x] = true;
            anti_log_table[i] = x as Element;
            log_table[x] = i as u16;

            // Multiply by alpha and reduce modulo the primitive polynomial
            x <<= 1;
            if x & order != 0 {
                x ^= primitive_poly as usize;
            }
        }

        if x != 1 {
            return Err(Error::InvalidFieldParameter(format!(
                "polynomial {:#x} is not primitive for GF(2^{})",
                primitive_poly, m
            )));
        }

        anti_log_table[group_order] = 1;
        log_table[0] = group_order as u16;

        Ok((log_table, anti_log_table))
    }

    /// Field exponent m
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Field order Q = 2^m
    pub fn order(&self) -> usize {
        self.order
    }

    /// Order of the multiplicative group, Q - 1
    pub fn group_order(&self) -> usize {
        self.order - 1
    }

    /// Primitive polynomial bitmask
    pub fn primitive_poly(&self) -> u32 {
        self.primitive_poly
    }

    /// Discrete log table (`log_table[0]` is the sentinel Q - 1)
    pub fn log_table(&self) -> &[u16] {
        &self.log_table
    }

    /// Antilog table, `anti_log_table[i] = alpha^i`
    pub fn anti_log_table(&self) -> &[Element] {
        &self.anti_log_table
    }

    /// Inverse table (`inv_table[0]` is 0)
    pub fn inv_table(&self) -> &[Element] {
        &self.inv_table
    }

    /// alpha^i for any exponent, reduced modulo Q - 1
    #[inline]
    pub fn exp(&self, i: usize) -> Element {
        self.anti_log_table[i % self.group_order()]
    }

    /// True if `x` is an element of this field (`x < Q`)
    #[inline]
    pub fn contains(&self, x: Element) -> bool {
        (x as usize) < self.order
    }

    fn check_element(&self, x: Element) -> Result<()> {
        if !self.contains(x) {
            return Err(Error::InvalidFieldParameter(format!(
                "element {:#x} is outside GF(2^{})",
                x, self.m
            )));
        }
        Ok(())
    }

    /// Discrete log of a nonzero element, `None` for zero or a value outside
    /// the field
    #[inline]
    pub fn log(&self, x: Element) -> Option<usize> {
        if x == 0 || !self.contains(x) {
            None
        } else {
            Some(self.log_table[x as usize] as usize)
        }
    }

    /// Field addition (and subtraction): bitwise XOR
    #[inline]
    pub fn add(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    /// Field multiplication through the log/antilog tables.
    ///
    /// Both operands must be field elements (`< Q`).
    #[inline]
    pub fn multiply(&self, a: Element, b: Element) -> Element {
        debug_assert!(self.contains(a) && self.contains(b));
        if a == 0 || b == 0 {
            return 0;
        }

        let sum = self.log_table[a as usize] as usize + self.log_table[b as usize] as usize;
        self.anti_log_table[sum % self.group_order()]
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for the zero element and
    /// [`Error::InvalidFieldParameter`] for a value outside the field.
    #[inline]
    pub fn inverse(&self, a: Element) -> Result<Element> {
        if a == 0 {
            return Err(Error::DivisionByZero);
        }
        self.check_element(a)?;
        Ok(self.inv_table[a as usize])
    }

    /// Field division `a / b`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `b` is zero and
    /// [`Error::InvalidFieldParameter`] if either operand is outside the field.
    pub fn divide(&self, a: Element, b: Element) -> Result<Element> {
        self.check_element(a)?;
        let b_inv = self.inverse(b)?;
        Ok(self.multiply(a, b_inv))
    }

    /// Raise `a` to the power `e`; `0^0` is 1.
    ///
    /// `a` must be a field element (`< Q`).
    pub fn power(&self, a: Element, e: usize) -> Element {
        debug_assert!(self.contains(a));
        if e == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        // Reduce e first so the product cannot overflow
        let reduced = e % self.group_order();
        self.anti_log_table[(log_a * reduced) % self.group_order()]
    }
}

impl Display for FieldContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF(2^{}) mod {:#x}", self.m, self.primitive_poly)
    }
}
