//! # innkeeper-poly: Integer Polynomials
//!
//! A small value type for polynomials with `i64` coefficients.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  coefficients are stored highest degree first                           │
//! │                                                                         │
//! │    [3, 2, 1]      →  3x^2 + 2x + 1                                      │
//! │    [2, 0, -1, 0]  →  2x^3 + -x                                          │
//! │    [0, 0, 3, 5]   →  normalized to [3, 5]  →  3x + 5                    │
//! │    [0, 0, 0]      →  normalized to [0]     →  0                         │
//! │                                                                         │
//! │  Leading zeros are always trimmed; trailing zeros are real terms.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use innkeeper_poly::Polynomial;
//!
//! let p = Polynomial::new(vec![1, 2]); // x + 2
//! let q = Polynomial::new(vec![2, 1]); // 2x + 1
//!
//! assert_eq!((&p * &q).to_string(), "2x^2 + 5x + 2");
//! assert_eq!((&p - &p).coefficients(), &[0]);
//! assert!(Polynomial::new(vec![1, 0, 2]) > p);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A polynomial with integer coefficients, highest degree first.
///
/// ## Invariants
/// - Never empty
/// - The leading coefficient is non-zero unless the polynomial is `[0]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<i64>", into = "Vec<i64>")]
pub struct Polynomial {
    coefficients: Vec<i64>,
}

impl Polynomial {
    /// Builds a polynomial, trimming leading zeros.
    pub fn new(coefficients: Vec<i64>) -> Self {
        let mut poly = Polynomial { coefficients };
        poly.normalize();
        poly
    }

    /// The zero polynomial, `[0]`.
    pub fn zero() -> Self {
        Polynomial {
            coefficients: vec![0],
        }
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Highest power with a non-zero coefficient (0 for constants and zero).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients == [0]
    }

    /// Trims leading zero coefficients; all zeros (or nothing) become `[0]`.
    pub fn normalize(&mut self) {
        let first = self
            .coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(self.coefficients.len());
        self.coefficients.drain(..first);
        if self.coefficients.is_empty() {
            self.coefficients.push(0);
        }
    }

    /// Coefficient of `x^power`, zero past the degree.
    pub fn coefficient(&self, power: usize) -> i64 {
        if power > self.degree() {
            return 0;
        }
        self.coefficients[self.degree() - power]
    }

    /// Sum, aligned at the constant term.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        self.zip_terms(other, |a, b| a + b)
    }

    /// Difference, aligned at the constant term.
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.zip_terms(other, |a, b| a - b)
    }

    /// Product of the two polynomials.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut product = vec![0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Polynomial::new(product)
    }

    /// Higher degree wins; equal degrees compare coefficients from the
    /// leading term down.
    pub fn compare_degree_then_coefficients(&self, other: &Polynomial) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| self.coefficients.cmp(&other.coefficients))
    }

    fn zip_terms(&self, other: &Polynomial, op: impl Fn(i64, i64) -> i64) -> Polynomial {
        let degree = self.degree().max(other.degree());
        let coefficients = (0..=degree)
            .rev()
            .map(|power| op(self.coefficient(power), other.coefficient(power)))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Renders the polynomial, e.g. `3x^2 + -x + 1`.
    pub fn to_display_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let degree = self.degree();
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(|(i, &c)| render_term(c, degree - i))
            .collect();
        terms.join(" + ")
    }
}

fn render_term(coefficient: i64, power: usize) -> String {
    if power == 0 {
        return coefficient.to_string();
    }

    let factor = match coefficient {
        1 => String::new(),
        -1 => "-".to_string(),
        c => c.to_string(),
    };
    if power == 1 {
        format!("{}x", factor)
    } else {
        format!("{}x^{}", factor, power)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<i64> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_degree_then_coefficients(other)
    }
}

impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::add(&self, &other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        self.subtract(other)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self.subtract(&other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        self.multiply(&other)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.coefficients.iter().map(|c| -c).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
