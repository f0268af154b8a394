//! # Polynomial Evaluator
//!
//! Horner-scheme evaluation for the time-series astronomical formulas
//! (sidereal time, obliquity of the ecliptic), whose coefficients are
//! polynomials in Julian centuries since a reference epoch.
//!
//! Coefficients are stored highest-degree first. A constant-zero leading
//! coefficient is rejected as degenerate: the caller asked for a degree the
//! polynomial does not actually have.

use crate::{Result, SkyplaneError};

/// An immutable polynomial with coefficients ordered highest-degree first
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from highest-degree-first coefficients.
    ///
    /// Fails on an empty coefficient list, and on a zero leading coefficient
    /// for any polynomial of degree one or more.
    pub fn new(coefficients: &[f64]) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(SkyplaneError::Domain(
                "polynomial requires at least one coefficient".to_string(),
            ));
        }
        if coefficients.len() > 1 && coefficients[0] == 0.0 {
            return Err(SkyplaneError::Domain(
                "polynomial leading coefficient must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            coefficients: coefficients.to_vec(),
        })
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    ///
    /// A degree-zero polynomial, or evaluation at `x == 0`, returns the
    /// lowest-order (constant) term directly.
    pub fn at(&self, x: f64) -> f64 {
        if self.coefficients.len() == 1 || x == 0.0 {
            return *self.coefficients.last().expect("validated non-empty");
        }
        let mut value = self.coefficients[0];
        for c in &self.coefficients[1..] {
            value = c + x * value;
        }
        value
    }
}
