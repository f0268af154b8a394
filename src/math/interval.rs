//! # Interval Types
//!
//! Closed and right-open intervals over `f64`, used throughout the crate for
//! domain validation, clipping and modular reduction of angular values.
//!
//! The two variants carry deliberately different semantics:
//!
//! - [`ClosedInterval`] `[low, high]` supports `clip`, which saturates a
//!   value at the nearest bound (altitude, declination, latitude).
//! - [`RightOpenInterval`] `[low, high)` supports `reduce`, which wraps a
//!   value into the interval via floored modulo (azimuth, longitude, right
//!   ascension). Floored — not truncated — modulo is what makes negative
//!   inputs wrap correctly: reducing `-10` into `[0, 360)` yields `350`.
//!
//! Both are immutable value types whose constructors reject `low >= high`.

use std::fmt;

use crate::{Result, SkyplaneError};

/// A closed interval `[low, high]` with saturating clip semantics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Creates the closed interval `[low, high]`; fails unless `low < high`.
    pub fn of(low: f64, high: f64) -> Result<Self> {
        if low >= high {
            return Err(SkyplaneError::Domain(format!(
                "degenerate closed interval: low {} >= high {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Creates the interval `[-size/2, size/2]` centered on zero.
    pub fn symmetric(size: f64) -> Result<Self> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Interval size `high - low`.
    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `v` lies in `[low, high]`.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }

    /// Saturates `v` at the nearest bound; values inside pass through.
    pub fn clip(&self, v: f64) -> f64 {
        v.clamp(self.low, self.high)
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// A right-open interval `[low, high)` with modular reduce semantics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Creates the right-open interval `[low, high)`; fails unless `low < high`.
    pub fn of(low: f64, high: f64) -> Result<Self> {
        if low >= high {
            return Err(SkyplaneError::Domain(format!(
                "degenerate right-open interval: low {} >= high {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Creates the interval `[-size/2, size/2)` centered on zero.
    pub fn symmetric(size: f64) -> Result<Self> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (excluded).
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Interval size `high - low`.
    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `v` lies in `[low, high)`.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.low && v < self.high
    }

    /// Wraps any finite `v` into `[low, high)` via floored modulo.
    ///
    /// `rem_euclid` keeps the remainder non-negative, so negative inputs
    /// land inside the interval instead of below it.
    pub fn reduce(&self, v: f64) -> f64 {
        self.low + (v - self.low).rem_euclid(self.size())
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(5.0, 5.0)]
    #[case(10.0, 2.0)]
    #[case(0.0, -1.0)]
    fn test_closed_construction_rejects_degenerate_bounds(#[case] low: f64, #[case] high: f64) {
        assert!(ClosedInterval::of(low, high).is_err());
        assert!(RightOpenInterval::of(low, high).is_err());
    }

    #[test]
    fn test_closed_clip_saturates() {
        let i = ClosedInterval::of(-2.0, 7.0).unwrap();
        assert_eq!(i.clip(i.low() - 5.0), i.low());
        assert_eq!(i.clip(i.high() + 5.0), i.high());
        assert_eq!(i.clip(3.25), 3.25);
    }

    #[test]
    fn test_closed_contains_includes_both_bounds() {
        let i = ClosedInterval::of(0.0, 1.0).unwrap();
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0 + 1e-12));
    }

    #[test]
    fn test_symmetric_centers_on_zero() {
        let c = ClosedInterval::symmetric(180.0).unwrap();
        assert_eq!(c.low(), -90.0);
        assert_eq!(c.high(), 90.0);
        let r = RightOpenInterval::symmetric(360.0).unwrap();
        assert_eq!(r.low(), -180.0);
        assert_eq!(r.high(), 180.0);
        assert!(ClosedInterval::symmetric(0.0).is_err());
    }

    #[test]
    fn test_right_open_contains_excludes_high() {
        let i = RightOpenInterval::of(0.0, 24.0).unwrap();
        assert!(i.contains(0.0));
        assert!(i.contains(23.999));
        assert!(!i.contains(24.0));
    }

    #[test]
    fn test_reduce_wraps_negative_values() {
        let i = RightOpenInterval::of(0.0, 360.0).unwrap();
        assert_relative_eq!(i.reduce(-10.0), 350.0, epsilon = 1e-12);
        assert_relative_eq!(i.reduce(370.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(i.reduce(-720.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reduce_is_idempotent_and_in_range() {
        let i = RightOpenInterval::of(-180.0, 180.0).unwrap();
        for v in [-1234.5, -180.0, -0.1, 0.0, 179.999, 180.0, 5000.25] {
            let once = i.reduce(v);
            assert!(i.contains(once), "reduce({}) = {} escaped interval", v, once);
            assert_relative_eq!(i.reduce(once), once, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ClosedInterval::of(0.0, 1.0).unwrap().to_string(), "[0,1]");
        assert_eq!(RightOpenInterval::of(0.0, 1.0).unwrap().to_string(), "[0,1)");
    }
}
