//! Equatorial coordinates: right ascension and declination.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::math::angle;
use crate::math::{ClosedInterval, RightOpenInterval};
use crate::{Result, SkyplaneError};

static RA_INTERVAL: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));
static DEC_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Position referenced to Earth's rotational axis: right ascension in
/// `[0, τ)`, declination in `[-90°, 90°]`, stored in radians.
///
/// Essentially time-invariant for catalog stars; the orbital models produce
/// these for moving bodies one timestamp at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    ra: f64,
    dec: f64,
}

impl EquatorialCoordinates {
    pub(crate) fn raw(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Creates equatorial coordinates from radians, validating both angles.
    pub fn of(ra: f64, dec: f64) -> Result<Self> {
        if !RA_INTERVAL.contains(ra) {
            return Err(SkyplaneError::Domain(format!(
                "right ascension {} rad outside {}",
                ra, *RA_INTERVAL
            )));
        }
        if !DEC_INTERVAL.contains(dec) {
            return Err(SkyplaneError::Domain(format!(
                "declination {} rad outside {}",
                dec, *DEC_INTERVAL
            )));
        }
        Ok(Self::raw(ra, dec))
    }

    /// Creates equatorial coordinates from degrees.
    pub fn of_deg(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        Self::of(angle::from_deg(ra_deg), angle::from_deg(dec_deg))
    }

    /// Right ascension in radians.
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Right ascension in degrees.
    pub fn ra_deg(&self) -> f64 {
        angle::to_deg(self.ra)
    }

    /// Right ascension in hours.
    pub fn ra_hr(&self) -> f64 {
        angle::to_hr(self.ra)
    }

    /// Declination in radians.
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Declination in degrees.
    pub fn dec_deg(&self) -> f64 {
        angle::to_deg(self.dec)
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_accessors() {
        let eq = EquatorialCoordinates::of(PI, PI / 4.0).unwrap();
        assert_relative_eq!(eq.ra_hr(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(eq.ra_deg(), 180.0, epsilon = 1e-12);
        assert_relative_eq!(eq.dec_deg(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(EquatorialCoordinates::of(TAU, 0.0).is_err());
        assert!(EquatorialCoordinates::of(-0.001, 0.0).is_err());
        assert!(EquatorialCoordinates::of(0.0, PI / 2.0 + 0.001).is_err());
        // Both poles are representable
        assert!(EquatorialCoordinates::of(0.0, PI / 2.0).is_ok());
        assert!(EquatorialCoordinates::of(0.0, -PI / 2.0).is_ok());
    }
}
