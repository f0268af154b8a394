//! Horizontal coordinates: observer-relative azimuth and altitude.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::math::angle;
use crate::math::{ClosedInterval, RightOpenInterval};
use crate::{Result, SkyplaneError};

static AZ_INTERVAL: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));
static ALT_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Observer-relative sky position at a given time and place: azimuth in
/// `[0, τ)` measured from north through east, altitude in `[-90°, 90°]`,
/// stored in radians. The immediate input to stereographic projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    az: f64,
    alt: f64,
}

impl HorizontalCoordinates {
    pub(crate) fn raw(az: f64, alt: f64) -> Self {
        Self { az, alt }
    }

    /// Creates horizontal coordinates from radians, validating both angles.
    pub fn of(az: f64, alt: f64) -> Result<Self> {
        if !AZ_INTERVAL.contains(az) {
            return Err(SkyplaneError::Domain(format!(
                "azimuth {} rad outside {}",
                az, *AZ_INTERVAL
            )));
        }
        if !ALT_INTERVAL.contains(alt) {
            return Err(SkyplaneError::Domain(format!(
                "altitude {} rad outside {}",
                alt, *ALT_INTERVAL
            )));
        }
        Ok(Self::raw(az, alt))
    }

    /// Creates horizontal coordinates from degrees.
    pub fn of_deg(az_deg: f64, alt_deg: f64) -> Result<Self> {
        Self::of(angle::from_deg(az_deg), angle::from_deg(alt_deg))
    }

    /// Azimuth in radians.
    pub fn az(&self) -> f64 {
        self.az
    }

    /// Azimuth in degrees.
    pub fn az_deg(&self) -> f64 {
        angle::to_deg(self.az)
    }

    /// Altitude in radians.
    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// Altitude in degrees.
    pub fn alt_deg(&self) -> f64 {
        angle::to_deg(self.alt)
    }

    /// Angular distance to another horizontal coordinate, in radians.
    ///
    /// Spherical law of cosines; the cosine is clamped before `acos` to
    /// absorb floating error at coincident or antipodal points.
    pub fn angular_distance_to(&self, other: &Self) -> f64 {
        let cos_dist = self.alt.sin() * other.alt.sin()
            + self.alt.cos() * other.alt.cos() * (self.az - other.az).cos();
        cos_dist.clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}
