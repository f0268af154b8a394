//! Ecliptic coordinates: position referenced to the plane of Earth's orbit.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::math::angle;
use crate::math::{ClosedInterval, RightOpenInterval};
use crate::{Result, SkyplaneError};

static LON_INTERVAL: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));
static LAT_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Sun-relative orbital-plane position: longitude in `[0, τ)`, latitude in
/// `[-90°, 90°]`, stored in radians. The output frame of the orbital models
/// before conversion to equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    lon: f64,
    lat: f64,
}

impl EclipticCoordinates {
    pub(crate) fn raw(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates ecliptic coordinates from radians, validating both angles.
    pub fn of(lon: f64, lat: f64) -> Result<Self> {
        if !LON_INTERVAL.contains(lon) {
            return Err(SkyplaneError::Domain(format!(
                "ecliptic longitude {} rad outside {}",
                lon, *LON_INTERVAL
            )));
        }
        if !LAT_INTERVAL.contains(lat) {
            return Err(SkyplaneError::Domain(format!(
                "ecliptic latitude {} rad outside {}",
                lat, *LAT_INTERVAL
            )));
        }
        Ok(Self::raw(lon, lat))
    }

    /// Creates ecliptic coordinates from degrees.
    pub fn of_deg(lon_deg: f64, lat_deg: f64) -> Result<Self> {
        Self::of(angle::from_deg(lon_deg), angle::from_deg(lat_deg))
    }

    /// Ecliptic longitude in radians.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Ecliptic longitude in degrees.
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Ecliptic latitude in radians.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Ecliptic latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
