//! Geographic coordinates: an observer's position on Earth.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::TAU;
use crate::math::angle;
use crate::math::{ClosedInterval, RightOpenInterval};
use crate::{Result, SkyplaneError};

static LON_INTERVAL: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::symmetric(TAU).expect("non-degenerate"));
static LAT_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Observer position on Earth: longitude in `[-180°, 180°)`, latitude in
/// `[-90°, 90°]`, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinates {
    lon: f64,
    lat: f64,
}

impl GeographicCoordinates {
    pub(crate) fn raw(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates geographic coordinates from radians, validating both angles.
    pub fn of(lon: f64, lat: f64) -> Result<Self> {
        if !LON_INTERVAL.contains(lon) {
            return Err(SkyplaneError::Domain(format!(
                "geographic longitude {} rad outside {}",
                lon, *LON_INTERVAL
            )));
        }
        if !LAT_INTERVAL.contains(lat) {
            return Err(SkyplaneError::Domain(format!(
                "geographic latitude {} rad outside {}",
                lat, *LAT_INTERVAL
            )));
        }
        Ok(Self::raw(lon, lat))
    }

    /// Creates geographic coordinates from degrees.
    pub fn of_deg(lon_deg: f64, lat_deg: f64) -> Result<Self> {
        Self::of(angle::from_deg(lon_deg), angle::from_deg(lat_deg))
    }

    /// Longitude in radians.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Longitude in degrees.
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Latitude in radians.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(6.57, 46.52)]
    #[case(-180.0, -90.0)]
    #[case(179.999, 90.0)]
    #[case(0.0, 0.0)]
    fn test_degree_round_trip(#[case] lon_deg: f64, #[case] lat_deg: f64) {
        let g = GeographicCoordinates::of_deg(lon_deg, lat_deg).unwrap();
        assert_relative_eq!(g.lon_deg(), lon_deg, epsilon = 1e-12);
        assert_relative_eq!(g.lat_deg(), lat_deg, epsilon = 1e-12);
    }

    #[rstest]
    #[case(180.0, 0.0)] // longitude interval is right-open
    #[case(-180.001, 0.0)]
    #[case(0.0, 90.001)]
    #[case(0.0, -91.0)]
    fn test_rejects_out_of_range(#[case] lon_deg: f64, #[case] lat_deg: f64) {
        assert!(GeographicCoordinates::of_deg(lon_deg, lat_deg).is_err());
    }

    #[test]
    fn test_display() {
        let g = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        assert_eq!(g.to_string(), "(lon=6.5700°, lat=46.5200°)");
    }
}
