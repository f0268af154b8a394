//! Orbital models for the Sun, Moon and planets
//!
//! Each body is computed by a pure function of the elapsed days since the
//! J2010 reference epoch (negative for earlier moments) plus a ready-made
//! ecliptic→equatorial conversion for the same instant. The models are the
//! standard low-precision analytical theory: a first-order Kepler step,
//! inclination projection onto the ecliptic, and for planets a geocentric
//! reduction against Earth's own heliocentric position.
//!
//! Per-body constants are read-only tables of plain records; the shared
//! computation lives in free functions parametrized by those records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinates::EquatorialCoordinates;
use crate::{Result, SkyplaneError};

pub mod moon;
pub mod planets;
pub mod sun;

pub use moon::{moon_at, Moon};
pub use planets::{planet_at, OrbitalElements, Planet};
pub use sun::{sun_at, Sun};

/// First-order Kepler approximation of the true anomaly.
pub(crate) fn true_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    mean_anomaly + 2.0 * eccentricity * mean_anomaly.sin()
}

/// The uniform output record of every orbital model: what a renderer needs
/// to draw one body at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    name: String,
    position: EquatorialCoordinates,
    angular_size: f64,
    magnitude: f64,
}

impl CelestialBody {
    pub(crate) fn raw(
        name: impl Into<String>,
        position: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            angular_size,
            magnitude,
        }
    }

    /// Creates a body record, rejecting a negative angular size.
    pub fn new(
        name: impl Into<String>,
        position: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Result<Self> {
        if angular_size < 0.0 {
            return Err(SkyplaneError::Domain(format!(
                "angular size must be non-negative, got {}",
                angular_size
            )));
        }
        Ok(Self::raw(name, position, angular_size, magnitude))
    }

    /// Display name of the body.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Equatorial position at the model's instant.
    pub fn position(&self) -> EquatorialCoordinates {
        self.position
    }

    /// Apparent angular diameter in radians.
    pub fn angular_size(&self) -> f64 {
        self.angular_size
    }

    /// Apparent magnitude (lower is brighter).
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_true_anomaly_first_order() {
        // Zero eccentricity: true anomaly equals mean anomaly
        assert_eq!(true_anomaly(1.234, 0.0), 1.234);
        let m = 0.75;
        assert_relative_eq!(
            true_anomaly(m, 0.0167),
            m + 2.0 * 0.0167 * m.sin(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_body_rejects_negative_angular_size() {
        let pos = EquatorialCoordinates::of_deg(10.0, 20.0).unwrap();
        assert!(CelestialBody::new("Bogus", pos, -0.001, 1.0).is_err());
        let ok = CelestialBody::new("Fine", pos, 0.0, 1.0).unwrap();
        assert_eq!(ok.name(), "Fine");
        assert_eq!(ok.angular_size(), 0.0);
    }
}
