//! Analytical Sun model.
//!
//! Single-body reduction: a first-order Kepler step on Earth's orbit gives
//! the Sun's geocentric ecliptic longitude directly (its ecliptic latitude
//! is identically zero). The angular size scales with the instantaneous
//! orbital radius through the standard `(1 + e·cos ν)/(1 − e²)` factor.

use once_cell::sync::Lazy;

use crate::bodies::{true_anomaly, CelestialBody};
use crate::constants::{TAU, TROPICAL_YEAR};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::{angle, RightOpenInterval};

// Orbital constants of the Sun's apparent geocentric orbit at J2010
const ECCENTRICITY: f64 = 0.016705;
const LON_AT_EPOCH_DEG: f64 = 279.557208;
const LON_PERIGEE_DEG: f64 = 283.112438;
const ANGULAR_SIZE_AT_1AU_DEG: f64 = 0.533128;
const MAGNITUDE: f64 = -26.7;

static FULL_TURN: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));

/// The Sun at one instant: the body record plus the ecliptic quantities the
/// sky assembler and downstream models (lunar theory) need.
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    body: CelestialBody,
    ecliptic_position: EclipticCoordinates,
    mean_anomaly: f64,
}

impl Sun {
    /// The body record (name, equatorial position, angular size, magnitude).
    pub fn body(&self) -> &CelestialBody {
        &self.body
    }

    /// Geocentric ecliptic position (latitude is always zero).
    pub fn ecliptic_position(&self) -> EclipticCoordinates {
        self.ecliptic_position
    }

    /// Mean anomaly at the instant, in radians.
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }
}

/// Computes the Sun for `days_since_j2010` (may be negative), converting its
/// ecliptic position through the supplied operator.
pub fn sun_at(days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Sun {
    let lon_at_epoch = angle::from_deg(LON_AT_EPOCH_DEG);
    let lon_perigee = angle::from_deg(LON_PERIGEE_DEG);

    let mean_anomaly =
        FULL_TURN.reduce(TAU / TROPICAL_YEAR * days_since_j2010 + lon_at_epoch - lon_perigee);
    let nu = true_anomaly(mean_anomaly, ECCENTRICITY);
    let lon = FULL_TURN.reduce(nu + lon_perigee);

    let ecliptic_position = EclipticCoordinates::raw(lon, 0.0);
    let position = conversion.apply(&ecliptic_position);

    let angular_size = angle::from_deg(ANGULAR_SIZE_AT_1AU_DEG)
        * ((1.0 + ECCENTRICITY * nu.cos()) / (1.0 - ECCENTRICITY * ECCENTRICITY));

    Sun {
        body: CelestialBody::raw("Sun", position, angular_size, MAGNITUDE),
        ecliptic_position,
        mean_anomaly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    use crate::time::Epoch;

    #[test]
    fn test_sun_reference_instant() {
        // 2003-07-27T00:00 UTC: λ☉ = 123.580601°, ra 8.392683h, dec 19.352884°
        let when = Utc.with_ymd_and_hms(2003, 7, 27, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let sun = sun_at(Epoch::J2010.days_until(&when), &conversion);

        assert_relative_eq!(
            sun.ecliptic_position().lon_deg(),
            123.580_600_531_533_36,
            epsilon = 1e-9
        );
        assert_eq!(sun.ecliptic_position().lat(), 0.0);
        assert_relative_eq!(sun.body().position().ra_hr(), 8.392_682_808_297_792, epsilon = 1e-9);
        assert_relative_eq!(
            sun.body().position().dec_deg(),
            19.352_883_730_973_563,
            epsilon = 1e-9
        );
        assert_relative_eq!(sun.mean_anomaly(), 3.510_889_136_292_206_6, epsilon = 1e-9);
    }

    #[test]
    fn test_sun_angular_size_varies_with_distance() {
        // Perihelion (early January) subtends more than aphelion (July)
        let january = Utc.with_ymd_and_hms(2010, 1, 3, 0, 0, 0).unwrap();
        let july = Utc.with_ymd_and_hms(2010, 7, 4, 0, 0, 0).unwrap();
        let sun_jan = sun_at(
            Epoch::J2010.days_until(&january),
            &EclipticToEquatorialConversion::new(&january),
        );
        let sun_jul = sun_at(
            Epoch::J2010.days_until(&july),
            &EclipticToEquatorialConversion::new(&july),
        );
        assert!(sun_jan.body().angular_size() > sun_jul.body().angular_size());

        // 2003-07-27 oracle
        let when = Utc.with_ymd_and_hms(2003, 7, 27, 0, 0, 0).unwrap();
        let sun = sun_at(
            Epoch::J2010.days_until(&when),
            &EclipticToEquatorialConversion::new(&when),
        );
        assert_relative_eq!(
            crate::math::angle::to_deg(sun.body().angular_size()),
            0.524_930_841_959_782_8,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sun_name_and_magnitude() {
        let when = Utc.with_ymd_and_hms(2020, 4, 4, 12, 0, 0).unwrap();
        let sun = sun_at(
            Epoch::J2010.days_until(&when),
            &EclipticToEquatorialConversion::new(&when),
        );
        assert_eq!(sun.body().name(), "Sun");
        assert_eq!(sun.body().magnitude(), -26.7);
    }
}
