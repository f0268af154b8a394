//! Analytical Moon model.
//!
//! Low-precision lunar theory: the mean orbit is corrected by the four
//! classical perturbation terms — evection, annual equation, equation of the
//! centre and variation — all driven by the Sun's position at the same
//! instant, then tilted out of the ecliptic by the lunar orbital
//! inclination about the (regressing) ascending node.

use once_cell::sync::Lazy;

use crate::bodies::{sun, CelestialBody};
use crate::constants::TAU;
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::{angle, RightOpenInterval};
use crate::{Result, SkyplaneError};

// Mean orbital constants at J2010 (degrees, converted on use)
const MEAN_LON_AT_EPOCH_DEG: f64 = 91.929336;
const MEAN_LON_PERIGEE_DEG: f64 = 130.143076;
const ASCENDING_NODE_LON_DEG: f64 = 291.682547;
const INCLINATION_DEG: f64 = 5.145396;
const ECCENTRICITY: f64 = 0.0549;
/// Angular size at the mean Earth–Moon distance
const ANGULAR_SIZE_DEG: f64 = 0.5181;
const MAGNITUDE: f64 = 0.0;

// Daily motion rates (degrees per day)
const MEAN_LON_RATE_DEG: f64 = 13.176_396_6;
const PERIGEE_RATE_DEG: f64 = 0.111_404_1;
const NODE_RATE_DEG: f64 = 0.052_953_9;

// Perturbation amplitudes (degrees)
const EVECTION_DEG: f64 = 1.2739;
const ANNUAL_EQ_DEG: f64 = 0.1858;
const THIRD_CORRECTION_DEG: f64 = 0.37;
const CENTRE_EQ_DEG: f64 = 6.2886;
const FOURTH_CORRECTION_DEG: f64 = 0.214;
const VARIATION_DEG: f64 = 0.6583;
const NODE_CORRECTION_DEG: f64 = 0.16;

static FULL_TURN: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));

/// The Moon at one instant: the body record plus the illuminated fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    body: CelestialBody,
    phase: f64,
}

impl Moon {
    fn new(body: CelestialBody, phase: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&phase) {
            return Err(SkyplaneError::Domain(format!(
                "lunar phase must be in [0, 1], got {}",
                phase
            )));
        }
        Ok(Self { body, phase })
    }

    /// The body record (name, equatorial position, angular size, magnitude).
    pub fn body(&self) -> &CelestialBody {
        &self.body
    }

    /// Illuminated fraction of the disk, in `[0, 1]`.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

/// Computes the Moon for `days_since_j2010` (may be negative), converting
/// its ecliptic position through the supplied operator.
pub fn moon_at(
    days_since_j2010: f64,
    conversion: &EclipticToEquatorialConversion,
) -> Result<Moon> {
    // The perturbation terms are all driven by the Sun at the same instant
    let sun = sun::sun_at(days_since_j2010, conversion);
    let sun_lon = sun.ecliptic_position().lon();
    let sin_sun_anomaly = sun.mean_anomaly().sin();

    let mean_lon =
        angle::from_deg(MEAN_LON_RATE_DEG) * days_since_j2010 + angle::from_deg(MEAN_LON_AT_EPOCH_DEG);
    let mean_anomaly = mean_lon
        - angle::from_deg(PERIGEE_RATE_DEG) * days_since_j2010
        - angle::from_deg(MEAN_LON_PERIGEE_DEG);

    let evection = angle::from_deg(EVECTION_DEG) * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
    let annual_eq = angle::from_deg(ANNUAL_EQ_DEG) * sin_sun_anomaly;
    let third = angle::from_deg(THIRD_CORRECTION_DEG) * sin_sun_anomaly;

    let corrected_anomaly = mean_anomaly + evection - annual_eq - third;
    let centre_eq = angle::from_deg(CENTRE_EQ_DEG) * corrected_anomaly.sin();
    let fourth = angle::from_deg(FOURTH_CORRECTION_DEG) * (2.0 * corrected_anomaly).sin();
    let corrected_lon = mean_lon + evection + centre_eq - annual_eq + fourth;

    let variation = angle::from_deg(VARIATION_DEG) * (2.0 * (corrected_lon - sun_lon)).sin();
    let true_lon = corrected_lon + variation;

    let node = angle::from_deg(ASCENDING_NODE_LON_DEG)
        - angle::from_deg(NODE_RATE_DEG) * days_since_j2010;
    let corrected_node = node - angle::from_deg(NODE_CORRECTION_DEG) * sin_sun_anomaly;

    let inclination = angle::from_deg(INCLINATION_DEG);
    let lon_from_node = true_lon - corrected_node;
    let lon = FULL_TURN.reduce(
        (lon_from_node.sin() * inclination.cos()).atan2(lon_from_node.cos()) + corrected_node,
    );
    let lat = (lon_from_node.sin() * inclination.sin()).asin();

    let ecliptic_position = EclipticCoordinates::raw(lon, lat);
    let position = conversion.apply(&ecliptic_position);

    let phase = (1.0 - (true_lon - sun_lon).cos()) / 2.0;

    // Distance in units of the semi-major axis, from the focal chord
    let distance = (1.0 - ECCENTRICITY * ECCENTRICITY)
        / (1.0 + ECCENTRICITY * (corrected_anomaly + centre_eq).cos());
    let angular_size = angle::from_deg(ANGULAR_SIZE_DEG) / distance;

    Moon::new(
        CelestialBody::raw("Moon", position, angular_size, MAGNITUDE),
        phase.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    use crate::time::Epoch;

    #[test]
    fn test_moon_reference_instant() {
        // 2003-09-01T00:00 UTC: λ = 214.862515°, β = 1.716257°
        let when = Utc.with_ymd_and_hms(2003, 9, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let moon = moon_at(Epoch::J2010.days_until(&when), &conversion).unwrap();

        assert_relative_eq!(
            moon.body().position().ra_hr(),
            14.211_456_462_003_504,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            moon.body().position().dec_deg(),
            -11.524_571_288_993_73,
            epsilon = 1e-9
        );
        assert_relative_eq!(moon.phase(), 0.225_006_081_477_591_7, epsilon = 1e-9);
        assert_relative_eq!(
            crate::math::angle::to_deg(moon.body().angular_size()),
            0.546_820_685_798_468_9,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_moon_phase_stays_in_unit_interval() {
        for day in (-4000..4000).step_by(97) {
            let when = Epoch::J2010.instant() + chrono::Duration::days(day);
            let conversion = EclipticToEquatorialConversion::new(&when);
            let moon = moon_at(Epoch::J2010.days_until(&when), &conversion).unwrap();
            assert!((0.0..=1.0).contains(&moon.phase()), "day {}", day);
        }
    }

    #[test]
    fn test_moon_name_and_magnitude() {
        let when = Utc.with_ymd_and_hms(2020, 4, 4, 12, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let moon = moon_at(Epoch::J2010.days_until(&when), &conversion).unwrap();
        assert_eq!(moon.body().name(), "Moon");
        assert_eq!(moon.body().magnitude(), 0.0);
    }
}
