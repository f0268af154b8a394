//! # Frame Conversions
//!
//! Time- and location-dependent operators between coordinate frames. Each
//! operator is constructed once per timestamp (and observer location, where
//! relevant), precomputing the trigonometry it reuses, and then applied as a
//! pure function to any number of coordinates.
//!
//! - [`EclipticToEquatorialConversion`]: a spherical rotation between two
//!   frames sharing an origin but tilted by the mean obliquity of the
//!   ecliptic ε, itself a fixed polynomial in Julian centuries since J2000.
//! - [`EquatorialToHorizontalConversion`]: hour-angle based rotation into
//!   the observer's sky, built from local sidereal time and latitude.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::constants::TAU;
use crate::coordinates::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
use crate::math::{angle, ClosedInterval, Polynomial, RightOpenInterval};
use crate::time::{sidereal, Epoch};

// Mean obliquity of the ecliptic, arcsecond series evaluated at Julian
// centuries since J2000 (IAU 1980 expression). Constant term 23°26'21.45".
static OBLIQUITY_POLY: Lazy<Polynomial> = Lazy::new(|| {
    Polynomial::new(&[
        angle::from_arcsec(0.00181),
        angle::from_arcsec(-0.0006),
        angle::from_arcsec(-46.815),
        angle::from_dms(23.0, 26.0, 21.45).expect("valid DMS literal"),
    ])
    .expect("non-degenerate coefficients")
});

static FULL_TURN: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));
static HALF_TURN: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Ecliptic → equatorial rotation for one timestamp
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorialConversion {
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    /// Builds the conversion for `when`, precomputing the mean obliquity.
    pub fn new(when: &DateTime<Utc>) -> Self {
        let obliquity = OBLIQUITY_POLY.at(Epoch::J2000.julian_centuries_until(when));
        Self {
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }

    /// Rotates an ecliptic position into the equatorial frame.
    pub fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();
        let lat = ecl.lat();

        let ra = (sin_lon * self.cos_obliquity - lat.tan() * self.sin_obliquity).atan2(cos_lon);
        let dec =
            (lat.sin() * self.cos_obliquity + lat.cos() * self.sin_obliquity * sin_lon).asin();

        EquatorialCoordinates::raw(FULL_TURN.reduce(ra), HALF_TURN.clip(dec))
    }
}

/// Equatorial → horizontal rotation for one (timestamp, observer) pair
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal: f64,
    cos_lat: f64,
    sin_lat: f64,
}

impl EquatorialToHorizontalConversion {
    /// Builds the conversion for `when` as seen from `observer`,
    /// precomputing local sidereal time and the latitude trigonometry.
    pub fn new(when: &DateTime<Utc>, observer: &GeographicCoordinates) -> Self {
        Self {
            local_sidereal: sidereal::local(when, observer),
            cos_lat: observer.lat().cos(),
            sin_lat: observer.lat().sin(),
        }
    }

    /// Rotates an equatorial position into the observer's horizontal frame.
    pub fn apply(&self, eq: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal - eq.ra();
        let (sin_dec, cos_dec) = eq.dec().sin_cos();
        let (sin_h, cos_h) = hour_angle.sin_cos();

        let alt = (sin_dec * self.sin_lat + cos_dec * self.cos_lat * cos_h).asin();
        let az = (-cos_dec * self.cos_lat * sin_h).atan2(sin_dec - self.sin_lat * alt.sin());

        HorizontalCoordinates::raw(FULL_TURN.reduce(az), HALF_TURN.clip(alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_obliquity_polynomial_reference_value() {
        let when = Utc.with_ymd_and_hms(2009, 7, 6, 0, 0, 0).unwrap();
        let eps = OBLIQUITY_POLY.at(Epoch::J2000.julian_centuries_until(&when));
        assert_relative_eq!(angle::to_deg(eps), 23.438_054_979_132_73, epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_to_equatorial_reference_case() {
        // 2009-07-06, λ = 139°41'10", β = 4°52'31" → ra 9.581478h, dec 19.535003°
        let when = Utc.with_ymd_and_hms(2009, 7, 6, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let ecl = EclipticCoordinates::of(
            angle::from_dms(139.0, 41.0, 10.0).unwrap(),
            angle::from_dms(4.0, 52.0, 31.0).unwrap(),
        )
        .unwrap();

        let eq = conversion.apply(&ecl);
        assert_relative_eq!(eq.ra_hr(), 9.581_478_170_200_256, epsilon = 1e-9);
        assert_relative_eq!(eq.dec_deg(), 19.535_002_937_254_006, epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_pole_maps_near_equatorial_pole() {
        let when = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let pole = EclipticCoordinates::of_deg(0.0, 90.0).unwrap();
        let eq = conversion.apply(&pole);
        // The ecliptic pole sits one obliquity away from the celestial pole
        assert_relative_eq!(eq.dec_deg(), 90.0 - 23.44, epsilon = 0.01);
    }

    #[test]
    fn test_equatorial_to_horizontal_pole_altitude_equals_latitude() {
        // The north celestial pole stands at an altitude equal to the
        // observer's latitude, regardless of time.
        let observer = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        for hour in [0, 6, 18] {
            let when = Utc.with_ymd_and_hms(2020, 4, 4, hour, 0, 0).unwrap();
            let conversion = EquatorialToHorizontalConversion::new(&when, &observer);
            let pole = EquatorialCoordinates::of_deg(0.0, 90.0).unwrap();
            let hor = conversion.apply(&pole);
            assert_relative_eq!(hor.alt_deg(), 46.52, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_equatorial_to_horizontal_meridian_crossing() {
        // An object whose right ascension equals the local sidereal time is
        // on the meridian: azimuth 0 or 180, altitude 90 - |lat - dec|.
        let observer = GeographicCoordinates::of_deg(0.0, 52.0).unwrap();
        let when = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap();
        let lst = sidereal::local(&when, &observer);
        let conversion = EquatorialToHorizontalConversion::new(&when, &observer);

        let eq = EquatorialCoordinates::of(lst, angle::from_deg(10.0)).unwrap();
        let hor = conversion.apply(&eq);
        // dec 10° < lat 52°, so the object culminates due south
        assert_relative_eq!(hor.az_deg(), 180.0, epsilon = 1e-6);
        assert_relative_eq!(hor.alt_deg(), 90.0 - (52.0 - 10.0), epsilon = 1e-6);
    }
}
