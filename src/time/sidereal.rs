//! Sidereal time: Earth's rotation angle measured against the stars.
//!
//! Greenwich sidereal time is evaluated from a fixed polynomial in Julian
//! centuries from J2000 to the UTC midnight of the day, plus a linear rate
//! applied to the hours elapsed since that midnight. Local sidereal time
//! adds the observer's longitude.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::constants::{HOUR_MS, SIDEREAL_RATE, SIDEREAL_S0};
use crate::coordinates::GeographicCoordinates;
use crate::math::{angle, Polynomial};
use crate::time::Epoch;

static S0: Lazy<Polynomial> =
    Lazy::new(|| Polynomial::new(&SIDEREAL_S0).expect("non-degenerate coefficients"));

/// Greenwich sidereal time at `when`, in radians in `[0, τ)`.
pub fn greenwich(when: &DateTime<Utc>) -> f64 {
    // The polynomial is anchored at the UTC midnight of the day; the
    // intra-day part is a pure rate term.
    let midnight = when
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists for every date")
        .and_utc();
    let centuries = Epoch::J2000.julian_centuries_until(&midnight);

    let hours_since_midnight = (*when - midnight).num_milliseconds() as f64 / HOUR_MS;

    let s0 = S0.at(centuries);
    let s1 = SIDEREAL_RATE * hours_since_midnight;

    angle::normalize_positive(angle::from_hr(s0 + s1))
}

/// Local sidereal time at `when` for an observer at `geo`, in radians in
/// `[0, τ)`.
pub fn local(when: &DateTime<Utc>, geo: &GeographicCoordinates) -> f64 {
    angle::normalize_positive(greenwich(when) + geo.lon())
}
