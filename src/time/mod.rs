//! Time module for astronomical time calculations
//!
//! Provides the reference epochs the orbital models count from and the
//! sidereal-time computation the equatorial→horizontal conversion depends
//! on. Timestamps are plain `chrono::DateTime<Utc>` values; deltas preserve
//! millisecond precision, and may be negative for moments before an epoch.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::constants::{DAYS_PER_JULIAN_CENTURY, DAY_MS};

pub mod sidereal;

static J2000_INSTANT: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
        .single()
        .expect("valid calendar instant")
});

static J2010_INSTANT: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(2009, 12, 31, 0, 0, 0)
        .single()
        .expect("valid calendar instant")
});

/// Astronomical reference epochs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    /// 2000-01-01T12:00 UTC, the zero of the sidereal/obliquity polynomials
    J2000,
    /// 2009-12-31T00:00 UTC, the zero of the orbital element tables
    J2010,
}

impl Epoch {
    /// The instant of the epoch.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Epoch::J2000 => *J2000_INSTANT,
            Epoch::J2010 => *J2010_INSTANT,
        }
    }

    /// Fractional days from the epoch to `when`, negative for moments
    /// before the epoch. Millisecond deltas survive the division.
    pub fn days_until(&self, when: &DateTime<Utc>) -> f64 {
        let delta_ms = (*when - self.instant()).num_milliseconds();
        delta_ms as f64 / DAY_MS
    }

    /// Fractional Julian centuries from the epoch to `when`.
    pub fn julian_centuries_until(&self, when: &DateTime<Utc>) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}
