//! # Angle Utilities
//!
//! Unit conversions and normalization for angular values. The rest of the
//! crate stores angles as plain `f64` radians inside validated coordinate
//! types, so this module deals in raw scalars: it converts into radians from
//! the units astronomical sources use (degrees, hours of right ascension,
//! arcseconds, sexagesimal DMS) and reduces arbitrary real values into the
//! canonical `[0, τ)` turn.
//!
//! All functions are pure. The only fallible operation is [`from_dms`],
//! which rejects minute or second components outside `[0, 60)`.

use crate::constants::{ASEC2RAD, DEG2RAD, RAD2DEG, RAD_PER_HR, TAU};
use crate::{Result, SkyplaneError};

/// Reduces any real radian value into `[0, τ)` using floored modulo.
///
/// Negative inputs wrap around the circle rather than saturating:
/// `normalize_positive(-PI/2)` is `3·PI/2`.
pub fn normalize_positive(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Converts degrees to radians.
pub fn from_deg(deg: f64) -> f64 {
    deg * DEG2RAD
}

/// Converts radians to degrees.
pub fn to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Converts hours of right ascension to radians (1 hr = 15°).
pub fn from_hr(hr: f64) -> f64 {
    hr * RAD_PER_HR
}

/// Converts radians to hours of right ascension.
pub fn to_hr(rad: f64) -> f64 {
    rad / RAD_PER_HR
}

/// Converts arcseconds to radians.
pub fn from_arcsec(arcsec: f64) -> f64 {
    arcsec * ASEC2RAD
}

/// Composes a sexagesimal degree/minute/second angle into radians.
///
/// The sign of the angle is carried by `deg`; `min` and `sec` must lie in
/// `[0, 60)` or the composition fails with a domain error.
pub fn from_dms(deg: f64, min: f64, sec: f64) -> Result<f64> {
    if !(0.0..60.0).contains(&min) {
        return Err(SkyplaneError::Domain(format!(
            "DMS minutes must be in [0, 60), got {}",
            min
        )));
    }
    if !(0.0..60.0).contains(&sec) {
        return Err(SkyplaneError::Domain(format!(
            "DMS seconds must be in [0, 60), got {}",
            sec
        )));
    }
    Ok(from_deg(deg + min / 60.0 + sec / 3600.0))
}
