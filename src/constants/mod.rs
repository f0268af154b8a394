//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Radians per hour of right ascension (15 degrees)
pub const RAD_PER_HR: f64 = TAU / 24.0;
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = TAU / ASEC360;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// Milliseconds in an hour
pub const HOUR_MS: f64 = 3_600_000.0;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a tropical year (mean solar orbit period used by the models)
pub const TROPICAL_YEAR: f64 = 365.242_191;
/// J2000.0 epoch as Julian date
pub const J2000_JD: f64 = 2_451_545.0;
/// J2010.0 epoch (2009-12-31T00:00 UTC) as Julian date
pub const J2010_JD: f64 = 2_455_196.5;

// Sidereal time polynomial (hours), Julian centuries from J2000 to the
// UTC midnight of the day, highest-degree coefficient first.
pub const SIDEREAL_S0: [f64; 3] = [0.000_025_862, 2_400.051_336, 6.697_374_558];
/// Ratio of sidereal to solar rate for the intra-day term
pub const SIDEREAL_RATE: f64 = 1.002_737_909;
