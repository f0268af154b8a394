//! Analytical planet models.
//!
//! All eight planets share one computation: a first-order Kepler step on the
//! planet's own orbit, projection onto the ecliptic plane through the
//! orbital inclination, the same steps for Earth, then a geocentric
//! reduction combining the two heliocentric vectors. The reduction formula
//! branches on orbital geometry: bodies inside Earth's orbit (Mercury,
//! Venus) are seen from outside their orbit, bodies beyond it from inside,
//! and each side gets its own `atan2` form.
//!
//! The orbital elements are a read-only table of plain records indexed by
//! [`Planet`]; Earth is part of the table (the reduction step needs it) but
//! is never an observable planet itself.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::bodies::{true_anomaly, CelestialBody};
use crate::constants::{TAU, TROPICAL_YEAR};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::{angle, RightOpenInterval};
use crate::{Result, SkyplaneError};

static FULL_TURN: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));

/// The major planets, in heliocentric order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets, Earth included.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// The planets observable from Earth, i.e. all but Earth itself.
    pub const OBSERVABLE: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Whether the planet orbits inside Earth's orbit.
    pub fn is_inner(&self) -> bool {
        matches!(self, Planet::Mercury | Planet::Venus)
    }

    /// The planet's orbital elements at J2010.
    pub fn elements(&self) -> &'static OrbitalElements {
        &ELEMENTS[*self as usize]
    }
}

/// Fixed orbital elements of one planet at the J2010 epoch.
///
/// Angles are stored in radians, the angular size is the apparent diameter
/// at a geocentric distance of 1 AU, and the magnitude is the reference
/// value entering the distance/phase brightness law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Revolution period in tropical years
    pub period: f64,
    /// Longitude at the epoch
    pub lon_at_epoch: f64,
    /// Longitude of the perigee
    pub lon_perigee: f64,
    /// Orbital eccentricity
    pub eccentricity: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Inclination of the orbit to the ecliptic
    pub inclination: f64,
    /// Longitude of the ascending node
    pub ascending_node_lon: f64,
    /// Angular diameter at 1 AU
    pub angular_size: f64,
    /// Reference magnitude
    pub magnitude: f64,
}

impl OrbitalElements {
    fn from_table(
        period: f64,
        lon_at_epoch_deg: f64,
        lon_perigee_deg: f64,
        eccentricity: f64,
        semi_major_axis: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        angular_size_arcsec: f64,
        magnitude: f64,
    ) -> Self {
        Self {
            period,
            lon_at_epoch: angle::from_deg(lon_at_epoch_deg),
            lon_perigee: angle::from_deg(lon_perigee_deg),
            eccentricity,
            semi_major_axis,
            inclination: angle::from_deg(inclination_deg),
            ascending_node_lon: angle::from_deg(ascending_node_deg),
            angular_size: angle::from_arcsec(angular_size_arcsec),
            magnitude,
        }
    }
}

// Epoch-2010 element table, indexed by the Planet discriminant
static ELEMENTS: Lazy<[OrbitalElements; 8]> = Lazy::new(|| {
    [
        OrbitalElements::from_table(0.24085, 75.5671, 77.612, 0.205627, 0.387098, 7.0051, 48.449, 6.74, -0.42),
        OrbitalElements::from_table(0.615207, 272.30044, 131.54, 0.006812, 0.723329, 3.3947, 76.769, 16.92, -4.40),
        OrbitalElements::from_table(0.999996, 99.556772, 103.2055, 0.016671, 0.999985, 0.0, 0.0, 0.0, 0.0),
        OrbitalElements::from_table(1.880765, 109.09646, 336.217, 0.093348, 1.523689, 1.8497, 49.632, 9.36, -1.52),
        OrbitalElements::from_table(11.857911, 337.917132, 14.6633, 0.048907, 5.20278, 1.3035, 100.595, 196.74, -9.40),
        OrbitalElements::from_table(29.310579, 172.398316, 89.567, 0.053853, 9.51134, 2.4873, 113.752, 165.60, -8.88),
        OrbitalElements::from_table(84.039492, 356.135400, 172.884833, 0.046321, 19.218140, 0.773059, 73.926961, 65.80, -7.19),
        OrbitalElements::from_table(165.845392, 326.895127, 23.07, 0.010483, 30.110387, 1.770, 131.794310, 62.20, -6.87),
    ]
});

/// Heliocentric position of one body: orbital-plane and ecliptic-projected
/// quantities from the shared Kepler step.
struct Heliocentric {
    radius: f64,
    lon: f64,
    lat: f64,
    reduced_radius: f64,
    reduced_lon: f64,
}

fn heliocentric(elements: &OrbitalElements, days_since_j2010: f64) -> Heliocentric {
    let mean_anomaly = TAU / TROPICAL_YEAR * (days_since_j2010 / elements.period)
        + elements.lon_at_epoch
        - elements.lon_perigee;
    let nu = true_anomaly(mean_anomaly, elements.eccentricity);

    let radius = elements.semi_major_axis * (1.0 - elements.eccentricity * elements.eccentricity)
        / (1.0 + elements.eccentricity * nu.cos());
    let lon = nu + elements.lon_perigee;

    // Project onto the ecliptic plane through the orbital inclination
    let lon_from_node = lon - elements.ascending_node_lon;
    let lat = (lon_from_node.sin() * elements.inclination.sin()).asin();
    let reduced_radius = radius * lat.cos();
    let reduced_lon = (lon_from_node.sin() * elements.inclination.cos()).atan2(lon_from_node.cos())
        + elements.ascending_node_lon;

    Heliocentric {
        radius,
        lon,
        lat,
        reduced_radius,
        reduced_lon,
    }
}

/// Computes a planet's geocentric appearance for `days_since_j2010` (may be
/// negative), converting its ecliptic position through the supplied
/// operator. Fails for Earth, which is not observable from itself.
pub fn planet_at(
    planet: Planet,
    days_since_j2010: f64,
    conversion: &EclipticToEquatorialConversion,
) -> Result<CelestialBody> {
    if planet == Planet::Earth {
        return Err(SkyplaneError::Domain(
            "Earth is not an observable planet".to_string(),
        ));
    }

    let elements = planet.elements();
    let body = heliocentric(elements, days_since_j2010);
    let earth = heliocentric(Planet::Earth.elements(), days_since_j2010);

    // Geocentric ecliptic longitude, branched on orbital geometry
    let lon = if planet.is_inner() {
        std::f64::consts::PI
            + earth.lon
            + (body.reduced_radius * (earth.lon - body.reduced_lon).sin())
                .atan2(earth.radius - body.reduced_radius * (earth.lon - body.reduced_lon).cos())
    } else {
        body.reduced_lon
            + (earth.radius * (body.reduced_lon - earth.lon).sin()).atan2(
                body.reduced_radius - earth.radius * (body.reduced_lon - earth.lon).cos(),
            )
    };
    let lon = FULL_TURN.reduce(lon);

    let lat = (body.reduced_radius * body.lat.tan() * (lon - body.reduced_lon).sin()
        / (earth.radius * (body.reduced_lon - earth.lon).sin()))
    .atan();

    let ecliptic_position = EclipticCoordinates::raw(lon, lat);
    let position = conversion.apply(&ecliptic_position);

    // Geocentric distance from the two heliocentric vectors
    let distance = (earth.radius * earth.radius + body.radius * body.radius
        - 2.0 * earth.radius * body.radius * (body.lon - earth.lon).cos() * body.lat.cos())
    .sqrt();
    let angular_size = elements.angular_size / distance;

    // Illuminated fraction, then the distance/phase brightness law
    let phase = (1.0 + (lon - body.lon).cos()) / 2.0;
    let magnitude = elements.magnitude + 5.0 * (body.radius * distance / phase.sqrt()).log10();

    Ok(CelestialBody::raw(
        planet.name(),
        position,
        angular_size,
        magnitude,
    ))
}
