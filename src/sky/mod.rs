//! Observed-sky snapshot assembly
//!
//! [`ObservedSky`] freezes everything visible at one instant from one place
//! into plain projected data: every body is computed once, converted to the
//! observer's horizontal frame once, and projected onto the plane once.
//! Renderers then only read; re-pointing the view or advancing time means
//! building a new snapshot.

use chrono::{DateTime, Utc};

use crate::bodies::{moon_at, planet_at, sun_at, CelestialBody, Moon, Planet, Sun};
use crate::catalog::StarCatalog;
use crate::coordinates::{
    CartesianCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates,
    EquatorialToHorizontalConversion, GeographicCoordinates,
};
use crate::projection::StereographicProjection;
use crate::time::Epoch;
use crate::Result;

/// Handle identifying one drawable object inside an [`ObservedSky`].
///
/// Stars are referenced by their index in the snapshot's catalog, so a
/// handle is only meaningful against the snapshot that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyObject {
    Sun,
    Moon,
    Planet(Planet),
    Star(usize),
}

/// All celestial objects projected onto the plane for one instant and
/// observation point.
#[derive(Debug, Clone)]
pub struct ObservedSky<'a> {
    sun: Sun,
    sun_point: CartesianCoordinates,
    moon: Moon,
    moon_point: CartesianCoordinates,
    planets: Vec<CelestialBody>,
    planet_points: Vec<CartesianCoordinates>,
    catalog: &'a StarCatalog,
    star_points: Vec<CartesianCoordinates>,
}

impl<'a> ObservedSky<'a> {
    /// Computes the full snapshot: Sun, Moon, the seven observable planets
    /// and every catalog star, each reduced to the observer's horizontal
    /// frame at `when` and projected onto the plane.
    pub fn new(
        when: &DateTime<Utc>,
        observer: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalog: &'a StarCatalog,
    ) -> Result<Self> {
        let days = Epoch::J2010.days_until(when);
        let to_equatorial = EclipticToEquatorialConversion::new(when);
        let to_horizontal = EquatorialToHorizontalConversion::new(when, observer);

        let project = |position: &EquatorialCoordinates| {
            projection.apply(&to_horizontal.apply(position))
        };

        let sun = sun_at(days, &to_equatorial);
        let sun_point = project(&sun.body().position());

        let moon = moon_at(days, &to_equatorial)?;
        let moon_point = project(&moon.body().position());

        let mut planets = Vec::with_capacity(Planet::OBSERVABLE.len());
        let mut planet_points = Vec::with_capacity(Planet::OBSERVABLE.len());
        for planet in Planet::OBSERVABLE {
            let body = planet_at(planet, days, &to_equatorial)?;
            planet_points.push(project(&body.position()));
            planets.push(body);
        }

        let star_points = catalog
            .stars()
            .iter()
            .map(|star| project(&star.position()))
            .collect();

        log::debug!(
            "observed sky at {}: {} planets, {} stars",
            when,
            planets.len(),
            catalog.len()
        );

        Ok(Self {
            sun,
            sun_point,
            moon,
            moon_point,
            planets,
            planet_points,
            catalog,
            star_points,
        })
    }

    /// The Sun model for the snapshot instant.
    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// Projected plane position of the Sun.
    pub fn sun_point(&self) -> CartesianCoordinates {
        self.sun_point
    }

    /// The Moon model for the snapshot instant.
    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    /// Projected plane position of the Moon.
    pub fn moon_point(&self) -> CartesianCoordinates {
        self.moon_point
    }

    /// The seven observable planets, in heliocentric order.
    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }

    /// Projected plane positions, parallel to [`planets`](Self::planets).
    pub fn planet_points(&self) -> &[CartesianCoordinates] {
        &self.planet_points
    }

    /// The star catalog this snapshot was built against.
    pub fn catalog(&self) -> &StarCatalog {
        self.catalog
    }

    /// The catalog's stars, in the order [`star_points`](Self::star_points)
    /// follows.
    pub fn stars(&self) -> &[crate::catalog::Star] {
        self.catalog.stars()
    }

    /// Projected plane positions, parallel to the catalog's star list.
    pub fn star_points(&self) -> &[CartesianCoordinates] {
        &self.star_points
    }

    /// The object whose projected position is closest to `point`, provided
    /// it lies strictly within `max_distance` of it. Ties keep the first
    /// object in Sun, Moon, planets, stars order.
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
    ) -> Option<SkyObject> {
        let mut best: Option<(SkyObject, f64)> = None;
        let limit_squared = max_distance * max_distance;

        let mut consider = |object: SkyObject, candidate: &CartesianCoordinates| {
            let d = point.distance_squared_to(candidate);
            if d < limit_squared && best.as_ref().map_or(true, |(_, b)| d < *b) {
                best = Some((object, d));
            }
        };

        consider(SkyObject::Sun, &self.sun_point);
        consider(SkyObject::Moon, &self.moon_point);
        for (planet, candidate) in Planet::OBSERVABLE.iter().zip(&self.planet_points) {
            consider(SkyObject::Planet(*planet), candidate);
        }
        for (index, candidate) in self.star_points.iter().enumerate() {
            consider(SkyObject::Star(index), candidate);
        }

        best.map(|(object, _)| object)
    }

    /// Display name of an object handle produced by this snapshot.
    pub fn name_of(&self, object: &SkyObject) -> &str {
        match object {
            SkyObject::Sun => self.sun.body().name(),
            SkyObject::Moon => self.moon.body().name(),
            SkyObject::Planet(planet) => planet.name(),
            SkyObject::Star(index) => self.catalog.stars()[*index].name(),
        }
    }
}
