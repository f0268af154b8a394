//! Star catalog collaborator surface
//!
//! The core only needs read access to an ordered list of stars (equatorial
//! position, magnitude, color) and to named groupings of them (asterisms);
//! parsing catalog files is out of scope. A seeded synthetic generator is
//! provided for tests and demos.

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::coordinates::EquatorialCoordinates;
use crate::math::ClosedInterval;
use crate::{Result, SkyplaneError};

// B−V color index domain of real catalogs
static COLOR_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::of(-0.5, 5.5).expect("non-degenerate"));
// Magnitude range of anything a chart will ever draw; loaders clip into it
static MAGNITUDE_INTERVAL: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::of(-2.0, 27.0).expect("non-degenerate"));

/// A catalogued star: equatorial position, magnitude and B−V color index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    hip_id: u32,
    name: String,
    position: EquatorialCoordinates,
    magnitude: f64,
    color_index: f64,
}

impl Star {
    /// Creates a star, validating the color index and clipping the
    /// magnitude into the catalog's legal range.
    pub fn new(
        hip_id: u32,
        name: impl Into<String>,
        position: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self> {
        if !COLOR_INTERVAL.contains(color_index) {
            return Err(SkyplaneError::Domain(format!(
                "B-V color index {} outside {}",
                color_index, *COLOR_INTERVAL
            )));
        }
        Ok(Self {
            hip_id,
            name: name.into(),
            position,
            magnitude: MAGNITUDE_INTERVAL.clip(magnitude),
            color_index,
        })
    }

    /// Hipparcos identifier (0 when the star has none).
    pub fn hip_id(&self) -> u32 {
        self.hip_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Equatorial position.
    pub fn position(&self) -> EquatorialCoordinates {
        self.position
    }

    /// Apparent magnitude, clipped into the catalog range at construction.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// B−V color index.
    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Black-body color temperature in kelvins, from the B−V index.
    pub fn color_temperature(&self) -> f64 {
        let c = self.color_index;
        4600.0 * (1.0 / (0.92 * c + 1.7) + 1.0 / (0.92 * c + 0.62))
    }
}

/// A named line figure over catalog stars, stored as indices into the
/// owning catalog's star list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asterism {
    star_indices: Vec<usize>,
}

impl Asterism {
    /// Creates an asterism from star indices; fails on an empty list.
    pub fn new(star_indices: Vec<usize>) -> Result<Self> {
        if star_indices.is_empty() {
            return Err(SkyplaneError::Domain(
                "asterism requires at least one star".to_string(),
            ));
        }
        Ok(Self { star_indices })
    }

    /// Indices of the member stars, in drawing order.
    pub fn star_indices(&self) -> &[usize] {
        &self.star_indices
    }
}

/// An immutable star catalog with its asterisms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarCatalog {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
}

impl StarCatalog {
    /// Creates a catalog; fails when an asterism references a star index
    /// the catalog does not contain.
    pub fn new(stars: Vec<Star>, asterisms: Vec<Asterism>) -> Result<Self> {
        for asterism in &asterisms {
            for &index in asterism.star_indices() {
                if index >= stars.len() {
                    return Err(SkyplaneError::MissingInput(format!(
                        "asterism references star index {} but the catalog holds {} stars",
                        index,
                        stars.len()
                    )));
                }
            }
        }
        Ok(Self { stars, asterisms })
    }

    /// The stars, in catalog order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// The asterisms.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Star indices of an asterism, guaranteed valid for this catalog's
    /// star list when the asterism came from it.
    pub fn asterism_indices<'a>(&self, asterism: &'a Asterism) -> &'a [usize] {
        asterism.star_indices()
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the catalog holds no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Stars brighter than (magnitude at most) the given limit.
    pub fn brighter_than(&self, magnitude: f64) -> Vec<&Star> {
        self.stars
            .iter()
            .filter(|s| s.magnitude() <= magnitude)
            .collect()
    }
}

/// Generates a reproducible synthetic catalog for tests and demos.
///
/// Positions are uniform over the sphere (uniform in `sin dec`), and the
/// magnitude distribution follows the Pogson ratio: each magnitude step
/// holds roughly 2.5 times more stars than the previous one.
pub fn synthetic_catalog(seed: u64, count: usize) -> StarCatalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let ra_dist = Uniform::from(0.0..crate::constants::TAU);
    let sin_dec_dist = Uniform::from(-1.0f64..1.0);
    let uniform = Uniform::from(0.0f64..1.0);

    let min_mag = 0.0;
    let max_mag = 6.0;
    let log_base: f64 = 2.5;
    let exp_range = log_base.powf(max_mag - min_mag) - 1.0;

    let stars = (0..count)
        .map(|i| {
            let ra = ra_dist.sample(&mut rng);
            let dec = sin_dec_dist.sample(&mut rng).asin();
            let t = uniform.sample(&mut rng) * exp_range + 1.0;
            let magnitude = min_mag + t.log(log_base).clamp(0.0, max_mag - min_mag);
            let color_index = uniform.sample(&mut rng) * 2.0 - 0.3;

            Star::new(
                i as u32 + 1,
                format!("Synthetic {}", i + 1),
                EquatorialCoordinates::of(ra, dec).expect("sampled inside the legal domain"),
                magnitude,
                color_index,
            )
            .expect("sampled inside the legal domain")
        })
        .collect();

    StarCatalog::new(stars, Vec::new()).expect("no asterisms to validate")
}
