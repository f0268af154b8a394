//! Skyplane: celestial coordinate pipeline and analytical ephemerides
//!
//! This crate computes, for an arbitrary moment and observer location on
//! Earth, the projected sky positions of celestial bodies (Sun, Moon,
//! planets, catalogued stars) for rendering on a 2D plane. It provides the
//! chain of exact transformations between reference frames (ecliptic →
//! equatorial → horizontal → stereographic plane) together with closed-form
//! orbital models that compute positions from time alone, without any
//! external ephemeris lookup.
//!
//! The typical pipeline is:
//!
//! 1. Build a [`projection::StereographicProjection`] from a viewing center.
//! 2. Assemble an [`sky::ObservedSky`] for a timestamp, observer location
//!    and star catalog.
//! 3. Hand the projected plane points to a renderer, and answer pick queries
//!    with [`sky::ObservedSky::object_closest_to`].

use thiserror::Error;

pub mod bodies;
pub mod catalog;
pub mod constants;
pub mod coordinates;
pub mod math;
pub mod projection;
pub mod sky;
pub mod time;

// Re-export commonly used types
pub use coordinates::{
    CartesianCoordinates, EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates,
    HorizontalCoordinates,
};
pub use projection::StereographicProjection;
pub use sky::{ObservedSky, SkyObject};

/// Main error type for the skyplane library
#[derive(Debug, Error)]
pub enum SkyplaneError {
    /// A value fell outside the legal domain of its type: an angle outside
    /// its coordinate interval, degenerate interval bounds, a zero leading
    /// polynomial coefficient, a negative angular size.
    #[error("Domain error: {0}")]
    Domain(String),

    /// A required collaborator value is absent, e.g. an asterism referencing
    /// a star the catalog does not contain.
    #[error("Missing input: {0}")]
    MissingInput(String),
}

/// Result type for skyplane operations
pub type Result<T> = std::result::Result<T, SkyplaneError>;
