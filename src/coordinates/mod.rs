//! Coordinate systems of the projection pipeline
//!
//! Each type is a validated pair of angles (radians internally, with degree
//! and hour accessors), built through fallible factories so that no
//! coordinate object can ever hold a value outside its frame's legal domain.
//! The conversion operators between frames live in [`conversions`].

pub mod cartesian;
pub mod conversions;
mod ecliptic;
mod equatorial;
mod geographic;
mod horizontal;

pub use cartesian::CartesianCoordinates;
pub use conversions::{EclipticToEquatorialConversion, EquatorialToHorizontalConversion};
pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;
