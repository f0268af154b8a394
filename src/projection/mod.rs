//! # Stereographic Projection
//!
//! Conformal mapping between the celestial sphere (horizontal coordinates)
//! and the rendering plane, centered on an arbitrary viewing direction. The
//! projection is constructed once per viewing center and precomputes the
//! center's trigonometry; `apply` and `inverse_apply` are then pure.
//!
//! Stereographic projection maps circles to circles, so the image of a full
//! parallel of altitude is itself a circle; [`circle_center_for_parallel`]
//! and [`circle_radius_for_parallel`] give its center and radius in closed
//! form, which lets a renderer draw horizon and altitude grid lines without
//! sampling points. The center or radius is infinite when the parallel
//! passes through the projection's antipode (`sin alt + sin alt_center = 0`).
//!
//! [`circle_center_for_parallel`]: StereographicProjection::circle_center_for_parallel
//! [`circle_radius_for_parallel`]: StereographicProjection::circle_radius_for_parallel

use once_cell::sync::Lazy;

use crate::constants::TAU;
use crate::coordinates::{CartesianCoordinates, HorizontalCoordinates};
use crate::math::{ClosedInterval, RightOpenInterval};

static FULL_TURN: Lazy<RightOpenInterval> =
    Lazy::new(|| RightOpenInterval::of(0.0, TAU).expect("non-degenerate"));
static HALF_TURN: Lazy<ClosedInterval> =
    Lazy::new(|| ClosedInterval::symmetric(std::f64::consts::PI).expect("non-degenerate"));

/// Stereographic projection centered on a viewing direction
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    cos_center_alt: f64,
    sin_center_alt: f64,
}

impl StereographicProjection {
    /// Creates a projection centered on `center`.
    pub fn new(center: HorizontalCoordinates) -> Self {
        Self {
            center,
            cos_center_alt: center.alt().cos(),
            sin_center_alt: center.alt().sin(),
        }
    }

    /// The viewing center this projection was built from.
    pub fn center(&self) -> HorizontalCoordinates {
        self.center
    }

    /// Projects a horizontal coordinate onto the plane.
    pub fn apply(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_az = hor.az() - self.center.az();
        let (sin_alt, cos_alt) = hor.alt().sin_cos();
        let (sin_delta, cos_delta) = delta_az.sin_cos();

        let d = 1.0
            / (1.0 + sin_alt * self.sin_center_alt + cos_alt * self.cos_center_alt * cos_delta);

        CartesianCoordinates::new(
            d * cos_alt * sin_delta,
            d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_delta),
        )
    }

    /// Recovers the horizontal coordinate whose projection is `point`.
    ///
    /// Used to map a cursor/pick position back to sky coordinates. The exact
    /// plane origin maps back to the projection center.
    pub fn inverse_apply(&self, point: &CartesianCoordinates) -> HorizontalCoordinates {
        if point.x == 0.0 && point.y == 0.0 {
            return self.center;
        }

        let rho_squared = point.x * point.x + point.y * point.y;
        let rho = rho_squared.sqrt();
        // sin/cos of the angular distance c from the center; ρ = tan(c/2)
        let sin_c = 2.0 * rho / (rho_squared + 1.0);
        let cos_c = (1.0 - rho_squared) / (rho_squared + 1.0);

        let az = (point.x * sin_c)
            .atan2(rho * self.cos_center_alt * cos_c - point.y * self.sin_center_alt * sin_c)
            + self.center.az();
        let alt = (cos_c * self.sin_center_alt + point.y * sin_c * self.cos_center_alt / rho)
            .clamp(-1.0, 1.0)
            .asin();

        HorizontalCoordinates::raw(FULL_TURN.reduce(az), HALF_TURN.clip(alt))
    }

    /// Plane ordinate of the center of the projected parallel of altitude
    /// passing through `hor` (the abscissa is always zero).
    ///
    /// Infinite when the parallel projects to a straight line.
    pub fn circle_center_for_parallel(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        CartesianCoordinates::new(
            0.0,
            self.cos_center_alt / (hor.alt().sin() + self.sin_center_alt),
        )
    }

    /// Radius of the projected parallel of altitude passing through `hor`.
    ///
    /// Infinite when the parallel projects to a straight line.
    pub fn circle_radius_for_parallel(&self, hor: &HorizontalCoordinates) -> f64 {
        hor.alt().cos() / (hor.alt().sin() + self.sin_center_alt)
    }

    /// Plane-distance diameter of a disk of angular diameter `rad` centered
    /// on the projection center.
    pub fn apply_to_angle(&self, rad: f64) -> f64 {
        2.0 * (rad / 4.0).tan()
    }
}
