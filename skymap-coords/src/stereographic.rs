//! Stereographic projection of horizontal coordinates onto the plane.
//!
//! The projection is centered on an arbitrary point of the sphere and maps
//! circles on the sphere to circles (or lines) in the plane, which is why the
//! parallel and meridian helpers below return plane circles. Distances are
//! not preserved, only angles.

use crate::cartesian::CartesianCoordinates;
use crate::errors::CoordResult;
use crate::frames::HorizontalCoordinates;

/// Stereographic projection centered on a fixed horizontal position.
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    sin_center_alt: f64,
    cos_center_alt: f64,
}

impl StereographicProjection {
    /// Builds the projection centered on `center`.
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        Self {
            center,
            sin_center_alt,
            cos_center_alt,
        }
    }

    /// The center of the projection.
    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    /// Projects `hor` onto the plane.
    pub fn project(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_az = hor.az() - self.center.az();
        let (sin_alt, cos_alt) = hor.alt().sin_cos();
        let (sin_delta_az, cos_delta_az) = delta_az.sin_cos();

        let d = 1.0
            / (1.0
                + sin_alt * self.sin_center_alt
                + cos_alt * self.cos_center_alt * cos_delta_az);

        CartesianCoordinates::new(
            d * cos_alt * sin_delta_az,
            d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_delta_az),
        )
    }

    /// Inverse of [`project`](Self::project): maps a plane point back to the
    /// horizontal position that projects onto it. The origin maps to the
    /// projection center.
    pub fn inverse_project(&self, point: &CartesianCoordinates) -> CoordResult<HorizontalCoordinates> {
        if point.x() == 0.0 && point.y() == 0.0 {
            return HorizontalCoordinates::new(self.center.az(), self.center.alt());
        }

        let rho_squared = point.x() * point.x() + point.y() * point.y();
        let rho = rho_squared.sqrt();
        let sin_c = 2.0 * rho / (rho_squared + 1.0);
        let cos_c = (1.0 - rho_squared) / (rho_squared + 1.0);

        let az = f64::atan2(
            point.x() * sin_c,
            rho * self.cos_center_alt * cos_c - point.y() * self.sin_center_alt * sin_c,
        ) + self.center.az();
        let alt =
            skymap_core::math::asin_safe(cos_c * self.sin_center_alt + point.y() * sin_c * self.cos_center_alt / rho);

        HorizontalCoordinates::new(skymap_core::angle::normalize_positive(az), alt)
    }

    /// Projected diameter of a sphere of apparent angular size `rad`,
    /// centered on the projection center.
    pub fn project_angular_size(&self, rad: f64) -> f64 {
        2.0 * (rad / 4.0).tan()
    }

    /// Center of the projection of the parallel through altitude `alt` of
    /// `hor`. The center always lies on the y axis.
    pub fn parallel_circle_center(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        CartesianCoordinates::new(
            0.0,
            self.cos_center_alt / (hor.alt().sin() + self.sin_center_alt),
        )
    }

    /// Radius of the projection of the parallel through the altitude of
    /// `hor`. Infinite when the parallel projects to a line.
    pub fn parallel_circle_radius(&self, hor: &HorizontalCoordinates) -> f64 {
        hor.alt().cos() / (hor.alt().sin() + self.sin_center_alt)
    }

    /// Center of the projection of the meridian through the azimuth of
    /// `hor`.
    pub fn meridian_circle_center(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_az = hor.az() - self.center.az();
        CartesianCoordinates::new(
            -1.0 / (self.cos_center_alt * delta_az.tan()),
            -self.center.alt().tan(),
        )
    }

    /// Radius of the projection of the meridian through the azimuth of
    /// `hor`. Infinite when the meridian projects to a line.
    pub fn meridian_circle_radius(&self, hor: &HorizontalCoordinates) -> f64 {
        let delta_az = hor.az() - self.center.az();
        1.0 / (self.cos_center_alt * delta_az.sin())
    }
}
