//! Geodetic inputs and local planar positions.
//!
//! NMEA position sentences carry latitude and longitude in the packed
//! `ddmm.mmmm` form. A projector turns them into a [`PlanarPosition`] on a
//! fixed reference plane; the axis convention (which of `x`/`y` points north)
//! belongs to that projector.

use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts a packed NMEA `ddmm.mmmm` angle into decimal degrees.
///
/// The sign of the input is preserved, so hemisphere handling stays with the
/// caller.
///
/// # Example
///
/// ```
/// use gnss_types::nmea_to_degrees;
///
/// // 48 degrees 07.038 minutes
/// let deg = nmea_to_degrees(4807.038);
/// assert!((deg - 48.1173).abs() < 1e-9);
/// ```
#[must_use]
pub fn nmea_to_degrees(packed: f64) -> f64 {
    let magnitude = packed.abs();
    let degrees = (magnitude / 100.0).trunc();
    let minutes = degrees.mul_add(-100.0, magnitude);
    (degrees + minutes / 60.0).copysign(packed)
}

/// Latitude, longitude and height as read from a position sentence.
///
/// Latitude and longitude stay in packed NMEA form; height is meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticFix {
    /// Latitude, packed `ddmm.mmmm`.
    pub latitude: f64,
    /// Longitude, packed `dddmm.mmmm`.
    pub longitude: f64,
    /// Height in meters.
    pub height: f64,
}

impl GeodeticFix {
    /// Creates a fix from packed latitude/longitude and height.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude_degrees(&self) -> f64 {
        nmea_to_degrees(self.latitude)
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude_degrees(&self) -> f64 {
        nmea_to_degrees(self.longitude)
    }
}

/// A point on the local reference plane, in projector units.
///
/// # Example
///
/// ```
/// use gnss_types::PlanarPosition;
///
/// let a = PlanarPosition::new(0.0, 0.0, 5.0);
/// let b = PlanarPosition::new(3.0, 4.0, 9.0);
/// assert!((b.horizontal_distance(&a) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarPosition {
    /// First planar axis.
    pub x: f64,
    /// Second planar axis.
    pub y: f64,
    /// Vertical axis.
    pub z: f64,
}

impl PlanarPosition {
    /// Creates a planar position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The plane origin.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Distance to `other` in the `x`/`y` plane, ignoring height.
    #[must_use]
    pub fn horizontal_distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Heading of the displacement from `previous` to `self`.
    ///
    /// Computed as `atan2(dx, dy)`, i.e. measured from the `y` axis towards
    /// the `x` axis.
    #[must_use]
    pub fn heading_from(&self, previous: &Self) -> f64 {
        (self.x - previous.x).atan2(self.y - previous.y)
    }

    /// Returns the position as a vector.
    #[must_use]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<PlanarPosition> for Vector3<f64> {
    fn from(p: PlanarPosition) -> Self {
        p.to_vector()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn nmea_degrees_whole() {
        assert_relative_eq!(nmea_to_degrees(3500.0), 35.0);
    }

    #[test]
    fn nmea_degrees_longitude() {
        // 136 degrees 57.6 minutes
        assert_relative_eq!(nmea_to_degrees(13657.6), 136.96, epsilon = 1e-9);
    }

    #[test]
    fn nmea_degrees_keeps_sign() {
        assert_relative_eq!(nmea_to_degrees(-3530.0), -35.5, epsilon = 1e-12);
    }

    #[test]
    fn fix_decimal_accessors() {
        let fix = GeodeticFix::new(3510.2, 13658.4, 48.0);
        assert_relative_eq!(fix.latitude_degrees(), 35.17, epsilon = 1e-9);
        assert_relative_eq!(fix.longitude_degrees(), 136.973_333_333, epsilon = 1e-6);
        assert_eq!(fix.height, 48.0);
    }

    #[test]
    fn heading_along_axes() {
        let origin = PlanarPosition::origin();
        assert_relative_eq!(PlanarPosition::new(1.0, 0.0, 0.0).heading_from(&origin), FRAC_PI_2);
        assert_relative_eq!(PlanarPosition::new(0.0, 1.0, 0.0).heading_from(&origin), 0.0);
        assert_relative_eq!(PlanarPosition::new(1.0, 1.0, 0.0).heading_from(&origin), FRAC_PI_4);
    }

    #[test]
    fn horizontal_distance_ignores_height() {
        let a = PlanarPosition::new(1.0, 1.0, -100.0);
        let b = PlanarPosition::new(1.0, 1.0, 100.0);
        assert_eq!(a.horizontal_distance(&b), 0.0);
    }
}
