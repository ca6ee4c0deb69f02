//! Geodetic-to-planar projection seam.
//!
//! The fusion state never projects coordinates itself. It hands each
//! position fix to a [`PlanarProjector`] configured once with a plane number
//! and reads the planar result back.

use gnss_types::PlanarPosition;

use crate::error::Result;

/// Converts NMEA latitude/longitude/height onto a fixed reference plane.
///
/// Implementations hold the last converted point; the accessors return it.
/// Plane numbering is the implementation's business (zone tables, local
/// tangent origins, ...).
///
/// # Example
///
/// ```
/// use gnss_fusion::{PlanarProjector, Result};
///
/// /// Treats packed NMEA values as planar coordinates.
/// #[derive(Default)]
/// struct Passthrough {
///     xyz: [f64; 3],
/// }
///
/// impl PlanarProjector for Passthrough {
///     fn set_plane(&mut self, _plane: u8) -> Result<()> {
///         Ok(())
///     }
///     fn set_llh_nmea_degrees(&mut self, lat: f64, lon: f64, height: f64) {
///         self.xyz = [lat, lon, height];
///     }
///     fn x(&self) -> f64 { self.xyz[0] }
///     fn y(&self) -> f64 { self.xyz[1] }
///     fn z(&self) -> f64 { self.xyz[2] }
/// }
///
/// let mut p = Passthrough::default();
/// p.set_llh_nmea_degrees(1.0, 2.0, 3.0);
/// assert_eq!(p.position().y, 2.0);
/// ```
pub trait PlanarProjector {
    /// Selects the reference plane. Called once before any conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the implementation does not know the plane.
    fn set_plane(&mut self, plane: u8) -> Result<()>;

    /// Converts a fix given in packed NMEA degrees plus height in meters.
    fn set_llh_nmea_degrees(&mut self, latitude: f64, longitude: f64, height: f64);

    /// First planar coordinate of the last conversion.
    fn x(&self) -> f64;

    /// Second planar coordinate of the last conversion.
    fn y(&self) -> f64;

    /// Vertical coordinate of the last conversion.
    fn z(&self) -> f64;

    /// The last conversion as a [`PlanarPosition`].
    fn position(&self) -> PlanarPosition {
        PlanarPosition::new(self.x(), self.y(), self.z())
    }
}

impl<P: PlanarProjector + ?Sized> PlanarProjector for Box<P> {
    fn set_plane(&mut self, plane: u8) -> Result<()> {
        (**self).set_plane(plane)
    }

    fn set_llh_nmea_degrees(&mut self, latitude: f64, longitude: f64, height: f64) {
        (**self).set_llh_nmea_degrees(latitude, longitude, height);
    }

    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn z(&self) -> f64 {
        (**self).z()
    }
}
