//! Test-only projector.

use crate::error::{FusionError, Result};
use crate::projector::PlanarProjector;

/// Uses the packed NMEA latitude/longitude/height directly as `x`/`y`/`z`.
///
/// Accepts planes 1 through 19 and records the selection.
#[derive(Debug, Clone, Default)]
pub struct GridProjector {
    pub plane: Option<u8>,
    xyz: [f64; 3],
}

impl PlanarProjector for GridProjector {
    fn set_plane(&mut self, plane: u8) -> Result<()> {
        if !(1..=19).contains(&plane) {
            return Err(FusionError::projector(format!("unknown plane {plane}")));
        }
        self.plane = Some(plane);
        Ok(())
    }

    fn set_llh_nmea_degrees(&mut self, latitude: f64, longitude: f64, height: f64) {
        self.xyz = [latitude, longitude, height];
    }

    fn x(&self) -> f64 {
        self.xyz[0]
    }

    fn y(&self) -> f64 {
        self.xyz[1]
    }

    fn z(&self) -> f64 {
        self.xyz[2]
    }
}
