//! Shared fixtures for integration tests.

#![allow(dead_code)]

use gnss_fusion::{FusionError, PlanarProjector, Result};
use gnss_types::{SentenceRecord, Timestamp};

/// Projector that reads packed latitude/longitude/height as `x`/`y`/`z`.
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

/// Record captured at `secs`.
pub fn rec(secs: f64, sentence: impl Into<String>) -> SentenceRecord {
    SentenceRecord::new(Timestamp::from_secs_f64(secs), sentence)
}

/// `$GPRMC` with the given internal time and planar `x`/`y`.
pub fn rmc(time: u32, x: f64, y: f64) -> String {
    format!("$GPRMC,{time}.00,A,{x},N,{y},E,0.02,31.66,280511,,,A*43")
}

/// `$GPGGA` with the given internal time, planar `x`/`y` and height.
pub fn gga(time: f64, x: f64, y: f64, height: f64) -> String {
    format!("$GPGGA,{time},{x},N,{y},E,4,12,0.9,{height},M,38.0,M,,*47")
}

/// `QQ` attitude sentence with internal time and degrees.
pub fn qq(time: f64, roll: f64, pitch: f64, heading: f64) -> String {
    format!("QQ02C,INSATT,V,{time},{roll},{pitch},{heading},@1A")
}

/// `$PASHR` attitude sentence with internal time and degrees.
pub fn pashr(time: f64, heading: f64, roll: f64, pitch: f64) -> String {
    format!("$PASHR,{time},{heading},T,{roll},{pitch},0.00,0.02,0.02,0.05,2,0*2C")
}
