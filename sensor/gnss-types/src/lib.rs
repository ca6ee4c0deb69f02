//! Data types for GNSS/INS trajectory reconstruction.
//!
//! This crate holds the plain data shared by the sentence fusion pipeline:
//!
//! - [`Timestamp`] - Capture time of a record (nanosecond precision)
//! - [`SentenceRecord`] - One raw NMEA-style sentence plus its capture time
//! - [`GeodeticFix`] - Latitude/longitude/height as carried by a sentence
//! - [`PlanarPosition`] - A point on a local reference plane
//! - [`Orientation`] - Roll, pitch and yaw in radians
//! - [`Pose`] / [`StampedPose`] - 6-DOF poses and trajectory samples
//!
//! # Layer 0 Crate
//!
//! No parsing, no projection, no I/O. Interpretation of sentences lives in
//! `gnss-fusion`; these types are what it consumes and produces.
//!
//! # Example
//!
//! ```
//! use gnss_types::{Orientation, Pose, StampedPose, Timestamp};
//! use nalgebra::Vector3;
//!
//! let sample = StampedPose::new(
//!     Timestamp::from_secs_f64(12.0),
//!     Pose::from_orientation(Vector3::new(1.0, 2.0, 0.0), Orientation::level(0.0)),
//! );
//! assert_eq!(sample.translation().x, 1.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod geodetic;
mod pose;
mod sentence;
mod time;

pub use geodetic::{GeodeticFix, PlanarPosition, nmea_to_degrees};
pub use pose::{Orientation, Pose, StampedPose};
pub use sentence::{FIELD_SEPARATOR, SentenceRecord};
pub use time::Timestamp;
