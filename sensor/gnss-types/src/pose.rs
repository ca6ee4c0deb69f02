//! Attitude, 6-DOF poses and timestamped trajectory samples.
//!
//! Rotations are stored as unit quaternions so that interpolation never has
//! to deal with angle wrap-around. Roll, pitch and yaw follow nalgebra's
//! `from_euler_angles` convention: `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{UnitQuaternion, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Roll, pitch and yaw in radians.
///
/// # Example
///
/// ```
/// use gnss_types::Orientation;
///
/// // A level vehicle with a zero compass heading faces +pi/2 in yaw.
/// let o = Orientation::from_attitude_degrees(0.0, 0.0, 0.0);
/// assert!((o.yaw - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Rotation about the forward axis.
    pub roll: f64,
    /// Rotation about the lateral axis.
    pub pitch: f64,
    /// Rotation about the vertical axis.
    pub yaw: f64,
}

impl Orientation {
    /// Creates an orientation from radians.
    #[must_use]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Converts an INS attitude report into the planar frame.
    ///
    /// Roll passes through, pitch flips sign, and the clockwise compass
    /// heading becomes a counter-clockwise yaw offset by a quarter turn.
    #[must_use]
    pub fn from_attitude_degrees(roll_deg: f64, pitch_deg: f64, heading_deg: f64) -> Self {
        Self {
            roll: roll_deg.to_radians(),
            pitch: -pitch_deg.to_radians(),
            yaw: -heading_deg.to_radians() + FRAC_PI_2,
        }
    }

    /// Level attitude with the given yaw.
    #[must_use]
    pub const fn level(yaw: f64) -> Self {
        Self::new(0.0, 0.0, yaw)
    }

    /// Returns the equivalent unit quaternion.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(self.roll, self.pitch, self.yaw)
    }
}

/// Position and orientation in the planar frame.
///
/// # Example
///
/// ```
/// use gnss_types::{Orientation, Pose};
/// use nalgebra::Vector3;
///
/// let pose = Pose::from_orientation(Vector3::new(1.0, 2.0, 3.0), Orientation::level(0.5));
/// let (roll, pitch, yaw) = pose.roll_pitch_yaw();
/// assert!(roll.abs() < 1e-12 && pitch.abs() < 1e-12);
/// assert!((yaw - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Translation.
    pub translation: Vector3<f64>,
    /// Orientation.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Pose at the origin with no rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Creates a pose from translation and rotation.
    #[must_use]
    pub const fn new(translation: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a pose from translation and roll/pitch/yaw.
    #[must_use]
    pub fn from_rpy(translation: Vector3<f64>, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(
            translation,
            UnitQuaternion::from_euler_angles(roll, pitch, yaw),
        )
    }

    /// Creates a pose from translation and an [`Orientation`].
    #[must_use]
    pub fn from_orientation(translation: Vector3<f64>, orientation: Orientation) -> Self {
        Self::new(translation, orientation.to_quaternion())
    }

    /// Returns `(roll, pitch, yaw)` in radians.
    #[must_use]
    pub fn roll_pitch_yaw(&self) -> (f64, f64, f64) {
        self.rotation.euler_angles()
    }

    /// Interpolates towards `other` by fraction `r`.
    ///
    /// Translation is interpolated linearly, rotation by spherical linear
    /// interpolation along the shorter arc. `r` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Self, r: f64) -> Self {
        let rotation = self
            .rotation
            .try_slerp(&other.rotation, r, 1.0e-9)
            .unwrap_or(self.rotation);
        Self {
            translation: self.translation.lerp(&other.translation, r),
            rotation,
        }
    }

    /// Returns `true` if no component is `NaN` or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.iter().all(|v| v.is_finite())
            && self.rotation.coords.iter().all(|v| v.is_finite())
    }
}

/// A [`Pose`] stamped with the capture time of the record that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StampedPose {
    /// Capture time.
    pub timestamp: Timestamp,
    /// Pose at that time.
    pub pose: Pose,
}

impl StampedPose {
    /// Creates a stamped pose.
    #[must_use]
    pub const fn new(timestamp: Timestamp, pose: Pose) -> Self {
        Self { timestamp, pose }
    }

    /// Translation of the pose.
    #[must_use]
    pub const fn translation(&self) -> &Vector3<f64> {
        &self.pose.translation
    }

    /// Rotation of the pose.
    #[must_use]
    pub const fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.pose.rotation
    }
}
