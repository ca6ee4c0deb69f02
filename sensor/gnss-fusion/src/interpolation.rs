//! Time-based interpolation between two trajectory samples.

use gnss_types::{StampedPose, Timestamp};

use crate::error::{FusionError, Result};

/// Interpolates between two samples at `t`.
///
/// Translation is blended linearly and rotation by slerp, both with fraction
/// `r = (t - p1.timestamp) / (p2.timestamp - p1.timestamp)`. At either end of
/// the bracket the corresponding sample is returned unchanged.
///
/// # Panics
///
/// Panics unless `p1.timestamp <= t <= p2.timestamp`. Choosing a bracketing
/// pair is the caller's job; use [`try_interpolate`] when that cannot be
/// guaranteed.
///
/// # Example
///
/// ```
/// use gnss_fusion::interpolate;
/// use gnss_types::{Pose, StampedPose, Timestamp};
/// use nalgebra::Vector3;
///
/// let p1 = StampedPose::new(Timestamp::from_secs_f64(0.0), Pose::identity());
/// let p2 = StampedPose::new(
///     Timestamp::from_secs_f64(2.0),
///     Pose::from_rpy(Vector3::new(4.0, 0.0, 0.0), 0.0, 0.0, 0.0),
/// );
///
/// let mid = interpolate(&p1, &p2, Timestamp::from_secs_f64(1.0));
/// assert!((mid.translation().x - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn interpolate(p1: &StampedPose, p2: &StampedPose, t: Timestamp) -> StampedPose {
    assert!(
        p1.timestamp <= t && t <= p2.timestamp,
        "interpolation time {t} outside bracket [{}, {}]",
        p1.timestamp,
        p2.timestamp
    );
    blend(p1, p2, t)
}

/// Like [`interpolate`], but reports a bad bracket as an error.
///
/// # Errors
///
/// Returns [`FusionError::TimestampOutOfRange`] unless
/// `p1.timestamp <= t <= p2.timestamp`.
pub fn try_interpolate(p1: &StampedPose, p2: &StampedPose, t: Timestamp) -> Result<StampedPose> {
    if p1.timestamp <= t && t <= p2.timestamp {
        Ok(blend(p1, p2, t))
    } else {
        Err(FusionError::timestamp_out_of_range(
            t.as_secs_f64(),
            p1.timestamp.as_secs_f64(),
            p2.timestamp.as_secs_f64(),
        ))
    }
}

/// Fraction of the way from `start` to `end` at which `t` lies.
///
/// Zero for an empty interval.
#[must_use]
pub fn lerp_factor(start: Timestamp, end: Timestamp, t: Timestamp) -> f64 {
    if start == end {
        0.0
    } else {
        t.secs_since(start) / end.secs_since(start)
    }
}

fn blend(p1: &StampedPose, p2: &StampedPose, t: Timestamp) -> StampedPose {
    if t == p1.timestamp {
        return *p1;
    }
    if t == p2.timestamp {
        return *p2;
    }
    let r = lerp_factor(p1.timestamp, p2.timestamp, t);
    StampedPose::new(t, p1.pose.lerp(&p2.pose, r))
}
