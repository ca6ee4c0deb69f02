//! Append-only, time-ordered sequence of poses.

use gnss_types::{StampedPose, Timestamp};

use crate::error::{FusionError, Result};
use crate::interpolation::interpolate;

/// Poses in the order a synthesis run produced them.
///
/// Queries that search by time assume non-decreasing timestamps, which holds
/// whenever the input records were in capture order.
///
/// # Example
///
/// ```
/// use gnss_fusion::Trajectory;
/// use gnss_types::{Pose, StampedPose, Timestamp};
/// use nalgebra::Vector3;
///
/// let mut trajectory = Trajectory::new();
/// for (secs, x) in [(0.0, 0.0), (1.0, 10.0)] {
///     let pose = Pose::from_rpy(Vector3::new(x, 0.0, 0.0), 0.0, 0.0, 0.0);
///     trajectory.push(StampedPose::new(Timestamp::from_secs_f64(secs), pose));
/// }
///
/// let p = trajectory.pose_at(Timestamp::from_secs_f64(0.5)).unwrap();
/// assert!((p.translation().x - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    poses: Vec<StampedPose>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub const fn new() -> Self {
        Self { poses: Vec::new() }
    }

    /// Appends a pose.
    pub fn push(&mut self, pose: StampedPose) {
        self.poses.push(pose);
    }

    /// Removes all poses.
    pub fn clear(&mut self) {
        self.poses.clear();
    }

    /// Number of poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns `true` if there are no poses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Pose at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StampedPose> {
        self.poses.get(index)
    }

    /// Earliest pose.
    #[must_use]
    pub fn first(&self) -> Option<&StampedPose> {
        self.poses.first()
    }

    /// Latest pose.
    #[must_use]
    pub fn last(&self) -> Option<&StampedPose> {
        self.poses.last()
    }

    /// Iterates over the poses in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StampedPose> {
        self.poses.iter()
    }

    /// The poses as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StampedPose] {
        &self.poses
    }

    /// Returns `true` if timestamps never decrease.
    #[must_use]
    pub fn is_time_ordered(&self) -> bool {
        self.poses
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp)
    }

    /// Returns `(first, last)` timestamps.
    #[must_use]
    pub fn timestamp_range(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.first()?.timestamp, self.last()?.timestamp))
    }

    /// Finds poses bracketing `timestamp`.
    ///
    /// Returns `(before, after)` with `before` at or before and `after` at or
    /// after `timestamp`; both are the same index on an exact hit. `None` if
    /// `timestamp` is outside the trajectory.
    #[must_use]
    pub fn find_bracket(&self, timestamp: Timestamp) -> Option<(usize, usize)> {
        let (min, max) = self.timestamp_range()?;
        if timestamp < min || timestamp > max {
            return None;
        }

        // First pose at or after `timestamp`.
        let lo = self.poses.partition_point(|p| p.timestamp < timestamp);
        if lo >= self.poses.len() {
            let last = self.poses.len() - 1;
            Some((last, last))
        } else if lo == 0 || self.poses[lo].timestamp == timestamp {
            Some((lo, lo))
        } else {
            Some((lo - 1, lo))
        }
    }

    /// Pose at `timestamp`, interpolated between its bracketing pair.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InsufficientData`] for an empty trajectory and
    /// [`FusionError::TimestampOutOfRange`] outside the covered time span.
    pub fn pose_at(&self, timestamp: Timestamp) -> Result<StampedPose> {
        let (min, max) = self
            .timestamp_range()
            .ok_or_else(|| FusionError::insufficient_data("trajectory is empty"))?;

        let (before, after) = self.find_bracket(timestamp).ok_or_else(|| {
            FusionError::timestamp_out_of_range(
                timestamp.as_secs_f64(),
                min.as_secs_f64(),
                max.as_secs_f64(),
            )
        })?;

        let p1 = &self.poses[before];
        let p2 = &self.poses[after];
        Ok(interpolate(p1, p2, timestamp))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StampedPose;
    type IntoIter = std::slice::Iter<'a, StampedPose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = StampedPose;
    type IntoIter = std::vec::IntoIter<StampedPose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.into_iter()
    }
}

impl FromIterator<StampedPose> for Trajectory {
    fn from_iter<I: IntoIterator<Item = StampedPose>>(iter: I) -> Self {
        Self {
            poses: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;
    use gnss_types::Pose;
    use nalgebra::Vector3;

    use super::*;

    fn at(secs: f64, x: f64) -> StampedPose {
        StampedPose::new(
            Timestamp::from_secs_f64(secs),
            Pose::from_rpy(Vector3::new(x, 0.0, 0.0), 0.0, 0.0, 0.0),
        )
    }

    fn trajectory() -> Trajectory {
        [at(1.0, 10.0), at(2.0, 20.0), at(4.0, 40.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn basic_accessors() {
        let t = trajectory();
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.first().unwrap().translation().x, 10.0);
        assert_eq!(t.last().unwrap().translation().x, 40.0);
        assert_eq!(t.get(1).unwrap().translation().x, 20.0);
        assert_eq!(t.iter().count(), 3);
        assert_eq!((&t).into_iter().count(), 3);
        assert!(t.is_time_ordered());
    }

    #[test]
    fn clear_empties() {
        let mut t = trajectory();
        t.clear();
        assert!(t.is_empty());
        assert!(t.timestamp_range().is_none());
    }

    #[test]
    fn bracket_lookup() {
        let t = trajectory();
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(1.0)), Some((0, 0)));
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(1.5)), Some((0, 1)));
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(2.0)), Some((1, 1)));
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(3.0)), Some((1, 2)));
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(4.0)), Some((2, 2)));
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(0.5)), None);
        assert_eq!(t.find_bracket(Timestamp::from_secs_f64(4.5)), None);
    }

    #[test]
    fn pose_at_interpolates() {
        let t = trajectory();
        let p = t.pose_at(Timestamp::from_secs_f64(3.0)).unwrap();
        assert_relative_eq!(p.translation().x, 30.0, epsilon = 1e-9);
        assert_eq!(t.pose_at(Timestamp::from_secs_f64(2.0)).unwrap(), at(2.0, 20.0));
    }

    #[test]
    fn pose_at_out_of_range() {
        let t = trajectory();
        assert!(matches!(
            t.pose_at(Timestamp::from_secs_f64(5.0)),
            Err(FusionError::TimestampOutOfRange { .. })
        ));
        assert!(matches!(
            Trajectory::new().pose_at(Timestamp::zero()),
            Err(FusionError::InsufficientData(_))
        ));
    }

    #[test]
    fn out_of_order_detected() {
        let t: Trajectory = [at(2.0, 0.0), at(1.0, 0.0)].into_iter().collect();
        assert!(!t.is_time_ordered());
    }
}
