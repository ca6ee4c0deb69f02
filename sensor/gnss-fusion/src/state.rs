//! Fusion state accumulated across sentences.
//!
//! Orientation and position arrive in different sentences, at different
//! rates. [`FusionState`] keeps the latest sample of each group; a sentence
//! overwrites exactly one group and leaves the other untouched.

use gnss_types::{GeodeticFix, Orientation, PlanarPosition, Pose, Timestamp};
use nalgebra::Vector3;

use crate::error::Result;
use crate::projector::PlanarProjector;

/// Decoded content of one sentence, before it touches the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentenceSample {
    /// Attitude report.
    Orientation {
        /// Sentence-internal clock field.
        time: f64,
        /// Attitude in the planar frame.
        orientation: Orientation,
        /// Whether this sentence refreshes the orientation capture stamp.
        refreshes_stamp: bool,
    },
    /// Position fix.
    Position {
        /// Sentence-internal clock field.
        time: f64,
        /// Latitude/longitude/height.
        fix: GeodeticFix,
    },
}

/// Which group of [`FusionState`] a sentence updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceUpdate {
    /// Roll/pitch/yaw and orientation time.
    Orientation,
    /// Fix, planar position and position time.
    Position,
}

/// Latest orientation and position samples of one synthesis run.
///
/// Owns the projector so that the current planar position always reflects
/// the latest fix. The previous planar position moves only when
/// [`FusionState::commit_planar`] is called.
#[derive(Debug, Clone)]
pub struct FusionState<P> {
    orientation: Orientation,
    orientation_time: f64,
    position_time: f64,
    fix: GeodeticFix,
    orientation_stamp: Timestamp,
    projector: P,
    last_planar: PlanarPosition,
}

impl<P: PlanarProjector> FusionState<P> {
    /// Creates an empty state and selects the projector's reference plane.
    ///
    /// Orientation starts level with a zero compass heading. The initial yaw
    /// is therefore pi/2: the attitude conversion applied to zero input, the
    /// same value a `QQ` sentence reporting all zeros would produce.
    ///
    /// # Errors
    ///
    /// Returns the projector's error if it rejects `plane`.
    pub fn new(mut projector: P, plane: u8) -> Result<Self> {
        projector.set_plane(plane)?;
        Ok(Self {
            orientation: Orientation::from_attitude_degrees(0.0, 0.0, 0.0),
            orientation_time: 0.0,
            position_time: 0.0,
            fix: GeodeticFix::default(),
            orientation_stamp: Timestamp::zero(),
            projector,
            last_planar: PlanarPosition::origin(),
        })
    }

    /// Applies a decoded sentence, overwriting one group of fields.
    pub fn apply(&mut self, sample: SentenceSample, stamp: Timestamp) -> SentenceUpdate {
        match sample {
            SentenceSample::Orientation {
                time,
                orientation,
                refreshes_stamp,
            } => {
                self.orientation_time = time;
                self.orientation = orientation;
                if refreshes_stamp {
                    self.orientation_stamp = stamp;
                }
                SentenceUpdate::Orientation
            }
            SentenceSample::Position { time, fix } => {
                self.position_time = time;
                self.fix = fix;
                self.projector
                    .set_llh_nmea_degrees(fix.latitude, fix.longitude, fix.height);
                SentenceUpdate::Position
            }
        }
    }

    /// Current attitude.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Internal clock of the latest orientation sentence.
    #[must_use]
    pub const fn orientation_time(&self) -> f64 {
        self.orientation_time
    }

    /// Internal clock of the latest position sentence.
    #[must_use]
    pub const fn position_time(&self) -> f64 {
        self.position_time
    }

    /// Latest geodetic fix.
    #[must_use]
    pub const fn fix(&self) -> GeodeticFix {
        self.fix
    }

    /// Capture time of the last orientation sentence that refreshed it.
    #[must_use]
    pub const fn orientation_stamp(&self) -> Timestamp {
        self.orientation_stamp
    }

    /// Planar position of the latest fix.
    #[must_use]
    pub fn planar(&self) -> PlanarPosition {
        self.projector.position()
    }

    /// Planar position at the last commit.
    #[must_use]
    pub const fn last_planar(&self) -> PlanarPosition {
        self.last_planar
    }

    /// The projector.
    #[must_use]
    pub const fn projector(&self) -> &P {
        &self.projector
    }

    /// Seconds between the orientation capture stamp and `stamp`.
    #[must_use]
    pub fn orientation_gap(&self, stamp: Timestamp) -> f64 {
        self.orientation_stamp.abs_diff_secs(stamp)
    }

    /// Horizontal distance between the current and the committed planar position.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.planar().horizontal_distance(&self.last_planar)
    }

    /// Whether the internal clocks of both groups agree within `tolerance`.
    #[must_use]
    pub fn is_synchronized(&self, tolerance: f64) -> bool {
        (self.orientation_time - self.position_time).abs() < tolerance
    }

    /// Replaces the attitude with a level one heading along the displacement
    /// since the last commit, and returns it.
    pub fn adopt_displacement_heading(&mut self) -> Orientation {
        let yaw = self.planar().heading_from(&self.last_planar);
        self.orientation = Orientation::level(yaw);
        self.orientation
    }

    /// Makes the current planar position the displacement baseline.
    pub fn commit_planar(&mut self) {
        self.last_planar = self.planar();
    }

    /// Builds a pose from the current state, shifted by `offset`.
    #[must_use]
    pub fn pose(&self, offset: &Vector3<f64>) -> Pose {
        Pose::from_orientation(self.planar().to_vector() + offset, self.orientation)
    }
}
