//! Trajectory synthesis from an ordered sentence stream.
//!
//! Each record is parsed into the shared [`FusionState`], then one of three
//! things happens:
//!
//! 1. **Fallback** - orientation is older than the timeout and the vehicle
//!    has moved more than the displacement threshold since the last
//!    fallback: emit a level pose heading along the displacement.
//! 2. **Synchronized** - the orientation and position internal clocks agree
//!    within tolerance: emit a pose from the state as is.
//! 3. **Unsynchronized** - emit nothing.
//!
//! Records that fail to parse are skipped.

use gnss_types::{SentenceRecord, StampedPose};
use tracing::{debug, info, trace, warn};

use crate::config::SynthesizerConfig;
use crate::error::{FusionError, Result, SentenceError};
use crate::nmea::parse_sentence;
use crate::projector::PlanarProjector;
use crate::source::SentenceSource;
use crate::state::FusionState;
use crate::trajectory::Trajectory;

/// What a single record contributed to the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// A pose from synchronized orientation and position samples.
    Synchronized,
    /// A pose with a heading derived from displacement.
    Fallback,
    /// Nothing; the internal clocks disagree.
    Unsynchronized,
}

/// Counts from one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynthesisSummary {
    /// Records read from the source.
    pub records: usize,
    /// Records rejected by the parser.
    pub skipped: usize,
    /// Poses emitted from synchronized samples.
    pub synchronized: usize,
    /// Poses emitted with a displacement heading.
    pub fallback: usize,
    /// Parsed records that emitted nothing.
    pub unsynchronized: usize,
}

impl SynthesisSummary {
    /// Total poses emitted.
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.synchronized + self.fallback
    }

    fn record(&mut self, outcome: std::result::Result<StepOutcome, &SentenceError>) {
        self.records += 1;
        match outcome {
            Ok(StepOutcome::Synchronized) => self.synchronized += 1,
            Ok(StepOutcome::Fallback) => self.fallback += 1,
            Ok(StepOutcome::Unsynchronized) => self.unsynchronized += 1,
            Err(_) => self.skipped += 1,
        }
    }
}

/// Builds a [`Trajectory`] from a [`SentenceSource`].
///
/// # Example
///
/// ```
/// use gnss_fusion::{MemorySource, PlanarProjector, Result, SynthesizerConfig, TrajectorySynthesizer};
/// use gnss_types::{SentenceRecord, Timestamp};
/// use nalgebra::Vector3;
///
/// #[derive(Default)]
/// struct Passthrough([f64; 3]);
///
/// impl PlanarProjector for Passthrough {
///     fn set_plane(&mut self, _plane: u8) -> Result<()> { Ok(()) }
///     fn set_llh_nmea_degrees(&mut self, lat: f64, lon: f64, h: f64) { self.0 = [lat, lon, h]; }
///     fn x(&self) -> f64 { self.0[0] }
///     fn y(&self) -> f64 { self.0[1] }
///     fn z(&self) -> f64 { self.0[2] }
/// }
///
/// let mut source = MemorySource::nmea();
/// source.push(SentenceRecord::new(Timestamp::from_secs_f64(1.0), "$GPRMC,0,A,1.0,N,2.0,E"));
///
/// let config = SynthesizerConfig::default().with_translation_offset(Vector3::zeros());
/// let synthesizer = TrajectorySynthesizer::new(config).unwrap();
/// let (trajectory, summary) = synthesizer.run(&source, Passthrough::default()).unwrap();
///
/// assert_eq!(trajectory.len(), 1);
/// assert_eq!(summary.synchronized, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrajectorySynthesizer {
    config: SynthesizerConfig,
}

impl TrajectorySynthesizer {
    /// Creates a synthesizer.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidConfig`] if the config does not validate.
    pub fn new(config: SynthesizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Rebuilds `trajectory` from every record of `source`.
    ///
    /// `trajectory` is cleared first, so on error it is left empty.
    ///
    /// # Errors
    ///
    /// - [`FusionError::WrongSourceChannel`] if the source topic is not the
    ///   expected one; no record is read.
    /// - The projector's error if it rejects the configured plane.
    /// - [`FusionError::RecordUnavailable`] if the source cannot produce a
    ///   record it counted.
    pub fn synthesize<S, P>(
        &self,
        source: &S,
        projector: P,
        trajectory: &mut Trajectory,
    ) -> Result<SynthesisSummary>
    where
        S: SentenceSource + ?Sized,
        P: PlanarProjector,
    {
        trajectory.clear();

        if source.topic() != self.config.expected_topic {
            warn!(
                expected = %self.config.expected_topic,
                actual = %source.topic(),
                "Source is not a sentence channel"
            );
            return Err(FusionError::wrong_source_channel(
                &self.config.expected_topic,
                source.topic(),
            ));
        }

        let mut state = FusionState::new(projector, self.config.plane_number)?;
        let mut summary = SynthesisSummary::default();
        let total = source.len();

        for index in 0..total {
            trace!("{index}/{total}");
            let Some(record) = source.get(index) else {
                trajectory.clear();
                return Err(FusionError::record_unavailable(index, total));
            };

            let outcome = self.step(&mut state, &record, trajectory);
            if let Err(err) = &outcome {
                debug!(index, %err, "Skipping sentence");
            }
            summary.record(outcome.as_ref().copied());
        }

        info!(
            records = summary.records,
            poses = summary.emitted(),
            fallback = summary.fallback,
            skipped = summary.skipped,
            "Trajectory synthesized"
        );
        Ok(summary)
    }

    /// Convenience wrapper around [`synthesize`](Self::synthesize) that
    /// returns a fresh trajectory.
    ///
    /// # Errors
    ///
    /// Same as [`synthesize`](Self::synthesize).
    pub fn run<S, P>(&self, source: &S, projector: P) -> Result<(Trajectory, SynthesisSummary)>
    where
        S: SentenceSource + ?Sized,
        P: PlanarProjector,
    {
        let mut trajectory = Trajectory::new();
        let summary = self.synthesize(source, projector, &mut trajectory)?;
        Ok((trajectory, summary))
    }

    /// Processes one record against `state`, appending at most one pose.
    ///
    /// # Errors
    ///
    /// Returns the parser's [`SentenceError`] if the record was rejected; the
    /// state and trajectory are then untouched.
    pub fn step<P: PlanarProjector>(
        &self,
        state: &mut FusionState<P>,
        record: &SentenceRecord,
        trajectory: &mut Trajectory,
    ) -> std::result::Result<StepOutcome, SentenceError> {
        parse_sentence(record, state)?;

        if state.orientation_gap(record.stamp) > self.config.orientation_timeout
            && state.displacement() > self.config.displacement_threshold
        {
            let orientation = state.adopt_displacement_heading();
            debug!(
                stamp = %record.stamp,
                yaw = orientation.yaw,
                "Stale orientation, heading from displacement"
            );
            trajectory.push(self.stamped(state, record));
            state.commit_planar();
            return Ok(StepOutcome::Fallback);
        }

        if state.is_synchronized(self.config.sync_tolerance) {
            trajectory.push(self.stamped(state, record));
            Ok(StepOutcome::Synchronized)
        } else {
            Ok(StepOutcome::Unsynchronized)
        }
    }

    fn stamped<P: PlanarProjector>(
        &self,
        state: &FusionState<P>,
        record: &SentenceRecord,
    ) -> StampedPose {
        StampedPose::new(record.stamp, state.pose(&self.config.translation_offset))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;
    use gnss_types::Timestamp;
    use nalgebra::Vector3;

    use super::*;
    use crate::source::MemorySource;
    use crate::testing::GridProjector;

    fn rec(secs: f64, sentence: &str) -> SentenceRecord {
        SentenceRecord::new(Timestamp::from_secs_f64(secs), sentence)
    }

    fn synthesizer() -> TrajectorySynthesizer {
        TrajectorySynthesizer::new(
            SynthesizerConfig::default().with_translation_offset(Vector3::new(100.0, 200.0, 0.0)),
        )
        .unwrap()
    }

    fn state() -> FusionState<GridProjector> {
        FusionState::new(GridProjector::default(), 7).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SynthesizerConfig::default().with_displacement_threshold(0.0);
        assert!(TrajectorySynthesizer::new(config).is_err());
    }

    #[test]
    fn skipped_record_leaves_trajectory() {
        let s = synthesizer();
        let mut st = state();
        let mut t = Trajectory::new();
        let result = s.step(&mut st, &rec(1.0, "$GPVTG,1,2"), &mut t);
        assert!(result.is_err());
        assert!(t.is_empty());
    }

    #[test]
    fn synchronized_step_emits_state_pose() {
        let s = synthesizer();
        let mut st = state();
        let mut t = Trajectory::new();

        let outcome = s.step(&mut st, &rec(2.0, "$GPRMC,0,A,1.0,N,2.0,E"), &mut t).unwrap();

        assert_eq!(outcome, StepOutcome::Synchronized);
        let p = t.last().unwrap();
        assert_eq!(p.timestamp, Timestamp::from_secs_f64(2.0));
        assert_relative_eq!(*p.translation(), Vector3::new(101.0, 202.0, 0.0));
        let (roll, pitch, yaw) = p.pose.roll_pitch_yaw();
        assert_relative_eq!(roll, 0.0);
        assert_relative_eq!(pitch, 0.0);
        assert_relative_eq!(yaw, FRAC_PI_2, epsilon = 1e-12);
        // A synchronized emission does not move the displacement baseline.
        assert_eq!(st.last_planar(), gnss_types::PlanarPosition::origin());
    }

    #[test]
    fn unsynchronized_step_emits_nothing() {
        let s = synthesizer();
        let mut st = state();
        let mut t = Trajectory::new();

        let outcome = s
            .step(&mut st, &rec(2.0, "$GPRMC,5,A,1.0,N,2.0,E"), &mut t)
            .unwrap();
        assert_eq!(outcome, StepOutcome::Unsynchronized);
        assert!(t.is_empty());
    }

    #[test]
    fn fallback_step_uses_displacement_heading() {
        let s = synthesizer();
        let mut st = state();
        let mut t = Trajectory::new();

        // Position 1 east of the origin baseline, orientation stamp still 0.
        let outcome = s
            .step(&mut st, &rec(20.0, "$GPRMC,5,A,1.0,N,0.0,E"), &mut t)
            .unwrap();

        assert_eq!(outcome, StepOutcome::Fallback);
        let (roll, pitch, yaw) = t.last().unwrap().pose.roll_pitch_yaw();
        assert_eq!((roll, pitch), (0.0, 0.0));
        assert_relative_eq!(yaw, FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(st.last_planar(), gnss_types::PlanarPosition::new(1.0, 0.0, 0.0));
        assert_relative_eq!(st.orientation().yaw, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn small_displacement_falls_through_to_sync_check() {
        let s = synthesizer();
        let mut st = state();
        let mut t = Trajectory::new();

        let outcome = s
            .step(&mut st, &rec(20.0, "$GPRMC,0,A,0.1,N,0.1,E"), &mut t)
            .unwrap();
        assert_eq!(outcome, StepOutcome::Synchronized);

        let outcome = s
            .step(&mut st, &rec(21.0, "$GPRMC,3,A,0.1,N,0.1,E"), &mut t)
            .unwrap();
        assert_eq!(outcome, StepOutcome::Unsynchronized);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn summary_counts() {
        let source = MemorySource::from_records(
            crate::NMEA_SENTENCE_TOPIC,
            vec![
                rec(1.0, "$GPRMC,0,A,1.0,N,2.0,E"),
                rec(2.0, "garbage"),
                rec(3.0, "$GPRMC,9,A,1.0,N,2.0,E"),
            ],
        );
        let (t, summary) = synthesizer().run(&source, GridProjector::default()).unwrap();
        assert_eq!(
            summary,
            SynthesisSummary {
                records: 3,
                skipped: 1,
                synchronized: 1,
                fallback: 0,
                unsynchronized: 1,
            }
        );
        assert_eq!(summary.emitted(), t.len());
    }

    #[test]
    fn rejected_plane_aborts() {
        let source = MemorySource::nmea();
        let s = TrajectorySynthesizer::new(SynthesizerConfig::default().with_plane(42)).unwrap();
        let err = s.run(&source, GridProjector::default()).unwrap_err();
        assert!(matches!(err, FusionError::Projector(_)));
    }

    struct Holey;

    impl SentenceSource for Holey {
        fn topic(&self) -> &str {
            crate::NMEA_SENTENCE_TOPIC
        }

        fn len(&self) -> usize {
            3
        }

        fn get(&self, index: usize) -> Option<SentenceRecord> {
            (index == 0).then(|| rec(1.0, "$GPRMC,0,A,1.0,N,2.0,E"))
        }
    }

    #[test]
    fn unavailable_record_aborts_and_clears() {
        let mut t = Trajectory::new();
        let err = synthesizer()
            .synthesize(&Holey, GridProjector::default(), &mut t)
            .unwrap_err();
        assert!(matches!(err, FusionError::RecordUnavailable { index: 1, len: 3 }));
        assert!(t.is_empty());
    }
}
