//! Configuration for trajectory synthesis.

use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FusionError, Result};
use crate::source::NMEA_SENTENCE_TOPIC;

/// Offset from the antenna's planar frame to the vehicle map frame.
pub const DEFAULT_TRANSLATION_OFFSET: [f64; 3] = [18138.0, 93634.0, -39.0];

/// Reference plane handed to the projector when none is configured.
pub const DEFAULT_PLANE_NUMBER: u8 = 7;

/// Settings for a [`TrajectorySynthesizer`](crate::TrajectorySynthesizer) run.
///
/// # Example
///
/// ```
/// use gnss_fusion::SynthesizerConfig;
/// use nalgebra::Vector3;
///
/// let config = SynthesizerConfig::default()
///     .with_plane(9)
///     .with_translation_offset(Vector3::zeros());
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.orientation_timeout, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynthesizerConfig {
    /// Topic the sentence source must report.
    ///
    /// Default: `"/nmea_sentence"`
    pub expected_topic: String,

    /// Reference plane passed to the projector.
    ///
    /// Default: `7`
    pub plane_number: u8,

    /// Added to every planar position before it becomes a pose.
    ///
    /// Default: `(18138, 93634, -39)`
    pub translation_offset: Vector3<f64>,

    /// Capture-time age after which orientation is considered stale, seconds.
    ///
    /// Default: `10.0`
    pub orientation_timeout: f64,

    /// Minimum planar displacement for a heading derived from motion.
    ///
    /// Default: `0.2`
    pub displacement_threshold: f64,

    /// Largest gap between the orientation and position internal clocks for
    /// the two samples to count as one fix.
    ///
    /// Default: `1e-2`
    pub sync_tolerance: f64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            expected_topic: NMEA_SENTENCE_TOPIC.to_string(),
            plane_number: DEFAULT_PLANE_NUMBER,
            translation_offset: Vector3::from(DEFAULT_TRANSLATION_OFFSET),
            orientation_timeout: 10.0,
            displacement_threshold: 0.2,
            sync_tolerance: 1e-2,
        }
    }
}

impl SynthesizerConfig {
    /// Set the reference plane number.
    #[must_use]
    pub fn with_plane(mut self, plane_number: u8) -> Self {
        self.plane_number = plane_number;
        self
    }

    /// Set the expected source topic.
    #[must_use]
    pub fn with_expected_topic(mut self, topic: impl Into<String>) -> Self {
        self.expected_topic = topic.into();
        self
    }

    /// Set the translation offset.
    #[must_use]
    pub fn with_translation_offset(mut self, offset: Vector3<f64>) -> Self {
        self.translation_offset = offset;
        self
    }

    /// Set the orientation staleness timeout, seconds.
    #[must_use]
    pub fn with_orientation_timeout(mut self, secs: f64) -> Self {
        self.orientation_timeout = secs;
        self
    }

    /// Set the displacement threshold for motion-derived headings.
    #[must_use]
    pub fn with_displacement_threshold(mut self, threshold: f64) -> Self {
        self.displacement_threshold = threshold;
        self
    }

    /// Set the internal clock synchronization tolerance.
    #[must_use]
    pub fn with_sync_tolerance(mut self, tolerance: f64) -> Self {
        self.sync_tolerance = tolerance;
        self
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidConfig`] if the topic is empty, the
    /// offset is not finite, or a threshold is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.expected_topic.is_empty() {
            return Err(FusionError::invalid_config("expected topic is empty"));
        }
        if !self.translation_offset.iter().all(|v| v.is_finite()) {
            return Err(FusionError::invalid_config(
                "translation offset must be finite",
            ));
        }
        for (name, value) in [
            ("orientation timeout", self.orientation_timeout),
            ("displacement threshold", self.displacement_threshold),
            ("sync tolerance", self.sync_tolerance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FusionError::invalid_config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
