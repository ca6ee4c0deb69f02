//! Error types for gnss-fusion.
//!
//! Two levels: [`SentenceError`] rejects a single record and the run moves on;
//! [`FusionError`] aborts the whole operation.

use thiserror::Error;

/// A sentence that could not be applied to the fusion state.
///
/// Recoverable: the synthesizer skips the record and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// The sentence text was empty.
    #[error("empty sentence")]
    Empty,

    /// The sentence type is not one the parser handles.
    #[error("unrecognized sentence type `{sentence_type}`")]
    Unrecognized {
        /// First field of the sentence.
        sentence_type: String,
    },

    /// A required field is missing.
    #[error("`{sentence_type}` needs field {index} but has only {field_count} fields")]
    MissingField {
        /// Sentence type.
        sentence_type: String,
        /// Index of the missing field.
        index: usize,
        /// Number of fields present.
        field_count: usize,
    },

    /// A numeric field did not convert.
    #[error("`{sentence_type}` field {index} is not a number: `{value}`")]
    InvalidNumber {
        /// Sentence type.
        sentence_type: String,
        /// Index of the bad field.
        index: usize,
        /// Raw field text.
        value: String,
    },
}

impl SentenceError {
    /// Creates an unrecognized sentence error.
    #[must_use]
    pub fn unrecognized(sentence_type: impl Into<String>) -> Self {
        Self::Unrecognized {
            sentence_type: sentence_type.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(sentence_type: impl Into<String>, index: usize, field_count: usize) -> Self {
        Self::MissingField {
            sentence_type: sentence_type.into(),
            index,
            field_count,
        }
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(
        sentence_type: impl Into<String>,
        index: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidNumber {
            sentence_type: sentence_type.into(),
            index,
            value: value.into(),
        }
    }
}

/// Errors that abort a fusion operation.
#[derive(Debug, Error)]
pub enum FusionError {
    /// The sentence source is not the expected channel.
    #[error("wrong source channel: expected `{expected}`, got `{actual}`")]
    WrongSourceChannel {
        /// Expected topic.
        expected: String,
        /// Topic reported by the source.
        actual: String,
    },

    /// The source reported a record it could not produce.
    #[error("record {index} unavailable (source reports {len} records)")]
    RecordUnavailable {
        /// Requested index.
        index: usize,
        /// Record count reported by the source.
        len: usize,
    },

    /// Timestamp out of range.
    #[error("timestamp out of range: {timestamp} not in [{min}, {max}]")]
    TimestampOutOfRange {
        /// The requested timestamp, seconds.
        timestamp: f64,
        /// Start of the available range, seconds.
        min: f64,
        /// End of the available range, seconds.
        max: f64,
    },

    /// Insufficient data for operation.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The planar projector rejected its setup.
    #[error("projector error: {0}")]
    Projector(String),
}

impl FusionError {
    /// Creates a wrong source channel error.
    #[must_use]
    pub fn wrong_source_channel(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::WrongSourceChannel {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a record unavailable error.
    #[must_use]
    pub const fn record_unavailable(index: usize, len: usize) -> Self {
        Self::RecordUnavailable { index, len }
    }

    /// Creates a timestamp out of range error.
    #[must_use]
    pub const fn timestamp_out_of_range(timestamp: f64, min: f64, max: f64) -> Self {
        Self::TimestampOutOfRange {
            timestamp,
            min,
            max,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData(reason.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates a projector error.
    #[must_use]
    pub fn projector(reason: impl Into<String>) -> Self {
        Self::Projector(reason.into())
    }

    /// Returns `true` if the error rejected the source itself.
    #[must_use]
    pub const fn is_wrong_source(&self) -> bool {
        matches!(self, Self::WrongSourceChannel { .. })
    }
}

/// Result type for gnss-fusion operations.
pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn sentence_error_messages() {
        let err = SentenceError::unrecognized("$GPVTG");
        assert!(err.to_string().contains("$GPVTG"));

        let err = SentenceError::missing_field("$PASHR", 5, 3);
        let msg = err.to_string();
        assert!(msg.contains("field 5"));
        assert!(msg.contains("only 3"));

        let err = SentenceError::invalid_number("$GPGGA", 2, "north");
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn wrong_source_channel() {
        let err = FusionError::wrong_source_channel("/nmea_sentence", "/imu_raw");
        assert!(err.is_wrong_source());
        let msg = err.to_string();
        assert!(msg.contains("/nmea_sentence"));
        assert!(msg.contains("/imu_raw"));
    }

    #[test]
    fn record_unavailable() {
        let err = FusionError::record_unavailable(4, 10);
        assert!(!err.is_wrong_source());
        assert!(err.to_string().contains("record 4"));
    }

    #[test]
    fn timestamp_out_of_range() {
        let err = FusionError::timestamp_out_of_range(5.0, 0.0, 3.0);
        assert!(err.to_string().contains("timestamp out of range"));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn invalid_config() {
        let err = FusionError::invalid_config("orientation timeout must be positive");
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn projector() {
        let err = FusionError::projector("plane 42 does not exist");
        assert!(err.to_string().contains("plane 42"));
    }
}
