//! Raw sentence records as captured by a logger.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Field separator of NMEA-style sentences.
pub const FIELD_SEPARATOR: char = ',';

/// One captured sentence line plus the time it was recorded.
///
/// The payload is kept verbatim; interpretation happens in `gnss-fusion`.
///
/// # Example
///
/// ```
/// use gnss_types::{SentenceRecord, Timestamp};
///
/// let record = SentenceRecord::new(
///     Timestamp::from_secs_f64(2.0),
///     "$GPRMC,123519,A,4807.038,N,01131.000,E",
/// );
/// assert_eq!(record.stamp, Timestamp::from_secs_f64(2.0));
/// assert!(record.sentence.starts_with("$GPRMC"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SentenceRecord {
    /// Capture timestamp assigned by the recorder.
    pub stamp: Timestamp,
    /// Raw sentence text.
    pub sentence: String,
}

impl SentenceRecord {
    /// Creates a record from a capture time and the sentence text.
    #[must_use]
    pub fn new(stamp: Timestamp, sentence: impl Into<String>) -> Self {
        Self {
            stamp,
            sentence: sentence.into(),
        }
    }
}
