//! Sentence parser.
//!
//! Splits a sentence on `,` and dispatches on its first field:
//!
//! | Type                      | Group       | Fields used (0-based)                       |
//! |---------------------------|-------------|---------------------------------------------|
//! | starts with `QQ`          | orientation | 3 time, 4 roll, 5 pitch, 6 heading          |
//! | `$PASHR`                  | orientation | 1 time, 2 heading, 4 roll, 5 pitch          |
//! | chars 3..6 are `GGA`      | position    | 1 time, 2 lat, 4 lon, 9 height              |
//! | `$GPRMC`                  | position    | 1 time (integer part), 3 lat, 5 lon         |
//!
//! Angles are degrees on the wire. A sentence is decoded completely before
//! anything is written to the state, so a rejected sentence leaves the state
//! as it was.

use gnss_types::{FIELD_SEPARATOR, GeodeticFix, Orientation, SentenceRecord};

use crate::error::SentenceError;
use crate::projector::PlanarProjector;
use crate::state::{FusionState, SentenceSample, SentenceUpdate};

/// Prefix of proprietary INS attitude sentences.
pub const QQ_PREFIX: &str = "QQ";

/// Attitude sentence type.
pub const PASHR: &str = "$PASHR";

/// Recommended minimum position sentence type.
pub const GPRMC: &str = "$GPRMC";

/// Fix sentence code, matched after the two-letter talker id.
pub const GGA: &str = "GGA";

/// Splits a sentence into its comma-separated fields.
#[must_use]
pub fn split_sentence(sentence: &str) -> Vec<&str> {
    sentence.split(FIELD_SEPARATOR).collect()
}

/// Indexed access to the fields of one sentence with typed conversion.
struct Fields<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    fn new(sentence: &'a str) -> Self {
        Self {
            tokens: split_sentence(sentence),
        }
    }

    fn sentence_type(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or_default()
    }

    fn get(&self, index: usize) -> Result<&'a str, SentenceError> {
        self.tokens.get(index).copied().ok_or_else(|| {
            SentenceError::missing_field(self.sentence_type(), index, self.tokens.len())
        })
    }

    fn float(&self, index: usize) -> Result<f64, SentenceError> {
        let raw = self.get(index)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| SentenceError::invalid_number(self.sentence_type(), index, raw))
    }

    /// Integer conversion of a field, truncating at the first non-digit.
    #[allow(clippy::cast_precision_loss)]
    fn integer(&self, index: usize) -> Result<f64, SentenceError> {
        let raw = self.get(index)?;
        integer_prefix(raw)
            .map(|v| v as f64)
            .ok_or_else(|| SentenceError::invalid_number(self.sentence_type(), index, raw))
    }
}

/// Parses the leading `[+-]digits` of `text`, ignoring whatever follows.
fn integer_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))))
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}

fn is_gga(sentence_type: &str) -> bool {
    sentence_type.get(3..6) == Some(GGA)
}

/// Decodes a sentence without touching any state.
///
/// # Errors
///
/// Returns a [`SentenceError`] if the sentence is empty, of an unknown type,
/// too short for its type, or carries a non-numeric value in a used field.
///
/// # Example
///
/// ```
/// use gnss_fusion::{SentenceSample, decode_sentence};
///
/// let sample = decode_sentence("$GPRMC,123519.75,A,3510.2,N,13658.4,E").unwrap();
/// match sample {
///     SentenceSample::Position { time, fix } => {
///         assert_eq!(time, 123_519.0);
///         assert_eq!(fix.height, 0.0);
///     }
///     SentenceSample::Orientation { .. } => unreachable!(),
/// }
/// ```
pub fn decode_sentence(sentence: &str) -> Result<SentenceSample, SentenceError> {
    if sentence.trim().is_empty() {
        return Err(SentenceError::Empty);
    }

    let fields = Fields::new(sentence);
    let sentence_type = fields.sentence_type();

    if sentence_type.starts_with(QQ_PREFIX) {
        let time = fields.float(3)?;
        let roll = fields.float(4)?;
        let pitch = fields.float(5)?;
        let heading = fields.float(6)?;
        Ok(SentenceSample::Orientation {
            time,
            orientation: Orientation::from_attitude_degrees(roll, pitch, heading),
            refreshes_stamp: true,
        })
    } else if sentence_type == PASHR {
        let time = fields.float(1)?;
        let heading = fields.float(2)?;
        let roll = fields.float(4)?;
        let pitch = fields.float(5)?;
        Ok(SentenceSample::Orientation {
            time,
            orientation: Orientation::from_attitude_degrees(roll, pitch, heading),
            // $PASHR leaves the orientation capture stamp where the last QQ put it.
            refreshes_stamp: false,
        })
    } else if is_gga(sentence_type) {
        let time = fields.float(1)?;
        let latitude = fields.float(2)?;
        let longitude = fields.float(4)?;
        let height = fields.float(9)?;
        Ok(SentenceSample::Position {
            time,
            fix: GeodeticFix::new(latitude, longitude, height),
        })
    } else if sentence_type == GPRMC {
        let time = fields.integer(1)?;
        let latitude = fields.float(3)?;
        let longitude = fields.float(5)?;
        Ok(SentenceSample::Position {
            time,
            fix: GeodeticFix::new(latitude, longitude, 0.0),
        })
    } else {
        Err(SentenceError::unrecognized(sentence_type))
    }
}

/// Parses one record into `state`.
///
/// On success exactly one group of the state (orientation or position) has
/// been overwritten. On failure the state is unchanged.
///
/// # Errors
///
/// Returns a [`SentenceError`] under the same conditions as [`decode_sentence`].
pub fn parse_sentence<P: PlanarProjector>(
    record: &SentenceRecord,
    state: &mut FusionState<P>,
) -> Result<SentenceUpdate, SentenceError> {
    let sample = decode_sentence(&record.sentence)?;
    Ok(state.apply(sample, record.stamp))
}
