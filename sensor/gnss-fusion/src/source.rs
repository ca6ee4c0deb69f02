//! Random-access sources of sentence records.

use gnss_types::SentenceRecord;

/// Topic under which NMEA sentences are recorded.
pub const NMEA_SENTENCE_TOPIC: &str = "/nmea_sentence";

/// An ordered, indexable collection of sentence records from one channel.
///
/// Mirrors a recorded log opened on a single topic: the synthesizer asks for
/// the topic once, then walks `0..len()` in order.
pub trait SentenceSource {
    /// Channel the records were recorded on.
    fn topic(&self) -> &str;

    /// Number of records.
    fn len(&self) -> usize;

    /// Returns `true` if there are no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record at `index`, or `None` if it cannot be produced.
    fn get(&self, index: usize) -> Option<SentenceRecord>;
}

/// Records held in memory.
///
/// # Example
///
/// ```
/// use gnss_fusion::{MemorySource, SentenceSource, NMEA_SENTENCE_TOPIC};
/// use gnss_types::{SentenceRecord, Timestamp};
///
/// let mut source = MemorySource::nmea();
/// source.push(SentenceRecord::new(Timestamp::from_secs_f64(1.0), "$GPRMC,0,A,1,N,2,E"));
///
/// assert_eq!(source.topic(), NMEA_SENTENCE_TOPIC);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    topic: String,
    records: Vec<SentenceRecord>,
}

impl MemorySource {
    /// Creates an empty source on `topic`.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            records: Vec::new(),
        }
    }

    /// Creates an empty source on [`NMEA_SENTENCE_TOPIC`].
    #[must_use]
    pub fn nmea() -> Self {
        Self::new(NMEA_SENTENCE_TOPIC)
    }

    /// Creates a source on `topic` holding `records` in the given order.
    #[must_use]
    pub fn from_records(topic: impl Into<String>, records: Vec<SentenceRecord>) -> Self {
        Self {
            topic: topic.into(),
            records,
        }
    }

    /// Appends a record.
    pub fn push(&mut self, record: SentenceRecord) {
        self.records.push(record);
    }

    /// The records in order.
    #[must_use]
    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }
}

impl SentenceSource for MemorySource {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Option<SentenceRecord> {
        self.records.get(index).cloned()
    }
}

impl<S: SentenceSource + ?Sized> SentenceSource for &S {
    fn topic(&self) -> &str {
        (**self).topic()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<SentenceRecord> {
        (**self).get(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use gnss_types::Timestamp;

    use super::*;

    #[test]
    fn memory_source_order() {
        let records = vec![
            SentenceRecord::new(Timestamp::from_nanos(1), "a"),
            SentenceRecord::new(Timestamp::from_nanos(2), "b"),
        ];
        let source = MemorySource::from_records("/gnss", records);
        assert_eq!(source.topic(), "/gnss");
        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());
        assert_eq!(source.get(1).unwrap().sentence, "b");
        assert!(source.get(2).is_none());
    }

    #[test]
    fn empty_nmea_source() {
        let source = MemorySource::nmea();
        assert!(source.is_empty());
        assert_eq!(source.topic(), NMEA_SENTENCE_TOPIC);
        assert!(source.records().is_empty());
    }

    #[test]
    fn borrowed_source() {
        fn count<S: SentenceSource>(s: S) -> usize {
            s.len()
        }
        let mut source = MemorySource::nmea();
        source.push(SentenceRecord::new(Timestamp::zero(), "x"));
        assert_eq!(count(&source), 1);
    }
}
