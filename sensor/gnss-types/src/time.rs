//! Capture timestamps for sentence records.
//!
//! A [`Timestamp`] is the time a record was captured by the logger, not the
//! clock field embedded in the sentence payload.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanosecond-precision capture timestamp.
///
/// Stored as whole nanoseconds since the recording epoch, so ordering and
/// equality are exact.
///
/// # Example
///
/// ```
/// use gnss_types::Timestamp;
///
/// let ts = Timestamp::from_secs_f64(1.5);
/// assert!((ts.as_secs_f64() - 1.5).abs() < 1e-9);
///
/// let same = Timestamp::from_secs_nanos(1, 500_000_000);
/// assert_eq!(ts, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    nanos: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from whole seconds and a nanosecond remainder.
    ///
    /// This is the `sec`/`nsec` pair most log formats store.
    #[must_use]
    pub const fn from_secs_nanos(secs: u64, nanos: u32) -> Self {
        Self {
            nanos: secs * 1_000_000_000 + nanos as u64,
        }
    }

    /// Creates a timestamp from floating point seconds.
    ///
    /// Whole seconds and the fraction are converted separately, so epoch-scale
    /// values keep nanosecond resolution. Negative and `NaN` inputs clamp to
    /// zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Self::zero();
        }
        let mut whole = secs.trunc() as u64;
        let mut frac = (secs.fract() * 1e9).round() as u64;
        if frac >= 1_000_000_000 {
            whole = whole.saturating_add(1);
            frac -= 1_000_000_000;
        }
        Self {
            nanos: whole.saturating_mul(1_000_000_000).saturating_add(frac),
        }
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Returns `true` for the zero timestamp.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the timestamp as floating point seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Signed number of seconds from `earlier` to `self`.
    ///
    /// Negative when `self` precedes `earlier`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_since(self, earlier: Self) -> f64 {
        if self.nanos >= earlier.nanos {
            (self.nanos - earlier.nanos) as f64 / 1e9
        } else {
            -((earlier.nanos - self.nanos) as f64 / 1e9)
        }
    }

    /// Absolute distance between two timestamps in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn abs_diff_secs(self, other: Self) -> f64 {
        self.nanos.abs_diff(other.nanos) as f64 / 1e9
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:09}",
            self.nanos / 1_000_000_000,
            self.nanos % 1_000_000_000
        )
    }
}
