//! Sentence fusion for GNSS/INS trajectories.
//!
//! Turns an ordered stream of NMEA-style sentences into a time-ordered
//! trajectory of 6-DOF poses.
//!
//! # Pipeline
//!
//! - [`decode_sentence`] / [`parse_sentence`] - Sentence parser: one sentence
//!   into one group of the fusion state
//! - [`FusionState`] - Latest orientation and position samples
//! - [`TrajectorySynthesizer`] - Walks a [`SentenceSource`], decides per
//!   record whether to emit a pose, and fills a [`Trajectory`]
//! - [`interpolate`] - Pose at a time between two trajectory samples
//!
//! # Collaborators
//!
//! - [`SentenceSource`] - Indexed access to recorded sentences on one topic
//! - [`PlanarProjector`] - Geodetic to local planar conversion
//!
//! Both are traits; this crate ships only an in-memory source
//! ([`MemorySource`]) and no map projection.
//!
//! # Errors
//!
//! A sentence that fails to parse is a [`SentenceError`] and only that
//! record is skipped. A [`FusionError`] aborts the run, e.g. when the source
//! is not on the expected topic.
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod interpolation;
mod nmea;
mod projector;
mod source;
mod state;
mod synthesizer;
mod trajectory;

#[cfg(test)]
mod testing;

// Re-export parser
pub use nmea::{GGA, GPRMC, PASHR, QQ_PREFIX, decode_sentence, parse_sentence, split_sentence};

// Re-export state types
pub use state::{FusionState, SentenceSample, SentenceUpdate};

// Re-export synthesis types
pub use config::{DEFAULT_PLANE_NUMBER, DEFAULT_TRANSLATION_OFFSET, SynthesizerConfig};
pub use synthesizer::{StepOutcome, SynthesisSummary, TrajectorySynthesizer};
pub use trajectory::Trajectory;

// Re-export interpolation
pub use interpolation::{interpolate, lerp_factor, try_interpolate};

// Re-export collaborator seams
pub use projector::PlanarProjector;
pub use source::{MemorySource, NMEA_SENTENCE_TOPIC, SentenceSource};

// Re-export error types
pub use error::{FusionError, Result, SentenceError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        FusionError, FusionState, MemorySource, PlanarProjector, SentenceError, SentenceSource,
        SynthesizerConfig, Trajectory, TrajectorySynthesizer, interpolate,
    };
}
