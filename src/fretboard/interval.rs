//! Half-step distance between notes

use crate::error::FretboardError;
use crate::models::note::{Note, SEMITONES};

/// Upward half-steps from `from` to `to`, wrapping at the octave (0-11)
pub fn interval(from: Note, to: Note) -> u8 {
    (to.index() + SEMITONES - from.index()) % SEMITONES
}

/// `interval` over note names, failing on names outside the chromatic set
pub fn interval_between(from: &str, to: &str) -> Result<u8, FretboardError> {
    Ok(interval(from.parse()?, to.parse()?))
}
