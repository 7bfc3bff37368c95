//! Error types for fret mapping
//!
//! Any error aborts the whole grid build; no partially marked grid is returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// A note name outside the twelve-note chromatic set
    #[error("Invalid note: '{0}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    InvalidNote(String),

    /// A sequence whose position or model does not resolve
    #[error("Invalid configuration for sequence {index}: {reason}")]
    InvalidSequenceConfig { index: usize, reason: String },

    /// Grid dimensions that break the octave arithmetic
    #[error("Invalid mapper configuration: {0}")]
    InvalidMapperConfig(String),

    /// Model registry text or file could not be loaded
    #[error("Model registry error: {0}")]
    ModelRegistry(String),

    /// A JSON map request that could not be decoded or encoded
    #[error("Invalid map request: {0}")]
    InvalidRequest(String),
}

impl FretboardError {
    pub(crate) fn sequence(index: usize, reason: impl Into<String>) -> Self {
        FretboardError::InvalidSequenceConfig {
            index,
            reason: reason.into(),
        }
    }
}
