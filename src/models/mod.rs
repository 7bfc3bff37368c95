//! Models module for the fretboard mapper
//!
//! Serde data model shared by the mapping core and the WASM API: notes,
//! sequence descriptors, output frets and the sequence model registry.

pub mod fret;
pub mod note;
pub mod registry;
pub mod sequence;

// Re-export commonly used types
pub use fret::{Fret, FretGrid, SequenceTag};
pub use note::{parse_tuning, Note};
pub use registry::{ModelCategory, ModelDescriptor, ModelRegistry, SequenceModel};
pub use sequence::{PositionKind, Sequence};
