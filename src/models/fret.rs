//! Output cells of the fret mapping

use serde::{Deserialize, Serialize};

use super::note::Note;

/// Claim of one input sequence on a fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceTag {
    /// Position of the sequence in the caller's input list
    pub index: usize,
    /// Half-steps from the sequence root
    pub interval: u8,
}

/// One (string, fret) cell of the fretboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fret {
    pub string: usize,
    pub number: usize,
    pub note: Note,
    pub sequences: Vec<SequenceTag>,
    pub is_highlighted: bool,
}

impl Fret {
    pub fn new(string: usize, number: usize, note: Note) -> Self {
        Self {
            string,
            number,
            note,
            sequences: Vec::new(),
            is_highlighted: false,
        }
    }

    /// Append a tag unless the same one is already present.
    /// Returns true if the tag was added.
    pub fn add_tag(&mut self, tag: SequenceTag) -> bool {
        if self.sequences.contains(&tag) {
            return false;
        }
        self.sequences.push(tag);
        true
    }

    pub fn has_tags(&self) -> bool {
        !self.sequences.is_empty()
    }

    pub fn has_sequence(&self, index: usize) -> bool {
        self.sequences.iter().any(|tag| tag.index == index)
    }
}

/// Flat fretboard: every string's row concatenated in order
pub type FretGrid = Vec<Fret>;
