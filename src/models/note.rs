/// Chromatic pitch classes used for every fretboard computation
///
/// The twelve notes form a fixed cycle starting at C. All interval and fret
/// arithmetic is done on the position of a note inside this cycle, so
/// enharmonic spellings (Db, Eb, ...) are accepted on input but always
/// collapse onto the sharp name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;

/// Number of half-steps in an octave
pub const SEMITONES: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Note {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl Note {
    /// The chromatic cycle in index order
    pub const CHROMATIC: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Position of this note in the chromatic cycle (0-11)
    pub fn index(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// Note at a chromatic index, wrapping through the cycle
    pub fn from_index(index: usize) -> Note {
        Self::CHROMATIC[index % SEMITONES as usize]
    }

    /// Note reached by moving `half_steps` upward from this one
    pub fn transpose(self, half_steps: usize) -> Note {
        Note::from_index(self.index() as usize + half_steps)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Note {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive, enharmonic flats map onto the sharp spelling
        match s.trim().to_uppercase().as_str() {
            "C" | "B#" | "B♯" => Ok(Note::C),
            "C#" | "C♯" | "DB" | "D♭" => Ok(Note::Cs),
            "D" => Ok(Note::D),
            "D#" | "D♯" | "EB" | "E♭" => Ok(Note::Ds),
            "E" | "FB" | "F♭" => Ok(Note::E),
            "F" | "E#" | "E♯" => Ok(Note::F),
            "F#" | "F♯" | "GB" | "G♭" => Ok(Note::Fs),
            "G" => Ok(Note::G),
            "G#" | "G♯" | "AB" | "A♭" => Ok(Note::Gs),
            "A" => Ok(Note::A),
            "A#" | "A♯" | "BB" | "B♭" => Ok(Note::As),
            "B" | "CB" | "C♭" => Ok(Note::B),
            _ => Err(FretboardError::InvalidNote(s.to_string())),
        }
    }
}

impl TryFrom<String> for Note {
    type Error = FretboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.as_str().to_string()
    }
}

/// Parse a whole tuning, failing on the first unknown note name
pub fn parse_tuning<S: AsRef<str>>(names: &[S]) -> Result<Vec<Note>, FretboardError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}
