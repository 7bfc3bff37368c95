//! Sequence (scale or pattern overlay) descriptors

use serde::{Deserialize, Deserializer, Serialize};

use super::note::{Note, SEMITONES};

/// Position value selecting the caller-supplied fret bounds
pub const CUSTOM_POSITION: i32 = -1;

/// Position value showing the whole sequence with no window
pub const WHOLE_SCALE_POSITION: i32 = 0;

/// A scale or pattern overlay to highlight on the fretboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    /// Root note of the sequence
    pub tonality: Note,

    /// Key into the model registry ("major", "minor-pentatonic", ...)
    pub model: String,

    /// -1 = custom bounds, 0 = whole neck, n > 0 = n-th window of the model
    #[serde(default)]
    pub position: i32,

    /// Inclusive [lo, hi] fret bounds, read only when `position == -1`
    #[serde(default)]
    pub custom_fret_bounds: Option<[i32; 2]>,

    /// Only mark frets already claimed by a non-intersected sequence
    #[serde(default)]
    pub is_intersected: bool,

    /// Interval whose frets get the highlight flag; integers outside 0-11
    /// deserialize as no highlight
    #[serde(default, deserialize_with = "deserialize_highlight")]
    pub highlighted_interval: Option<u8>,
}

fn deserialize_highlight<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|i| u8::try_from(i).ok())
        .filter(|&i| i < SEMITONES))
}

/// How a sequence's display window is chosen, decoded from the raw `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    Custom,
    WholeScale,
    /// Zero-based index into the model's positions table
    Window(usize),
}

impl Sequence {
    pub fn new(tonality: Note, model: impl Into<String>) -> Self {
        Self {
            tonality,
            model: model.into(),
            position: WHOLE_SCALE_POSITION,
            custom_fret_bounds: None,
            is_intersected: false,
            highlighted_interval: None,
        }
    }

    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn with_custom_bounds(mut self, lo: i32, hi: i32) -> Self {
        self.position = CUSTOM_POSITION;
        self.custom_fret_bounds = Some([lo, hi]);
        self
    }

    pub fn intersected(mut self) -> Self {
        self.is_intersected = true;
        self
    }

    pub fn highlighting(mut self, interval: u8) -> Self {
        self.highlighted_interval = Some(interval);
        self
    }

    /// Decode the raw position; `None` for values below -1
    pub fn position_kind(&self) -> Option<PositionKind> {
        match self.position {
            CUSTOM_POSITION => Some(PositionKind::Custom),
            WHOLE_SCALE_POSITION => Some(PositionKind::WholeScale),
            p if p > 0 => Some(PositionKind::Window(p as usize - 1)),
            _ => None,
        }
    }
}
