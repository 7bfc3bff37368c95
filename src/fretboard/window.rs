//! Position windows
//!
//! A sequence is displayed either on the whole neck, inside caller-supplied
//! fret bounds, or inside one of its model's position windows. Model windows
//! are relative to the root and get translated by the sequence's offset from
//! the lowest open string.

use crate::error::FretboardError;
use crate::models::note::Note;
use crate::models::registry::ModelRegistry;
use crate::models::sequence::{PositionKind, Sequence};

use super::interval::interval;

/// Resolved display window of one sequence, in absolute fret numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWindow {
    Whole,
    /// Closed [lo, hi]
    Custom { lo: i32, hi: i32 },
    /// Closed [start, stop] when start < stop, otherwise the wrapped union
    Position { start: i32, stop: i32 },
}

impl DisplayWindow {
    pub fn contains(&self, fret: usize) -> bool {
        let fret = fret as i32;
        match *self {
            DisplayWindow::Whole => true,
            DisplayWindow::Custom { lo, hi } => lo <= fret && fret <= hi,
            DisplayWindow::Position { start, stop } => {
                if start < stop {
                    start <= fret && fret <= stop
                } else {
                    fret >= start || fret <= stop
                }
            }
        }
    }
}

/// Open note of the string drawn lowest on the board
pub fn lowest_display_note(tuning: &[Note], flipped: bool) -> Option<Note> {
    if flipped {
        tuning.last().copied()
    } else {
        tuning.first().copied()
    }
}

/// Per-sequence half-step distance from the lowest open string to the root
pub fn position_offsets(sequences: &[Sequence], tuning: &[Note], flipped: bool) -> Vec<u8> {
    match lowest_display_note(tuning, flipped) {
        Some(lowest) => sequences
            .iter()
            .map(|seq| interval(lowest, seq.tonality))
            .collect(),
        None => vec![0; sequences.len()],
    }
}

/// Resolve the window of `sequence`, rejecting positions that do not exist
pub fn resolve_window(
    sequence_index: usize,
    sequence: &Sequence,
    offset: u8,
    registry: &ModelRegistry,
) -> Result<DisplayWindow, FretboardError> {
    let kind = sequence.position_kind().ok_or_else(|| {
        FretboardError::sequence(
            sequence_index,
            format!("position {} is below -1", sequence.position),
        )
    })?;

    match kind {
        PositionKind::Custom => match sequence.custom_fret_bounds {
            Some([lo, hi]) if lo >= 0 && lo <= hi => Ok(DisplayWindow::Custom { lo, hi }),
            Some([lo, hi]) => Err(FretboardError::sequence(
                sequence_index,
                format!("custom fret bounds [{}, {}] are not a valid range", lo, hi),
            )),
            None => Err(FretboardError::sequence(
                sequence_index,
                "custom position requires customFretBounds",
            )),
        },
        PositionKind::WholeScale => Ok(DisplayWindow::Whole),
        PositionKind::Window(window) => {
            let Some(positions) = registry.positions(&sequence.model) else {
                return Ok(DisplayWindow::Whole);
            };
            let [low, high] = positions.get(window).copied().ok_or_else(|| {
                FretboardError::sequence(
                    sequence_index,
                    format!(
                        "model '{}' has {} positions, position {} requested",
                        sequence.model,
                        positions.len(),
                        sequence.position
                    ),
                )
            })?;
            let offset = offset as i32;
            let (Some(start), Some(stop)) = (low.checked_add(offset), high.checked_add(offset))
            else {
                return Err(FretboardError::sequence(
                    sequence_index,
                    format!(
                        "window [{}, {}] of model '{}' is out of range",
                        low, high, sequence.model
                    ),
                ));
            };
            Ok(DisplayWindow::Position { start, stop })
        }
    }
}

/// Whether `fret` lies inside the display window of sequence `sequence_index`
pub fn should_display_fret(
    fret: usize,
    sequence_index: usize,
    sequence: &Sequence,
    offsets: &[u8],
    registry: &ModelRegistry,
) -> Result<bool, FretboardError> {
    let offset = offsets.get(sequence_index).copied().unwrap_or(0);
    let window = resolve_window(sequence_index, sequence, offset, registry)?;
    Ok(window.contains(fret))
}
