//! Sequence marking
//!
//! Marking runs in two phases on every string. Phase one places all plain
//! sequences. Phase two places intersected sequences, and only on frets that
//! phase one already claimed; claims made during phase two never qualify a
//! fret for another intersected sequence.

use crate::models::fret::{Fret, FretGrid, SequenceTag};
use crate::models::note::{Note, SEMITONES};

use super::grid::root_fret;
use super::window::DisplayWindow;
use super::MapperConfig;

/// Everything the marker needs about one input sequence, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePlan {
    /// Position in the caller's input list
    pub index: usize,
    pub tonality: Note,
    /// Root (0) first, then the model's intervals, without repeats
    pub intervals: Vec<u8>,
    pub window: DisplayWindow,
    pub highlighted_interval: Option<u8>,
    pub is_intersected: bool,
}

impl SequencePlan {
    pub fn new(index: usize, tonality: Note, model_intervals: &[u8], window: DisplayWindow) -> Self {
        let mut intervals = vec![0u8];
        for &i in model_intervals {
            if !intervals.contains(&i) {
                intervals.push(i);
            }
        }
        Self {
            index,
            tonality,
            intervals,
            window,
            highlighted_interval: None,
            is_intersected: false,
        }
    }
}

/// Mark every row of `grid` with the planned sequences
pub fn mark_grid(mut grid: FretGrid, plans: &[SequencePlan], config: &MapperConfig) -> FretGrid {
    if config.row_len() == 0 {
        return grid;
    }
    for row in grid.chunks_mut(config.row_len()) {
        mark_row(row, plans, config);
    }
    grid
}

/// Two-phase marking of one string's row
pub fn mark_row(row: &mut [Fret], plans: &[SequencePlan], config: &MapperConfig) {
    for plan in plans.iter().filter(|p| !p.is_intersected) {
        mark_sequence(row, plan, None, config);
    }

    let claimed: Vec<bool> = row.iter().map(Fret::has_tags).collect();
    for plan in plans.iter().filter(|p| p.is_intersected) {
        mark_sequence(row, plan, Some(claimed.as_slice()), config);
    }
}

/// Fret positions a mark at `target` lands on: the target, its octave
/// duplicate, and their copies in the duplicated prefix
fn mark_positions(target: usize, config: &MapperConfig) -> Vec<usize> {
    let n = config.frets_per_row;
    let octave = (target + SEMITONES as usize) % n;

    let mut positions = Vec::with_capacity(4);
    for fret in [target, octave] {
        if fret >= n {
            continue;
        }
        positions.push(fret);
        if fret < config.extended_frets {
            positions.push(n + fret);
        }
    }
    positions
}

fn mark_sequence(row: &mut [Fret], plan: &SequencePlan, claimed: Option<&[bool]>, config: &MapperConfig) {
    let base = &row[..config.frets_per_row.min(row.len())];
    let Some(root) = root_fret(base, plan.tonality) else {
        log::warn!("No root fret for {} on string row", plan.tonality);
        return;
    };

    for &interval in &plan.intervals {
        let target = root + interval as usize;

        for position in mark_positions(target, config) {
            if !plan.window.contains(position) {
                continue;
            }
            if let Some(claimed) = claimed {
                if !claimed.get(position).copied().unwrap_or(false) {
                    continue;
                }
            }
            let Some(fret) = row.get_mut(position) else {
                continue;
            };

            fret.add_tag(SequenceTag {
                index: plan.index,
                interval,
            });
            if plan.highlighted_interval == Some(interval) {
                fret.is_highlighted = true;
            }
        }
    }
}
