//! Fret mapping core
//!
//! `FretMapper` turns sequence descriptors, a tuning, a capo and a flip flag
//! into a flat grid of annotated frets:
//!
//! 1. every sequence is validated and resolved into a `SequencePlan`
//! 2. the unmarked grid is built and each string's row is marked in two phases
//! 3. the row shift runs once, then the capo clears tags below the capo fret
//!
//! Nothing is cached between calls; every call builds a fresh grid.

pub mod capo;
pub mod grid;
pub mod interval;
pub mod marker;
pub mod shift;
pub mod window;

pub use capo::apply_capo;
pub use grid::{build_grid, build_row};
pub use interval::{interval, interval_between};
pub use marker::SequencePlan;
pub use shift::{RowShift, ShiftSequencesDown};
pub use window::{position_offsets, should_display_fret, DisplayWindow};

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::models::fret::FretGrid;
use crate::models::note::{Note, SEMITONES};
use crate::models::registry::ModelRegistry;
use crate::models::sequence::Sequence;

/// Frets per row before duplication: two full octaves
pub const DEFAULT_FRETS_PER_ROW: usize = 24;

/// Frets 0..K copied past the end of each row
pub const DEFAULT_EXTENDED_FRETS: usize = 5;

/// Longest row a config may ask for (eight octaves)
pub const MAX_FRETS_PER_ROW: usize = 96;

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapperConfig {
    pub frets_per_row: usize,
    pub extended_frets: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            frets_per_row: DEFAULT_FRETS_PER_ROW,
            extended_frets: DEFAULT_EXTENDED_FRETS,
        }
    }
}

impl MapperConfig {
    /// Length of one string's row including the duplicated prefix
    pub fn row_len(&self) -> usize {
        self.frets_per_row + self.extended_frets
    }

    pub fn validate(&self) -> Result<(), FretboardError> {
        let octave = SEMITONES as usize;
        if self.frets_per_row == 0 || self.frets_per_row % octave != 0 {
            return Err(FretboardError::InvalidMapperConfig(format!(
                "frets_per_row must be a positive multiple of {}, got {}",
                octave, self.frets_per_row
            )));
        }
        if self.frets_per_row > MAX_FRETS_PER_ROW {
            return Err(FretboardError::InvalidMapperConfig(format!(
                "frets_per_row ({}) exceeds the maximum of {}",
                self.frets_per_row, MAX_FRETS_PER_ROW
            )));
        }
        if self.extended_frets > self.frets_per_row {
            return Err(FretboardError::InvalidMapperConfig(format!(
                "extended_frets ({}) exceeds frets_per_row ({})",
                self.extended_frets, self.frets_per_row
            )));
        }
        Ok(())
    }
}

/// Stateless fret mapper over an explicit model registry
pub struct FretMapper<'a> {
    registry: &'a ModelRegistry,
    config: MapperConfig,
    row_shift: Box<dyn RowShift + 'a>,
}

impl<'a> FretMapper<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            config: MapperConfig::default(),
            row_shift: Box::new(ShiftSequencesDown),
        }
    }

    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_row_shift(mut self, row_shift: impl RowShift + 'a) -> Self {
        self.row_shift = Box::new(row_shift);
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Resolve every sequence before any marking happens
    pub fn plan(
        &self,
        sequences: &[Sequence],
        tuning: &[Note],
        flipped: bool,
    ) -> Result<Vec<SequencePlan>, FretboardError> {
        let offsets = position_offsets(sequences, tuning, flipped);

        sequences
            .iter()
            .enumerate()
            .map(|(index, seq)| {
                let intervals = self.registry.intervals_for_sequence(seq).ok_or_else(|| {
                    FretboardError::sequence(index, format!("unknown model '{}'", seq.model))
                })?;
                let window = window::resolve_window(index, seq, offsets[index], self.registry)?;

                let mut plan = SequencePlan::new(index, seq.tonality, intervals, window);
                plan.highlighted_interval = seq.highlighted_interval;
                plan.is_intersected = seq.is_intersected;
                Ok(plan)
            })
            .collect()
    }

    pub fn map(
        &self,
        sequences: &[Sequence],
        tuning: &[Note],
        capo: usize,
        flipped: bool,
    ) -> Result<FretGrid, FretboardError> {
        self.config.validate()?;
        let plans = self.plan(sequences, tuning, flipped)?;

        log::debug!(
            "Mapping {} sequences over {} strings (capo {}, flipped {})",
            plans.len(),
            tuning.len(),
            capo,
            flipped
        );

        let grid = build_grid(tuning, &self.config);
        let grid = marker::mark_grid(grid, &plans, &self.config);
        let grid = self
            .row_shift
            .shift_sequences_down(grid, flipped, self.config.row_len());
        Ok(apply_capo(grid, capo))
    }
}

/// Map sequences onto a fretboard with the default grid dimensions
pub fn map_frets(
    sequences: &[Sequence],
    tuning: &[Note],
    capo: usize,
    flipped: bool,
    registry: &ModelRegistry,
) -> Result<FretGrid, FretboardError> {
    FretMapper::new(registry).map(sequences, tuning, capo, flipped)
}
