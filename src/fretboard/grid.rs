//! Fret grid construction
//!
//! Each string gets a row of `frets_per_row` frets followed by a copy of its
//! first `extended_frets` frets renumbered past the end of the row. Rows are
//! concatenated into one flat grid in tuning order.

use crate::models::fret::{Fret, FretGrid};
use crate::models::note::Note;

use super::MapperConfig;

/// Build one string's row, base frets first then the duplicated prefix
pub fn build_row(string: usize, open: Note, config: &MapperConfig) -> Vec<Fret> {
    let mut row: Vec<Fret> = (0..config.frets_per_row)
        .map(|number| Fret::new(string, number, open.transpose(number)))
        .collect();

    let extension: Vec<Fret> = row[..config.extended_frets.min(config.frets_per_row)]
        .iter()
        .map(|fret| Fret {
            number: fret.number + config.frets_per_row,
            ..fret.clone()
        })
        .collect();
    row.extend(extension);

    row
}

/// Unmarked grid for a whole tuning
pub fn build_grid(tuning: &[Note], config: &MapperConfig) -> FretGrid {
    tuning
        .iter()
        .enumerate()
        .flat_map(|(string, &open)| build_row(string, open, config))
        .collect()
}

/// First fret on a row whose note is `note`
pub fn root_fret(row: &[Fret], note: Note) -> Option<usize> {
    row.iter().position(|fret| fret.note == note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_length_and_numbering() {
        let config = MapperConfig::default();
        let row = build_row(0, Note::E, &config);
        assert_eq!(row.len(), config.row_len());
        for (i, fret) in row.iter().enumerate() {
            assert_eq!(fret.number, i);
            assert_eq!(fret.string, 0);
        }
    }

    #[test]
    fn test_notes_follow_chromatic_cycle() {
        let config = MapperConfig::default();
        let row = build_row(1, Note::A, &config);
        assert_eq!(row[0].note, Note::A);
        assert_eq!(row[3].note, Note::C);
        assert_eq!(row[12].note, Note::A);
        // Duplicated prefix keeps the same notes as frets 0..K
        for k in 0..config.extended_frets {
            assert_eq!(row[config.frets_per_row + k].note, row[k].note);
        }
    }

    #[test]
    fn test_grid_concatenates_strings() {
        let config = MapperConfig::default();
        let grid = build_grid(&[Note::E, Note::A, Note::D], &config);
        assert_eq!(grid.len(), 3 * config.row_len());
        assert_eq!(grid[config.row_len()].string, 1);
        assert_eq!(grid[config.row_len()].note, Note::A);
        assert_eq!(grid[2 * config.row_len() + 2].note, Note::E);
    }

    #[test]
    fn test_root_fret() {
        let config = MapperConfig::default();
        let row = build_row(0, Note::E, &config);
        assert_eq!(root_fret(&row, Note::E), Some(0));
        assert_eq!(root_fret(&row, Note::A), Some(5));
        assert_eq!(root_fret(&row, Note::Ds), Some(11));
    }
}
