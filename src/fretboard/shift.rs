//! Visual flip correction
//!
//! Runs once over the fully marked grid, before the capo pass.

use crate::models::fret::FretGrid;

/// Row correction applied between marking and capo filtering
pub trait RowShift {
    fn shift_sequences_down(&self, grid: FretGrid, flipped: bool, row_len: usize) -> FretGrid;
}

/// Default correction: a flipped board lists its rows in display order,
/// last tuning string first. Cells keep their own string number.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftSequencesDown;

impl RowShift for ShiftSequencesDown {
    fn shift_sequences_down(&self, grid: FretGrid, flipped: bool, row_len: usize) -> FretGrid {
        if !flipped || row_len == 0 {
            return grid;
        }

        let mut rows: Vec<FretGrid> = Vec::with_capacity(grid.len() / row_len + 1);
        let mut frets = grid.into_iter().peekable();
        while frets.peek().is_some() {
            rows.push(frets.by_ref().take(row_len).collect());
        }
        rows.into_iter().rev().flatten().collect()
    }
}

impl<F> RowShift for F
where
    F: Fn(FretGrid, bool, usize) -> FretGrid,
{
    fn shift_sequences_down(&self, grid: FretGrid, flipped: bool, row_len: usize) -> FretGrid {
        self(grid, flipped, row_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fret::Fret;
    use crate::models::note::Note;

    fn two_rows() -> FretGrid {
        vec![
            Fret::new(0, 0, Note::E),
            Fret::new(0, 1, Note::F),
            Fret::new(1, 0, Note::A),
            Fret::new(1, 1, Note::As),
        ]
    }

    #[test]
    fn test_unflipped_grid_is_unchanged() {
        let grid = two_rows();
        assert_eq!(ShiftSequencesDown.shift_sequences_down(grid.clone(), false, 2), grid);
    }

    #[test]
    fn test_flipped_grid_reverses_rows() {
        let shifted = ShiftSequencesDown.shift_sequences_down(two_rows(), true, 2);
        let order: Vec<(usize, usize)> = shifted.iter().map(|f| (f.string, f.number)).collect();
        assert_eq!(order, vec![(1, 0), (1, 1), (0, 0), (0, 1)]);
    }

    #[test]
    fn test_closure_as_row_shift() {
        let drop_all = |_grid: FretGrid, _flipped: bool, _row_len: usize| FretGrid::new();
        assert!(drop_all.shift_sequences_down(two_rows(), false, 2).is_empty());
    }
}
