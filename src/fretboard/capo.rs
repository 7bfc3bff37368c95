//! Capo filtering
//!
//! Frets below the capo lose their sequence tags. The note and the highlight
//! flag are left as they were.

use crate::models::fret::FretGrid;

pub fn apply_capo(grid: FretGrid, capo: usize) -> FretGrid {
    if capo == 0 {
        return grid;
    }

    grid.into_iter()
        .map(|mut fret| {
            if fret.number < capo {
                fret.sequences.clear();
            }
            fret
        })
        .collect()
}
