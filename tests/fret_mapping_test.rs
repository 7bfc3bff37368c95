// Fret mapping end to end: scenarios on a standard guitar, capo behaviour,
// octave duplication and intersected sequences.

use fretboard_wasm::fretboard::apply_capo;
use fretboard_wasm::models::{Fret, FretGrid, ModelRegistry, Note, Sequence, SequenceTag};
use fretboard_wasm::{map_frets, FretMapper, MapperConfig};

/// Standard tuning, lowest string first
fn standard_tuning() -> Vec<Note> {
    vec![Note::E, Note::A, Note::D, Note::G, Note::B, Note::E]
}

fn fret_at(grid: &FretGrid, string: usize, number: usize) -> &Fret {
    grid.iter()
        .find(|f| f.string == string && f.number == number)
        .expect("fret should exist in grid")
}

fn sorted_tags(fret: &Fret) -> Vec<SequenceTag> {
    let mut tags = fret.sequences.clone();
    tags.sort_by_key(|t| (t.index, t.interval));
    tags
}

fn e_major_highlighting_root() -> Vec<Sequence> {
    vec![Sequence::new(Note::E, "major").highlighting(0)]
}

#[test]
fn test_e_major_root_on_low_e_string() {
    let registry = ModelRegistry::builtin();
    let grid = map_frets(&e_major_highlighting_root(), &standard_tuning(), 0, false, &registry).unwrap();

    let open_e = fret_at(&grid, 0, 0);
    assert!(open_e.sequences.contains(&SequenceTag { index: 0, interval: 0 }));
    assert!(open_e.is_highlighted);

    for number in 1..12 {
        let fret = fret_at(&grid, 0, number);
        assert!(
            fret.sequences.iter().all(|t| t.interval != 0),
            "fret {} on the low E string should not carry the root",
            number
        );
    }
    // Octave of the root is marked too
    assert!(fret_at(&grid, 0, 12).is_highlighted);
}

#[test]
fn test_e_major_marks_scale_notes_only() {
    let registry = ModelRegistry::builtin();
    let grid = map_frets(&e_major_highlighting_root(), &standard_tuning(), 0, false, &registry).unwrap();
    let scale = [Note::E, Note::Fs, Note::Gs, Note::A, Note::B, Note::Cs, Note::Ds];

    for fret in &grid {
        assert_eq!(fret.has_tags(), scale.contains(&fret.note), "{:?}", fret);
    }
}

#[test]
fn test_grid_shape_and_notes() {
    let registry = ModelRegistry::builtin();
    let config = MapperConfig::default();
    let tuning = standard_tuning();
    let grid = map_frets(&[], &tuning, 0, false, &registry).unwrap();

    assert_eq!(grid.len(), tuning.len() * config.row_len());
    for fret in &grid {
        assert_eq!(fret.note, tuning[fret.string].transpose(fret.number));
        assert!(fret.sequences.is_empty());
    }
}

#[test]
fn test_capo_clears_frets_below_it() {
    let registry = ModelRegistry::builtin();
    let seqs = e_major_highlighting_root();
    let open = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();
    let capoed = map_frets(&seqs, &standard_tuning(), 2, false, &registry).unwrap();

    for (a, b) in open.iter().zip(capoed.iter()) {
        assert_eq!((a.string, a.number), (b.string, b.number));
        if b.number < 2 {
            assert!(b.sequences.is_empty(), "string {} fret {}", b.string, b.number);
        } else {
            assert_eq!(a.sequences, b.sequences);
        }
        // Capo changes neither the note nor the highlight flag
        assert_eq!(a.note, b.note);
        assert_eq!(a.is_highlighted, b.is_highlighted);
    }
}

#[test]
fn test_capo_equals_post_filter() {
    let registry = ModelRegistry::builtin();
    let seqs = vec![
        Sequence::new(Note::A, "minor-pentatonic").highlighting(7),
        Sequence::new(Note::C, "major-triad").intersected(),
    ];
    let open = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();

    for capo in [1, 3, 7, 12] {
        let direct = map_frets(&seqs, &standard_tuning(), capo, false, &registry).unwrap();
        assert_eq!(apply_capo(open.clone(), capo), direct, "capo {}", capo);
    }
}

#[test]
fn test_octave_duplication_without_windows() {
    let registry = ModelRegistry::builtin();
    let config = MapperConfig::default();
    let seqs = vec![
        Sequence::new(Note::G, "major").highlighting(4),
        Sequence::new(Note::D, "blues"),
    ];
    let grid = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();

    for string in 0..6 {
        for number in 0..config.frets_per_row - 12 {
            let low = fret_at(&grid, string, number);
            let high = fret_at(&grid, string, number + 12);
            assert_eq!(sorted_tags(low), sorted_tags(high), "string {} fret {}", string, number);
            assert_eq!(low.is_highlighted, high.is_highlighted);
        }
    }
}

#[test]
fn test_octave_duplicate_can_be_windowed_out() {
    let registry = ModelRegistry::builtin();
    let seqs = vec![Sequence::new(Note::E, "major").with_custom_bounds(0, 12)];
    let grid = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();

    // G# at fret 4 is inside the bounds, its octave at 16 is not
    assert!(fret_at(&grid, 0, 4).has_tags());
    assert!(!fret_at(&grid, 0, 16).has_tags());

    let upper = vec![Sequence::new(Note::E, "major").with_custom_bounds(13, 24)];
    let grid = map_frets(&upper, &standard_tuning(), 0, false, &registry).unwrap();
    assert!(!fret_at(&grid, 0, 4).has_tags());
    assert!(fret_at(&grid, 0, 16).has_tags());
}

#[test]
fn test_duplicated_prefix_matches_first_frets() {
    let registry = ModelRegistry::builtin();
    let config = MapperConfig::default();
    let grid = map_frets(&e_major_highlighting_root(), &standard_tuning(), 0, false, &registry).unwrap();

    for string in 0..6 {
        for k in 0..config.extended_frets {
            let base = fret_at(&grid, string, k);
            let copy = fret_at(&grid, string, config.frets_per_row + k);
            assert_eq!(base.note, copy.note);
            assert_eq!(sorted_tags(base), sorted_tags(copy));
        }
    }
}

#[test]
fn test_tags_are_never_duplicated() {
    let registry = ModelRegistry::builtin();
    let seqs = vec![
        Sequence::new(Note::C, "chromatic"),
        Sequence::new(Note::C, "major").intersected(),
    ];
    let grid = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();

    for fret in &grid {
        let tags = sorted_tags(fret);
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags, deduped, "duplicate tag on {:?}", fret);
    }
}

#[test]
fn test_intersected_marks_need_prior_tags_in_any_order() {
    let registry = ModelRegistry::builtin();
    let base = Sequence::new(Note::E, "minor-pentatonic");
    let triad = Sequence::new(Note::C, "major-triad").intersected();
    let seventh = Sequence::new(Note::A, "dominant-seventh").intersected();

    let orders = vec![
        vec![base.clone(), triad.clone(), seventh.clone()],
        vec![triad.clone(), base.clone(), seventh.clone()],
        vec![seventh.clone(), triad.clone(), base.clone()],
        vec![triad.clone(), seventh.clone(), base.clone()],
    ];

    for seqs in orders {
        let grid = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();
        let mut intersected_marks = 0;

        for fret in &grid {
            let has_plain = fret.sequences.iter().any(|t| !seqs[t.index].is_intersected);
            let has_intersected = fret.sequences.iter().any(|t| seqs[t.index].is_intersected);
            if has_intersected {
                intersected_marks += 1;
                assert!(has_plain, "intersected tag without plain tag on {:?}", fret);
            }
        }
        assert!(intersected_marks > 0);
    }
}

#[test]
fn test_sequence_index_follows_input_order() {
    let registry = ModelRegistry::builtin();
    let seqs = vec![
        Sequence::new(Note::C, "major-triad").intersected(),
        Sequence::new(Note::C, "major"),
    ];
    let grid = map_frets(&seqs, &standard_tuning(), 0, false, &registry).unwrap();

    // C on the A string, fret 3
    let c = fret_at(&grid, 1, 3);
    assert!(c.sequences.contains(&SequenceTag { index: 0, interval: 0 }));
    assert!(c.sequences.contains(&SequenceTag { index: 1, interval: 0 }));
    // Plain sequence is marked first even though it comes second in the input
    assert_eq!(c.sequences[0].index, 1);
}

#[test]
fn test_flipped_board_lists_rows_in_display_order() {
    let registry = ModelRegistry::builtin();
    let config = MapperConfig::default();
    let high_first = vec![Note::E, Note::B, Note::G, Note::D, Note::A, Note::E];
    let grid = map_frets(&e_major_highlighting_root(), &high_first, 0, true, &registry).unwrap();

    assert_eq!(grid[0].string, 5);
    assert_eq!(grid[grid.len() - 1].string, 0);
    for (i, fret) in grid.iter().enumerate() {
        assert_eq!(fret.string, 5 - i / config.row_len());
    }
    assert!(fret_at(&grid, 5, 0).is_highlighted);
}

#[test]
fn test_custom_grid_dimensions() {
    let registry = ModelRegistry::builtin();
    let config = MapperConfig { frets_per_row: 12, extended_frets: 0 };
    let mapper = FretMapper::new(&registry).with_config(config);
    let grid = mapper
        .map(&e_major_highlighting_root(), &[Note::E], 0, false)
        .unwrap();

    assert_eq!(grid.len(), 12);
    assert!(grid[0].is_highlighted);
    // B (fret 7) is the fifth
    assert!(grid[7].sequences.contains(&SequenceTag { index: 0, interval: 7 }));
}
